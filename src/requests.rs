//! Input document format

use std::collections::BTreeMap;

use busnet_core::{Meters, RouteKind, RoutingSettings};
use serde::Deserialize;

/// Whole input: network description, routing settings and queries.
///
/// Unknown top-level keys such as `render_settings` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Network description entry
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// Road distances from this stop to its neighbours
        #[serde(default)]
        road_distances: BTreeMap<String, Meters>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

impl BaseRequest {
    pub fn route_kind(is_roundtrip: bool) -> RouteKind {
        if is_roundtrip {
            RouteKind::Circular
        } else {
            RouteKind::Reverse
        }
    }
}

/// Query against the loaded network
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}
