use busnet_core::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::requests::StatRequest;

const NOT_FOUND: &str = "not found";
const MAP_UNSUPPORTED: &str = "map rendering is not supported";

/// Answer to one stat request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id: i64,
        curvature: f64,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: Minutes,
        items: Vec<ItineraryItem>,
    },
    Error {
        request_id: i64,
        error_message: String,
    },
}

impl StatResponse {
    fn error(request_id: i64, message: &str) -> Self {
        StatResponse::Error {
            request_id,
            error_message: message.to_string(),
        }
    }
}

/// Answers stat requests against a loaded catalogue and its router
pub struct RequestHandler<'c> {
    catalogue: &'c Catalogue,
    router: TransitRouter<'c>,
}

impl<'c> RequestHandler<'c> {
    /// Builds the routing graph for `catalogue`
    ///
    /// # Errors
    ///
    /// Fails if the graph cannot be built.
    pub fn new(catalogue: &'c Catalogue, settings: RoutingSettings) -> Result<Self, Error> {
        let router = TransitRouter::new(catalogue, settings)?;
        Ok(Self { catalogue, router })
    }

    pub fn router(&self) -> &TransitRouter<'c> {
        &self.router
    }

    /// Answers all requests in parallel, keeping request order
    pub fn handle_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests.par_iter().map(|request| self.handle(request)).collect()
    }

    pub fn handle(&self, request: &StatRequest) -> StatResponse {
        debug!("Handling request {}", request.id());
        match request {
            StatRequest::Bus { id, name } => self.bus_stats(*id, name),
            StatRequest::Stop { id, name } => self.stop_buses(*id, name),
            StatRequest::Route { id, from, to } => self.route(*id, from, to),
            StatRequest::Map { id } => StatResponse::error(*id, MAP_UNSUPPORTED),
        }
    }

    fn bus_stats(&self, request_id: i64, name: &str) -> StatResponse {
        match self.catalogue.route_info(name) {
            Ok(Some(info)) => StatResponse::Bus {
                request_id,
                curvature: info.curvature,
                route_length: info.road_length,
                stop_count: info.stop_count,
                unique_stop_count: info.unique_stop_count,
            },
            Ok(None) => StatResponse::error(request_id, NOT_FOUND),
            Err(e) => {
                warn!("Cannot compute statistics for bus {name}: {e}");
                StatResponse::error(request_id, NOT_FOUND)
            }
        }
    }

    fn stop_buses(&self, request_id: i64, name: &str) -> StatResponse {
        match self.catalogue.routes_through_stop(name) {
            Some(buses) => StatResponse::Stop {
                request_id,
                buses: buses.into_iter().map(str::to_string).collect(),
            },
            None => StatResponse::error(request_id, NOT_FOUND),
        }
    }

    fn route(&self, request_id: i64, from: &str, to: &str) -> StatResponse {
        match self.router.build_route(from, to) {
            Ok(Some(itinerary)) => StatResponse::Route {
                request_id,
                total_time: itinerary.total_time,
                items: itinerary.items,
            },
            Ok(None) => StatResponse::error(request_id, NOT_FOUND),
            Err(RoutingError::UnknownStop(stop)) => {
                debug!("Route request {request_id} names unknown stop {stop}");
                StatResponse::error(request_id, NOT_FOUND)
            }
        }
    }
}
