use serde::Serialize;

use super::dijkstra::ShortestPath;
use crate::model::EdgeDescriptor;
use crate::{Catalogue, Minutes, TransitGraph};

/// One step of an itinerary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ItineraryItem {
    /// Waiting for a bus at a stop
    Wait { stop_name: String, time: Minutes },
    /// Riding `bus` for `span_count` stops
    Bus {
        bus: String,
        span_count: usize,
        time: Minutes,
    },
}

impl ItineraryItem {
    pub fn time(&self) -> Minutes {
        match self {
            ItineraryItem::Wait { time, .. } | ItineraryItem::Bus { time, .. } => *time,
        }
    }
}

/// Fastest way between two stops
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub total_time: Minutes,
    pub items: Vec<ItineraryItem>,
}

impl Itinerary {
    /// Itinerary of a stop to itself
    pub fn empty() -> Self {
        Self {
            total_time: 0.0,
            items: Vec::new(),
        }
    }

    /// Turns a raw graph path into rider-facing steps
    pub(crate) fn from_path(
        path: &ShortestPath,
        graph: &TransitGraph,
        catalogue: &Catalogue,
    ) -> Self {
        let items = path
            .edges
            .iter()
            .map(|&edge| match *graph.descriptor(edge) {
                EdgeDescriptor::Wait { stop, time } => ItineraryItem::Wait {
                    stop_name: catalogue.stop(stop).name.clone(),
                    time,
                },
                EdgeDescriptor::Bus {
                    route,
                    span_count,
                    time,
                } => ItineraryItem::Bus {
                    bus: catalogue.route(route).name.clone(),
                    span_count,
                    time,
                },
            })
            .collect::<Vec<_>>();

        debug_assert!(
            (items.iter().map(ItineraryItem::time).sum::<f64>() - path.total_weight).abs() < 1e-6,
            "itinerary segments do not add up to the path weight"
        );

        Self {
            total_time: path.total_weight,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of buses boarded
    pub fn bus_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, ItineraryItem::Bus { .. }))
            .count()
    }

    /// Changes between buses
    pub fn transfers(&self) -> usize {
        self.bus_count().saturating_sub(1)
    }
}
