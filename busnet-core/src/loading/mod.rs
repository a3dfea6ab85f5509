//! This module is responsible for turning a filled catalogue
//! into a routing graph.

mod builder;
mod config;

pub use builder::build_transit_graph;
pub use config::RoutingSettings;
