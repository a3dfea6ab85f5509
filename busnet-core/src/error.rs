use thiserror::Error;

/// Structural errors raised while loading the catalogue or building the graph
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Unknown stop reference: {0}")]
    UnknownStopReference(String),
    #[error("No known distance from {from} to {to}")]
    DistanceNotFound { from: String, to: String },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Invalid routing settings: {0}")]
    InvalidSettings(String),
}

/// Query-time failures of [`crate::TransitRouter::build_route`]
///
/// A missing connection is not an error, it is reported as `Ok(None)`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Unknown stop: {0}")]
    UnknownStop(String),
}
