//! JSON front end of the bus network router.
//!
//! Loads a network from an input document, builds the routing graph and
//! answers the document's stat requests.

pub mod config;
pub mod error;
pub mod model;
pub mod requests;
pub mod routing;

pub use config::AppConfig;
pub use error::AppError;
pub use model::build_catalogue;
pub use requests::{BaseRequest, InputDocument, StatRequest};
pub use routing::{RequestHandler, StatResponse};

use busnet_core::RoutingSettings;
use tracing::info;

/// Loads the network described by `document` and answers its stat requests.
///
/// Routing settings come from the document, or from `fallback` when the
/// document has none.
///
/// # Errors
///
/// Fails if the network is inconsistent or no routing settings are available.
pub fn process_document(
    document: &InputDocument,
    fallback: Option<RoutingSettings>,
) -> Result<Vec<StatResponse>, AppError> {
    let settings = document
        .routing_settings
        .or(fallback)
        .ok_or(AppError::MissingRoutingSettings)?;

    let catalogue = build_catalogue(&document.base_requests)?;
    let handler = RequestHandler::new(&catalogue, settings)?;

    info!("Answering {} stat requests", document.stat_requests.len());
    Ok(handler.handle_all(&document.stat_requests))
}
