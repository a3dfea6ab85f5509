use busnet_core::{Catalogue, Error};
use tracing::{info, warn};

use crate::requests::BaseRequest;

/// Fills a catalogue from network description entries.
///
/// Stops are added first, then road distances, then buses, so entries may
/// reference stops declared later in the document.
///
/// # Errors
///
/// Fails on the first distance or bus that references an unknown stop.
/// A bus with fewer than two stops is logged and skipped.
pub fn build_catalogue(requests: &[BaseRequest]) -> Result<Catalogue, Error> {
    let mut catalogue = Catalogue::new();

    for request in requests {
        if let BaseRequest::Stop {
            name,
            latitude,
            longitude,
            ..
        } = request
        {
            catalogue.add_stop(name, *latitude, *longitude);
        }
    }

    for request in requests {
        if let BaseRequest::Stop {
            name,
            road_distances,
            ..
        } = request
        {
            for (neighbour, meters) in road_distances {
                catalogue.set_distance(name, neighbour, *meters)?;
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus {
            name,
            stops,
            is_roundtrip,
        } = request
        {
            match catalogue.add_route(name, stops, BaseRequest::route_kind(*is_roundtrip)) {
                Ok(_) => {}
                Err(Error::InvalidData(reason)) => warn!("Skipping bus {name}: {reason}"),
                Err(e) => return Err(e),
            }
        }
    }

    info!(
        "Catalogue loaded: {} stops, {} bus routes",
        catalogue.stop_count(),
        catalogue.route_count()
    );
    Ok(catalogue)
}
