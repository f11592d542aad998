use rsip::headers::Route;
use rsip::prelude::{ToTypedHeader, UntypedHeader};
use rsip::{Header, Response};
use tracing::debug;

use crate::{Error, Result};

/// Rebuilds the route set a dialog owner derives from a response, the
/// way RFC 3261 12.1.2 prescribes for the client side of a dialog.
///
/// Record-Route entries are taken in message order and transcribed
/// verbatim into Route headers, address and all parameters included,
/// then the list is reversed: the proxy recorded last (nearest the
/// response's originator) becomes the first hop for requests this
/// side now sends on the branch.
///
/// A response without Record-Route headers yields an empty set; the
/// dialog is routeless, not broken. A malformed entry fails the whole
/// reconstruction with [`Error::HeaderConstructionError`]; a partial
/// route set would route in-dialog requests to the wrong hop.
pub fn reconstruct_route_set(response: &Response) -> Result<Vec<Route>> {
    let mut route_set = Vec::new();
    for header in response.headers.iter() {
        if let Header::RecordRoute(rr) = header {
            rr.typed()
                .map_err(|_| Error::HeaderConstructionError(rr.value().to_string()))?;
            route_set.push(Route::from(rr.value()));
        }
    }
    route_set.reverse();
    debug!(hops = route_set.len(), "reconstructed route set from response");
    Ok(route_set)
}
