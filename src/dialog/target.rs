use rsip::prelude::{ToTypedHeader, UntypedHeader};
use rsip::{Header, Response, Scheme, Uri};
use tracing::debug;

use crate::{Error, Result};

/// Forges the Request-URI for a request sent on a forked or derived
/// branch of a dialog, from the response that created the branch.
///
/// The contact a UA advertises is the authoritative next-hop identity
/// for requests within the dialog (RFC 3261 12.2.1.1). For a SIP URI
/// only that identity is kept: user, host, and the port if one was
/// given; an absent port stays absent rather than defaulting to
/// 5060/5061. URI parameters, URI headers, display name and
/// contact-level parameters (q, expires, ...) never propagate into
/// the forged target. Non-SIP schemes (tel, fax, ...) are opaque to
/// this layer and are duplicated unchanged (RFC 3261 10.2.1).
///
/// A response without a Contact yields `None`; the caller falls back
/// to its own default target policy. A Contact without a usable URI
/// fails with [`Error::TargetResolutionError`].
pub fn forge_target_uri(response: &Response) -> Result<Option<Uri>> {
    let Some(contact) = response.headers.iter().find_map(|header| match header {
        Header::Contact(contact) => Some(contact),
        _ => None,
    }) else {
        return Ok(None);
    };

    let typed = contact
        .typed()
        .map_err(|_| Error::TargetResolutionError(contact.value().to_string()))?;
    let uri = typed.uri;

    match uri.scheme.as_ref() {
        Some(Scheme::Sip) | Some(Scheme::Sips) => {
            let target = Uri {
                scheme: uri.scheme.clone(),
                auth: uri.auth.as_ref().map(|auth| rsip::Auth {
                    user: auth.user.clone(),
                    password: None,
                }),
                host_with_port: rsip::HostWithPort {
                    host: uri.host_with_port.host.clone(),
                    port: uri.host_with_port.port.clone(),
                },
                params: vec![],
                ..Default::default()
            };
            debug!(uri = %target, "forged branch target from sip contact");
            Ok(Some(target))
        }
        // tel, fax and other generic schemes are not decomposed here.
        Some(Scheme::Other(_)) => {
            debug!(uri = %uri, "forged branch target from opaque contact");
            Ok(Some(uri.clone()))
        }
        None => Err(Error::TargetResolutionError(contact.value().to_string())),
    }
}
