use std::collections::HashSet;
use std::sync::OnceLock;

use rsip::{Header, Headers, Request, Response};

/// Header names never copied when deriving a new request from an
/// existing request.
///
/// Route, Record-Route and Via carry hop- and transaction-specific
/// path state that the new message must regenerate for its own
/// transmission; Call-ID, CSeq, From and To are dialog identity that
/// the dialog layer sets deliberately; Content-Length is recomputed
/// from the new body.
///
/// The set is published once and exposed by read-only reference;
/// matching against it is case-insensitive.
pub fn request_copy_exclusions() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        [
            "Route",
            "Record-Route",
            "Via",
            "Call-ID",
            "CSeq",
            "From",
            "To",
            "Content-Length",
        ]
        .into_iter()
        .collect()
    })
}

/// Header names never copied when deriving a new response from an
/// existing response.
///
/// Same entries as [`request_copy_exclusions`] plus Contact: a
/// response's contact must advertise the responding entity, not
/// whatever the copied source advertised.
pub fn response_copy_exclusions() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set = request_copy_exclusions().clone();
        set.insert("Contact");
        set
    })
}

/// Clones every header of `request` not excluded by
/// [`request_copy_exclusions`], preserving order and multiplicity.
/// Unknown and extension headers are copied verbatim.
pub fn copy_request_headers(request: &Request) -> Headers {
    filter_headers(request.headers.iter(), request_copy_exclusions())
}

/// Clones every header of `response` not excluded by
/// [`response_copy_exclusions`], preserving order and multiplicity.
pub fn copy_response_headers(response: &Response) -> Headers {
    filter_headers(response.headers.iter(), response_copy_exclusions())
}

fn filter_headers<'a>(
    headers: impl Iterator<Item = &'a Header>,
    excluded: &HashSet<&'static str>,
) -> Headers {
    let mut copied = Headers::default();
    for header in headers {
        if !is_excluded(header, excluded) {
            copied.push(header.clone());
        }
    }
    copied
}

fn is_excluded(header: &Header, excluded: &HashSet<&'static str>) -> bool {
    match header {
        Header::Route(_) => excluded.contains("Route"),
        Header::RecordRoute(_) => excluded.contains("Record-Route"),
        Header::Via(_) => excluded.contains("Via"),
        Header::CallId(_) => excluded.contains("Call-ID"),
        Header::CSeq(_) => excluded.contains("CSeq"),
        Header::From(_) => excluded.contains("From"),
        Header::To(_) => excluded.contains("To"),
        Header::Contact(_) => excluded.contains("Contact"),
        Header::ContentLength(_) => excluded.contains("Content-Length"),
        // Extension headers match by name, case-insensitively.
        Header::Other(name, _) => excluded
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(name)),
        _ => false,
    }
}
