// Dialog-derived routing primitives for forked SIP dialogs

//! # sipfork - Forked-Dialog Routing Primitives
//!
//! `sipfork` supplies the protocol-correctness primitives a SIP
//! application platform needs when it acts as a dialog-aware client
//! transaction owner itself, most notably when one request forks into
//! several early dialogs and every branch must be routed independently
//! instead of through a stack's built-in dialog object.
//!
//! The crate operates on already-parsed [`rsip`] messages. It performs
//! no I/O, owns no state, and manages no transactions or timers; it
//! only derives new values from the responses it is handed.
//!
//! ## Operations
//!
//! * [`is_dialog_creating`] - does a request method establish a dialog
//!   at all (INVITE, REFER, SUBSCRIBE)?
//! * [`reconstruct_route_set`] - rebuild the ordered Route set a dialog
//!   owner derives from a response's Record-Route headers, reversed per
//!   RFC 3261 12.1.2, with every parameter preserved untouched.
//! * [`forge_target_uri`] - derive the Request-URI for a request sent
//!   on a forked branch from the response's Contact, stripped to
//!   user/host/port for SIP URIs and passed through verbatim for
//!   opaque schemes (tel, fax, ...).
//! * [`request_copy_exclusions`] / [`response_copy_exclusions`] - the
//!   fixed sets of headers that must never be copied verbatim when a
//!   new message is derived from an existing one, plus
//!   [`copy_request_headers`] / [`copy_response_headers`] applying
//!   them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Application / Dialog-Fork Layer   │   owns dialog + call state
//! ├─────────────────────────────────────┤
//! │              sipfork                │   routing derivation (this crate)
//! ├─────────────────────────────────────┤
//! │          rsip message model         │   parsing + typed headers
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rsip::headers::*;
//! use rsip::{Header, Response, StatusCode};
//!
//! fn main() -> sipfork::Result<()> {
//!     // A 180 Ringing arriving on one branch of a forked INVITE.
//!     let ringing = Response {
//!         status_code: StatusCode::Ringing,
//!         version: rsip::Version::V2,
//!         headers: vec![
//!             Via::new("SIP/2.0/UDP client.example.com;branch=z9hG4bK74bf9").into(),
//!             From::new("Alice <sip:alice@example.com>;tag=9fxced76sl").into(),
//!             To::new("Bob <sip:bob@example.org>;tag=314159").into(),
//!             CallId::new("3848276298220188511@client.example.com").into(),
//!             Header::RecordRoute(RecordRoute::new("<sip:p1.example.com;lr>")),
//!             Header::RecordRoute(RecordRoute::new("<sip:p2.example.org;lr>")),
//!             Contact::new("<sip:bob@192.0.2.4;transport=tcp>").into(),
//!         ]
//!         .into(),
//!         body: vec![],
//!     };
//!
//!     // Reversed: the proxy recorded last is the first hop for
//!     // requests this side now sends on the branch.
//!     let route_set = sipfork::reconstruct_route_set(&ringing)?;
//!     assert_eq!(route_set.len(), 2);
//!
//!     // The branch target is the advertised contact, stripped to
//!     // user/host/port.
//!     let target = sipfork::forge_target_uri(&ringing)?.expect("contact present");
//!     assert_eq!(target.to_string(), "sip:bob@192.0.2.4");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Malformed routing data is never silently skipped; the two error
//! kinds carry the offending header value:
//!
//! ```rust
//! use sipfork::Error;
//!
//! fn handle_branch_error(error: Error) {
//!     match error {
//!         Error::HeaderConstructionError(value) => {
//!             eprintln!("abandoning branch, bad Record-Route: {value}");
//!         }
//!         Error::TargetResolutionError(value) => {
//!             eprintln!("abandoning branch, bad Contact: {value}");
//!         }
//!     }
//! }
//! ```
//!
//! Missing data is a normal outcome, not an error: a response without
//! Record-Route headers yields an empty route set and a response
//! without Contact yields `None`, letting the caller apply its own
//! fallback policy.
//!
//! ## Concurrency
//!
//! Every operation is pure and reentrant. The classification tables
//! are process-wide constants published once and read without locking;
//! any number of signaling threads may derive state concurrently, even
//! from the same shared response object, as long as the response is
//! not mutated underneath them.
//!
//! ## Standards Compliance
//!
//! * **RFC 3261** - SIP: Session Initiation Protocol (dialog route set
//!   construction 12.1.2, in-dialog request targeting 12.2.1.1)
//! * **RFC 3515** - REFER (dialog-creating)
//! * **RFC 6665** - SIP-Specific Event Notification (SUBSCRIBE,
//!   dialog-creating)

pub type Result<T> = std::result::Result<T, crate::error::Error>;
pub use crate::error::Error;
pub mod dialog;
pub mod error;

pub use dialog::exclusions::{
    copy_request_headers, copy_response_headers, request_copy_exclusions,
    response_copy_exclusions,
};
pub use dialog::methods::{dialog_creating_methods, is_dialog_creating};
pub use dialog::route_set::reconstruct_route_set;
pub use dialog::target::forge_target_uri;

pub const VERSION: &str = concat!("sipfork/", env!("CARGO_PKG_VERSION"));
