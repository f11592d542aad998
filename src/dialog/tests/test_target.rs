use crate::dialog::target::forge_target_uri;
use crate::Error;
use rsip::headers::*;
use rsip::typed;
use rsip::{Header, Response, Scheme, StatusCode, Uri};

fn response_with_headers(extra: Vec<Header>) -> Response {
    let mut headers: Vec<Header> = vec![
        Via::new("SIP/2.0/UDP client.example.com;branch=z9hG4bK74bf9").into(),
        From::new("Alice <sip:alice@example.com>;tag=9fxced76sl").into(),
        To::new("Bob <sip:bob@example.org>;tag=8321234356").into(),
        CallId::new("3848276298220188511@client.example.com").into(),
        CSeq::new("1 INVITE").into(),
    ];
    headers.extend(extra);
    Response {
        status_code: StatusCode::OK,
        version: rsip::Version::V2,
        headers: headers.into(),
        body: vec![],
    }
}

fn response_with_contact(value: &str) -> Response {
    response_with_headers(vec![Contact::new(value).into()])
}

#[test]
fn test_sip_contact_stripped_to_user_host_port() {
    let response = response_with_contact("<sip:alice@192.0.2.10:5061;transport=tcp>");

    let target = forge_target_uri(&response)
        .expect("forge")
        .expect("contact present");
    assert_eq!(target.to_string(), "sip:alice@192.0.2.10:5061");
    assert!(target.params.is_empty(), "transport parameter must be dropped");
}

#[test]
fn test_sip_contact_without_port_stays_portless() {
    let response = response_with_contact("<sip:bob@host.example.com>");

    let target = forge_target_uri(&response)
        .expect("forge")
        .expect("contact present");
    assert!(
        target.host_with_port.port.is_none(),
        "absent port must not be defaulted"
    );
    assert_eq!(target.to_string(), "sip:bob@host.example.com");
}

#[test]
fn test_sips_contact_keeps_secure_scheme() {
    let response = response_with_contact("<sips:carol@secure.example.com:5061>");

    let target = forge_target_uri(&response)
        .expect("forge")
        .expect("contact present");
    assert_eq!(target.scheme, Some(Scheme::Sips));
    assert_eq!(target.to_string(), "sips:carol@secure.example.com:5061");
}

#[test]
fn test_display_name_and_contact_params_do_not_propagate() {
    let response = response_with_contact("\"Bob\" <sip:bob@192.0.2.4:5060>;q=0.7;expires=3600");

    let target = forge_target_uri(&response)
        .expect("forge")
        .expect("contact present");
    assert_eq!(target.to_string(), "sip:bob@192.0.2.4:5060");
}

#[test]
fn test_opaque_contact_duplicated_verbatim() {
    let tel_uri = Uri {
        scheme: Some(Scheme::Other("tel".into())),
        host_with_port: rsip::HostWithPort {
            host: rsip::Host::Domain("+14155550100".into()),
            port: None,
        },
        params: vec![rsip::Param::Other("ext".into(), Some("42".into()))],
        ..Default::default()
    };
    let contact: Header = typed::Contact::from(tel_uri.clone()).into();
    let response = response_with_headers(vec![contact]);

    let target = forge_target_uri(&response)
        .expect("forge")
        .expect("contact present");
    assert_eq!(target, tel_uri, "opaque URIs pass through undecomposed");
}

#[test]
fn test_missing_contact_is_absent_not_error() {
    let response = response_with_headers(vec![]);
    let target = forge_target_uri(&response).expect("absence is a normal outcome");
    assert_eq!(target, None);
}

#[test]
fn test_first_contact_is_authoritative() {
    let response = response_with_headers(vec![
        Contact::new("<sip:first@192.0.2.1>").into(),
        Contact::new("<sip:second@192.0.2.2>").into(),
    ]);

    let target = forge_target_uri(&response)
        .expect("forge")
        .expect("contact present");
    assert_eq!(target.to_string(), "sip:first@192.0.2.1");
}

#[test]
fn test_contact_without_usable_uri_fails_resolution() {
    let response = response_with_contact("<bob@example.com>");

    let err = forge_target_uri(&response).expect_err("no scheme means no usable URI");
    assert!(matches!(err, Error::TargetResolutionError(_)));
}
