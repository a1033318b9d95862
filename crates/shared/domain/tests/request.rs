use japi_domain::constants::status;
use japi_domain::request::{ErrorResponse, Method, QueryParams, Response};
use std::str::FromStr;

#[test]
fn methods_parse_case_insensitively() {
    assert_eq!(Method::from_str("get").expect("parse"), Method::Get);
    assert_eq!(Method::from_str("PATCH").expect("parse"), Method::Patch);
    assert!(Method::from_str("PUT").is_err());
    assert_eq!(Method::Delete.to_string(), "DELETE");
}

#[test]
fn query_params_keep_order_and_duplicates() {
    let query = QueryParams::parse("?filter=open&sort=-name&filter=late&flag");

    assert_eq!(query.get("filter"), Some("open"));
    assert_eq!(query.get("flag"), Some(""));
    assert_eq!(query.iter().filter(|(k, _)| *k == "filter").count(), 2);
    assert!(QueryParams::parse("").is_empty());
}

#[test]
fn error_response_converts_into_error_document() {
    let response: Response = ErrorResponse::single(status::CONFLICT, "Conflict", "taken").into();

    assert_eq!(response.status, 409);
    assert!(!response.is_success());
    let document = response.document.expect("document");
    assert_eq!(document.errors[0].status.as_deref(), Some("409"));
    assert_eq!(document.errors[0].detail.as_deref(), Some("taken"));
}
