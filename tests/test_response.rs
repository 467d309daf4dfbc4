use std::io::Read;

use flate2::read::GzDecoder;
use tinyhttp::http::encoding::Encoding;
use tinyhttp::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_response_builder_keeps_header_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("X-Custom", "value")
        .header("Content-Length", "4")
        .body(b"test".to_vec())
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["Content-Type", "X-Custom", "Content-Length"]);
}

#[test]
fn test_response_builder_replaces_in_place() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("Content-Length", "1")
        .header("Content-Type", "application/octet-stream")
        .build();

    assert_eq!(response.headers.len(), 2);
    assert_eq!(response.headers[0].0, "Content-Type");
    assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
}

#[test]
fn test_response_builder_adds_nothing_implicitly() {
    let response = ResponseBuilder::new(StatusCode::Created).build();

    assert!(response.headers.is_empty());
    assert!(response.body.is_empty());
}

#[test]
fn test_status_only_helpers() {
    assert_eq!(Response::not_found().status, StatusCode::NotFound);
    assert_eq!(Response::bad_request().status, StatusCode::BadRequest);
    assert_eq!(Response::internal_error().status, StatusCode::InternalServerError);
    assert!(Response::not_found().headers.is_empty());
    assert!(Response::not_found().body.is_empty());
}

#[test]
fn test_content_plain() {
    let response = Response::content(StatusCode::Ok, "text/plain", b"abc".to_vec(), None).unwrap();

    assert_eq!(
        response.headers,
        vec![
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("Content-Length".to_string(), "3".to_string()),
        ]
    );
    assert_eq!(response.body, b"abc");
}

#[test]
fn test_content_gzip() {
    let response = Response::content(
        StatusCode::Ok,
        "text/plain",
        b"abc".to_vec(),
        Some(Encoding::Gzip),
    )
    .unwrap();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["Content-Type", "Content-Encoding", "Content-Length"]);
    assert_eq!(response.header("Content-Encoding"), Some("gzip"));
    assert_eq!(
        response.header("Content-Length"),
        Some(response.body.len().to_string().as_str())
    );

    let mut decoded = String::new();
    GzDecoder::new(&response.body[..])
        .read_to_string(&mut decoded)
        .unwrap();
    assert_eq!(decoded, "abc");
}
