use tinyhttp::http::parser::{
    ParseError, RequestLine, parse_request_line, read_body, read_request_head,
};

const MAX_HEAD: usize = 8192;

#[tokio::test]
async fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let head = read_request_head(&mut &req[..], MAX_HEAD).await.unwrap();

    assert_eq!(head.line, "GET / HTTP/1.1");
    assert_eq!(head.headers.get("Host").unwrap(), "example.com");
}

#[tokio::test]
async fn test_parse_post_request_with_body() {
    let mut stream = &b"POST /files/a.txt HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello"[..];
    let head = read_request_head(&mut stream, MAX_HEAD).await.unwrap();
    let body = read_body(&mut stream, &head.headers, 1024).await.unwrap();

    assert_eq!(head.line, "POST /files/a.txt HTTP/1.1");
    assert_eq!(body, Some(b"hello".to_vec()));
    assert!(stream.is_empty());
}

#[tokio::test]
async fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let head = read_request_head(&mut &req[..], MAX_HEAD).await.unwrap();

    assert_eq!(head.headers.get("Host").unwrap(), "example.com");
    assert_eq!(head.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(head.headers.get("Accept").unwrap(), "*/*");
}

#[tokio::test]
async fn test_parse_accepts_bare_lf_line_endings() {
    let req = b"GET /echo/x HTTP/1.1\nUser-Agent: curl\n\n";
    let head = read_request_head(&mut &req[..], MAX_HEAD).await.unwrap();

    assert_eq!(head.line, "GET /echo/x HTTP/1.1");
    assert_eq!(head.headers.get("User-Agent").unwrap(), "curl");
}

#[tokio::test]
async fn test_parse_trims_key_and_value() {
    let req = b"GET / HTTP/1.1\r\n  X-Pad  :   padded value  \r\n\r\n";
    let head = read_request_head(&mut &req[..], MAX_HEAD).await.unwrap();

    assert_eq!(head.headers.get("X-Pad").unwrap(), "padded value");
}

#[tokio::test]
async fn test_parse_splits_on_first_colon_only() {
    let req = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n";
    let head = read_request_head(&mut &req[..], MAX_HEAD).await.unwrap();

    assert_eq!(head.headers.get("Host").unwrap(), "localhost:4221");
}

#[tokio::test]
async fn test_parse_ignores_header_without_colon() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: example.com\r\n\r\n";
    let head = read_request_head(&mut &req[..], MAX_HEAD).await.unwrap();

    assert_eq!(head.headers.len(), 1);
    assert_eq!(head.headers.get("Host").unwrap(), "example.com");
}

#[tokio::test]
async fn test_parse_duplicate_header_last_wins() {
    let req = b"GET / HTTP/1.1\r\nX-Dup: first\r\nX-Dup: second\r\n\r\n";
    let head = read_request_head(&mut &req[..], MAX_HEAD).await.unwrap();

    assert_eq!(head.headers.get("X-Dup").unwrap(), "second");
}

#[tokio::test]
async fn test_parse_header_case_preservation() {
    let req = b"GET / HTTP/1.1\r\nuser-agent: lower\r\n\r\n";
    let head = read_request_head(&mut &req[..], MAX_HEAD).await.unwrap();

    // Names are stored as received; no normalization.
    assert!(head.headers.contains_key("user-agent"));
    assert!(!head.headers.contains_key("User-Agent"));
}

#[tokio::test]
async fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let result = read_request_head(&mut &req[..], MAX_HEAD).await;

    assert!(matches!(result, Err(ParseError::UnexpectedEof)));
}

#[tokio::test]
async fn test_parse_empty_stream() {
    let result = read_request_head(&mut &b""[..], MAX_HEAD).await;

    assert!(matches!(result, Err(ParseError::UnexpectedEof)));
}

#[tokio::test]
async fn test_parse_head_too_large() {
    let req = format!("GET /echo/{} HTTP/1.1\r\n\r\n", "a".repeat(100));
    let result = read_request_head(&mut req.as_bytes(), 64).await;

    assert!(matches!(result, Err(ParseError::HeadTooLarge)));
}

#[tokio::test]
async fn test_parse_head_exactly_at_limit() {
    let req = b"GET / HTTP/1.1\r\n\r\n";
    let head = read_request_head(&mut &req[..], req.len()).await.unwrap();

    assert_eq!(head.line, "GET / HTTP/1.1");
}

#[tokio::test]
async fn test_parse_rejects_invalid_utf8() {
    let req = b"GET /\xff HTTP/1.1\r\n\r\n";
    let result = read_request_head(&mut &req[..], MAX_HEAD).await;

    assert!(matches!(result, Err(ParseError::InvalidEncoding)));
}

#[test]
fn test_request_line_tokens() {
    let line = parse_request_line("GET /echo/abc HTTP/1.1").unwrap();

    assert_eq!(
        line,
        RequestLine {
            method: "GET",
            path: "/echo/abc",
            version: Some("HTTP/1.1"),
        }
    );
}

#[test]
fn test_request_line_without_version() {
    let line = parse_request_line("GET /").unwrap();

    assert_eq!(line.path, "/");
    assert_eq!(line.version, None);
}

#[test]
fn test_request_line_too_few_tokens() {
    assert!(matches!(parse_request_line("GET"), Err(ParseError::InvalidRequestLine)));
    assert!(matches!(parse_request_line(""), Err(ParseError::InvalidRequestLine)));
}

#[tokio::test]
async fn test_body_absent_without_content_length() {
    let mut stream = &b"GET / HTTP/1.1\r\n\r\nleftover"[..];
    let head = read_request_head(&mut stream, MAX_HEAD).await.unwrap();
    let body = read_body(&mut stream, &head.headers, 1024).await.unwrap();

    assert_eq!(body, None);
    assert_eq!(stream, b"leftover");
}

#[tokio::test]
async fn test_body_empty_with_zero_length() {
    let mut stream = &b"POST /files/x HTTP/1.1\r\nContent-Length: 0\r\n\r\n"[..];
    let head = read_request_head(&mut stream, MAX_HEAD).await.unwrap();
    let body = read_body(&mut stream, &head.headers, 1024).await.unwrap();

    assert_eq!(body, Some(Vec::new()));
}

#[tokio::test]
async fn test_body_binary() {
    let mut stream = &b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\x01\x02\x03"[..];
    let head = read_request_head(&mut stream, MAX_HEAD).await.unwrap();
    let body = read_body(&mut stream, &head.headers, 1024).await.unwrap();

    assert_eq!(body, Some(vec![0, 1, 2, 3]));
}

#[tokio::test]
async fn test_body_incomplete() {
    let mut stream = &b"POST /api HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello"[..];
    let head = read_request_head(&mut stream, MAX_HEAD).await.unwrap();
    let result = read_body(&mut stream, &head.headers, 1024).await;

    assert!(matches!(result, Err(ParseError::UnexpectedEof)));
}

#[tokio::test]
async fn test_body_negative_length() {
    let mut stream = &b"POST /api HTTP/1.1\r\nContent-Length: -5\r\n\r\nhello"[..];
    let head = read_request_head(&mut stream, MAX_HEAD).await.unwrap();
    let result = read_body(&mut stream, &head.headers, 1024).await;

    assert!(matches!(result, Err(ParseError::InvalidContentLength)));
}

#[tokio::test]
async fn test_body_over_limit() {
    let mut stream = &b"POST /api HTTP/1.1\r\nContent-Length: 2048\r\n\r\n"[..];
    let head = read_request_head(&mut stream, MAX_HEAD).await.unwrap();
    let result = read_body(&mut stream, &head.headers, 1024).await;

    assert!(matches!(result, Err(ParseError::BodyTooLarge)));
}

#[test]
fn test_client_errors_are_distinguished_from_stream_errors() {
    assert!(ParseError::InvalidRequestLine.is_client_error());
    assert!(ParseError::InvalidContentLength.is_client_error());
    assert!(!ParseError::UnexpectedEof.is_client_error());
}
