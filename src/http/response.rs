use crate::http::encoding::Encoding;
use crate::http::{CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE};

/// HTTP status codes the server produces.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): File written
/// - `BadRequest` (400): Malformed request or unsupported method
/// - `NotFound` (404): Unknown path or missing file
/// - `InternalServerError` (500): Storage or encoding failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers are kept in insertion order because they are written to the
/// wire in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers as ordered key-value pairs
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"abc".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header, or replaces the value of one already set under
    /// the same name while keeping its position.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();

        match self.headers.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// No headers are implied: a status-only response goes out with an
    /// empty header block.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// A response with a status line and nothing else.
    pub fn status_only(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    /// A response carrying a typed body.
    ///
    /// With `encoding` set the body is compressed first, and
    /// `Content-Length` counts the compressed bytes. Headers are always
    /// `Content-Type`, then `Content-Encoding` if any, then `Content-Length`.
    pub fn content(
        status: StatusCode,
        content_type: &str,
        body: Vec<u8>,
        encoding: Option<Encoding>,
    ) -> std::io::Result<Self> {
        let mut builder = ResponseBuilder::new(status).header(CONTENT_TYPE, content_type);

        let body = match encoding {
            Some(encoding) => {
                builder = builder.header(CONTENT_ENCODING, encoding.as_str());
                encoding.encode(&body)?
            }
            None => body,
        };

        Ok(builder
            .header(CONTENT_LENGTH, body.len().to_string())
            .body(body)
            .build())
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::status_only(StatusCode::NotFound)
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self::status_only(StatusCode::BadRequest)
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::status_only(StatusCode::InternalServerError)
    }

    /// First value of the named header, matched exactly.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
