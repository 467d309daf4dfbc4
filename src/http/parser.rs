use std::collections::HashMap;
use std::fmt;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt};

use crate::http::CONTENT_LENGTH;

#[derive(Debug)]
pub enum ParseError {
    /// Stream ended before the head or body was complete.
    UnexpectedEof,
    /// Head bytes were not valid UTF-8.
    InvalidEncoding,
    /// Request line plus headers exceeded the configured limit.
    HeadTooLarge,
    /// Request line had fewer than two tokens.
    InvalidRequestLine,
    InvalidContentLength,
    BodyTooLarge,
    Io(std::io::Error),
}

impl ParseError {
    /// Whether the client sent something we can answer with 400.
    ///
    /// Everything else means the stream itself is unusable and the
    /// connection is dropped without a response.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ParseError::InvalidEncoding
                | ParseError::HeadTooLarge
                | ParseError::InvalidRequestLine
                | ParseError::InvalidContentLength
                | ParseError::BodyTooLarge
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEof => write!(f, "connection closed mid-request"),
            ParseError::InvalidEncoding => write!(f, "request head is not valid UTF-8"),
            ParseError::HeadTooLarge => write!(f, "request head too large"),
            ParseError::InvalidRequestLine => write!(f, "malformed request line"),
            ParseError::InvalidContentLength => write!(f, "invalid Content-Length"),
            ParseError::BodyTooLarge => write!(f, "request body too large"),
            ParseError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            ParseError::UnexpectedEof
        } else {
            ParseError::Io(e)
        }
    }
}

/// The raw request line and the headers that followed it.
#[derive(Debug, Clone)]
pub struct RequestHead {
    pub line: String,
    pub headers: HashMap<String, String>,
}

/// Tokens of a request line. The version is optional on the wire.
#[derive(Debug, PartialEq, Eq)]
pub struct RequestLine<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub version: Option<&'a str>,
}

/// Reads the request line and headers up to and including the blank line.
///
/// `max_bytes` caps the whole head. Header lines without a `:` are skipped,
/// and a repeated header name overwrites the earlier value.
pub async fn read_request_head<R>(reader: &mut R, max_bytes: usize) -> Result<RequestHead, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut budget = max_bytes;

    let line = read_line(reader, &mut budget).await?.trim_end().to_string();

    let mut headers = HashMap::new();
    loop {
        let raw = read_line(reader, &mut budget).await?;
        let line = raw.trim();

        if line.is_empty() {
            break;
        }

        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Ok(RequestHead { line, headers })
}

async fn read_line<R>(reader: &mut R, budget: &mut usize) -> Result<String, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    if *budget == 0 {
        return Err(ParseError::HeadTooLarge);
    }

    let mut buf = Vec::new();
    let n = (&mut *reader)
        .take(*budget as u64)
        .read_until(b'\n', &mut buf)
        .await?;

    if !buf.ends_with(b"\n") {
        // Either the budget ran out mid-line or the peer hung up.
        return Err(if n >= *budget {
            ParseError::HeadTooLarge
        } else {
            ParseError::UnexpectedEof
        });
    }

    *budget -= n;
    String::from_utf8(buf).map_err(|_| ParseError::InvalidEncoding)
}

/// Splits a request line into method, path and version.
pub fn parse_request_line(line: &str) -> Result<RequestLine<'_>, ParseError> {
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let path = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = parts.next();

    Ok(RequestLine { method, path, version })
}

/// Parses a `Content-Length` value. Only plain decimal digits are accepted.
pub fn parse_content_length(value: &str) -> Result<usize, ParseError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidContentLength);
    }

    value
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidContentLength)
}

/// Reads exactly `Content-Length` bytes when the header is present.
///
/// Returns `Ok(None)` if the request carries no `Content-Length`.
pub async fn read_body<R>(
    reader: &mut R,
    headers: &HashMap<String, String>,
    max_bytes: usize,
) -> Result<Option<Vec<u8>>, ParseError>
where
    R: AsyncRead + Unpin,
{
    let Some(value) = headers.get(CONTENT_LENGTH) else {
        return Ok(None);
    };

    let len = parse_content_length(value)?;
    if len > max_bytes {
        return Err(ParseError::BodyTooLarge);
    }

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body).await?;

    Ok(Some(body))
}
