//! Content negotiation for response bodies.
//!
//! The client's `Accept-Encoding` value is split on commas, each token is
//! trimmed, and the tokens the server supports are kept in the order the
//! client listed them. At most one of them is applied to a response.
//! Quality values (`;q=`) are not interpreted, so `gzip;q=0` does not match.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

/// A content coding the server knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Gzip,
}

impl Encoding {
    /// The token used in `Accept-Encoding` and `Content-Encoding`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Gzip => "gzip",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "gzip" => Some(Encoding::Gzip),
            _ => None,
        }
    }

    /// Compresses `body` with this encoding.
    pub fn encode(&self, body: &[u8]) -> std::io::Result<Vec<u8>> {
        match self {
            Encoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(body)?;
                encoder.finish()
            }
        }
    }
}

/// The set of encodings the server is willing to apply.
#[derive(Debug, Clone)]
pub struct EncodingSet {
    supported: Vec<Encoding>,
}

impl Default for EncodingSet {
    fn default() -> Self {
        Self::new(vec![Encoding::Gzip])
    }
}

impl EncodingSet {
    pub fn new(supported: Vec<Encoding>) -> Self {
        Self { supported }
    }

    /// An allow-set that never encodes.
    pub fn identity_only() -> Self {
        Self::new(Vec::new())
    }

    pub fn supports(&self, encoding: Encoding) -> bool {
        self.supported.contains(&encoding)
    }

    /// All supported encodings named in `header`, in the client's order.
    pub fn accepted(&self, header: &str) -> Vec<Encoding> {
        header
            .split(',')
            .map(str::trim)
            .filter_map(Encoding::from_token)
            .filter(|e| self.supports(*e))
            .collect()
    }

    /// Picks the single encoding to apply, if any.
    pub fn negotiate(&self, header: Option<&str>) -> Option<Encoding> {
        let header = header?;
        let selected = self.accepted(header).into_iter().next();

        tracing::debug!(
            accept_encoding = header,
            selected = selected.map(|e| e.as_str()),
            "Negotiated content encoding"
        );

        selected
    }
}
