use std::io::Read;

use flate2::read::GzDecoder;
use tinyhttp::http::encoding::{Encoding, EncodingSet};

#[test]
fn test_negotiate_gzip() {
    let set = EncodingSet::default();

    assert_eq!(set.negotiate(Some("gzip")), Some(Encoding::Gzip));
}

#[test]
fn test_negotiate_trims_tokens() {
    let set = EncodingSet::default();

    assert_eq!(set.negotiate(Some("invalid-1,  gzip  , invalid-2")), Some(Encoding::Gzip));
}

#[test]
fn test_negotiate_unsupported_only() {
    let set = EncodingSet::default();

    assert_eq!(set.negotiate(Some("bogus")), None);
    assert_eq!(set.negotiate(Some("deflate, br")), None);
}

#[test]
fn test_negotiate_is_case_sensitive() {
    assert_eq!(EncodingSet::default().negotiate(Some("GZIP")), None);
}

#[test]
fn test_negotiate_ignores_quality_suffix() {
    // Tokens are matched whole, so parameters prevent a match.
    assert_eq!(EncodingSet::default().negotiate(Some("gzip;q=1.0")), None);
}

#[test]
fn test_accepted_lists_every_supported_token() {
    let set = EncodingSet::default();

    assert_eq!(set.accepted("gzip, gzip"), vec![Encoding::Gzip, Encoding::Gzip]);
}

#[test]
fn test_encoding_tokens() {
    assert_eq!(Encoding::Gzip.as_str(), "gzip");
    assert_eq!(Encoding::from_token("gzip"), Some(Encoding::Gzip));
    assert_eq!(Encoding::from_token("br"), None);
}

#[test]
fn test_gzip_encode_decodes_back() {
    let body = b"the quick brown fox jumps over the lazy dog".repeat(10);
    let encoded = Encoding::Gzip.encode(&body).unwrap();

    // gzip magic bytes
    assert_eq!(&encoded[..2], &[0x1f, 0x8b]);

    let mut decoded = Vec::new();
    GzDecoder::new(&encoded[..]).read_to_end(&mut decoded).unwrap();
    assert_eq!(decoded, body);
}

#[test]
fn test_gzip_encode_is_deterministic() {
    let first = Encoding::Gzip.encode(b"abc").unwrap();
    let second = Encoding::Gzip.encode(b"abc").unwrap();

    assert_eq!(first, second);
}
