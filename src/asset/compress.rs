//! Gzip compression of minified text into a C byte-array literal.

use std::io::Write;

use anyhow::{Context, Result};
use flate2::{Compression, write::GzEncoder};

use crate::log;

/// Compressed payload rendered for embedding.
#[derive(Debug, Clone)]
pub struct Compressed {
    /// Comma-joined decimal byte values, ready for a braced initializer.
    pub literal: String,
    /// Byte count of the compressed payload.
    pub len: usize,
}

/// Gzip-compress minified text at the default level and render the result
/// as a decimal byte literal.
///
/// The gzip header carries timestamp/OS fields, so the bytes are not
/// reproducible across runs; decompression always yields the input text
/// exactly.
pub fn compress(minified: &str) -> Result<Compressed> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(minified.as_bytes())
        .context("gzip compression failed")?;
    let bytes = encoder.finish().context("gzip compression failed")?;

    let len = bytes.len();
    let literal = bytes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",");

    log!("gzip"; "data length: {len} bytes");
    Ok(Compressed { literal, len })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn decompress(literal: &str, len: usize) -> String {
        let bytes: Vec<u8> = literal
            .split(',')
            .map(|b| b.parse().unwrap())
            .collect();
        assert_eq!(bytes.len(), len);

        let mut decoder = GzDecoder::new(bytes.as_slice());
        let mut text = String::new();
        decoder.read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn test_round_trip() {
        let minified = "body{color:red}";
        let compressed = compress(minified).unwrap();
        assert_eq!(decompress(&compressed.literal, compressed.len), minified);
    }

    #[test]
    fn test_round_trip_empty_input() {
        let compressed = compress("").unwrap();
        assert!(compressed.len > 0); // gzip header/trailer are never empty
        assert_eq!(decompress(&compressed.literal, compressed.len), "");
    }

    #[test]
    fn test_literal_is_decimal_bytes() {
        let compressed = compress("console.log(1)").unwrap();
        assert!(
            compressed
                .literal
                .split(',')
                .all(|b| b.parse::<u8>().is_ok())
        );
        // gzip magic number
        assert!(compressed.literal.starts_with("31,139,"));
    }

    #[test]
    fn test_repeated_runs_decompress_identically() {
        let minified = "function f(){return 42}";
        let first = compress(minified).unwrap();
        let second = compress(minified).unwrap();
        assert_eq!(
            decompress(&first.literal, first.len),
            decompress(&second.literal, second.len)
        );
    }
}
