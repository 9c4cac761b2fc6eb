//! Gzip helpers for cached values.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

pub fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

pub fn decompress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compressed_payload_restores() {
        let html = "<p>hello</p>".repeat(200);
        let packed = compress(html.as_bytes()).unwrap();
        assert!(packed.len() < html.len());
        assert_eq!(decompress(&packed).unwrap(), html.as_bytes());
    }

    #[test]
    fn test_decompress_rejects_plain_bytes() {
        assert!(decompress(b"not gzip").is_err());
    }
}
