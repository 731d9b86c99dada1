//! Binary buffer formats
//!
//! Two fixed layouts of 8-byte words: a header of integers followed by a
//! payload of `f64` values, three per pixel, rows top to bottom.
//!
//! - [`AccumulationBuffer`]: `count`, `width`, `height` (all `u64`) then
//!   summed color contributions, as produced by the renderer
//! - [`NormalizedBuffer`]: `width`, `height` (both `i64`) then channel values
//!   in `[0, 1]`

mod accumulation;
mod normalized;
mod validation;

pub use accumulation::AccumulationBuffer;
pub use normalized::NormalizedBuffer;
pub use validation::validate_payload;

use crate::error::ShapeError;
use crate::types::ByteOrder;

/// Size of every header word and payload value
pub const WORD: usize = 8;

#[inline]
fn word(chunk: &[u8]) -> [u8; WORD] {
    let mut bytes = [0u8; WORD];
    bytes.copy_from_slice(chunk);
    bytes
}

/// Split `N` header words off the front of `bytes`
fn split_header<const N: usize>(bytes: &[u8]) -> Result<([[u8; WORD]; N], &[u8]), ShapeError> {
    let header_len = N * WORD;
    if bytes.len() < header_len {
        return Err(ShapeError::TruncatedHeader {
            expected: header_len,
            actual: bytes.len(),
        });
    }

    let (header, payload) = bytes.split_at(header_len);
    let mut words = [[0u8; WORD]; N];
    for (dst, chunk) in words.iter_mut().zip(header.chunks_exact(WORD)) {
        *dst = word(chunk);
    }
    Ok((words, payload))
}

/// Interpret the payload bytes as a flat sequence of `f64`
fn decode_payload(payload: &[u8], order: ByteOrder) -> Result<Vec<f64>, ShapeError> {
    if !payload.len().is_multiple_of(WORD) {
        return Err(ShapeError::PartialSample { len: payload.len() });
    }

    Ok(payload
        .chunks_exact(WORD)
        .map(|chunk| order.f64_from(word(chunk)))
        .collect())
}

fn encode_payload(out: &mut Vec<u8>, samples: &[f64], order: ByteOrder) {
    out.reserve(samples.len() * WORD);
    for &sample in samples {
        out.extend_from_slice(&order.f64_bytes(sample));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_split_header_truncated() {
        let bytes = [0u8; 20];
        assert_matches!(
            split_header::<3>(&bytes),
            Err(ShapeError::TruncatedHeader { expected: 24, actual: 20 })
        );
    }

    #[test]
    fn test_split_header_returns_rest() {
        let mut bytes = vec![1u8; 16];
        bytes.extend_from_slice(&[9u8; 8]);
        let (words, rest) = split_header::<2>(&bytes).unwrap();
        assert_eq!(words, [[1u8; 8], [1u8; 8]]);
        assert_eq!(rest, &[9u8; 8]);
    }

    #[test]
    fn test_decode_payload_partial_value() {
        assert_matches!(
            decode_payload(&[0u8; 12], ByteOrder::Little),
            Err(ShapeError::PartialSample { len: 12 })
        );
    }

    #[test]
    fn test_decode_payload_big_endian() {
        let mut bytes = Vec::new();
        encode_payload(&mut bytes, &[0.5, -2.0], ByteOrder::Big);
        assert_eq!(&bytes[..8], &0.5f64.to_be_bytes());
        assert_eq!(decode_payload(&bytes, ByteOrder::Big).unwrap(), vec![0.5, -2.0]);
        assert_ne!(decode_payload(&bytes, ByteOrder::Little).unwrap(), vec![0.5, -2.0]);
    }
}
