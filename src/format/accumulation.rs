use super::{decode_payload, encode_payload, split_header, validate_payload, WORD};
use crate::error::{ConvertError, ShapeError};
use crate::format::NormalizedBuffer;
use crate::types::{ByteOrder, Dimensions};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Per-pixel summed color samples written by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulationBuffer {
    /// Number of samples summed into every pixel
    pub sample_count: u64,
    pub dimensions: Dimensions,
    /// Interleaved channel sums, `dimensions.sample_len()` values
    pub samples: Vec<f64>,
}

impl AccumulationBuffer {
    pub const HEADER_LEN: usize = 3 * WORD;

    pub fn new(sample_count: u64, dimensions: Dimensions, samples: Vec<f64>) -> Result<Self, ShapeError> {
        validate_payload(dimensions, samples.len())?;
        Ok(Self {
            sample_count,
            dimensions,
            samples,
        })
    }

    /// Parse a complete buffer. A zero sample count is accepted here and
    /// rejected when the samples are averaged.
    pub fn from_bytes(bytes: &[u8], order: ByteOrder) -> Result<Self, ShapeError> {
        let ([count, width, height], payload) = split_header::<3>(bytes)?;
        let dimensions = Dimensions::new(order.u64_from(width), order.u64_from(height));
        let samples = decode_payload(payload, order)?;
        Self::new(order.u64_from(count), dimensions, samples)
    }

    pub fn to_bytes(&self, order: ByteOrder) -> Result<Vec<u8>, ShapeError> {
        validate_payload(self.dimensions, self.samples.len())?;

        let mut out = Vec::with_capacity(Self::HEADER_LEN + self.samples.len() * WORD);
        out.extend_from_slice(&order.u64_bytes(self.sample_count));
        out.extend_from_slice(&order.u64_bytes(self.dimensions.width));
        out.extend_from_slice(&order.u64_bytes(self.dimensions.height));
        encode_payload(&mut out, &self.samples, order);
        Ok(out)
    }

    /// Read and parse an accumulation buffer file
    pub fn open(path: &Path, order: ByteOrder) -> Result<Self, ConvertError> {
        let bytes = fs::read(path).map_err(|e| ConvertError::io(path, e))?;
        let buffer = Self::from_bytes(&bytes, order)?;

        debug!(
            path = %path.display(),
            count = buffer.sample_count,
            dimensions = %buffer.dimensions,
            "read accumulation buffer"
        );
        Ok(buffer)
    }
}

/// A normalized image is a valid single-sample accumulation
impl From<NormalizedBuffer> for AccumulationBuffer {
    fn from(buffer: NormalizedBuffer) -> Self {
        Self {
            sample_count: 1,
            dimensions: buffer.dimensions,
            samples: buffer.samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn raw(count: u64, width: u64, height: u64, samples: &[f64]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for word in [count, width, height] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_parse_single_pixel() {
        let bytes = raw(2, 1, 1, &[2.0, 2.0, 2.0]);
        let buffer = AccumulationBuffer::from_bytes(&bytes, ByteOrder::Little).unwrap();
        assert_eq!(buffer.sample_count, 2);
        assert_eq!(buffer.dimensions, Dimensions::new(1, 1));
        assert_eq!(buffer.samples, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_parse_accepts_zero_count() {
        let bytes = raw(0, 1, 1, &[0.0, 0.0, 0.0]);
        let buffer = AccumulationBuffer::from_bytes(&bytes, ByteOrder::Little).unwrap();
        assert_eq!(buffer.sample_count, 0);
    }

    #[test]
    fn test_parse_rejects_partial_pixel() {
        let bytes = raw(1, 1, 1, &[1.0, 1.0]);
        assert_matches!(
            AccumulationBuffer::from_bytes(&bytes, ByteOrder::Little),
            Err(ShapeError::PartialPixel { samples: 2 })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_pixel_count() {
        let bytes = raw(1, 2, 2, &[0.5; 9]);
        assert_matches!(
            AccumulationBuffer::from_bytes(&bytes, ByteOrder::Little),
            Err(ShapeError::LengthMismatch { expected: 12, actual: 9, .. })
        );
    }

    #[test]
    fn test_parse_rejects_trailing_bytes() {
        let mut bytes = raw(1, 1, 1, &[0.1, 0.2, 0.3]);
        bytes.push(0);
        assert_matches!(
            AccumulationBuffer::from_bytes(&bytes, ByteOrder::Little),
            Err(ShapeError::PartialSample { len: 25 })
        );
    }

    #[test]
    fn test_parse_truncated_header() {
        let bytes = raw(1, 1, 1, &[])[..16].to_vec();
        assert_matches!(
            AccumulationBuffer::from_bytes(&bytes, ByteOrder::Little),
            Err(ShapeError::TruncatedHeader { expected: 24, actual: 16 })
        );
    }

    #[test]
    fn test_layout_is_header_then_payload() {
        let buffer = AccumulationBuffer::new(5, Dimensions::new(1, 1), vec![1.0, 2.0, 3.0]).unwrap();
        let bytes = buffer.to_bytes(ByteOrder::Little).unwrap();
        assert_eq!(bytes, raw(5, 1, 1, &[1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_big_endian_differs_and_reads_back() {
        let buffer = AccumulationBuffer::new(3, Dimensions::new(1, 2), vec![0.25; 6]).unwrap();
        let big = buffer.to_bytes(ByteOrder::Big).unwrap();
        let little = buffer.to_bytes(ByteOrder::Little).unwrap();
        assert_ne!(big, little);
        assert_eq!(&big[..8], &3u64.to_be_bytes());
        assert_eq!(AccumulationBuffer::from_bytes(&big, ByteOrder::Big).unwrap(), buffer);
        assert!(AccumulationBuffer::from_bytes(&big, ByteOrder::Little).is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AccumulationBuffer::open(&dir.path().join("scene.dat"), ByteOrder::Little);
        assert_matches!(result, Err(ConvertError::FileNotFound { .. }));
    }

    #[test]
    fn test_open_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.dat");
        fs::write(&path, raw(4, 1, 1, &[4.0, 2.0, 0.0])).unwrap();

        let buffer = AccumulationBuffer::open(&path, ByteOrder::Little).unwrap();
        assert_eq!(buffer.sample_count, 4);
        assert_eq!(buffer.samples, vec![4.0, 2.0, 0.0]);
    }

    #[test]
    fn test_from_normalized_has_single_sample() {
        let normalized = NormalizedBuffer::new(Dimensions::new(1, 1), vec![0.0, 0.5, 1.0]).unwrap();
        let buffer = AccumulationBuffer::from(normalized);
        assert_eq!(buffer.sample_count, 1);
        assert_eq!(buffer.samples, vec![0.0, 0.5, 1.0]);
    }
}
