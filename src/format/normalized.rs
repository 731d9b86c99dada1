use super::{decode_payload, encode_payload, split_header, validate_payload, WORD};
use crate::error::{ConvertError, ShapeError};
use crate::types::{ByteOrder, Dimensions};
use std::fs;
use std::path::Path;

/// Image channels normalized to `[0, 1]`, as consumed by the renderer for
/// textures
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBuffer {
    pub dimensions: Dimensions,
    pub samples: Vec<f64>,
}

impl NormalizedBuffer {
    pub const HEADER_LEN: usize = 2 * WORD;

    pub fn new(dimensions: Dimensions, samples: Vec<f64>) -> Result<Self, ShapeError> {
        validate_payload(dimensions, samples.len())?;
        Ok(Self { dimensions, samples })
    }

    pub fn from_bytes(bytes: &[u8], order: ByteOrder) -> Result<Self, ShapeError> {
        let ([width, height], payload) = split_header::<2>(bytes)?;
        let (width, height) = (order.i64_from(width), order.i64_from(height));

        let (Ok(w), Ok(h)) = (u64::try_from(width), u64::try_from(height)) else {
            return Err(ShapeError::NegativeDimension { width, height });
        };

        Self::new(Dimensions::new(w, h), decode_payload(payload, order)?)
    }

    pub fn to_bytes(&self, order: ByteOrder) -> Result<Vec<u8>, ShapeError> {
        validate_payload(self.dimensions, self.samples.len())?;

        let overflow = ShapeError::Overflow {
            width: self.dimensions.width,
            height: self.dimensions.height,
        };
        let width = i64::try_from(self.dimensions.width).map_err(|_| overflow.clone())?;
        let height = i64::try_from(self.dimensions.height).map_err(|_| overflow)?;

        let mut out = Vec::with_capacity(Self::HEADER_LEN + self.samples.len() * WORD);
        out.extend_from_slice(&order.i64_bytes(width));
        out.extend_from_slice(&order.i64_bytes(height));
        encode_payload(&mut out, &self.samples, order);
        Ok(out)
    }

    pub fn open(path: &Path, order: ByteOrder) -> Result<Self, ConvertError> {
        let bytes = fs::read(path).map_err(|e| ConvertError::io(path, e))?;
        Ok(Self::from_bytes(&bytes, order)?)
    }
}
