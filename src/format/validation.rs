use crate::error::ShapeError;
use crate::types::{Dimensions, CHANNELS};

/// Check that a payload of `samples` values holds exactly one RGB triple per
/// pixel of `dimensions`
#[inline]
pub fn validate_payload(dimensions: Dimensions, samples: usize) -> Result<(), ShapeError> {
    if !samples.is_multiple_of(CHANNELS) {
        return Err(ShapeError::PartialPixel { samples });
    }

    let expected = dimensions.sample_len()?;
    if samples != expected {
        return Err(ShapeError::LengthMismatch {
            width: dimensions.width,
            height: dimensions.height,
            expected,
            actual: samples,
        });
    }

    Ok(())
}
