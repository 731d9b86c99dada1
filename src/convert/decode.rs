use super::normalization::quantize_channel;
use crate::error::{ConvertError, ShapeError};
use crate::format::{validate_payload, AccumulationBuffer};
use crate::output;
use crate::types::{ByteOrder, ChannelOrder, CHANNELS};
use image::{ImageFormat, RgbImage};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub byte_order: ByteOrder,
    pub channel_order: ChannelOrder,
}

/// Divide every accumulated value by the sample count
pub fn average_samples(buffer: &AccumulationBuffer) -> Result<Vec<f64>, ConvertError> {
    if buffer.sample_count == 0 {
        return Err(ConvertError::ZeroSampleCount);
    }

    let count = buffer.sample_count as f64;
    Ok(buffer.samples.iter().map(|&sum| sum / count).collect())
}

/// Average, clamp and quantize an accumulation buffer into an 8-bit image
pub fn render_image(buffer: &AccumulationBuffer, order: ChannelOrder) -> Result<RgbImage, ConvertError> {
    let dims = buffer.dimensions;
    validate_payload(dims, buffer.samples.len())?;
    if dims.is_empty() {
        return Err(ShapeError::EmptyImage {
            width: dims.width,
            height: dims.height,
        }
        .into());
    }

    let overflow = || ShapeError::Overflow {
        width: dims.width,
        height: dims.height,
    };
    let width = u32::try_from(dims.width).map_err(|_| overflow())?;
    let height = u32::try_from(dims.height).map_err(|_| overflow())?;

    let averaged = average_samples(buffer)?;

    let clipped = count_clipped(&averaged);
    if clipped > 0 {
        debug!(clipped, total = averaged.len(), "clamped averaged values above 1.0");
    }

    let pixels: Vec<u8> = averaged
        .chunks_exact(CHANNELS)
        .flat_map(|triple| order.arrange([triple[0], triple[1], triple[2]]).map(quantize_channel))
        .collect();

    RgbImage::from_raw(width, height, pixels).ok_or_else(|| overflow().into())
}

/// Number of averaged values the upper clamp will cut down to 1.0
fn count_clipped(averaged: &[f64]) -> usize {
    averaged.iter().filter(|&&v| v > 1.0).count()
}

/// Render the accumulation buffer at `input` to an image file at `output`
///
/// The image format follows the extension of `output`, PNG when it has none
/// the codec recognizes.
pub fn decode_file(input: &Path, output: &Path, options: &DecodeOptions) -> Result<AccumulationBuffer, ConvertError> {
    let buffer = AccumulationBuffer::open(input, options.byte_order)?;
    let image = render_image(&buffer, options.channel_order)?;

    let format = ImageFormat::from_path(output).unwrap_or(ImageFormat::Png);
    output::write_atomic(output, |w| {
        image.write_to(w, format).map_err(|source| ConvertError::Encode {
            path: output.to_path_buf(),
            source,
        })
    })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        samples = buffer.sample_count,
        dimensions = %buffer.dimensions,
        "decoded accumulation buffer"
    );
    Ok(buffer)
}
