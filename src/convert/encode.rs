use super::normalization::normalize_channel;
use crate::error::ConvertError;
use crate::format::NormalizedBuffer;
use crate::output;
use crate::types::{ByteOrder, ChannelOrder, Dimensions};
use image::{ImageFormat, ImageReader, RgbImage};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub byte_order: ByteOrder,
    pub channel_order: ChannelOrder,
}

/// Sibling path of `input` with a `.dat` extension
#[must_use]
pub fn default_encode_output(input: &Path) -> PathBuf {
    input.with_extension("dat")
}

/// Decode an image file to 8-bit RGB
///
/// The format is taken from the file contents, falling back to the
/// extension. Alpha is dropped and grayscale is expanded to three channels.
pub fn load_image(path: &Path) -> Result<RgbImage, ConvertError> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;

    let mut reader = ImageReader::new(BufReader::new(file));
    if let Ok(format) = ImageFormat::from_path(path) {
        reader.set_format(format);
    }
    let reader = reader
        .with_guessed_format()
        .map_err(|e| ConvertError::io(path, e))?;

    let decoded = reader.decode().map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), color = ?decoded.color(), "decoded image");

    Ok(decoded.to_rgb8())
}

/// Normalize every channel of `image` to `[0, 1]`, rows top to bottom,
/// channels in `order`
#[must_use]
pub fn normalize_image(image: &RgbImage, order: ChannelOrder) -> NormalizedBuffer {
    let samples = image
        .pixels()
        .flat_map(|pixel| order.arrange(pixel.0).map(normalize_channel))
        .collect();

    NormalizedBuffer {
        dimensions: Dimensions::new(u64::from(image.width()), u64::from(image.height())),
        samples,
    }
}

/// Convert the image at `input` into a normalized buffer file at `output`
pub fn encode_file(input: &Path, output: &Path, options: &EncodeOptions) -> Result<NormalizedBuffer, ConvertError> {
    let image = load_image(input)?;
    let buffer = normalize_image(&image, options.channel_order);
    let bytes = buffer.to_bytes(options.byte_order)?;

    output::write_bytes(output, &bytes)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        dimensions = %buffer.dimensions,
        "encoded image"
    );
    Ok(buffer)
}
