//! Conversions between image files and the binary buffer formats

mod decode;
mod encode;
mod normalization;

pub use decode::{average_samples, decode_file, render_image, DecodeOptions};
pub use encode::{default_encode_output, encode_file, load_image, normalize_image, EncodeOptions};
pub use normalization::{find_min_max, quantize_channel};
