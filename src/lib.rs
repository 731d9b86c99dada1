pub mod cli;
pub mod convert;
pub mod describe;
pub mod error;
pub mod format;
pub mod output;
pub mod types;

// Re-export commonly used items
pub use convert::{decode_file, encode_file, DecodeOptions, EncodeOptions};
pub use error::{ConvertError, ErrorKind, ShapeError};
pub use format::{AccumulationBuffer, NormalizedBuffer};
pub use types::{ByteOrder, ChannelOrder, Dimensions};
