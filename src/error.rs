use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad failure category of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Decode,
    Io,
    Arithmetic,
    ShapeMismatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileNotFound => "file not found",
            Self::Decode => "decode error",
            Self::Io => "I/O error",
            Self::Arithmetic => "arithmetic error",
            Self::ShapeMismatch => "shape mismatch",
        };
        f.write_str(name)
    }
}

/// Payload length inconsistent with the header, or a header that cannot
/// describe an image
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("header truncated: expected {expected} bytes, found {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("payload of {len} bytes is not a whole number of 8-byte values")]
    PartialSample { len: usize },

    #[error("payload holds {samples} values, which is not a whole number of RGB pixels")]
    PartialPixel { samples: usize },

    #[error("payload holds {actual} values but {width}x{height} requires {expected}")]
    LengthMismatch {
        width: u64,
        height: u64,
        expected: usize,
        actual: usize,
    },

    #[error("negative dimension in header: {width}x{height}")]
    NegativeDimension { width: i64, height: i64 },

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u64, height: u64 },

    #[error("dimensions {width}x{height} are too large")]
    Overflow { width: u64, height: u64 },
}

/// Error returned by every conversion operation
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("sample count is zero, accumulated values cannot be averaged")]
    ZeroSampleCount,

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl ConvertError {
    /// Wrap an I/O error, turning `NotFound` into [`ConvertError::FileNotFound`]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Io { .. } | Self::Encode { .. } => ErrorKind::Io,
            Self::ZeroSampleCount => ErrorKind::Arithmetic,
            Self::Shape(_) => ErrorKind::ShapeMismatch,
        }
    }
}
