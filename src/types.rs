//! Domain-specific types shared by both buffer formats

use crate::error::ShapeError;
use clap::ValueEnum;
use std::fmt;

/// Number of interleaved color channels per pixel in both formats
pub const CHANNELS: usize = 3;

/// Image size in pixels as stored in a buffer header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u64,
    pub height: u64,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    /// Number of pixels, or an error if it does not fit in memory addressing
    pub fn pixel_count(&self) -> Result<usize, ShapeError> {
        self.width
            .checked_mul(self.height)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(ShapeError::Overflow {
                width: self.width,
                height: self.height,
            })
    }

    /// Number of f64 values the payload must hold
    pub fn sample_len(&self) -> Result<usize, ShapeError> {
        self.pixel_count()?
            .checked_mul(CHANNELS)
            .ok_or(ShapeError::Overflow {
                width: self.width,
                height: self.height,
            })
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{width}x{height}", width = self.width, height = self.height)
    }
}

/// Byte order of header words and payload values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
    /// Whatever the current host uses; matches files written by tools that
    /// dump memory directly
    Native,
}

impl ByteOrder {
    /// Resolve `Native` to the concrete order of this host
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            Self::Native if cfg!(target_endian = "big") => Self::Big,
            Self::Native => Self::Little,
            other => other,
        }
    }

    #[inline]
    pub(crate) fn u64_from(self, bytes: [u8; 8]) -> u64 {
        match self.resolve() {
            Self::Big => u64::from_be_bytes(bytes),
            _ => u64::from_le_bytes(bytes),
        }
    }

    #[inline]
    pub(crate) fn i64_from(self, bytes: [u8; 8]) -> i64 {
        match self.resolve() {
            Self::Big => i64::from_be_bytes(bytes),
            _ => i64::from_le_bytes(bytes),
        }
    }

    #[inline]
    pub(crate) fn f64_from(self, bytes: [u8; 8]) -> f64 {
        match self.resolve() {
            Self::Big => f64::from_be_bytes(bytes),
            _ => f64::from_le_bytes(bytes),
        }
    }

    #[inline]
    pub(crate) fn u64_bytes(self, value: u64) -> [u8; 8] {
        match self.resolve() {
            Self::Big => value.to_be_bytes(),
            _ => value.to_le_bytes(),
        }
    }

    #[inline]
    pub(crate) fn i64_bytes(self, value: i64) -> [u8; 8] {
        match self.resolve() {
            Self::Big => value.to_be_bytes(),
            _ => value.to_le_bytes(),
        }
    }

    #[inline]
    pub(crate) fn f64_bytes(self, value: f64) -> [u8; 8] {
        match self.resolve() {
            Self::Big => value.to_be_bytes(),
            _ => value.to_le_bytes(),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolve() {
            Self::Big => write!(f, "big-endian"),
            _ => write!(f, "little-endian"),
        }
    }
}

/// Order of the three channels inside each pixel triple of a buffer
///
/// Images are always decoded and written as RGB; `Bgr` swaps the first and
/// third channel on the way into and out of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ChannelOrder {
    #[default]
    Bgr,
    Rgb,
}

impl ChannelOrder {
    /// Reorder an RGB triple into buffer order, or a buffer triple into RGB.
    /// The swap is its own inverse.
    #[inline]
    #[must_use]
    pub fn arrange<T: Copy>(self, triple: [T; 3]) -> [T; 3] {
        match self {
            Self::Bgr => [triple[2], triple[1], triple[0]],
            Self::Rgb => triple,
        }
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bgr => write!(f, "BGR"),
            Self::Rgb => write!(f, "RGB"),
        }
    }
}
