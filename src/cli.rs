use crate::convert::{DecodeOptions, EncodeOptions};
use crate::types::{ByteOrder, ChannelOrder};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert images to normalized float buffers and render accumulation buffers to images
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Byte order of buffer headers and payloads
    #[arg(long, value_enum, global = true, default_value_t = ByteOrder::Little)]
    pub byte_order: ByteOrder,

    /// Channel order of pixel triples inside buffers
    #[arg(long, value_enum, global = true, default_value_t = ChannelOrder::Bgr)]
    pub channel_order: ChannelOrder,

    /// Show buffer header summaries
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert images into normalized image buffers
    Encode {
        /// Image file path(s) to convert
        #[arg(value_name = "IMAGE", default_values = ["threebody.jpg", "saturn.jpg"])]
        inputs: Vec<PathBuf>,

        /// Output path, only with a single IMAGE [default: IMAGE with a .dat extension]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render an accumulation buffer to an image
    Decode {
        /// Accumulation buffer to read
        #[arg(value_name = "INPUT", default_value = "out/scene.dat")]
        input: PathBuf,

        /// Image to write; the format follows the extension
        #[arg(short, long, default_value = "out/scene.png")]
        output: PathBuf,
    },
}

impl Args {
    #[must_use]
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            byte_order: self.byte_order,
            channel_order: self.channel_order,
        }
    }

    #[must_use]
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            byte_order: self.byte_order,
            channel_order: self.channel_order,
        }
    }
}
