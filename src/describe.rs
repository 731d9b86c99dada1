use crate::convert::find_min_max;
use crate::format::{AccumulationBuffer, NormalizedBuffer};
use crate::types::{ByteOrder, ChannelOrder};
use std::path::Path;

/// Print the header and value range of an accumulation buffer
pub fn print_accumulation(path: &Path, buffer: &AccumulationBuffer, byte_order: ByteOrder, channel_order: ChannelOrder) {
    print_field("File", path.display());
    print_field("Format", "scene accumulation buffer");
    print_field("Sample Count", buffer.sample_count);
    print_field("Dimensions", buffer.dimensions);
    print_layout(byte_order, channel_order);
    print_value_range(&buffer.samples);
    println!();
}

/// Print the header and value range of a normalized image buffer
pub fn print_normalized(path: &Path, buffer: &NormalizedBuffer, byte_order: ByteOrder, channel_order: ChannelOrder) {
    print_field("File", path.display());
    print_field("Format", "normalized image buffer");
    print_field("Dimensions", buffer.dimensions);
    print_layout(byte_order, channel_order);
    print_value_range(&buffer.samples);
    println!();
}

fn print_field(name: &str, value: impl std::fmt::Display) {
    println!("{name:20}: {value}");
}

fn print_layout(byte_order: ByteOrder, channel_order: ChannelOrder) {
    print_field("Byte Order", byte_order);
    print_field("Channel Order", channel_order);
}

fn print_value_range(samples: &[f64]) {
    if let Some((min, max)) = find_min_max(samples) {
        println!("{:20}: {min} .. {max}", "Value Range");
    }
}
