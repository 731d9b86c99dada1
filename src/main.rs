use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use pixdat::cli::{Args, Command};
use pixdat::{convert, describe};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let any_failed = match &args.command {
        Command::Encode { inputs, output } => {
            if output.is_some() && inputs.len() > 1 {
                Args::command()
                    .error(
                        clap::error::ErrorKind::ArgumentConflict,
                        "--output can only be used with a single IMAGE",
                    )
                    .exit();
            }

            let mut any_failed = false;
            for input in inputs {
                let output = output
                    .clone()
                    .unwrap_or_else(|| convert::default_encode_output(input));
                if let Err(e) = encode_one(input, &output, &args) {
                    eprintln!("Error: {e:#}");
                    any_failed = true;
                }
            }
            any_failed
        }
        Command::Decode { input, output } => match decode_one(input, output, &args) {
            Ok(()) => false,
            Err(e) => {
                eprintln!("Error: {e:#}");
                true
            }
        },
    };

    if any_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Convert one image into a normalized buffer
fn encode_one(input: &Path, output: &Path, args: &Args) -> Result<()> {
    let options = args.encode_options();
    let buffer = convert::encode_file(input, output, &options)
        .with_context(|| format!("encoding {}", input.display()))?;

    if args.verbose {
        describe::print_normalized(output, &buffer, options.byte_order, options.channel_order);
    }

    Ok(())
}

/// Render one accumulation buffer to an image
fn decode_one(input: &Path, output: &Path, args: &Args) -> Result<()> {
    let options = args.decode_options();
    let buffer = convert::decode_file(input, output, &options)
        .with_context(|| format!("decoding {}", input.display()))?;

    if args.verbose {
        describe::print_accumulation(input, &buffer, options.byte_order, options.channel_order);
    }

    Ok(())
}
