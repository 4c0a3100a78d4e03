//! MIPS disassembler CLI.
//!
//! This binary wraps the `mipsdis-core` library. It performs:
//! 1. **Argument parsing:** binary image path and an optional `0x`-prefixed
//!    starting address.
//! 2. **Listing:** one assembly line per 32-bit word to stdout, addresses
//!    advancing by 4.
//! 3. **Diagnostics:** warnings and errors go to stderr so stdout carries
//!    only the listing; failures exit with code 1.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mipsdis_core::{Error, listing, loader};

#[derive(Parser, Debug)]
#[command(
    name = "mipsdis",
    author,
    version,
    about = "MIPS I machine-code disassembler",
    long_about = "Decode a flat binary of 32-bit MIPS instruction words into assembly,\none instruction per line.\n\nExamples:\n  mipsdis boot.bin\n  mipsdis boot.bin 0xbfc00000"
)]
struct Cli {
    /// Flat binary image of sequential 32-bit instruction words.
    file: PathBuf,

    /// Starting address of the image, as 0x-prefixed hexadecimal.
    #[arg(value_parser = parse_start)]
    start_addr: Option<u32>,
}

/// clap value parser for the start address; surfaces the library's message.
fn parse_start(text: &str) -> Result<u32, String> {
    listing::parse_start_address(text).map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("mipsdis: {e}");
        process::exit(1);
    }
}

/// Loads the image and streams the listing to stdout.
fn run(cli: &Cli) -> Result<(), Error> {
    let image = loader::load_binary(&cli.file)?;
    let mut out = BufWriter::new(io::stdout().lock());
    listing::write_listing(&image, cli.start_addr.unwrap_or(0), &mut out)?;
    out.flush()?;
    Ok(())
}
