//! A command-line tool converting 16-bit DOS EXE images into raw COM images.
//!
//! The conversion is a byte-level transform, not a linker-level one: the
//! 64-byte EXE header is discarded without parsing its fields, the remaining
//! bytes are copied verbatim, and the output is zero-padded to 4 KiB.

pub mod cli;
pub mod convert;
pub mod error;

use anyhow::Context;
use log::info;

pub fn run(args: cli::Args) -> anyhow::Result<()> {
    let summary = convert::convert(&args.exe_file, &args.com_file)
        .with_context(|| format!("failed to convert '{}'", args.exe_file))?;

    info!(
        "wrote {} bytes ({} payload, {} padding) to '{}'",
        summary.com_size(),
        summary.payload_bytes,
        summary.padding_bytes,
        args.com_file
    );
    println!(
        "Conversion complete: {} -> {} ({} payload bytes)",
        args.exe_file, args.com_file, summary.payload_bytes
    );

    Ok(())
}
