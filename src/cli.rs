use camino::Utf8PathBuf;
use clap::Parser;

/// DOS-style help switch kept from the original tool, handled before clap
/// parsing since clap would reject it as an unknown argument.
pub const DOS_HELP_SWITCH: &str = "/?";

/// Converts a 16-bit DOS .EXE file to a .COM file by stripping the 64-byte
/// EXE header and padding the result with zeros to 4 KiB.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = clap::crate_name!(), version, about, long_about = None)]
pub struct Args {
    /// Path to the source .EXE file. Its first two bytes must be 'MZ'.
    pub exe_file: Utf8PathBuf,

    /// Path to the .COM file to produce. Existing content is overwritten.
    pub com_file: Utf8PathBuf,
}
