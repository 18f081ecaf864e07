//! EXE to COM conversion: strip the fixed EXE header and zero-pad the result.

use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;

use camino::Utf8Path;
use log::debug;

use crate::error::ConvertError;

/// Size of the header of a 16-bit DOS EXE image.
///
/// The header is skipped as an opaque blob; none of its fields are parsed.
pub const EXE_HEADER_SIZE: u64 = 0x40;

/// Target size of the produced COM image.
///
/// Shorter payloads are zero-padded up to this size. Longer payloads are kept
/// as-is, never truncated.
pub const COM_IMAGE_SIZE: u64 = 0x1000;

/// Signature bytes identifying the DOS EXE container format.
pub const EXE_MAGIC: [u8; 2] = *b"MZ";

/// What a completed conversion wrote to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Bytes copied verbatim from the source, past its header.
    pub payload_bytes: u64,
    /// Zero bytes appended to reach [`COM_IMAGE_SIZE`].
    pub padding_bytes: u64,
}

impl ConversionSummary {
    /// Total length of the produced COM image.
    pub fn com_size(&self) -> u64 {
        self.payload_bytes + self.padding_bytes
    }
}

/// Checks that the file at `path` starts with the `MZ` signature.
///
/// The file is opened read-only and the handle is released before returning,
/// also on the failure paths.
pub fn validate(path: &Utf8Path) -> Result<(), ConvertError> {
    let mut source = File::open(path).map_err(|err| read_error(path, err))?;
    check_signature(&mut source, path)
}

/// Converts the EXE image at `exe_path` into a COM image at `com_path`.
///
/// The destination is created fresh, truncating any pre-existing content. It
/// is not touched at all if the source cannot be opened or lacks the EXE
/// signature.
pub fn convert(
    exe_path: &Utf8Path,
    com_path: &Utf8Path,
) -> Result<ConversionSummary, ConvertError> {
    let mut source = File::open(exe_path).map_err(|err| read_error(exe_path, err))?;
    check_signature(&mut source, exe_path)?;

    let dest = File::create(com_path).map_err(|err| write_error(com_path, err))?;
    let mut dest = BufWriter::new(dest);

    // Seeking past end-of-file is legal: the copy below then reads nothing
    // and the whole image becomes padding.
    source
        .seek(SeekFrom::Start(EXE_HEADER_SIZE))
        .map_err(|err| read_error(exe_path, err))?;

    let payload_bytes =
        io::copy(&mut source, &mut dest).map_err(|err| write_error(com_path, err))?;
    debug!("copied {payload_bytes} payload bytes from '{exe_path}'");

    let padding_bytes = COM_IMAGE_SIZE.saturating_sub(payload_bytes);
    io::copy(&mut io::repeat(0u8).take(padding_bytes), &mut dest)
        .map_err(|err| write_error(com_path, err))?;
    debug!("padded '{com_path}' with {padding_bytes} zero bytes");

    dest.flush().map_err(|err| write_error(com_path, err))?;

    Ok(ConversionSummary {
        payload_bytes,
        padding_bytes,
    })
}

/// Reads the two leading bytes of an open source file and compares them to
/// [`EXE_MAGIC`]. Only offsets 0 and 1 are inspected; the rest of the header
/// is never validated.
fn check_signature(source: &mut File, path: &Utf8Path) -> Result<(), ConvertError> {
    source
        .seek(SeekFrom::Start(0))
        .map_err(|err| read_error(path, err))?;

    // A file shorter than 2 bytes is an I/O error, not a signature mismatch
    let mut magic = [0u8; 2];
    source
        .read_exact(&mut magic)
        .map_err(|err| read_error(path, err))?;

    if magic != EXE_MAGIC {
        return Err(ConvertError::BadSignature {
            path: path.to_owned(),
        });
    }

    Ok(())
}

fn read_error(path: &Utf8Path, source: io::Error) -> ConvertError {
    ConvertError::Read {
        path: path.to_owned(),
        source,
    }
}

fn write_error(path: &Utf8Path, source: io::Error) -> ConvertError {
    ConvertError::Write {
        path: path.to_owned(),
        source,
    }
}
