use std::io;

use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("The file '{path}' is not a valid DOS EXE file: missing MZ signature")]
    BadSignature { path: Utf8PathBuf },

    #[error("Failed to read EXE file '{path}'")]
    Read {
        path: Utf8PathBuf,
        source: io::Error,
    },

    #[error("Failed to write COM file '{path}'")]
    Write {
        path: Utf8PathBuf,
        source: io::Error,
    },
}
