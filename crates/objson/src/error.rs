use std::io;

use thiserror::Error;

/// Diagnostic codes carried by [`Error::Encode`].
pub mod codes {
    /// The document contains a NaN or infinite float, which JSON cannot
    /// represent.
    pub const NON_FINITE: u32 = 1;
    /// The underlying encoder reported an I/O failure.
    pub const IO: u32 = 2;
    /// The underlying encoder rejected the data.
    pub const DATA: u32 = 3;
    /// Any other encoder failure.
    pub const OTHER: u32 = 4;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("data could not be encoded because it contains invalid UTF-8 characters")]
    InvalidUtf8,

    #[error("an error occurred while encoding the data (error code {0})")]
    Encode(u32),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
