//! Error types for the `wavhex` crate.
//!
//! This module defines [`WavHexError`], the unified error type returned by all
//! fallible operations in the crate. Errors carry enough context (file paths,
//! format tags, sample widths) to diagnose a failed conversion from the
//! message alone.

use std::{io::Error as IoError, path::PathBuf};

use thiserror::Error;

/// The unified error type for all `wavhex` operations.
///
/// Every public method that can fail returns `Result<T, WavHexError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WavHexError {
    /// The input file could not be opened.
    #[error("Failed to open WAVE file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::PcmReader::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The input is not a RIFF/WAVE container, or its header is damaged.
    #[error("Not a valid WAVE container: {0}")]
    InvalidContainer(String),

    /// The container declares a non-PCM encoding.
    #[error("Unsupported WAVE encoding (format tag {0:#06x}), only PCM is supported")]
    UnsupportedEncoding(u16),

    /// The sample width is not one of 1, 2 or 4 bytes.
    #[error("Unsupported sample width: {0} bytes (expected 1, 2 or 4)")]
    UnsupportedSampleWidth(u16),

    /// The payload ends with bytes that do not form a whole frame.
    ///
    /// Only raised when trailing bytes are configured to be rejected, see
    /// [`TrailingBytes`](crate::TrailingBytes).
    #[error("{trailing} trailing byte(s) do not form a whole {frame_size}-byte frame")]
    Framing {
        /// Number of leftover bytes.
        trailing: usize,
        /// Size of the unit that did not fit, in bytes.
        frame_size: usize,
    },

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),
}
