//! Conversion configuration.
//!
//! [`ConvertOptions`] is a builder that threads conversion settings through
//! [`convert`](crate::convert) without widening its signature.
//!
//! # Example
//!
//! ```no_run
//! use wavhex::{ConvertOptions, TrailingBytes};
//!
//! let options = ConvertOptions::new().with_trailing_bytes(TrailingBytes::Reject);
//! wavhex::convert("input.wav", "samples.txt", &options)?;
//! # Ok::<(), wavhex::WavHexError>(())
//! ```

/// What to do with payload bytes that do not form a whole sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBytes {
    /// Drop them silently (a warning is logged). This is the default.
    #[default]
    Discard,
    /// Fail with [`WavHexError::Framing`](crate::WavHexError::Framing).
    Reject,
}

/// Settings for a WAVE to hex conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub(crate) trailing_bytes: TrailingBytes,
}

impl ConvertOptions {
    /// Create options with default settings.
    ///
    /// Defaults: trailing partial samples are discarded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trailing-bytes policy.
    #[must_use]
    pub fn with_trailing_bytes(mut self, policy: TrailingBytes) -> Self {
        self.trailing_bytes = policy;
        self
    }

    /// Shorthand for rejecting trailing partial samples.
    #[must_use]
    pub fn strict(self) -> Self {
        self.with_trailing_bytes(TrailingBytes::Reject)
    }

    /// The configured trailing-bytes policy.
    pub fn trailing_bytes(&self) -> TrailingBytes {
        self.trailing_bytes
    }
}
