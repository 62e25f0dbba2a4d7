//! WAVE header metadata.
//!
//! [`WavMetadata`] is parsed once when a [`PcmReader`](crate::PcmReader) is
//! created and cached for the lifetime of the reader.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    time::Duration,
};

/// Facts read from the `fmt ` and `data` chunk headers.
///
/// # Example
///
/// ```no_run
/// use wavhex::PcmReader;
///
/// let reader = PcmReader::open("input.wav")?;
/// let metadata = reader.metadata();
/// println!("{metadata} ({:?})", metadata.duration());
/// # Ok::<(), wavhex::WavHexError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct WavMetadata {
    /// Format tag from the `fmt ` chunk (1 for PCM, `0xFFFE` for extensible).
    pub format_tag: u16,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Frames per second.
    pub sample_rate: u32,
    /// Declared bits per sample.
    pub bits_per_sample: u16,
    /// Bytes per sample, `bits_per_sample` rounded up to whole bytes.
    pub sample_width: u16,
    /// Number of whole frames in the `data` chunk.
    pub frame_count: u64,
    /// Declared length of the `data` chunk in bytes.
    pub data_len: u64,
}

impl WavMetadata {
    /// Bytes per frame across all channels.
    pub fn frame_size(&self) -> usize {
        usize::from(self.channels) * usize::from(self.sample_width)
    }

    /// Bytes at the end of the `data` chunk that do not make up a whole
    /// frame. They are never returned by
    /// [`read_frames`](crate::PcmReader::read_frames).
    pub fn trailing_bytes(&self) -> usize {
        match self.frame_size() {
            0 => 0,
            size => (self.data_len % size as u64) as usize,
        }
    }

    /// Total number of samples across all channels.
    pub fn sample_count(&self) -> u64 {
        self.frame_count * u64::from(self.channels)
    }

    /// Playback length implied by the frame count and sample rate.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frame_count as f64 / f64::from(self.sample_rate))
    }
}

impl Display for WavMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "PCM {}-bit, {} ch, {} Hz, {} frames",
            self.bits_per_sample, self.channels, self.sample_rate, self.frame_count
        )
    }
}
