//! PCM sample decoding.
//!
//! [`SampleWidth`] names the three integer layouts this crate understands and
//! [`decode`] turns a raw `data` chunk payload into signed samples. Samples
//! are read in file order without separating channels.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{configuration::TrailingBytes, error::WavHexError};

/// Bytes per sample of a PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleWidth {
    /// Signed 8-bit, no byte order.
    Bits8,
    /// Signed 16-bit little-endian.
    Bits16,
    /// Signed 32-bit little-endian.
    Bits32,
}

impl Display for SampleWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-bit", self.bytes() * 8)
    }
}

impl SampleWidth {
    /// Map a width in bytes to a layout.
    ///
    /// # Errors
    ///
    /// Returns [`WavHexError::UnsupportedSampleWidth`] for anything other
    /// than 1, 2 or 4.
    pub fn from_bytes(bytes: u16) -> Result<Self, WavHexError> {
        match bytes {
            1 => Ok(SampleWidth::Bits8),
            2 => Ok(SampleWidth::Bits16),
            4 => Ok(SampleWidth::Bits32),
            other => Err(WavHexError::UnsupportedSampleWidth(other)),
        }
    }

    /// Width in bytes.
    pub fn bytes(self) -> u16 {
        match self {
            SampleWidth::Bits8 => 1,
            SampleWidth::Bits16 => 2,
            SampleWidth::Bits32 => 4,
        }
    }

    /// Decode every whole sample in `raw`. Leftover bytes are ignored.
    pub fn decode(self, raw: &[u8]) -> Vec<i32> {
        match self {
            SampleWidth::Bits8 => raw.iter().map(|&byte| i32::from(byte as i8)).collect(),
            SampleWidth::Bits16 => raw
                .chunks_exact(2)
                .map(|pair| i32::from(i16::from_le_bytes([pair[0], pair[1]])))
                .collect(),
            SampleWidth::Bits32 => raw
                .chunks_exact(4)
                .map(|quad| i32::from_le_bytes([quad[0], quad[1], quad[2], quad[3]]))
                .collect(),
        }
    }

    /// Encode samples back into raw bytes at this width.
    ///
    /// Samples outside the width's range are truncated to their low bits,
    /// so `encode(decode(raw)) == raw` holds for any whole-sample buffer.
    pub fn encode(self, samples: &[i32]) -> Vec<u8> {
        let mut raw = Vec::with_capacity(samples.len() * self.bytes() as usize);
        for &sample in samples {
            match self {
                SampleWidth::Bits8 => raw.push(sample as i8 as u8),
                SampleWidth::Bits16 => raw.extend_from_slice(&(sample as i16).to_le_bytes()),
                SampleWidth::Bits32 => raw.extend_from_slice(&sample.to_le_bytes()),
            }
        }
        raw
    }
}

/// Decode a raw PCM payload with the given sample width in bytes.
///
/// Bytes after the last whole sample are silently discarded. Use
/// [`decode_with`] to reject them instead.
///
/// # Errors
///
/// Returns [`WavHexError::UnsupportedSampleWidth`] if `sample_width` is not
/// 1, 2 or 4.
///
/// # Example
///
/// ```
/// let samples = wavhex::decode(&[0x00, 0x01, 0xff, 0xff], 2)?;
/// assert_eq!(samples, vec![256, -1]);
/// # Ok::<(), wavhex::WavHexError>(())
/// ```
pub fn decode(raw: &[u8], sample_width: u16) -> Result<Vec<i32>, WavHexError> {
    decode_with(raw, sample_width, TrailingBytes::Discard)
}

/// Decode a raw PCM payload, applying an explicit trailing-bytes policy.
///
/// `raw` is treated as a flat single-channel stream, so a frame here is one
/// sample and a rejected remainder reports the sample width as its
/// `frame_size`.
///
/// # Errors
///
/// Returns [`WavHexError::UnsupportedSampleWidth`] for an unknown width, and
/// [`WavHexError::Framing`] when `trailing` is [`TrailingBytes::Reject`] and
/// `raw` does not hold a whole number of samples.
pub fn decode_with(
    raw: &[u8],
    sample_width: u16,
    trailing: TrailingBytes,
) -> Result<Vec<i32>, WavHexError> {
    let width = SampleWidth::from_bytes(sample_width)?;
    let leftover = raw.len() % width.bytes() as usize;

    if leftover != 0 {
        match trailing {
            TrailingBytes::Discard => {
                log::warn!(
                    "Discarding {} trailing byte(s) that do not form a {} sample",
                    leftover,
                    width
                );
            }
            TrailingBytes::Reject => {
                return Err(WavHexError::Framing {
                    trailing: leftover,
                    frame_size: width.bytes() as usize,
                });
            }
        }
    }

    let samples = width.decode(raw);
    log::debug!("Decoded {} {} samples", samples.len(), width);
    Ok(samples)
}
