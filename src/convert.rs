//! One-shot WAVE to hex conversion.
//!
//! [`convert`] runs the whole pipeline: open the container, read every
//! frame in one go, decode, format, and write the text file.

use std::path::{Path, PathBuf};

use crate::{
    configuration::{ConvertOptions, TrailingBytes},
    container::PcmReader,
    error::WavHexError,
    hex::to_hex,
    sample::decode_with,
    sink::write_lines,
    validation::Severity,
};

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Frames read from the `data` chunk.
    pub frames: u64,
    /// Samples decoded (frames × channels).
    pub samples: usize,
    /// Bytes per sample of the input.
    pub sample_width: u16,
    /// Lines written to the output file.
    pub lines_written: usize,
    /// Path of the output file.
    pub output: PathBuf,
}

/// Convert the WAVE file at `input` into one hex sample per line at
/// `output`.
///
/// The whole payload is held in memory. The output file is created or
/// truncated only after the input has been read and decoded successfully.
///
/// # Errors
///
/// - [`WavHexError::FileOpen`], [`WavHexError::InvalidContainer`] or
///   [`WavHexError::UnsupportedEncoding`] if the input cannot be used.
/// - [`WavHexError::UnsupportedSampleWidth`] for widths other than 1, 2, 4.
/// - [`WavHexError::Framing`] if the `data` chunk does not end on a frame
///   boundary and [`TrailingBytes::Reject`] is configured.
/// - [`WavHexError::IoError`] for read or write failures.
///
/// # Example
///
/// ```no_run
/// use wavhex::ConvertOptions;
///
/// let summary = wavhex::convert("input.wav", "samples.txt", &ConvertOptions::new())?;
/// println!("{} samples", summary.samples);
/// # Ok::<(), wavhex::WavHexError>(())
/// ```
pub fn convert<P, Q>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<ConversionSummary, WavHexError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let output = output.as_ref();

    let (frames, sample_width, raw) = {
        let mut reader = PcmReader::open(input)?;

        for finding in reader.validate().findings {
            match finding.severity {
                Severity::Warning => log::warn!("{}", finding.message),
                Severity::Note => log::info!("{}", finding.message),
                // The decoder reports these as errors.
                Severity::Error => log::debug!("{}", finding.message),
            }
        }

        let metadata = reader.metadata();
        let trailing = metadata.trailing_bytes();
        if trailing > 0 && options.trailing_bytes() == TrailingBytes::Reject {
            return Err(WavHexError::Framing {
                trailing,
                frame_size: metadata.frame_size(),
            });
        }

        let frames = reader.frame_count();
        let sample_width = reader.sample_width();
        let raw = reader.read_frames(frames)?;
        (frames, sample_width, raw)
    };

    let samples = decode_with(&raw, sample_width, options.trailing_bytes())?;
    let lines = to_hex(&samples);
    let lines_written = write_lines(&lines, output)?;

    log::info!(
        "Converted {} frames ({} samples) to {}",
        frames,
        samples.len(),
        output.display()
    );

    Ok(ConversionSummary {
        frames,
        samples: samples.len(),
        sample_width,
        lines_written,
        output: output.to_path_buf(),
    })
}
