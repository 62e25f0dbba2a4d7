//! RIFF/WAVE container reading.
//!
//! [`PcmReader`] parses the container header once, caches it as
//! [`WavMetadata`], and then hands out raw frames from the `data` chunk.
//! Only uncompressed PCM is accepted; chunks other than `fmt ` and `data`
//! are skipped.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    fs::File,
    io::{self, BufReader, ErrorKind, Read},
    path::Path,
};

use crate::{
    error::WavHexError,
    metadata::WavMetadata,
    validation::{ValidationReport, validate_metadata},
};

/// `WAVE_FORMAT_PCM`.
pub const FORMAT_PCM: u16 = 0x0001;
/// `WAVE_FORMAT_EXTENSIBLE`; the real encoding lives in a sub-format GUID.
pub const FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// Bytes 2..16 shared by every `KSDATAFORMAT_SUBTYPE_*` GUID.
const SUBFORMAT_GUID_TAIL: [u8; 14] = [
    0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xAA, 0x00, 0x38, 0x9B, 0x71,
];

/// Smallest `fmt ` body that carries the fields we read.
const FMT_MIN_LEN: u32 = 16;
/// Smallest extensible `fmt ` body, up to the end of the sub-format GUID.
const FMT_EXTENSIBLE_MIN_LEN: u32 = 40;

/// Reader over the PCM payload of a WAVE container.
///
/// Created via [`PcmReader::open`] for files or [`PcmReader::new`] for any
/// [`Read`] source. Dropping the reader closes the underlying handle.
///
/// # Example
///
/// ```no_run
/// use wavhex::PcmReader;
///
/// let mut reader = PcmReader::open("input.wav")?;
/// let frames = reader.frame_count();
/// let raw = reader.read_frames(frames)?;
/// let samples = wavhex::decode(&raw, reader.sample_width())?;
/// # Ok::<(), wavhex::WavHexError>(())
/// ```
pub struct PcmReader<R> {
    reader: R,
    metadata: WavMetadata,
    /// Bytes of the `data` chunk not yet handed out.
    remaining: u64,
}

impl<R> Debug for PcmReader<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PcmReader")
            .field("metadata", &self.metadata)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl PcmReader<BufReader<File>> {
    /// Open a WAVE file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`WavHexError::FileOpen`] if the file cannot be opened, and
    /// the errors of [`PcmReader::new`] if it is not a PCM WAVE container.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, WavHexError> {
        let path = path.as_ref();

        log::debug!("Opening WAVE file: {}", path.display());

        let file = File::open(path).map_err(|error| WavHexError::FileOpen {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;

        Self::new(BufReader::new(file))
    }
}

impl<R: Read> PcmReader<R> {
    /// Parse the container header from `reader`, leaving it positioned at
    /// the start of the `data` payload.
    ///
    /// # Errors
    ///
    /// - [`WavHexError::InvalidContainer`] if the RIFF/WAVE structure is
    ///   missing or truncated, or declares zero channels or zero bits.
    /// - [`WavHexError::UnsupportedEncoding`] for non-PCM data.
    /// - [`WavHexError::IoError`] for other read failures.
    pub fn new(mut reader: R) -> Result<Self, WavHexError> {
        let metadata = parse_header(&mut reader)?;

        log::debug!("Parsed WAVE header: {}", metadata);

        Ok(Self {
            reader,
            remaining: metadata.data_len,
            metadata,
        })
    }

    /// Total number of whole frames in the `data` chunk.
    pub fn frame_count(&self) -> u64 {
        self.metadata.frame_count
    }

    /// Bytes per sample, from the header.
    pub fn sample_width(&self) -> u16 {
        self.metadata.sample_width
    }

    /// Header metadata cached at open time.
    pub fn metadata(&self) -> &WavMetadata {
        &self.metadata
    }

    /// Check the header for input the conversion would lose or reject.
    pub fn validate(&self) -> ValidationReport {
        validate_metadata(&self.metadata)
    }

    /// Read up to `frames` frames of raw payload.
    ///
    /// Returns fewer bytes only when the `data` chunk (or the file) ends
    /// first, and an empty vector once everything has been read.
    ///
    /// # Errors
    ///
    /// Returns [`WavHexError::IoError`] if the underlying read fails.
    pub fn read_frames(&mut self, frames: u64) -> Result<Vec<u8>, WavHexError> {
        let wanted = frames
            .saturating_mul(self.metadata.frame_size() as u64)
            .min(self.remaining);

        let mut buffer = Vec::new();
        (&mut self.reader).take(wanted).read_to_end(&mut buffer)?;
        self.remaining -= buffer.len() as u64;

        if (buffer.len() as u64) < wanted {
            log::debug!(
                "Payload ended early: wanted {} bytes, got {}",
                wanted,
                buffer.len()
            );
        }

        Ok(buffer)
    }
}

/// Fields of the `fmt ` chunk we care about.
struct FormatChunk {
    format_tag: u16,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

fn parse_header<R: Read>(reader: &mut R) -> Result<WavMetadata, WavHexError> {
    let mut riff = [0u8; 12];
    read_header_bytes(reader, &mut riff, "RIFF header")?;

    if &riff[0..4] != b"RIFF" {
        return Err(WavHexError::InvalidContainer(
            "file does not start with RIFF id".to_string(),
        ));
    }
    if &riff[8..12] != b"WAVE" {
        return Err(WavHexError::InvalidContainer("not a WAVE file".to_string()));
    }

    let mut format = None;

    loop {
        let mut chunk_header = [0u8; 8];
        if !read_chunk_header(reader, &mut chunk_header)? {
            return Err(WavHexError::InvalidContainer(
                "fmt chunk and/or data chunk missing".to_string(),
            ));
        }

        let chunk_id = [
            chunk_header[0],
            chunk_header[1],
            chunk_header[2],
            chunk_header[3],
        ];
        let chunk_len = u32::from_le_bytes([
            chunk_header[4],
            chunk_header[5],
            chunk_header[6],
            chunk_header[7],
        ]);

        match &chunk_id {
            b"fmt " => {
                format = Some(parse_format_chunk(reader, chunk_len)?);
            }
            b"data" => {
                let format = format.ok_or_else(|| {
                    WavHexError::InvalidContainer("data chunk before fmt chunk".to_string())
                })?;
                return Ok(build_metadata(format, u64::from(chunk_len)));
            }
            other => {
                log::debug!(
                    "Skipping {} chunk ({} bytes)",
                    String::from_utf8_lossy(other),
                    chunk_len
                );
                skip_bytes(reader, padded(chunk_len))?;
            }
        }
    }
}

fn parse_format_chunk<R: Read>(reader: &mut R, chunk_len: u32) -> Result<FormatChunk, WavHexError> {
    if chunk_len < FMT_MIN_LEN {
        return Err(WavHexError::InvalidContainer(format!(
            "fmt chunk too short ({chunk_len} bytes)"
        )));
    }

    // Only the leading fields are read; the rest of the chunk is skipped
    // so a bogus length never sizes an allocation.
    let mut body = [0u8; FMT_EXTENSIBLE_MIN_LEN as usize];
    let wanted = chunk_len.min(FMT_EXTENSIBLE_MIN_LEN);
    read_header_bytes(reader, &mut body[..wanted as usize], "fmt chunk")?;
    skip_bytes(reader, padded(chunk_len) - u64::from(wanted))?;

    let le_u16 = |offset: usize| u16::from_le_bytes([body[offset], body[offset + 1]]);
    let format_tag = le_u16(0);
    let channels = le_u16(2);
    let sample_rate = u32::from_le_bytes([body[4], body[5], body[6], body[7]]);
    let bits_per_sample = le_u16(14);

    match format_tag {
        FORMAT_PCM => {}
        FORMAT_EXTENSIBLE => {
            if chunk_len < FMT_EXTENSIBLE_MIN_LEN {
                return Err(WavHexError::InvalidContainer(format!(
                    "extensible fmt chunk too short ({chunk_len} bytes)"
                )));
            }
            let sub_format = le_u16(24);
            if sub_format != FORMAT_PCM || body[26..40] != SUBFORMAT_GUID_TAIL {
                return Err(WavHexError::UnsupportedEncoding(sub_format));
            }
        }
        other => return Err(WavHexError::UnsupportedEncoding(other)),
    }

    if channels == 0 {
        return Err(WavHexError::InvalidContainer(
            "bad number of channels (0)".to_string(),
        ));
    }
    if bits_per_sample == 0 {
        return Err(WavHexError::InvalidContainer(
            "bad sample width (0 bits)".to_string(),
        ));
    }

    Ok(FormatChunk {
        format_tag,
        channels,
        sample_rate,
        bits_per_sample,
    })
}

fn build_metadata(format: FormatChunk, data_len: u64) -> WavMetadata {
    let sample_width = format.bits_per_sample.div_ceil(8);
    let frame_size = u64::from(format.channels) * u64::from(sample_width);

    WavMetadata {
        format_tag: format.format_tag,
        channels: format.channels,
        sample_rate: format.sample_rate,
        bits_per_sample: format.bits_per_sample,
        sample_width,
        frame_count: data_len / frame_size,
        data_len,
    }
}

/// Chunk bodies are word-aligned.
fn padded(chunk_len: u32) -> u64 {
    u64::from(chunk_len) + u64::from(chunk_len % 2)
}

/// Read the next chunk header, returning `false` on a clean end of file.
fn read_chunk_header<R: Read>(reader: &mut R, buffer: &mut [u8; 8]) -> Result<bool, WavHexError> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) if filled == 0 => return Ok(false),
            Ok(0) => {
                return Err(WavHexError::InvalidContainer(
                    "truncated chunk header".to_string(),
                ));
            }
            Ok(read) => filled += read,
            Err(error) if error.kind() == ErrorKind::Interrupted => {}
            Err(error) => return Err(error.into()),
        }
    }
    Ok(true)
}

fn read_header_bytes<R: Read>(
    reader: &mut R,
    buffer: &mut [u8],
    what: &str,
) -> Result<(), WavHexError> {
    reader.read_exact(buffer).map_err(|error| match error.kind() {
        ErrorKind::UnexpectedEof => WavHexError::InvalidContainer(format!("truncated {what}")),
        _ => WavHexError::IoError(error),
    })
}

fn skip_bytes<R: Read>(reader: &mut R, count: u64) -> Result<(), WavHexError> {
    let skipped = io::copy(&mut (&mut *reader).take(count), &mut io::sink())?;
    if skipped < count {
        // A short final pad byte is tolerated, a short chunk body is not.
        if count - skipped > 1 {
            return Err(WavHexError::InvalidContainer("truncated chunk".to_string()));
        }
    }
    Ok(())
}
