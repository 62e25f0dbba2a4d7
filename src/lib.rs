//! # wavhex
//!
//! Dump the samples of a PCM WAVE file as hexadecimal text, one sample per
//! line.
//!
//! `wavhex` reads the RIFF/WAVE header to find the sample width, decodes the
//! `data` chunk as signed little-endian integers, masks each sample to its low
//! 16 bits, and writes it as lowercase `0x`-prefixed hex.
//!
//! ## Quick Start
//!
//! ### Convert a File
//!
//! ```no_run
//! use wavhex::ConvertOptions;
//!
//! wavhex::convert("input.wav", "samples.txt", &ConvertOptions::new())?;
//! # Ok::<(), wavhex::WavHexError>(())
//! ```
//!
//! ### Step by Step
//!
//! ```no_run
//! use wavhex::PcmReader;
//!
//! let mut reader = PcmReader::open("input.wav")?;
//! let raw = reader.read_frames(reader.frame_count())?;
//! let samples = wavhex::decode(&raw, reader.sample_width())?;
//! let lines = wavhex::to_hex(&samples);
//! wavhex::write_lines(&lines, "samples.txt")?;
//! # Ok::<(), wavhex::WavHexError>(())
//! ```
//!
//! ## Format Notes
//!
//! - Widths of 1, 2 and 4 bytes are supported; 8-bit data is read as signed.
//! - Channels are not separated: samples come out in file order.
//! - Every sample is masked with `0xFFFF`, so 32-bit samples keep only their
//!   low half and negative samples print as their two's-complement pattern.
//! - Bytes after the last whole frame are dropped unless
//!   [`TrailingBytes::Reject`] is configured.

pub mod configuration;
pub mod container;
pub mod convert;
pub mod error;
pub mod hex;
pub mod metadata;
pub mod sample;
pub mod sink;
pub mod validation;

pub use configuration::{ConvertOptions, TrailingBytes};
pub use container::PcmReader;
pub use convert::{ConversionSummary, convert};
pub use error::WavHexError;
pub use hex::{sample_to_hex, to_hex};
pub use metadata::WavMetadata;
pub use sample::{SampleWidth, decode, decode_with};
pub use sink::write_lines;
pub use validation::{Finding, Severity, ValidationReport};
