//! Pre-conversion validation.
//!
//! Provides [`PcmReader::validate`](crate::PcmReader::validate), which looks
//! at the cached header and returns a [`ValidationReport`]: one [`Finding`]
//! per condition the conversion will reject, drop data for, or render in a
//! way worth knowing about.
//!
//! # Example
//!
//! ```no_run
//! use wavhex::PcmReader;
//!
//! let reader = PcmReader::open("input.wav")?;
//! let report = reader.validate();
//! if !report.is_valid() {
//!     eprint!("{report}");
//! }
//! # Ok::<(), wavhex::WavHexError>(())
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{metadata::WavMetadata, sample::SampleWidth};

/// How much a finding matters to the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Expected behaviour that may surprise a reader of the output.
    Note,
    /// Part of the payload will not appear in the output.
    Warning,
    /// The conversion will fail.
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One observation about a WAVE header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

/// Result of checking a header before conversion.
///
/// Renders as the header summary followed by one `severity: message` line
/// per finding, most severe first.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// One-line header summary, see [`WavMetadata`]'s `Display`.
    pub summary: String,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    fn new(metadata: &WavMetadata) -> Self {
        Self {
            summary: metadata.to_string(),
            findings: Vec::new(),
        }
    }

    fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.findings.push(Finding {
            severity,
            message: message.into(),
        });
    }

    /// `true` unless the conversion is known to fail.
    pub fn is_valid(&self) -> bool {
        self.worst() < Some(Severity::Error)
    }

    /// `true` when every payload byte will reach the output.
    pub fn is_lossless(&self) -> bool {
        self.worst() < Some(Severity::Warning)
    }

    /// The most severe finding, if any.
    pub fn worst(&self) -> Option<Severity> {
        self.findings.iter().map(|finding| finding.severity).max()
    }

    /// Messages of the given severity, in the order they were found.
    pub fn messages(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.findings
            .iter()
            .filter(move |finding| finding.severity == severity)
            .map(|finding| finding.message.as_str())
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "{}", self.summary)?;

        let mut findings: Vec<&Finding> = self.findings.iter().collect();
        findings.sort_by(|a, b| b.severity.cmp(&a.severity));
        for finding in findings {
            writeln!(f, "  {}: {}", finding.severity, finding.message)?;
        }
        Ok(())
    }
}

/// Run validation checks on header metadata.
pub(crate) fn validate_metadata(metadata: &WavMetadata) -> ValidationReport {
    let mut report = ValidationReport::new(metadata);

    match SampleWidth::from_bytes(metadata.sample_width) {
        Err(error) => report.push(Severity::Error, error.to_string()),
        Ok(SampleWidth::Bits8) => report.push(
            Severity::Note,
            "8-bit WAVE data is stored unsigned but is decoded as signed",
        ),
        Ok(SampleWidth::Bits32) => report.push(
            Severity::Note,
            "32-bit samples are written as their low 16 bits",
        ),
        Ok(SampleWidth::Bits16) => {}
    }

    let trailing = metadata.trailing_bytes();
    if trailing > 0 {
        report.push(
            Severity::Warning,
            format!(
                "data chunk ends with {trailing} byte(s) that do not form a whole {}-byte frame",
                metadata.frame_size()
            ),
        );
    }

    if metadata.channels > 1 {
        report.push(
            Severity::Note,
            format!("{} channels will be written interleaved", metadata.channels),
        );
    }

    if metadata.frame_count == 0 {
        report.push(
            Severity::Note,
            "data chunk holds no frames, output will be empty",
        );
    }

    report
}
