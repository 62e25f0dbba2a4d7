//! Hexadecimal formatting of samples.
//!
//! Every sample is masked to its low 16 bits before formatting, whatever
//! the source width. Negative samples are masked on their two's-complement
//! pattern, so the text is always in `0x0..=0xffff`.

/// Mask applied to every sample before formatting.
pub const SAMPLE_MASK: i32 = 0xFFFF;

/// Format one sample as lowercase `0x`-prefixed hex without zero padding.
///
/// ```
/// assert_eq!(wavhex::sample_to_hex(5), "0x5");
/// assert_eq!(wavhex::sample_to_hex(-1), "0xffff");
/// assert_eq!(wavhex::sample_to_hex(0x1234_5678), "0x5678");
/// ```
pub fn sample_to_hex(sample: i32) -> String {
    format!("{:#x}", sample & SAMPLE_MASK)
}

/// Format a sample sequence, one string per sample, in order.
pub fn to_hex(samples: &[i32]) -> Vec<String> {
    samples.iter().map(|&sample| sample_to_hex(sample)).collect()
}
