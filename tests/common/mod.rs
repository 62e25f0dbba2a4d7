//! Shared helpers for building WAVE fixtures in memory.

#![allow(dead_code)]

use std::{fs, path::Path};

/// Build a PCM WAVE file around an arbitrary raw payload.
pub fn wav_bytes(channels: u16, bits_per_sample: u16, payload: &[u8]) -> Vec<u8> {
    let sample_width = bits_per_sample.div_ceil(8);
    let block_align = channels * sample_width;
    let sample_rate = 8000u32;

    let mut fmt = Vec::with_capacity(16);
    fmt.extend_from_slice(&1u16.to_le_bytes());
    fmt.extend_from_slice(&channels.to_le_bytes());
    fmt.extend_from_slice(&sample_rate.to_le_bytes());
    fmt.extend_from_slice(&(sample_rate * u32::from(block_align)).to_le_bytes());
    fmt.extend_from_slice(&block_align.to_le_bytes());
    fmt.extend_from_slice(&bits_per_sample.to_le_bytes());

    let mut body = b"WAVE".to_vec();
    push_chunk(&mut body, b"fmt ", &fmt);
    push_chunk(&mut body, b"data", payload);

    let mut file = b"RIFF".to_vec();
    file.extend_from_slice(&(body.len() as u32).to_le_bytes());
    file.extend_from_slice(&body);
    file
}

fn push_chunk(body: &mut Vec<u8>, id: &[u8; 4], data: &[u8]) {
    body.extend_from_slice(id);
    body.extend_from_slice(&(data.len() as u32).to_le_bytes());
    body.extend_from_slice(data);
    if data.len() % 2 == 1 {
        body.push(0);
    }
}

/// Write a mono WAVE fixture to `path`.
pub fn write_wav(path: &Path, bits_per_sample: u16, payload: &[u8]) {
    fs::write(path, wav_bytes(1, bits_per_sample, payload)).expect("Failed to write fixture");
}

/// Read an output file back as lines.
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read output")
        .lines()
        .map(str::to_string)
        .collect()
}
