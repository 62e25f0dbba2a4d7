//! Benchmarks for decoding, formatting, and full conversion.
//!
//! Run with: cargo bench

use std::{fs, hint::black_box};

use criterion::Criterion;
use wavhex::{ConvertOptions, SampleWidth, convert, decode, to_hex};

/// One second of 16-bit stereo at 48 kHz.
const SAMPLES: usize = 96_000;

fn sawtooth(width: SampleWidth) -> Vec<u8> {
    let samples: Vec<i32> = (0..SAMPLES as i32).map(|index| index * 31 - 40_000).collect();
    width.encode(&samples)
}

fn benchmark_decode(criterion: &mut Criterion) {
    for width in [SampleWidth::Bits8, SampleWidth::Bits16, SampleWidth::Bits32] {
        let raw = sawtooth(width);
        criterion.bench_function(&format!("decode {width}"), |bencher| {
            bencher.iter(|| decode(black_box(&raw), width.bytes()).unwrap());
        });
    }
}

fn benchmark_format(criterion: &mut Criterion) {
    let samples = SampleWidth::Bits16.decode(&sawtooth(SampleWidth::Bits16));

    criterion.bench_function("format 96k samples as hex", |bencher| {
        bencher.iter(|| to_hex(black_box(&samples)));
    });
}

fn benchmark_convert(criterion: &mut Criterion) {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("input.wav");
    let output = directory.path().join("output.txt");

    let payload = sawtooth(SampleWidth::Bits16);
    let mut bytes = b"RIFF".to_vec();
    bytes.extend_from_slice(&(36 + payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(b"WAVEfmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&48_000u32.to_le_bytes());
    bytes.extend_from_slice(&(48_000u32 * 4).to_le_bytes());
    bytes.extend_from_slice(&4u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&payload);
    fs::write(&input, bytes).unwrap();

    criterion.bench_function("convert 1s stereo 16-bit file", |bencher| {
        bencher.iter(|| convert(&input, &output, &ConvertOptions::new()).unwrap());
    });
}

criterion::criterion_group!(benches, benchmark_decode, benchmark_format, benchmark_convert);
criterion::criterion_main!(benches);
