//! Command-line behaviour of the `wavhex` binary.

mod common;

use std::{fs, process::Command};

use common::write_wav;
use wavhex::SampleWidth;

fn wavhex() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wavhex"))
}

#[test]
fn converts_and_reports_success() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("input.wav");
    let output = directory.path().join("output.txt");
    write_wav(&input, 8, &[0x01, 0xff, 0x80, 0x7f]);

    let result = wavhex().arg(&input).arg(&output).output().expect("run wavhex");

    assert_eq!(result.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(
        stdout.contains("Samples successfully exported to"),
        "unexpected stdout: {stdout}"
    );
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "0x1\n0xffff\n0xff80\n0x7f\n"
    );
}

#[test]
fn one_argument_prints_usage() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("input.wav");
    write_wav(&input, 16, &[0, 1]);

    let result = wavhex().arg(&input).output().unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Usage:"));
}

#[test]
fn three_arguments_print_usage_and_write_nothing() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("input.wav");
    let output = directory.path().join("output.txt");
    write_wav(&input, 16, &[0, 1]);

    let result = wavhex()
        .arg(&input)
        .arg(&output)
        .arg("extra")
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Usage:"));
    assert!(!output.exists());
}

#[test]
fn failures_exit_non_zero_with_diagnostic() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("missing.wav");
    let output = directory.path().join("output.txt");

    let result = wavhex().arg(&input).arg(&output).output().unwrap();

    assert_ne!(result.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Failed to open WAVE file"));
    assert!(!output.exists());
}

#[test]
fn strict_flag_rejects_trailing_bytes() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("input.wav");
    let output = directory.path().join("output.txt");
    write_wav(&input, 16, &[0, 1, 0x7f]);

    let lenient = wavhex().arg(&input).arg(&output).output().unwrap();
    assert_eq!(lenient.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&output).unwrap(), "0x100\n");

    fs::remove_file(&output).unwrap();
    let strict = wavhex()
        .arg("--strict")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();
    assert_ne!(strict.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&strict.stderr).contains("trailing byte"));
    assert!(!output.exists());
}

#[test]
fn eight_and_thirty_two_bit_input_convert_quietly() {
    let directory = tempfile::tempdir().unwrap();
    let output = directory.path().join("output.txt");
    let eight = directory.path().join("eight.wav");
    let thirty_two = directory.path().join("thirty_two.wav");
    write_wav(&eight, 8, &[0x01, 0xff]);
    write_wav(&thirty_two, 32, &SampleWidth::Bits32.encode(&[0x1234_5678, -1]));

    for input in [&eight, &thirty_two] {
        let result = wavhex()
            .env_remove("RUST_LOG")
            .arg(input)
            .arg(&output)
            .output()
            .unwrap();
        assert_eq!(result.status.code(), Some(0));
        assert!(
            result.stderr.is_empty(),
            "unexpected stderr: {}",
            String::from_utf8_lossy(&result.stderr)
        );
    }
}
