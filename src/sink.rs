//! Line-per-sample text output.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::WavHexError;

/// Write each line followed by `\n` to `path`, truncating any existing file.
///
/// Returns the number of lines written. The file handle is released on every
/// path out of this function; a failure part-way leaves a truncated file.
///
/// # Errors
///
/// Returns [`WavHexError::IoError`] if the file cannot be created or
/// written.
pub fn write_lines<S, P>(lines: &[S], path: P) -> Result<usize, WavHexError>
where
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    log::debug!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(lines.len())
}
