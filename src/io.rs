//! File collaborator: whole-file line reads and line writes.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, WorkspaceError};

/// Read a workspace file as an ordered sequence of lines, terminators stripped.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than rejected.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| WorkspaceError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "read workspace file");
    Ok(lines)
}

/// Write `lines` to `path`, each followed by `\n`. Returns `false` if the file could not
/// be written.
pub fn write_lines(path: impl AsRef<Path>, lines: &[String]) -> bool {
    let path = path.as_ref();
    match try_write_lines(path, lines) {
        Ok(()) => {
            debug!(path = %path.display(), lines = lines.len(), "wrote workspace file");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to write workspace file");
            false
        }
    }
}

fn try_write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
