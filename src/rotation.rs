//! Size-based log file rotation.
//!
//! Rotation is lazy and stateless: no index is cached between calls. The
//! target file is re-derived by probing the directory on every write, so
//! files added or removed by other processes are picked up naturally.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Probing past this index means the size limit is absurdly small.
pub const MAX_FILE_INDEX: u32 = 99_999;

/// File name for a date base at a rotation index; index 1 carries no suffix.
fn indexed_file_name(base: &str, index: u32) -> String {
    if index == 1 {
        format!("{base}.log")
    } else {
        format!("{base}_{index}.log")
    }
}

/// Pick the file the next record should be appended to.
///
/// Creates `dir` (and parents) if missing, then probes increasing indices
/// until a name either does not exist yet or names a file still under
/// `size_limit_bytes`. Probing never creates or touches the chosen file, so
/// repeated calls without intervening writes return the same path.
pub fn resolve_target_file(dir: &Path, base: &str, size_limit_bytes: u64) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    for index in 1..=MAX_FILE_INDEX {
        let candidate = dir.join(indexed_file_name(base, index));
        match fs::metadata(&candidate) {
            Ok(meta) => {
                if meta.len() < size_limit_bytes {
                    return Ok(candidate);
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(candidate),
            Err(err) => return Err(Error::Storage(err)),
        }
    }

    Err(Error::RotationLimitExceeded)
}

/// Append one record plus a newline; the file is never truncated or rewritten.
pub fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")?;
    Ok(())
}
