//! File accessibility probes

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use log::debug;

/// Access a probe checks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    Read,
    Write,
}

/// Probe whether `path` can be read or written
///
/// A read probe needs an existing file that opens for reading. A write probe
/// on an existing file opens it for append, leaving its contents intact; for
/// a new file the parent directory must exist and carry at least one write
/// permission bit.
pub fn check_file(path: &str, mode: FileMode) -> bool {
    let target = Path::new(path);

    let accessible = match mode {
        FileMode::Read => target.is_file() && File::open(target).is_ok(),
        FileMode::Write if target.exists() => {
            OpenOptions::new().append(true).open(target).is_ok()
        },
        FileMode::Write => parent_is_writable(target),
    };

    debug!("check_file({}, {:?}) = {}", path, mode, accessible);
    accessible
}

/// Whether new files can be created next to `target`
fn parent_is_writable(target: &Path) -> bool {
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    match fs::metadata(parent) {
        Ok(metadata) if metadata.is_dir() => has_write_bit(&metadata),
        _ => false,
    }
}

#[cfg(unix)]
fn has_write_bit(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    // owner, group or other write
    metadata.permissions().mode() & 0o222 != 0
}

#[cfg(not(unix))]
fn has_write_bit(metadata: &fs::Metadata) -> bool {
    !metadata.permissions().readonly()
}
