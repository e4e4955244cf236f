//! Collision-free destination names

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Pick a name for `file_name` that is unused inside `destination_root`.
///
/// Returns `file_name` itself when free, otherwise the first free
/// `stem_N.ext` for N = 1, 2, ... The name is handled as raw OS bytes, so
/// names that are not valid UTF-8 survive unchanged. Dangling symlinks
/// count as occupied.
///
/// # Errors
/// Fails if probing the destination fails for any reason other than
/// the name being absent.
pub fn resolve_destination_name(
    file_name: impl AsRef<OsStr>,
    destination_root: &Path,
) -> io::Result<OsString> {
    let file_name = file_name.as_ref();
    if !is_occupied(&destination_root.join(file_name))? {
        return Ok(file_name.to_os_string());
    }

    let name = Path::new(file_name);
    let stem = name.file_stem().unwrap_or(file_name);
    let extension = name.extension();
    let mut counter: u64 = 1;
    loop {
        let proposed = suffixed_name(stem, counter, extension);
        if !is_occupied(&destination_root.join(&proposed))? {
            return Ok(proposed);
        }
        counter += 1;
    }
}

fn suffixed_name(stem: &OsStr, counter: u64, extension: Option<&OsStr>) -> OsString {
    let mut name = stem.to_os_string();
    name.push(format!("_{}", counter));
    if let Some(extension) = extension {
        name.push(".");
        name.push(extension);
    }
    name
}

fn is_occupied(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
