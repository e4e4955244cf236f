//! Single-file copy into the flat destination

use super::naming::resolve_destination_name;
use crate::config::Config;
use crate::source::SourceFs;
use crate::types::{CandidateFile, CollectError, CopyOutcome};
use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

const COPY_BUFFER_SIZE: usize = 128 * 1024;

/// Copy one matched file into `destination_root` under a free name.
///
/// Never fails: problems are reported as [`CopyOutcome::Failure`] with a
/// message naming the file and the underlying reason.
pub fn copy_one<F: SourceFs + ?Sized>(
    src_fs: &F,
    candidate: &CandidateFile,
    destination_root: &Path,
    config: &Config,
) -> CopyOutcome {
    let source_path = candidate.absolute_path.clone();

    let result =
        resolve_destination_name(candidate.file_name(), destination_root).and_then(|name| {
            let dest = destination_root.join(name);
            copy_contents(src_fs, &source_path, &dest)?;
            Ok(dest)
        });

    match result {
        Ok(destination_path) => {
            if config.preserve_metadata {
                preserve_metadata(src_fs, &source_path, &destination_path);
            }
            log::debug!(
                "Copied {} to {}",
                source_path.display(),
                destination_path.display()
            );
            CopyOutcome::Success {
                source_path,
                destination_path,
            }
        }
        Err(source) => {
            let err = CollectError::Copy {
                file: candidate.display_name(),
                source,
            };
            log::warn!("{}", err);
            CopyOutcome::Failure {
                source_path,
                reason: err.to_string(),
            }
        }
    }
}

/// Stream `src` into a newly created `dest`.
///
/// `dest` must not exist yet; an existing file is never overwritten. If the
/// copy fails after `dest` was created, the partial file is removed.
pub fn copy_contents<F: SourceFs + ?Sized>(
    src_fs: &F,
    src: &Path,
    dest: &Path,
) -> io::Result<u64> {
    let mut reader = src_fs.open(src)?;
    let mut dest_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)?;

    match stream(&mut reader, &mut dest_file) {
        Ok(total_bytes) => Ok(total_bytes),
        Err(e) => {
            drop(dest_file);
            if let Err(cleanup) = fs::remove_file(dest) {
                log::warn!(
                    "Failed to remove partial copy {}: {}",
                    dest.display(),
                    cleanup
                );
            }
            Err(e)
        }
    }
}

fn stream(reader: &mut dyn Read, dest_file: &mut fs::File) -> io::Result<u64> {
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        dest_file.write_all(&buffer[..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    dest_file.sync_all()?;
    Ok(total_bytes)
}

/// Carry permissions and mtime over; failures are only logged
fn preserve_metadata<F: SourceFs + ?Sized>(src_fs: &F, src: &Path, dest: &Path) {
    let metadata = match src_fs.metadata(src) {
        Ok(m) => m,
        Err(e) => {
            log::warn!("Could not read metadata of {}: {}", src.display(), e);
            return;
        }
    };

    if let Some(permissions) = metadata.permissions {
        if let Err(e) = fs::set_permissions(dest, permissions) {
            log::warn!("Could not preserve permissions on {}: {}", dest.display(), e);
        }
    }

    if let Some(mtime) = metadata.modified {
        let mtime = filetime::FileTime::from_system_time(mtime);
        if let Err(e) = filetime::set_file_mtime(dest, mtime) {
            log::warn!("Could not preserve mtime on {}: {}", dest.display(), e);
        }
    }
}
