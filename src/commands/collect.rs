//! Main collect command

use crate::config::Config;
use crate::executor::{copy_one, ensure_destination};
use crate::scanner::{traverse, ExtensionFilter};
use crate::source::{LocalFs, SourceFs};
use crate::types::{CollectError, CopyOutcome, RunResult, TraversalRequest};
use crate::ui::{CollectCallback, CollectEvent, ConsoleReporter};
use std::path::{Path, PathBuf};

/// Collect matching files from the local `source_root` into `destination_root`,
/// printing progress and a summary to the console.
pub fn collect(
    source_root: impl AsRef<Path>,
    destination_root: impl AsRef<Path>,
) -> Result<RunResult, CollectError> {
    let request = TraversalRequest::new(source_root.as_ref(), destination_root.as_ref());
    let reporter = ConsoleReporter::new();
    let on_event = |event: &CollectEvent<'_>| reporter.handle(event);

    run(&LocalFs, &request, &Config::default(), Some(&on_event))
}

/// Run a collection pass.
///
/// Creates the destination, walks the source tree, and copies every file
/// whose name ends with the configured extension into the destination
/// under a collision-free name.
///
/// Only a bad configuration or an uncreatable destination return `Err`.
/// Unreadable directories (the source root included) and failed copies are
/// recorded in [`RunResult::errors`] and the run continues.
pub fn run<F: SourceFs + ?Sized>(
    fs: &F,
    request: &TraversalRequest,
    config: &Config,
    on_event: Option<&CollectCallback<'_>>,
) -> Result<RunResult, CollectError> {
    let config = config.validate()?;
    let filter = ExtensionFilter::new(&config.extension)?;

    ensure_destination(&request.destination_root)?;
    let mut walker = traverse(fs, &request.source_root);
    if let Some(dir) = nested_destination(request) {
        walker = walker.prune(dir);
    }

    let mut result = RunResult::new();
    for item in walker {
        let candidate = match item {
            Ok(candidate) => candidate,
            Err(err) => {
                let message = err.to_string();
                log::warn!("{}", message);
                emit_event(on_event, CollectEvent::Error { message: &message });
                result.push_error(message);
                continue;
            }
        };

        if !filter.matches(&candidate) {
            continue;
        }

        let outcome = copy_one(fs, &candidate, &request.destination_root, &config);
        result.record(&outcome);

        match &outcome {
            CopyOutcome::Success {
                destination_path, ..
            } => {
                let destination_name = destination_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                emit_event(
                    on_event,
                    CollectEvent::Copied {
                        relative_path: &candidate.relative_path,
                        destination_name: &destination_name,
                    },
                );
            }
            CopyOutcome::Failure { reason, .. } => {
                emit_event(on_event, CollectEvent::Error { message: reason });
            }
        }
    }

    emit_event(on_event, CollectEvent::Complete { result: &result });
    Ok(result)
}

fn emit_event(on_event: Option<&CollectCallback<'_>>, event: CollectEvent<'_>) {
    if let Some(callback) = on_event {
        callback(&event);
    }
}

/// If the destination lives strictly inside the source tree, return its path
/// in the form the walker will see it, so it can be skipped.
///
/// A destination equal to the source is not pruned; the root listing is taken
/// before any copy lands in it, so copies are not collected again.
fn nested_destination(request: &TraversalRequest) -> Option<PathBuf> {
    // An unreachable source is reported by the walk itself
    let source = request.source_root.canonicalize().ok()?;
    let destination = request.destination_root.canonicalize().ok()?;

    if source == destination {
        return None;
    }

    destination
        .strip_prefix(&source)
        .ok()
        .map(|inner| request.source_root.join(inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{EventLog, RecordedEvent};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_nested_destination_outside_source() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");

        let request = TraversalRequest::new(src.path(), dst.path());
        assert_eq!(nested_destination(&request), None);
    }

    #[test]
    fn test_nested_destination_inside_source() {
        let src = TempDir::new().expect("create src tempdir");
        let inner = src.path().join("out");
        fs::create_dir(&inner).expect("create inner dir");

        let request = TraversalRequest::new(src.path(), &inner);
        assert_eq!(nested_destination(&request), Some(inner));
    }

    #[test]
    fn test_same_source_and_destination_copies_alongside() {
        let src = TempDir::new().expect("create src tempdir");
        fs::write(src.path().join("song.mp3"), b"s").expect("write source file");
        let request = TraversalRequest::new(src.path(), src.path());

        assert_eq!(nested_destination(&request), None);
        let result = run(&LocalFs, &request, &Config::default(), None).expect("run succeeds");

        assert_eq!(result.copied_count, 1);
        assert!(!result.has_errors());
        assert_eq!(fs::read(src.path().join("song_1.mp3")).expect("read copy"), b"s");
        assert!(!src.path().join("song_2.mp3").exists());
    }

    #[test]
    fn test_destination_inside_source_is_not_recollected() {
        let src = TempDir::new().expect("create src tempdir");
        fs::write(src.path().join("a.mp3"), b"a").expect("write source file");
        let out = src.path().join("collected");
        let request = TraversalRequest::new(src.path(), &out);

        let first = run(&LocalFs, &request, &Config::default(), None).expect("first run");
        let second = run(&LocalFs, &request, &Config::default(), None).expect("second run");

        assert_eq!(first.copied_count, 1);
        assert_eq!(second.copied_count, 1);
        assert!(out.join("a.mp3").exists());
        assert!(out.join("a_1.mp3").exists());
        assert!(!out.join("a_2.mp3").exists());
    }

    #[test]
    fn test_events_follow_the_run() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");
        fs::create_dir(src.path().join("disc1")).expect("create dir");
        fs::write(src.path().join("disc1/intro.mp3"), b"i").expect("write file");
        fs::write(src.path().join("notes.txt"), b"n").expect("write file");

        let log = EventLog::new();
        let on_event = |event: &CollectEvent<'_>| log.handle(event);
        let request = TraversalRequest::new(src.path(), dst.path());

        let result =
            run(&LocalFs, &request, &Config::default(), Some(&on_event)).expect("run succeeds");

        let expected = format!(
            "Copied: {} -> intro.mp3",
            PathBuf::from("disc1").join("intro.mp3").display()
        );
        assert_eq!(log.copied_lines(), vec![expected]);
        assert_eq!(
            log.events().last(),
            Some(&RecordedEvent::Complete(result.clone()))
        );
        assert_eq!(result.copied_count, 1);
    }

    #[test]
    fn test_custom_extension() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");
        fs::write(src.path().join("a.flac"), b"f").expect("write file");
        fs::write(src.path().join("b.mp3"), b"m").expect("write file");

        let request = TraversalRequest::new(src.path(), dst.path());
        let result =
            run(&LocalFs, &request, &Config::with_extension("flac"), None).expect("run succeeds");

        assert_eq!(result.copied_count, 1);
        assert!(dst.path().join("a.flac").exists());
        assert!(!dst.path().join("b.mp3").exists());
    }
}
