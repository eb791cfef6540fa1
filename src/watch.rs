use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use notify::{EventKind, RecursiveMode, Watcher};

use crate::error::AppError;

/// Quiet period after a change before rebuilding; editors often write twice.
const SETTLE: Duration = Duration::from_millis(150);

/// Calls `on_change` after every write, replace or removal of the file at `path`, until
/// the watcher shuts down. Rebuild failures are logged and watching goes on.
pub fn watch_config<F>(path: &Path, mut on_change: F) -> Result<(), AppError>
where
    F: FnMut() -> Result<(), AppError>,
{
    let (tx, rx) = mpsc::channel::<()>();
    let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        if let Ok(event) = res {
            if is_content_change(&event.kind) {
                let _ = tx.send(());
            }
        }
    })?;
    watcher.watch(path, RecursiveMode::NonRecursive)?;
    log::info!("watching {} for changes", path.display());

    while rx.recv().is_ok() {
        while rx.recv_timeout(SETTLE).is_ok() {}
        log::info!("{} changed, rebuilding", path.display());
        if let Err(e) = on_change() {
            log::warn!("rebuild failed: {e}");
        }
    }
    Ok(())
}

fn is_content_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) | EventKind::Any
    )
}
