//! Development auto-reload.
//!
//! Polls the running executable and asks the HTTP transport to stop once the
//! file changes (typically after a rebuild). The caller then relaunches the
//! process with [`relaunch`].

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Time given to the build to finish writing the new binary.
const SETTLE_DELAY: Duration = Duration::from_millis(500);

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Watch the current executable until it changes or `shutdown` fires.
///
/// On change, sets `requested` and cancels `shutdown`.
pub async fn watch_executable(shutdown: CancellationToken, requested: Arc<AtomicBool>) {
    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            warn!("Auto-reload disabled, cannot locate executable: {}", e);
            return;
        }
    };

    let initial = modified(&exe);
    info!("Auto-reload enabled, watching {}", exe.display());

    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => return,
            _ = ticker.tick() => {}
        }

        let current = modified(&exe);
        if current.is_some() && current != initial {
            info!("Executable changed, reloading");
            tokio::time::sleep(SETTLE_DELAY).await;
            requested.store(true, Ordering::SeqCst);
            shutdown.cancel();
            return;
        }
    }
}

/// Replace the current process with a fresh copy of the executable.
///
/// Only returns on failure.
#[cfg(unix)]
pub fn relaunch() -> std::io::Error {
    use std::os::unix::process::CommandExt;

    match std::env::current_exe() {
        Ok(exe) => std::process::Command::new(exe)
            .args(std::env::args_os().skip(1))
            .exec(),
        Err(e) => e,
    }
}

/// Start a fresh copy of the executable and wait for it to exit.
#[cfg(not(unix))]
pub fn relaunch() -> std::io::Error {
    let status = std::env::current_exe().and_then(|exe| {
        std::process::Command::new(exe)
            .args(std::env::args_os().skip(1))
            .status()
    });

    match status {
        Ok(status) => std::process::exit(status.code().unwrap_or(0)),
        Err(e) => e,
    }
}
