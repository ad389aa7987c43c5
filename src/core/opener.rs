//! Hand-off of files to the host's default viewer.
//!
//! [SystemOpener] goes through the `open` crate: `ShellExecuteW`/`start` on Windows,
//! `open` on macOS, and the first of the freedesktop launchers found elsewhere. The
//! launcher is spawned detached and never waited on. Launch failures are logged as
//! [SpawnError] and never reach the caller.

use crate::core::error::SpawnError;

use std::path::Path;

/// Anything that can hand a path to an external viewer.
///
/// Implementations must not block and must not fail visibly.
pub trait Opener {
    fn open(&self, path: &Path);
}

/// Opens files with the OS default application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, path: &Path) {
        match launch(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "external viewer launched"),
            Err(e) => tracing::warn!(error = %e, "failed to open file externally"),
        }
    }
}

/// Spawns one detached viewer process for `path`.
pub fn launch(path: &Path) -> Result<(), SpawnError> {
    open::that_detached(path).map_err(|source| SpawnError::Launch {
        path: path.to_path_buf(),
        source,
    })
}
