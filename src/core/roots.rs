//! Host root enumeration.
//!
//! On drive-letter systems every existing drive becomes a tree root. Everywhere else the
//! host reports no drives and the tree falls back to the working directory.

use std::path::PathBuf;

/// Source of top-level tree roots.
pub trait RootSource {
    /// Drive roots in display order, or an empty list on non-drive systems.
    fn list_roots(&self) -> Vec<PathBuf>;
}

/// Asks the running OS for its drives.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostRoots;

impl RootSource for HostRoots {
    #[cfg(windows)]
    fn list_roots(&self) -> Vec<PathBuf> {
        (b'A'..=b'Z')
            .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
            .filter(|drive| drive.exists())
            .collect()
    }

    #[cfg(not(windows))]
    fn list_roots(&self) -> Vec<PathBuf> {
        Vec::new()
    }
}
