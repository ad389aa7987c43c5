//! Directory listing for arbor.
//!
//! Provides the [ListingEntry] produced by [list_dir], the [Payload] carried by every tree
//! node, and the [DirSummary] used by the directory preview.
//!
//! Listing is always shallow: a directory's children are discovered only when that
//! directory itself is listed.

use crate::core::error::AccessDenied;

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A single child of a listed directory.
///
/// Transient: produced by [list_dir] and consumed by one tree expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

impl ListingEntry {
    pub fn new(name: impl Into<String>, path: PathBuf, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            path,
            is_dir,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn into_payload(self) -> Payload {
        if self.is_dir {
            Payload::Directory(self.path)
        } else {
            Payload::File(self.path)
        }
    }
}

/// What a tree node stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Directory(PathBuf),
    File(PathBuf),
    /// Sentinel leaf inserted when a directory could not be listed.
    Denied,
    None,
}

impl Payload {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Payload::Directory(p) | Payload::File(p) => Some(p),
            Payload::Denied | Payload::None => None,
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self, Payload::Directory(_))
    }
}

/// Counts and sorted names of a directory's immediate children, for the preview pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirSummary {
    /// Every child, including entries that are neither a directory nor a file.
    pub total: usize,
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

/// Lists the immediate children of `path`, directories first, then files, each group in
/// case-insensitive name order.
///
/// Any failure, opening the directory or reading any one entry, yields [AccessDenied];
/// whatever was read before the failure is dropped.
pub fn list_dir(path: &Path) -> Result<Vec<ListingEntry>, AccessDenied> {
    let (mut entries, _) = read_children(path).map_err(|e| AccessDenied::new(path, e))?;
    sort_entries(&mut entries);
    Ok(entries)
}

/// Reads `path` for the directory preview. Errors keep their OS message for display.
pub fn summarize_dir(path: &Path) -> io::Result<DirSummary> {
    let (mut entries, total) = read_children(path)?;
    sort_entries(&mut entries);

    let mut summary = DirSummary {
        total,
        ..DirSummary::default()
    };
    for entry in entries {
        if entry.is_dir {
            summary.dirs.push(entry.name);
        } else {
            summary.files.push(entry.name);
        }
    }
    Ok(summary)
}

/// Sorts by `(is file, lowercase name)`. Stable, so names equal after lowering keep their
/// read order.
pub fn sort_entries(entries: &mut [ListingEntry]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(a: &ListingEntry, b: &ListingEntry) -> Ordering {
    (!a.is_dir)
        .cmp(&!b.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Reads directories and regular files under `path`, following symlinks.
/// Returns them unsorted together with the count of all children seen.
fn read_children(path: &Path) -> io::Result<(Vec<ListingEntry>, usize)> {
    let mut entries = Vec::with_capacity(64);
    let mut total = 0;

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        total += 1;

        let child = entry.path();
        // Broken links and special files are counted but never listed
        let Ok(md) = fs::metadata(&child) else {
            continue;
        };
        if !md.is_dir() && !md.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push(ListingEntry::new(name, child, md.is_dir()));
    }
    Ok((entries, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn directories_first_then_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("b.txt"))?;
        File::create(tmp.path().join("A.txt"))?;
        fs::create_dir(tmp.path().join("zeta"))?;
        fs::create_dir(tmp.path().join("Alpha"))?;

        let names: Vec<_> = list_dir(tmp.path())?
            .into_iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alpha", "zeta", "A.txt", "b.txt"]);
        Ok(())
    }

    #[test]
    fn entries_carry_absolute_paths() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("sub"))?;

        let entries = list_dir(tmp.path())?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path(), tmp.path().join("sub"));
        assert!(entries[0].is_dir());
        Ok(())
    }

    #[test]
    fn listing_is_shallow() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir_all(tmp.path().join("outer/inner"))?;
        File::create(tmp.path().join("outer/inner/deep.txt"))?;

        let entries = list_dir(tmp.path())?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "outer");
        Ok(())
    }

    #[test]
    fn missing_directory_is_access_denied() {
        let err = list_dir(Path::new("/path/does/not/exist"))
            .expect_err("listing a missing directory must fail");
        assert_eq!(err.path, PathBuf::from("/path/does/not/exist"));
    }

    #[cfg(unix)]
    #[test]
    fn broken_symlinks_are_counted_but_not_listed() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("real.txt"))?;
        std::os::unix::fs::symlink(tmp.path().join("nowhere"), tmp.path().join("dangling"))?;

        assert_eq!(list_dir(tmp.path())?.len(), 1);
        let summary = summarize_dir(tmp.path())?;
        assert_eq!(summary.total, 2);
        assert_eq!(summary.files, vec!["real.txt".to_string()]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_lists_as_directory() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("target"))?;
        std::os::unix::fs::symlink(tmp.path().join("target"), tmp.path().join("link"))?;

        let entries = list_dir(tmp.path())?;
        assert!(entries.iter().all(|e| e.is_dir()));
        Ok(())
    }

    #[test]
    fn summary_partitions_names() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("docs"))?;
        File::create(tmp.path().join("Zed.md"))?;
        File::create(tmp.path().join("alpha.rs"))?;

        let summary = summarize_dir(tmp.path())?;
        assert_eq!(summary.total, 3);
        assert_eq!(summary.dirs, vec!["docs".to_string()]);
        assert_eq!(summary.files, vec!["alpha.rs".to_string(), "Zed.md".to_string()]);
        Ok(())
    }

    #[test]
    fn payload_from_entry() {
        let dir = ListingEntry::new("d", PathBuf::from("/x/d"), true).into_payload();
        let file = ListingEntry::new("f", PathBuf::from("/x/f"), false).into_payload();
        assert_eq!(dir, Payload::Directory(PathBuf::from("/x/d")));
        assert_eq!(file, Payload::File(PathBuf::from("/x/f")));
        assert!(Payload::Denied.path().is_none());
        assert!(!Payload::None.is_dir());
    }
}
