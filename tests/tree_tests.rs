//! Tree model and listing tests for arbor
//!
//! These tests build real directory trees in temporary directories and drive the lazy
//! tree model and directory lister over them.

use arbor::app::tree::{ACCESS_DENIED_LABEL, ExpandOutcome, Expansion, TreeModel};
use arbor::core::error::AccessDenied;
use arbor::core::listing::{ListingEntry, Payload, list_dir};
use arbor::core::roots::RootSource;
use arbor::ui::icons::GlyphStyle;

use rand::Rng;
use rand::distr::Alphanumeric;
use std::collections::HashSet;
use std::error;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

struct FixedRoots(Vec<PathBuf>);

impl RootSource for FixedRoots {
    fn list_roots(&self) -> Vec<PathBuf> {
        self.0.clone()
    }
}

fn random_name(rng: &mut impl Rng) -> String {
    let len = rng.random_range(1..12);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[test]
fn test_listing_order_holds_for_random_names() -> Result<(), Box<dyn error::Error>> {
    let mut rng = rand::rng();

    for _ in 0..5 {
        let dir = tempdir()?;
        let mut seen = HashSet::new();

        for _ in 0..40 {
            let name = random_name(&mut rng);
            // Case-insensitive filesystems would merge these
            if !seen.insert(name.to_lowercase()) {
                continue;
            }
            if rng.random_bool(0.5) {
                fs::create_dir(dir.path().join(&name))?;
            } else {
                File::create(dir.path().join(&name))?;
            }
        }

        let entries = list_dir(dir.path())?;
        assert_eq!(entries.len(), seen.len());

        let first_file = entries.iter().position(|e| !e.is_dir()).unwrap_or(entries.len());
        assert!(entries[first_file..].iter().all(|e| !e.is_dir()));

        for group in [&entries[..first_file], &entries[first_file..]] {
            for pair in group.windows(2) {
                assert!(
                    pair[0].name().to_lowercase() <= pair[1].name().to_lowercase(),
                    "{} sorted after {}",
                    pair[0].name(),
                    pair[1].name()
                );
            }
        }
    }
    Ok(())
}

#[test]
fn test_cwd_root_lists_its_children() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("src"))?;
    fs::create_dir(dir.path().join("Docs"))?;
    File::create(dir.path().join("README.md"))?;

    let tree = TreeModel::initialize(&FixedRoots(vec![]), dir.path(), GlyphStyle::Emoji);
    let root = tree.node(tree.roots()[0]).ok_or("missing root")?;

    let labels: Vec<_> = root
        .children()
        .iter()
        .filter_map(|id| tree.node(*id))
        .map(|n| n.label().to_string())
        .collect();
    assert_eq!(labels, vec!["📁 Docs", "📁 src", "📄 README.md"]);

    // Children of the eager root are still lazy
    for id in root.children() {
        let child = tree.node(*id).ok_or("missing child")?;
        assert!(child.children().is_empty());
        assert_eq!(
            child.expansion(),
            if child.is_expandable() {
                Expansion::Unexpanded
            } else {
                Expansion::Expanded
            }
        );
    }
    Ok(())
}

#[test]
fn test_drive_roots_are_listed_on_first_expand_only() -> Result<(), Box<dyn error::Error>> {
    let drive = tempdir()?;
    File::create(drive.path().join("boot.ini"))?;

    let mut tree = TreeModel::initialize(
        &FixedRoots(vec![drive.path().to_path_buf()]),
        Path::new("."),
        GlyphStyle::None,
    );
    let root = tree.roots()[0];
    assert_eq!(tree.node(root).ok_or("missing root")?.label(), drive.path().display().to_string());
    assert_eq!(tree.len(), 1);

    assert_eq!(tree.on_node_expanded(root), ExpandOutcome::Populated(1));
    File::create(drive.path().join("late.txt"))?;
    assert_eq!(tree.on_node_expanded(root), ExpandOutcome::Unchanged);

    tree.collapse(root);
    assert_eq!(tree.on_node_expanded(root), ExpandOutcome::Unchanged);
    assert_eq!(tree.node(root).ok_or("missing root")?.children().len(), 1);
    assert_eq!(tree.visible_rows().len(), 2);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_gets_denied_leaf() -> Result<(), Box<dyn error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir()?;
    let locked = dir.path().join("locked");
    fs::create_dir(&locked)?;
    File::create(locked.join("secret.txt"))?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Privileged users read through mode bits; nothing to observe then
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let mut tree = TreeModel::initialize(&FixedRoots(vec![]), dir.path(), GlyphStyle::Emoji);
    let locked_id = tree.node(tree.roots()[0]).ok_or("missing root")?.children()[0];
    let outcome = tree.on_node_expanded(locked_id);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    assert_eq!(outcome, ExpandOutcome::Denied);
    let node = tree.node(locked_id).ok_or("missing node")?;
    assert_eq!(node.expansion(), Expansion::Expanded);
    assert_eq!(node.children().len(), 1);

    let leaf = tree.node(node.children()[0]).ok_or("missing leaf")?;
    assert_eq!(leaf.label(), ACCESS_DENIED_LABEL);
    assert_eq!(leaf.payload(), &Payload::Denied);
    assert_eq!(tree.expand(node.children()[0]), ExpandOutcome::Unchanged);
    Ok(())
}

fn deny_all(path: &Path) -> Result<Vec<ListingEntry>, AccessDenied> {
    Err(AccessDenied::new(
        path,
        io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
    ))
}

#[test]
fn test_permission_denied_listing_gets_single_leaf() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let mut tree = TreeModel::with_lister(
        &FixedRoots(vec![dir.path().to_path_buf()]),
        dir.path(),
        GlyphStyle::Emoji,
        deny_all,
    );
    let root = tree.roots()[0];

    assert_eq!(tree.on_node_expanded(root), ExpandOutcome::Denied);
    let node = tree.node(root).ok_or("missing root")?;
    assert_eq!(node.expansion(), Expansion::Expanded);
    assert_eq!(node.children().len(), 1);

    let leaf = tree.node(node.children()[0]).ok_or("missing leaf")?;
    assert_eq!(leaf.label(), ACCESS_DENIED_LABEL);
    assert_eq!(leaf.payload(), &Payload::Denied);

    // Expanded already; the listing is not retried
    assert_eq!(tree.expand(root), ExpandOutcome::Unchanged);
    assert_eq!(tree.node(root).ok_or("missing root")?.children().len(), 1);
    Ok(())
}

#[test]
fn test_cwd_root_denied_on_initialize() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let tree = TreeModel::with_lister(&FixedRoots(vec![]), dir.path(), GlyphStyle::None, deny_all);

    let root = tree.node(tree.roots()[0]).ok_or("missing root")?;
    assert_eq!(root.children().len(), 1);
    let rows = tree.visible_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(tree.payload(rows[1].id), &Payload::Denied);
    Ok(())
}
