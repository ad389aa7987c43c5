//! The lazy tree model of arbor.
//!
//! Holds the forest of nodes that mirrors the visited part of the filesystem. Nodes live in
//! an append-only arena and are addressed by [NodeId]; nothing is ever removed.
//!
//! Every directory node starts [Expansion::Unexpanded] and turns [Expansion::Expanded] at
//! most once, the first time it is expanded, whether its listing succeeds or is denied.
//! Files and the "Access denied" sentinel are created already expanded with no children.
//!
//! Separately from that, each node carries a view-only `open` flag. Folding a node in the
//! tree pane clears `open` and hides its rows, but keeps its children and expansion state.

use crate::core::error::AccessDenied;
use crate::core::listing::{ListingEntry, Payload, list_dir};
use crate::core::roots::RootSource;
use crate::ui::icons::{GlyphStyle, with_glyph};

use std::path::{Path, PathBuf};

pub const ACCESS_DENIED_LABEL: &str = "Access denied";

static NO_PAYLOAD: Payload = Payload::None;

/// Reads the children of one directory. [list_dir] outside of tests.
pub type ListFn = fn(&Path) -> Result<Vec<ListingEntry>, AccessDenied>;

/// Stable handle of a node, assigned on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    Unexpanded,
    Expanded,
}

/// Result of an [TreeModel::expand] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// The directory was listed and this many children were added.
    Populated(usize),
    /// The listing failed and a single sentinel leaf was added.
    Denied,
    /// Nothing happened: already expanded, not a directory, or unknown id.
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Node {
    label: String,
    payload: Payload,
    expansion: Expansion,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    depth: usize,
    open: bool,
}

impl Node {
    fn new(label: String, payload: Payload, parent: Option<NodeId>, depth: usize) -> Self {
        // Only directories have a lazy boundary
        let expansion = if payload.is_dir() {
            Expansion::Unexpanded
        } else {
            Expansion::Expanded
        };
        Self {
            label,
            payload,
            expansion,
            children: Vec::new(),
            parent,
            depth,
            open: false,
        }
    }

    // Accessors

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    #[inline]
    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the tree pane offers to expand this node.
    pub fn is_expandable(&self) -> bool {
        self.payload.is_dir()
    }
}

/// One visible line of the tree pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRow {
    pub id: NodeId,
    pub depth: usize,
}

pub struct TreeModel {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    glyphs: GlyphStyle,
    lister: ListFn,
}

impl TreeModel {
    /// Builds the roots.
    ///
    /// Every drive reported by `host` becomes an unexpanded root. With no drives, a single
    /// "Current Directory" root for `cwd` is created and expanded right away.
    pub fn initialize(host: &dyn RootSource, cwd: &Path, glyphs: GlyphStyle) -> Self {
        Self::with_lister(host, cwd, glyphs, list_dir)
    }

    /// [TreeModel::initialize] with a custom directory reader.
    pub fn with_lister(
        host: &dyn RootSource,
        cwd: &Path,
        glyphs: GlyphStyle,
        lister: ListFn,
    ) -> Self {
        let mut model = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            glyphs,
            lister,
        };

        let drives = host.list_roots();
        if drives.is_empty() {
            let label = format!("Current Directory ({})", cwd.display());
            let id = model.push_root(label, cwd.to_path_buf());
            model.on_node_expanded(id);
        } else {
            for drive in drives {
                let label = drive.display().to_string();
                model.push_root(label, drive);
            }
        }
        tracing::debug!(roots = model.roots.len(), "tree initialized");
        model
    }

    fn push_root(&mut self, label: String, path: PathBuf) -> NodeId {
        let id = self.push(Node::new(label, Payload::Directory(path), None, 0));
        self.roots.push(id);
        id
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    // Getters / accessors

    #[inline]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Payload of `id`, or [Payload::None] for an unknown id.
    pub fn payload(&self, id: NodeId) -> &Payload {
        self.node(id).map_or(&NO_PAYLOAD, Node::payload)
    }

    /// Materializes the children of a directory node.
    ///
    /// A no-op for expanded nodes and non-directory payloads. Otherwise the directory is
    /// listed once: each entry becomes a child, or a failed listing becomes one
    /// "Access denied" leaf. The node is marked expanded either way.
    pub fn expand(&mut self, id: NodeId) -> ExpandOutcome {
        let Some(node) = self.nodes.get(id.0) else {
            return ExpandOutcome::Unchanged;
        };
        if node.expansion == Expansion::Expanded {
            return ExpandOutcome::Unchanged;
        }
        let Payload::Directory(path) = &node.payload else {
            return ExpandOutcome::Unchanged;
        };
        let depth = node.depth + 1;

        let outcome = match (self.lister)(path) {
            Ok(entries) => {
                let mut children = Vec::with_capacity(entries.len());
                for entry in entries {
                    let label = with_glyph(self.glyphs, entry.name(), entry.is_dir());
                    let child = Node::new(label, entry.into_payload(), Some(id), depth);
                    children.push(self.push(child));
                }
                let count = children.len();
                self.nodes[id.0].children = children;
                ExpandOutcome::Populated(count)
            }
            Err(denied) => {
                tracing::warn!(error = %denied, "directory listing denied");
                let leaf = Node::new(
                    ACCESS_DENIED_LABEL.to_string(),
                    Payload::Denied,
                    Some(id),
                    depth,
                );
                let leaf = self.push(leaf);
                self.nodes[id.0].children = vec![leaf];
                ExpandOutcome::Denied
            }
        };

        self.nodes[id.0].expansion = Expansion::Expanded;
        tracing::debug!(node = id.0, ?outcome, "node expanded");
        outcome
    }

    /// Handles the tree pane's "node expanded" event: opens the node and lists it only
    /// while it still has no children, so each directory is read at most once.
    pub fn on_node_expanded(&mut self, id: NodeId) -> ExpandOutcome {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return ExpandOutcome::Unchanged;
        };
        if !node.is_expandable() {
            return ExpandOutcome::Unchanged;
        }
        node.open = true;
        if node.children.is_empty() {
            self.expand(id)
        } else {
            ExpandOutcome::Unchanged
        }
    }

    /// Folds `id` in the view. Children and expansion state are kept.
    pub fn collapse(&mut self, id: NodeId) -> bool {
        match self.nodes.get_mut(id.0) {
            Some(node) if node.open => {
                node.open = false;
                true
            }
            _ => false,
        }
    }

    /// Opens a closed node, folds an open one.
    pub fn toggle(&mut self, id: NodeId) {
        if self.node(id).is_some_and(Node::is_open) {
            self.collapse(id);
        } else {
            self.on_node_expanded(id);
        }
    }

    /// Depth-first list of visible rows, descending only into open nodes.
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::with_capacity(self.nodes.len().min(1024));
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            rows.push(TreeRow {
                id,
                depth: node.depth,
            });
            if node.open {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    struct NoDrives;

    impl RootSource for NoDrives {
        fn list_roots(&self) -> Vec<PathBuf> {
            Vec::new()
        }
    }

    struct Drives(Vec<PathBuf>);

    impl RootSource for Drives {
        fn list_roots(&self) -> Vec<PathBuf> {
            self.0.clone()
        }
    }

    fn labels(model: &TreeModel, id: NodeId) -> Vec<String> {
        model
            .node(id)
            .map(|n| {
                n.children()
                    .iter()
                    .filter_map(|c| model.node(*c))
                    .map(|c| c.label().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn cwd_root_is_expanded_immediately() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("src"))?;
        File::create(tmp.path().join("Cargo.toml"))?;

        let model = TreeModel::initialize(&NoDrives, tmp.path(), GlyphStyle::Emoji);
        assert_eq!(model.roots().len(), 1);

        let root = model.node(model.roots()[0]).ok_or("missing root")?;
        assert_eq!(
            root.label(),
            format!("Current Directory ({})", tmp.path().display())
        );
        assert_eq!(root.expansion(), Expansion::Expanded);
        assert!(root.is_open());
        assert_eq!(labels(&model, model.roots()[0]), vec!["📁 src", "📄 Cargo.toml"]);
        Ok(())
    }

    #[test]
    fn drive_roots_stay_unexpanded() -> Result<(), Box<dyn std::error::Error>> {
        let a = TempDir::new()?;
        let b = TempDir::new()?;
        File::create(a.path().join("x.txt"))?;

        let host = Drives(vec![a.path().to_path_buf(), b.path().to_path_buf()]);
        let model = TreeModel::initialize(&host, Path::new("."), GlyphStyle::Emoji);

        assert_eq!(model.roots().len(), 2);
        for id in model.roots() {
            let node = model.node(*id).ok_or("missing root")?;
            assert_eq!(node.expansion(), Expansion::Unexpanded);
            assert!(node.children().is_empty());
            assert!(node.is_expandable());
        }
        assert_eq!(model.len(), 2);
        Ok(())
    }

    #[test]
    fn files_are_permanent_leaves() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("a.txt"))?;

        let mut model = TreeModel::initialize(&NoDrives, tmp.path(), GlyphStyle::None);
        let file = model.node(model.roots()[0]).ok_or("missing root")?.children()[0];
        let node = model.node(file).ok_or("missing file")?;
        assert_eq!(node.expansion(), Expansion::Expanded);
        assert!(!node.is_expandable());
        assert_eq!(model.expand(file), ExpandOutcome::Unchanged);
        assert_eq!(model.on_node_expanded(file), ExpandOutcome::Unchanged);
        Ok(())
    }

    #[test]
    fn expand_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("dir"))?;
        File::create(tmp.path().join("dir/one.txt"))?;
        File::create(tmp.path().join("dir/two.txt"))?;

        let mut model = TreeModel::initialize(&NoDrives, tmp.path(), GlyphStyle::Emoji);
        let dir = model.node(model.roots()[0]).ok_or("missing root")?.children()[0];

        assert_eq!(model.expand(dir), ExpandOutcome::Populated(2));
        let first = model.node(dir).ok_or("missing dir")?.children().to_vec();
        let size = model.len();

        // New file on disk must not show up: the directory is never listed again
        File::create(tmp.path().join("dir/three.txt"))?;
        assert_eq!(model.expand(dir), ExpandOutcome::Unchanged);
        assert_eq!(model.on_node_expanded(dir), ExpandOutcome::Unchanged);
        assert_eq!(model.node(dir).ok_or("missing dir")?.children(), first.as_slice());
        assert_eq!(model.len(), size);
        Ok(())
    }

    #[test]
    fn vanished_directory_expands_to_denied_leaf() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("doomed"))?;

        let mut model = TreeModel::initialize(&NoDrives, tmp.path(), GlyphStyle::Emoji);
        let dir = model.node(model.roots()[0]).ok_or("missing root")?.children()[0];
        fs::remove_dir(tmp.path().join("doomed"))?;

        assert_eq!(model.expand(dir), ExpandOutcome::Denied);
        let node = model.node(dir).ok_or("missing dir")?;
        assert_eq!(node.expansion(), Expansion::Expanded);
        assert_eq!(node.children().len(), 1);

        let leaf = model.node(node.children()[0]).ok_or("missing leaf")?;
        assert_eq!(leaf.label(), ACCESS_DENIED_LABEL);
        assert_eq!(leaf.payload(), &Payload::Denied);
        assert_eq!(leaf.expansion(), Expansion::Expanded);
        assert!(leaf.children().is_empty());
        Ok(())
    }

    #[test]
    fn collapse_only_hides_rows() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("dir"))?;
        File::create(tmp.path().join("dir/inner.txt"))?;
        File::create(tmp.path().join("top.txt"))?;

        let mut model = TreeModel::initialize(&NoDrives, tmp.path(), GlyphStyle::None);
        let root = model.roots()[0];
        let dir = model.node(root).ok_or("missing root")?.children()[0];

        assert_eq!(model.visible_rows().len(), 3);
        model.on_node_expanded(dir);
        let rows = model.visible_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].depth, 2);

        assert!(model.collapse(dir));
        assert_eq!(model.visible_rows().len(), 3);
        assert_eq!(model.node(dir).ok_or("missing dir")?.expansion(), Expansion::Expanded);
        assert_eq!(model.node(dir).ok_or("missing dir")?.children().len(), 1);

        model.toggle(dir);
        assert_eq!(model.visible_rows().len(), 4);
        Ok(())
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut model =
            TreeModel::initialize(&NoDrives, Path::new("/nonexistent-root"), GlyphStyle::Emoji);
        let bogus = NodeId(usize::MAX);
        assert_eq!(model.expand(bogus), ExpandOutcome::Unchanged);
        assert_eq!(model.payload(bogus), &Payload::None);
        assert!(!model.collapse(bogus));
    }
}
