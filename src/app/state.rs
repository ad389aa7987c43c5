//! Application state and main controller module for arbor.
//!
//! [AppState] owns the lazy tree, the cursor, the preview pane state and the opener, and
//! turns key presses into tree expansions and preview renders. It is the context object
//! handed to the UI and the terminal loop.

use crate::app::keymap::{Action, Keymap, NavAction, PreviewAction, SystemAction, TreeAction};
use crate::app::tree::{NodeId, TreeModel, TreeRow};
use crate::app::{NavState, PreviewState};
use crate::config::Config;
use crate::core::opener::{Opener, SystemOpener};
use crate::core::preview::Dispatcher;
use crate::core::roots::{HostRoots, RootSource};
use crate::ui::markdown::MarkdownStyles;

use crossterm::event::KeyEvent;

use std::io;
use std::path::Path;

/// Result of one processed key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Quit,
}

/// Last known size of the preview pane, used for page scrolling.
#[derive(Debug, Clone, Copy)]
pub struct LayoutMetrics {
    pub preview_height: u16,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self { preview_height: 20 }
    }
}

/// Central application state of arbor.
pub struct AppState<'a> {
    config: &'a Config,
    keymap: Keymap,
    metrics: LayoutMetrics,

    tree: TreeModel,
    nav: NavState,
    preview: PreviewState,

    opener: Box<dyn Opener>,
}

impl<'a> AppState<'a> {
    /// Builds the state for the running host: its drives, or the working directory.
    pub fn new(config: &'a Config) -> io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::with_parts(
            config,
            &HostRoots,
            &cwd,
            Box::new(SystemOpener),
        ))
    }

    /// Builds the state from explicit roots, working directory and opener.
    pub fn with_parts(
        config: &'a Config,
        roots: &dyn RootSource,
        cwd: &Path,
        opener: Box<dyn Opener>,
    ) -> Self {
        let tree = TreeModel::initialize(roots, cwd, config.display().icons());
        Self {
            config,
            keymap: Keymap::from_keys(config.keys()),
            metrics: LayoutMetrics::default(),
            tree,
            nav: NavState::default(),
            preview: PreviewState::default(),
            opener,
        }
    }

    // Getters / accessors

    #[inline]
    pub fn config(&self) -> &'a Config {
        self.config
    }

    #[inline]
    pub fn tree(&self) -> &TreeModel {
        &self.tree
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    #[inline]
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        self.tree.visible_rows()
    }

    /// Node under the cursor.
    pub fn cursor_node(&self) -> Option<NodeId> {
        self.visible_rows()
            .get(self.nav.selected_idx())
            .map(|row| row.id)
    }

    /// Records the inner size of the preview pane for paging and wrapped scrolling.
    pub fn set_preview_area(&mut self, width: u16, height: u16) {
        self.metrics.preview_height = height;
        let wrap = self.config.display().wrap();
        self.preview.set_wrap_width(wrap.then_some(width));
    }

    // Input handling

    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        match self.keymap.lookup(key) {
            Some(action) => self.dispatch(action),
            None => KeypressResult::Continue,
        }
    }

    /// Runs one action against the state.
    pub fn dispatch(&mut self, action: Action) -> KeypressResult {
        match action {
            Action::Nav(nav) => self.handle_nav(nav),
            Action::Tree(TreeAction::Expand) => self.handle_expand(),
            Action::Tree(TreeAction::Collapse) => self.handle_collapse(),
            Action::Tree(TreeAction::Select) => self.handle_select(),
            Action::Preview(scroll) => self.handle_preview_scroll(scroll),
            Action::System(SystemAction::Quit) => return KeypressResult::Quit,
        }
        KeypressResult::Continue
    }

    fn handle_nav(&mut self, action: NavAction) {
        let len = self.visible_rows().len();
        match action {
            NavAction::GoUp => {
                self.nav.move_up(len);
            }
            NavAction::GoDown => {
                self.nav.move_down(len);
            }
            NavAction::GoToTop => self.nav.go_to_top(),
            NavAction::GoToBottom => self.nav.go_to_bottom(len),
        }
    }

    /// Unfolds the node under the cursor. On an already open node, steps into its first child.
    fn handle_expand(&mut self) {
        let Some(id) = self.cursor_node() else {
            return;
        };
        let Some(node) = self.tree.node(id) else {
            return;
        };
        if !node.is_expandable() {
            return;
        }

        if node.is_open() {
            if !node.children().is_empty() {
                let len = self.visible_rows().len();
                self.nav.select(self.nav.selected_idx() + 1, len);
            }
        } else {
            self.tree.on_node_expanded(id);
        }
    }

    /// Folds the node under the cursor, or moves to its parent when it is not open.
    fn handle_collapse(&mut self) {
        let Some(id) = self.cursor_node() else {
            return;
        };
        if self.tree.collapse(id) {
            return;
        }

        let parent = self.tree.node(id).and_then(|n| n.parent());
        if let Some(parent) = parent {
            let rows = self.visible_rows();
            if let Some(idx) = rows.iter().position(|row| row.id == parent) {
                self.nav.select(idx, rows.len());
            }
        }
    }

    /// Renders the cursor node into the preview pane. Directories also fold or unfold.
    fn handle_select(&mut self) {
        let Some(id) = self.cursor_node() else {
            return;
        };

        let dispatcher = Dispatcher::new(self.opener.as_ref(), self.config.preview_options());
        let content = dispatcher.render(self.tree.payload(id));
        let styles = MarkdownStyles::from_theme(self.config.theme());
        self.preview.set(id, content, &styles);

        if self.tree.payload(id).is_dir() {
            self.tree.toggle(id);
            self.nav.clamp(self.visible_rows().len());
        }
    }

    fn handle_preview_scroll(&mut self, action: PreviewAction) {
        let step = (self.metrics.preview_height / 2).max(1);
        match action {
            PreviewAction::ScrollUp => self.preview.scroll_up(step),
            PreviewAction::ScrollDown => self.preview.scroll_down(step),
        }
    }
}
