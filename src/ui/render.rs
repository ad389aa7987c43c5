//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and the
//! layout helper that splits the screen into the tree and preview panes.
//!
//! Rendering only reads state and config, apart from recording the preview height
//! used for page scrolling.

use crate::app::AppState;
use crate::config::Config;
use crate::ui::panes::{self, PaneContext, TreeStyles};
use crate::ui::widgets;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

const FOOTER_HINTS: &[(&str, &str)] = &[
    ("Enter", "Preview"),
    ("l/h", "Expand/Collapse"),
    ("^d/^u", "Scroll"),
    ("q", "Quit"),
];

/// Renders the whole UI for one frame: header, tree and preview panes, footer.
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let cfg = app.config();
    let display_cfg = cfg.display();

    let (header, body, footer) = vertical_areas(frame.area(), cfg);
    let body = render_root(frame, cfg, body);
    let [tree_area, preview_area] = layout_chunks(body, cfg);

    if let Some(area) = header {
        widgets::draw_header(frame, area, &header_text(app), cfg);
    }

    let theme = cfg.theme();
    let tree_styles = TreeStyles {
        entry: theme.entry_style(),
        directory: theme.directory_style(),
        denied: theme.denied_style(),
        selection: theme.selection_style(),
    };
    panes::draw_tree(
        frame,
        app,
        PaneContext {
            area: tree_area,
            block: widgets::get_pane_block("Tree", cfg),
        },
        tree_styles,
    );

    let preview_block = widgets::get_pane_block("Preview", cfg);
    let preview_inner = preview_block.inner(preview_area);
    panes::draw_preview(
        frame,
        app,
        PaneContext {
            area: preview_area,
            block: preview_block,
        },
        theme.preview_style(),
        display_cfg.wrap(),
    );

    if let Some(area) = footer {
        widgets::draw_footer(frame, area, FOOTER_HINTS, cfg);
    }

    app.set_preview_area(preview_inner.width, preview_inner.height);
}

/// Splits `area` into the tree and preview panes by the configured ratio.
pub fn layout_chunks(area: Rect, cfg: &Config) -> [Rect; 2] {
    let display = cfg.display();
    let tree = u32::from(display.tree_ratio());
    let total = tree + u32::from(display.preview_ratio());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(tree, total),
            Constraint::Ratio(total - tree, total),
        ])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Header line, body and footer line; header and footer are optional.
fn vertical_areas(area: Rect, cfg: &Config) -> (Option<Rect>, Rect, Option<Rect>) {
    let display = cfg.display();
    let header_len = u16::from(display.header());
    let footer_len = u16::from(display.footer());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_len),
            Constraint::Min(0),
            Constraint::Length(footer_len),
        ])
        .split(area);

    (
        display.header().then_some(chunks[0]),
        chunks[1],
        display.footer().then_some(chunks[2]),
    )
}

/// Draws the unified border, if configured, and returns the area inside it.
fn render_root(frame: &mut Frame, cfg: &Config, area: Rect) -> Rect {
    let display = cfg.display();
    if !display.is_unified() {
        return area;
    }

    let mut outer = Block::default()
        .borders(Borders::ALL)
        .border_style(cfg.theme().accent_style())
        .border_type(display.border_shape().as_border_type());
    if display.titles() {
        outer = outer.title(" arbor ");
    }
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}

/// Path of the node under the cursor, or its label for nodes without a path.
fn header_text(app: &AppState) -> String {
    let Some(id) = app.cursor_node() else {
        return String::new();
    };
    let tree = app.tree();
    match tree.payload(id).path() {
        Some(path) => shorten_home_path(path),
        None => tree
            .node(id)
            .map(|n| n.label().to_string())
            .unwrap_or_default(),
    }
}
