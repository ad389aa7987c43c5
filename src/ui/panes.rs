//! Pane rendering: the tree on the left, the preview on the right.

use crate::app::AppState;
use crate::app::tree::{Node, TreeRow};
use crate::core::listing::Payload;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph, Wrap},
};

const INDENT: &str = "  ";
const FOLD_OPEN: &str = "▾ ";
const FOLD_CLOSED: &str = "▸ ";
const LEAF: &str = "  ";

/// Context data for pane rendering functions
pub struct PaneContext<'a> {
    pub area: Rect,
    pub block: Block<'a>,
}

/// Styles for tree rows.
#[derive(Debug, Clone, Copy)]
pub struct TreeStyles {
    pub entry: Style,
    pub directory: Style,
    pub denied: Style,
    pub selection: Style,
}

impl TreeStyles {
    fn for_payload(&self, payload: &Payload) -> Style {
        match payload {
            Payload::Directory(_) => self.directory,
            Payload::Denied => self.denied,
            Payload::File(_) | Payload::None => self.entry,
        }
    }
}

/// Draws the visible rows of the tree, keeping the cursor row on screen.
pub fn draw_tree(frame: &mut Frame, app: &AppState, context: PaneContext, styles: TreeStyles) {
    let rows = app.visible_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .filter_map(|row| {
            let node = app.tree().node(row.id)?;
            Some(ListItem::new(tree_row_line(row, node, &styles)))
        })
        .collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.nav().selected_idx()));
    }

    frame.render_stateful_widget(
        List::new(items)
            .block(context.block)
            .highlight_style(styles.selection)
            .scroll_padding(2),
        context.area,
        &mut state,
    );
}

/// `<indent><fold marker><label>` for one row.
pub fn tree_row_line(row: &TreeRow, node: &Node, styles: &TreeStyles) -> Line<'static> {
    let marker = if !node.is_expandable() {
        LEAF
    } else if node.is_open() {
        FOLD_OPEN
    } else {
        FOLD_CLOSED
    };

    Line::from(vec![
        Span::raw(INDENT.repeat(row.depth)),
        Span::styled(marker, styles.directory),
        Span::styled(node.label().to_string(), styles.for_payload(node.payload())),
    ])
}

/// Draws the rendered Markdown of the last selection.
pub fn draw_preview(
    frame: &mut Frame,
    app: &AppState,
    context: PaneContext,
    base: Style,
    wrap: bool,
) {
    let preview = app.preview();

    let mut paragraph = Paragraph::new(preview.text().clone())
        .block(context.block)
        .style(base)
        .scroll((preview.scroll(), 0));
    if wrap {
        paragraph = paragraph.wrap(Wrap { trim: false });
    }
    frame.render_widget(paragraph, context.area);
}
