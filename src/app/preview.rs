//! State of the preview pane: the last rendered content and its scroll offset.
//!
//! The Markdown is parsed once per selection into styled [Text]; redraws reuse it.

use crate::app::tree::NodeId;
use crate::core::preview::RenderedContent;
use crate::ui::markdown::{self, MarkdownStyles};

use ratatui::text::Text;

#[derive(Debug, Default)]
pub struct PreviewState {
    content: RenderedContent,
    text: Text<'static>,
    source: Option<NodeId>,
    scroll: u16,
    wrap_width: Option<u16>,
}

impl PreviewState {
    // Getters / accessors

    #[inline]
    pub fn content(&self) -> &RenderedContent {
        &self.content
    }

    /// Styled lines of the current content.
    #[inline]
    pub fn text(&self) -> &Text<'static> {
        &self.text
    }

    /// Node whose payload produced the current content.
    #[inline]
    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    #[inline]
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    // Setters / mutators

    /// Replaces the content and scrolls back to the top.
    pub fn set(&mut self, source: NodeId, content: RenderedContent, styles: &MarkdownStyles) {
        self.text = markdown::to_text(content.as_str(), styles);
        self.content = content;
        self.source = Some(source);
        self.scroll = 0;
    }

    /// Pane width lines wrap at, or `None` when wrapping is off.
    pub fn set_wrap_width(&mut self, width: Option<u16>) {
        self.wrap_width = width.filter(|w| *w > 0);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    /// Scrolls down, stopping at the last rendered row.
    pub fn scroll_down(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_add(by).min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.row_count().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Screen rows the text takes, counting wrapped continuation rows.
    pub fn row_count(&self) -> usize {
        match self.wrap_width {
            Some(width) => self
                .text
                .lines
                .iter()
                .map(|line| line.width().div_ceil(usize::from(width)).max(1))
                .sum(),
            None => self.text.lines.len(),
        }
    }
}
