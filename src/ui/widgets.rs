//! Small widgets shared by the renderer: pane blocks, the header and footer lines, and
//! width-aware truncation.

use crate::config::Config;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Block for one pane: bordered and titled with split borders, bare otherwise.
pub fn get_pane_block(title: &str, config: &Config) -> Block<'static> {
    let display = config.display();
    let mut b = Block::default();
    if display.is_split() {
        b = b
            .borders(Borders::ALL)
            .border_style(config.theme().accent_style())
            .border_type(display.border_shape().as_border_type());
        if display.titles() {
            b = b.title(format!(" {} ", title));
        }
    }
    b
}

/// Single line with the path under the cursor.
pub fn draw_header(frame: &mut Frame, area: Rect, path: &str, config: &Config) {
    let shown = truncate_to_width(path, area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(shown, config.theme().path_style()))),
        area,
    );
}

/// Single line of key hints.
pub fn draw_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], config: &Config) {
    let theme = config.theme();
    let key_style = theme.accent_style();
    let text_style = theme.status_line_style();

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", text_style));
        }
        spans.push(Span::styled(key.to_string(), key_style));
        spans.push(Span::styled(format!(" {}", label), text_style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Cuts `s` to at most `max` terminal columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(max);
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
