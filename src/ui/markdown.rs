//! Markdown to styled terminal lines for the preview pane.
//!
//! Only the constructs the preview dispatcher emits get special treatment: headings,
//! strong and emphasis, fenced code, bullet lists and inline code. Everything else is
//! shown as plain text.

use crate::config::Theme;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

const TAB: &str = "    ";

/// Styles used while converting.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownStyles {
    pub base: Style,
    pub heading: Style,
    pub code: Style,
    pub accent: Style,
}

impl MarkdownStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            base: theme.preview_style(),
            heading: theme.heading_style(),
            code: theme.code_style(),
            accent: theme.accent_style(),
        }
    }
}

/// Parses `markdown` into owned, styled lines.
pub fn to_text(markdown: &str, styles: &MarkdownStyles) -> Text<'static> {
    Text::from(to_lines(markdown, styles))
}

pub fn to_lines(markdown: &str, styles: &MarkdownStyles) -> Vec<Line<'static>> {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut lines: Vec<Line<'static>> = vec![Line::default()];

    let mut style_stack: Vec<Style> = vec![styles.base];
    let mut in_code_block = false;

    for event in parser {
        let current = *style_stack.last().unwrap_or(&styles.base);
        match event {
            Event::Start(tag) => match tag {
                Tag::Strong => style_stack.push(current.add_modifier(Modifier::BOLD)),
                Tag::Emphasis => style_stack.push(current.add_modifier(Modifier::ITALIC)),
                Tag::Heading { .. } => {
                    start_block(&mut lines);
                    style_stack.push(styles.heading);
                }
                Tag::CodeBlock(kind) => {
                    in_code_block = true;
                    start_block(&mut lines);
                    if let CodeBlockKind::Fenced(lang) = kind
                        && !lang.is_empty()
                    {
                        push_span(&mut lines, format!("── {}", lang), styles.accent);
                        lines.push(Line::default());
                    }
                }
                Tag::Paragraph => start_block(&mut lines),
                Tag::Item => {
                    new_line(&mut lines);
                    push_span(&mut lines, "• ".to_string(), styles.accent);
                }
                Tag::List(_) => start_block(&mut lines),
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Strong | TagEnd::Emphasis | TagEnd::Heading(_) => {
                    style_stack.pop();
                    if matches!(tag_end, TagEnd::Heading(_)) {
                        lines.push(Line::default());
                    }
                }
                // Code text ends with a newline, so the next line is already open
                TagEnd::CodeBlock => in_code_block = false,
                TagEnd::Paragraph | TagEnd::List(_) => lines.push(Line::default()),
                _ => {}
            },
            Event::Text(text) => {
                let style = if in_code_block { styles.code } else { current };
                let text = if in_code_block {
                    text.replace('\t', TAB)
                } else {
                    text.to_string()
                };
                for (i, part) in text.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(Line::default());
                    }
                    if !part.is_empty() {
                        push_span(&mut lines, part.to_string(), style);
                    }
                }
            }
            Event::Code(code) => push_span(&mut lines, code.to_string(), styles.code),
            Event::SoftBreak => push_span(&mut lines, " ".to_string(), current),
            Event::HardBreak => lines.push(Line::default()),
            Event::Rule => {
                start_block(&mut lines);
                push_span(&mut lines, "─".repeat(40), styles.accent);
                lines.push(Line::default());
            }
            _ => {}
        }
    }

    while lines.last().is_some_and(is_blank) {
        lines.pop();
    }
    lines
}

fn is_blank(line: &Line) -> bool {
    line.spans.is_empty()
}

fn push_span(lines: &mut Vec<Line<'static>>, text: String, style: Style) {
    match lines.last_mut() {
        Some(line) => line.spans.push(Span::styled(text, style)),
        None => lines.push(Line::from(Span::styled(text, style))),
    }
}

/// Moves to a fresh line unless the current one is still empty.
fn new_line(lines: &mut Vec<Line<'static>>) {
    if !lines.last().is_none_or(is_blank) {
        lines.push(Line::default());
    }
}

/// Like [new_line], also leaving one blank line after earlier content.
fn start_block(lines: &mut Vec<Line<'static>>) {
    new_line(lines);
    let len = lines.len();
    if len >= 2 && !is_blank(&lines[len - 2]) {
        lines.push(Line::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn styles() -> MarkdownStyles {
        MarkdownStyles {
            base: Style::default(),
            heading: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            code: Style::default().fg(Color::Yellow),
            accent: Style::default().fg(Color::DarkGray),
        }
    }

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn text_preview_layout() {
        let lines = to_lines("# main.py\n\n```python\nprint(1)\n\tx = 2\n```", &styles());
        assert_eq!(
            plain(&lines),
            vec!["main.py", "", "── python", "print(1)", "    x = 2"]
        );
        assert_eq!(lines[0].spans[0].style, styles().heading);
        assert_eq!(lines[3].spans[0].style, styles().code);
    }

    #[test]
    fn strong_labels_and_lists() {
        let md = "**Total items:** 3\n\n## Directories:\n- 📁 docs\n- 📁 src\n";
        let lines = to_lines(md, &styles());
        assert_eq!(
            plain(&lines),
            vec!["Total items: 3", "", "Directories:", "", "• 📁 docs", "• 📁 src"]
        );
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn emphasis_is_italic() {
        let lines = to_lines("*Preview not available for this file type.*", &styles());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(to_lines("", &styles()).is_empty());
    }
}
