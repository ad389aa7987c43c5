//! Theme configuration options for arbor
//!
//! This module defines the theme configuration options which are read from the arbor.toml
//! configuration file. Every colour left at `"default"` falls back to the internal theme.

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use std::sync::LazyLock;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme.directory]
/// fg = "cyan"
/// [theme.selection]
/// bg = "#303030"
/// ```
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Theme {
    accent: ColorPair,
    selection: ColorPair,
    directory: ColorPair,
    entry: ColorPair,
    denied: ColorPair,
    path: ColorPair,
    preview: ColorPair,
    code: ColorPair,
    heading: ColorPair,
    status_line: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            accent: ColorPair {
                fg: Color::Indexed(238),
                ..ColorPair::default()
            },
            selection: ColorPair {
                bg: Color::Indexed(236),
                ..ColorPair::default()
            },
            directory: ColorPair {
                fg: Color::Blue,
                ..ColorPair::default()
            },
            entry: ColorPair::default(),
            denied: ColorPair {
                fg: Color::Red,
                ..ColorPair::default()
            },
            path: ColorPair {
                fg: Color::Magenta,
                ..ColorPair::default()
            },
            preview: ColorPair::default(),
            code: ColorPair {
                fg: Color::Yellow,
                ..ColorPair::default()
            },
            heading: ColorPair {
                fg: Color::Cyan,
                ..ColorPair::default()
            },
            status_line: ColorPair {
                fg: Color::DarkGray,
                ..ColorPair::default()
            },
        }
    }
}

impl Theme {
    /// Internal default theme, used for fallback when a colour is set to Reset.
    pub fn internal_defaults() -> &'static Self {
        static DEFAULT: LazyLock<Theme> = LazyLock::new(Theme::default);
        &DEFAULT
    }

    pub fn accent_style(&self) -> Style {
        self.accent.style_or(&Theme::internal_defaults().accent)
    }

    pub fn selection_style(&self) -> Style {
        self.selection
            .style_or(&Theme::internal_defaults().selection)
    }

    pub fn directory_style(&self) -> Style {
        self.directory
            .style_or(&Theme::internal_defaults().directory)
    }

    pub fn entry_style(&self) -> Style {
        self.entry.style_or(&Theme::internal_defaults().entry)
    }

    pub fn denied_style(&self) -> Style {
        self.denied
            .style_or(&Theme::internal_defaults().denied)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn path_style(&self) -> Style {
        self.path.style_or(&Theme::internal_defaults().path)
    }

    pub fn preview_style(&self) -> Style {
        self.preview.style_or(&Theme::internal_defaults().preview)
    }

    pub fn code_style(&self) -> Style {
        self.code.style_or(&Theme::internal_defaults().code)
    }

    pub fn heading_style(&self) -> Style {
        self.heading
            .style_or(&Theme::internal_defaults().heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_line_style(&self) -> Style {
        self.status_line
            .style_or(&Theme::internal_defaults().status_line)
    }
}

/// Foreground and background colour pair.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    /// Replaces Reset colours with those of `other`.
    pub fn resolve(&self, other: &ColorPair) -> Self {
        Self {
            fg: if self.fg == Color::Reset {
                other.fg
            } else {
                self.fg
            },
            bg: if self.bg == Color::Reset {
                other.bg
            } else {
                self.bg
            },
        }
    }

    pub fn style_or(&self, fallback: &ColorPair) -> Style {
        let resolved = self.resolve(fallback);
        Style::default().fg(resolved.fg).bg(resolved.bg)
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_colours_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str(
            r##"
            [directory]
            fg = "green"

            [selection]
            bg = "#102030"
            "##,
        )?;
        assert_eq!(theme.directory_style().fg, Some(Color::Green));
        assert_eq!(theme.selection_style().bg, Some(Color::Rgb(0x10, 0x20, 0x30)));
        Ok(())
    }

    #[test]
    fn reset_falls_back_to_internal_theme() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str(
            r#"
            [path]
            fg = "default"
            "#,
        )?;
        assert_eq!(theme.path_style().fg, Some(Color::Magenta));
        assert!(theme.heading_style().add_modifier.contains(Modifier::BOLD));
        Ok(())
    }
}
