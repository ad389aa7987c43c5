//! Display configuration options for arbor
//!
//! This module defines the display configuration options which are read from the arbor.toml
//! configuration file.

use crate::ui::icons::GlyphStyle;

use ratatui::widgets::BorderType;
use serde::Deserialize;

/// Display configuration options
///
/// Border style and shape, pane titles, glyph set, header and footer lines, the
/// tree/preview split and preview wrapping.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    borders: BorderStyle,
    border_shape: BorderShape,
    titles: bool,
    icons: GlyphStyle,
    header: bool,
    footer: bool,
    wrap: bool,
    layout: LayoutConfig,
}

impl Display {
    pub fn is_unified(&self) -> bool {
        matches!(self.borders, BorderStyle::Unified)
    }

    pub fn is_split(&self) -> bool {
        matches!(self.borders, BorderStyle::Split)
    }

    pub fn border_shape(&self) -> &BorderShape {
        &self.border_shape
    }

    pub fn titles(&self) -> bool {
        self.titles
    }

    pub fn icons(&self) -> GlyphStyle {
        self.icons
    }

    pub fn header(&self) -> bool {
        self.header
    }

    pub fn footer(&self) -> bool {
        self.footer
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn tree_ratio(&self) -> u16 {
        self.layout.tree
    }

    pub fn preview_ratio(&self) -> u16 {
        self.layout.preview
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            borders: BorderStyle::Split,
            border_shape: BorderShape::Square,
            titles: true,
            icons: GlyphStyle::Emoji,
            header: true,
            footer: true,
            wrap: true,
            layout: LayoutConfig::default(),
        }
    }
}

/// Relative widths of the tree and preview panes.
///
/// Zero ratios are raised to one so neither pane disappears.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct LayoutConfig {
    #[serde(deserialize_with = "deserialize_ratio")]
    tree: u16,
    #[serde(deserialize_with = "deserialize_ratio")]
    preview: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            tree: 1,
            preview: 2,
        }
    }
}

fn deserialize_ratio<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let n = u16::deserialize(deserializer)?;
    Ok(n.max(1))
}

/// Border style options
/// - None: no borders
/// - Unified: one border around both panes
/// - Split: a border around each pane
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    None,
    Unified,
    Split,
}

/// Border shape options
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BorderShape {
    Square,
    Rounded,
    Double,
    Thick,
}

impl BorderShape {
    pub fn as_border_type(&self) -> BorderType {
        match self {
            BorderShape::Square => BorderType::Plain,
            BorderShape::Rounded => BorderType::Rounded,
            BorderShape::Double => BorderType::Double,
            BorderShape::Thick => BorderType::Thick,
        }
    }
}
