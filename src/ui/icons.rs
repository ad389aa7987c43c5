//! Glyphs shown in front of tree labels and directory-summary names.
//!
//! The default [GlyphStyle::Emoji] style prefixes every directory with 📁 and every file
//! with 📄. [GlyphStyle::Nerd] looks names up in Nerd Font maps keyed by special file
//! names, special directory names and extensions. [GlyphStyle::None] shows bare names.

use phf::phf_map;
use serde::Deserialize;

const EMOJI_DIR: &str = "📁";
const EMOJI_FILE: &str = "📄";

const NERD_DIR: &str = "\u{e5ff}";
const NERD_FILE: &str = "\u{f0f6}";

/// File extension to Nerd Font icon mapping. Keys are lowercase.
static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "rs" => "\u{e7a8}",
    "py" => "\u{e606}",
    "js" => "\u{e74e}",
    "md" => "\u{f48a}",
    "html" => "\u{e736}",
    "css" => "\u{e749}",
    "json" => "\u{e60b}",
    "xml" => "\u{f013}",
    "toml" => "\u{f013}",
    "yml" => "\u{f013}",
    "yaml" => "\u{f013}",
    "ini" => "\u{f013}",
    "csv" => "\u{f1c3}",
    "sh" => "\u{e795}",
    "txt" => "\u{f0f6}",
    "png" => "\u{f03e}",
    "jpg" => "\u{f03e}",
    "jpeg" => "\u{f03e}",
    "gif" => "\u{f03e}",
    "bmp" => "\u{f03e}",
    "svg" => "\u{f03e}",
    "pdf" => "\u{f1c1}",
    "zip" => "\u{f1c6}",
    "tar" => "\u{f1c6}",
    "gz" => "\u{f1c6}",
    "lock" => "\u{f023}",
};

/// Special file names matched exactly.
static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "README.md" => "\u{f48a}",
    "README" => "\u{f48a}",
    "LICENSE" => "\u{f02d}",
    "Cargo.toml" => "\u{e7a8}",
    "Makefile" => "\u{e779}",
    ".gitignore" => "\u{e702}",
    "Dockerfile" => "\u{e7b0}",
};

/// Special directory names, matched exactly and then lowercased.
static SPECIAL_DIR_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    ".git" => "\u{e5fb}",
    ".github" => "\u{e5fd}",
    ".config" => "\u{e5fc}",
    "node_modules" => "\u{e5fa}",
};

/// Which glyph set labels use.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    #[default]
    Emoji,
    Nerd,
    None,
}

/// Glyph for an entry, or `None` for [GlyphStyle::None].
pub fn glyph(style: GlyphStyle, name: &str, is_dir: bool) -> Option<&'static str> {
    match style {
        GlyphStyle::Emoji => Some(if is_dir { EMOJI_DIR } else { EMOJI_FILE }),
        GlyphStyle::Nerd => Some(nerd_font_icon(name, is_dir)),
        GlyphStyle::None => None,
    }
}

/// `"<glyph> <name>"`, or just the name when glyphs are off.
pub fn with_glyph(style: GlyphStyle, name: &str, is_dir: bool) -> String {
    match glyph(style, name, is_dir) {
        Some(g) => format!("{} {}", g, name),
        None => name.to_string(),
    }
}

/// Nerd Font icon for a name: special names first, then the extension.
fn nerd_font_icon(name: &str, is_dir: bool) -> &'static str {
    if is_dir {
        if let Some(icon) = SPECIAL_DIR_ICON_MAP.get(name) {
            return icon;
        }
        return SPECIAL_DIR_ICON_MAP
            .get(name.to_lowercase().as_str())
            .copied()
            .unwrap_or(NERD_DIR);
    }

    if let Some(icon) = SPECIAL_FILE_ICON_MAP.get(name) {
        return icon;
    }

    if let Some(dot_idx) = name.rfind('.')
        && dot_idx > 0
        && dot_idx < name.len() - 1
    {
        let ext = name[dot_idx + 1..].to_ascii_lowercase();
        if let Some(icon) = EXT_ICON_MAP.get(ext.as_str()) {
            return icon;
        }
    }

    NERD_FILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_labels() {
        assert_eq!(with_glyph(GlyphStyle::Emoji, "src", true), "📁 src");
        assert_eq!(with_glyph(GlyphStyle::Emoji, "main.rs", false), "📄 main.rs");
    }

    #[test]
    fn no_glyphs_leave_the_name_alone() {
        assert_eq!(with_glyph(GlyphStyle::None, "src", true), "src");
    }

    #[test]
    fn nerd_lookup_order() {
        assert_eq!(nerd_font_icon("Cargo.toml", false), "\u{e7a8}");
        assert_eq!(nerd_font_icon("photo.PNG", false), "\u{f03e}");
        assert_eq!(nerd_font_icon(".hidden", false), NERD_FILE);
        assert_eq!(nerd_font_icon("Node_Modules", true), "\u{e5fa}");
        assert_eq!(nerd_font_icon("plain", true), NERD_DIR);
    }
}
