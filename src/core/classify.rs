//! Content classification for the preview pane.
//!
//! [classify] maps a file path to a [Classification] using only the name: a MIME guess from
//! `mime_guess` plus the recognized text-extension table. No file is opened here.

use mime_guess::mime;
use phf::phf_map;
use std::path::Path;

/// Extensions that always render as text, with the language tag used for the fenced block.
static TEXT_EXTENSIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "txt" => "plaintext",
    "md" => "markdown",
    "py" => "python",
    "json" => "json",
    "html" => "html",
    "css" => "css",
    "js" => "javascript",
    "xml" => "xml",
    "csv" => "csv",
    "yaml" => "yaml",
    "yml" => "yaml",
};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

const PDF_EXTENSION: &str = "pdf";

/// The preview category of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Renderable as text. `language` is empty when only the MIME guess matched.
    Text { language: &'static str },
    Image,
    Pdf,
    Opaque,
}

/// Classifies an existing file by its name.
///
/// Text wins over everything else: either the MIME guess says `text/*` or the extension is
/// in the text table. Extension matching is case-insensitive.
pub fn classify(path: &Path) -> Classification {
    let ext = lowered_extension(path);
    let ext = ext.as_deref().unwrap_or("");

    let table_language = language_for_extension(ext);
    if table_language.is_some() || is_text_mime(path) {
        return Classification::Text {
            language: table_language.unwrap_or(""),
        };
    }

    if IMAGE_EXTENSIONS.contains(&ext) {
        Classification::Image
    } else if ext == PDF_EXTENSION {
        Classification::Pdf
    } else {
        Classification::Opaque
    }
}

/// Language tag of the text-extension table, if the extension is listed.
/// Accepts the extension with or without its leading dot, in any case.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    if ext.is_empty() {
        return None;
    }
    TEXT_EXTENSIONS.get(ext.to_ascii_lowercase().as_str()).copied()
}

fn is_text_mime(path: &Path) -> bool {
    mime_guess::from_path(path)
        .first()
        .is_some_and(|m| m.type_() == mime::TEXT)
}

fn lowered_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}
