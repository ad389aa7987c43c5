//! Preview dispatch for arbor.
//!
//! [Dispatcher::render] turns the payload of a selected tree node into Markdown for the
//! preview pane. Files are routed by [classify]: text is read and fenced, images get a
//! metadata block, PDFs get a notice. Images that decode and PDFs are also handed to the
//! [Opener]. Every failure becomes inline text scoped to this one preview.

use crate::core::classify::{Classification, classify};
use crate::core::error::{DecodeError, ReadError};
use crate::core::listing::{DirSummary, Payload, summarize_dir};
use crate::core::opener::Opener;
use crate::ui::icons::{GlyphStyle, with_glyph};

use image::{ColorType, ImageDecoder, ImageFormat, ImageReader};

use std::fmt::Write as _;
use std::fs;
use std::io::Read as _;
use std::path::Path;

/// Characters CommonMark would read as markup inside a name or message.
const MARKDOWN_SPECIAL: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '#', '!', '|'];

/// Default number of names shown per section of a directory summary.
pub const DEFAULT_SUMMARY_LIMIT: usize = 10;

/// Markdown produced for the preview pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedContent(String);

impl RenderedContent {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self(markdown.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tunables for [Dispatcher], taken from the `[general]` and `[display]` config.
#[derive(Debug, Clone, Copy)]
pub struct PreviewOptions {
    pub summary_limit: usize,
    pub glyphs: GlyphStyle,
    pub open_external: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            glyphs: GlyphStyle::Emoji,
            open_external: true,
        }
    }
}

/// Header facts read from an image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub mode: &'static str,
}

/// Routes a selected payload to the matching renderer.
pub struct Dispatcher<'a> {
    opener: &'a dyn Opener,
    options: PreviewOptions,
}

impl<'a> Dispatcher<'a> {
    pub fn new(opener: &'a dyn Opener, options: PreviewOptions) -> Self {
        Self { opener, options }
    }

    /// Renders the preview for `payload`.
    ///
    /// May hand the file to the opener; the returned content is complete either way.
    pub fn render(&self, payload: &Payload) -> RenderedContent {
        match payload {
            Payload::Denied | Payload::None => RenderedContent::empty(),
            Payload::Directory(path) => self.render_directory(path),
            Payload::File(path) => self.render_file(path),
        }
    }

    fn render_file(&self, path: &Path) -> RenderedContent {
        let class = classify(path);
        tracing::debug!(path = %path.display(), ?class, "rendering preview");

        match class {
            Classification::Text { language } => render_text(path, language),
            Classification::Image => self.render_image(path),
            Classification::Pdf => self.render_pdf(path),
            Classification::Opaque => RenderedContent::new(format!(
                "# {}\n\n*Preview not available for this file type.*",
                display_name(path)
            )),
        }
    }

    fn render_image(&self, path: &Path) -> RenderedContent {
        match read_image_info(path) {
            Ok(info) => {
                let mut md = format!("# {}\n\n", display_name(path));
                let _ = write!(
                    md,
                    "**Format:** {}\n\n**Size:** {}x{} px\n\n**Mode:** {}",
                    info.format, info.width, info.height, info.mode
                );
                if self.options.open_external {
                    md.push_str("\n\n👉 Opening image in system viewer...");
                    self.opener.open(path);
                }
                RenderedContent::new(md)
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "image decode failed");
                RenderedContent::new(format!(
                    "# {}\n\n**Error reading image:** {}",
                    display_name(path),
                    escape_markdown(&e.to_string())
                ))
            }
        }
    }

    fn render_pdf(&self, path: &Path) -> RenderedContent {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "pdf vanished before preview");
            return RenderedContent::new(format!(
                "# {}\n\n**Error reading file:** no longer exists",
                display_name(path)
            ));
        }

        let mut md = format!(
            "# {}\n\n*PDF preview not supported in terminal.*",
            display_name(path)
        );
        if self.options.open_external {
            md.push_str("\n\n👉 Opening PDF externally...");
            self.opener.open(path);
        }
        RenderedContent::new(md)
    }

    fn render_directory(&self, path: &Path) -> RenderedContent {
        match summarize_dir(path) {
            Ok(summary) => RenderedContent::new(format_summary(path, &summary, &self.options)),
            Err(e) => RenderedContent::new(format!(
                "# {}\n\n**Error accessing directory:** {}",
                escape_markdown(&path.display().to_string()),
                escape_markdown(&e.to_string())
            )),
        }
    }
}

/// Reads the whole file, replacing invalid UTF-8, and fences it with `language`.
fn render_text(path: &Path, language: &str) -> RenderedContent {
    match read_text(path) {
        Ok(content) => {
            let fence = fence_for(&content);
            RenderedContent::new(format!(
                "# {}\n\n{fence}{}\n{}\n{fence}",
                display_name(path),
                language,
                content,
            ))
        }
        Err(e) => RenderedContent::new(format!(
            "# {}\n\n**Error reading file:** {}",
            display_name(path),
            escape_markdown(&e.to_string())
        )),
    }
}

pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Backtick fence one longer than the longest backtick run in `content`, at least three.
fn fence_for(content: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in content.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

/// Reads format, dimensions and colour mode from the image header without decoding pixels.
pub fn read_image_info(path: &Path) -> Result<ImageInfo, DecodeError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format().ok_or(DecodeError::UnknownFormat)?;
    let decoder = reader.into_decoder()?;
    let (width, height) = decoder.dimensions();
    let mode = if is_paletted(path, format)? {
        "P"
    } else {
        color_mode(decoder.color_type())
    };

    Ok(ImageInfo {
        format: format_name(format),
        width,
        height,
        mode,
    })
}

/// Whether the file stores indexed colour. The decoder expands palettes to RGB(A), so
/// this looks at the container: GIF is always indexed, PNG says so in its IHDR chunk.
fn is_paletted(path: &Path, format: ImageFormat) -> Result<bool, DecodeError> {
    match format {
        ImageFormat::Gif => Ok(true),
        ImageFormat::Png => {
            // signature (8) + chunk length (4) + "IHDR" (4) + width, height, bit depth
            const COLOR_TYPE_OFFSET: usize = 25;
            const INDEXED: u8 = 3;

            let mut header = [0u8; COLOR_TYPE_OFFSET + 1];
            fs::File::open(path)?.read_exact(&mut header)?;
            Ok(header[COLOR_TYPE_OFFSET] == INDEXED)
        }
        _ => Ok(false),
    }
}

fn format_name(format: ImageFormat) -> String {
    format!("{:?}", format).to_uppercase()
}

/// Short colour-mode names, in the style image tools print them.
fn color_mode(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "I;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;F",
        ColorType::Rgba32F => "RGBA;F",
        _ => "unknown",
    }
}

fn format_summary(path: &Path, summary: &DirSummary, options: &PreviewOptions) -> String {
    let mut md = format!(
        "# Directory: {}\n\n",
        escape_markdown(&path.display().to_string())
    );
    let _ = write!(md, "**Total items:** {}\n\n", summary.total);

    if !summary.dirs.is_empty() {
        md.push_str("## Directories:\n");
        push_names(&mut md, &summary.dirs, true, "directories", options);
    }

    if !summary.files.is_empty() {
        md.push_str("\n## Files:\n");
        push_names(&mut md, &summary.files, false, "files", options);
    }
    md
}

fn push_names(md: &mut String, names: &[String], is_dir: bool, noun: &str, options: &PreviewOptions) {
    let limit = options.summary_limit;
    for name in names.iter().take(limit) {
        let name = escape_markdown(name);
        let _ = writeln!(md, "- {}", with_glyph(options.glyphs, &name, is_dir));
    }
    if names.len() > limit {
        let _ = writeln!(md, "- ... and {} more {}", names.len() - limit, noun);
    }
}

fn display_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    escape_markdown(&name)
}

/// Backslash-escapes `text` so it renders literally in a heading, list item or label.
///
/// A leading `-`/`+` or `<digits>.`/`<digits>)` is escaped too, so a bare name in a
/// list item never opens a nested list.
pub fn escape_markdown(text: &str) -> String {
    let digits = text.chars().take_while(char::is_ascii_digit).count();
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        let list_marker = (i == 0 && matches!(c, '-' | '+'))
            || (i == digits && digits > 0 && matches!(c, '.' | ')'));
        if list_marker || MARKDOWN_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
