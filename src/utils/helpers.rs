//! Helpers for arbor.
//!
//! - Color parsing from names or hex codes
//! - Home directory lookup and shortening of paths under it to "~"
//! - Clamping of the directory-summary limit

use ratatui::style::Color;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Smallest number of names listed per summary section.
pub const MIN_SUMMARY_LIMIT: usize = 1;
/// Largest number of names listed per summary section.
pub const MAX_SUMMARY_LIMIT: usize = 1000;

/// Parses a string (color name or hex) into a ratatui::style::Color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB).
/// Anything else is [Color::Reset].
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => s.strip_prefix('#').and_then(parse_hex).unwrap_or(Color::Reset),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let full = match hex.len() {
        6 => hex.to_string(),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let rgb = u32::from_str_radix(&full, 16).ok()?;
    Some(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

#[inline]
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Shortens the home directory prefix to "~". Used by the header path line.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

/// Clamps the summary limit into [MIN_SUMMARY_LIMIT]..=[MAX_SUMMARY_LIMIT].
pub fn clamp_summary_limit(value: usize) -> usize {
    let clamped = value.clamp(MIN_SUMMARY_LIMIT, MAX_SUMMARY_LIMIT);
    if clamped != value {
        eprintln!(
            "[Warning] summary_limit={} out of range ({}..={}), clamped to {}",
            value, MIN_SUMMARY_LIMIT, MAX_SUMMARY_LIMIT, clamped
        );
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_hex() {
        assert_eq!(parse_color("Cyan"), Color::Cyan);
        assert_eq!(parse_color("default"), Color::Reset);
        assert_eq!(parse_color("#ff8000"), Color::Rgb(255, 128, 0));
        assert_eq!(parse_color("#abc"), Color::Rgb(0xaa, 0xbb, 0xcc));
        assert_eq!(parse_color("#12345"), Color::Reset);
        assert_eq!(parse_color("chartreuse"), Color::Reset);
    }

    #[test]
    fn clamps_summary_limit() {
        assert_eq!(clamp_summary_limit(0), 1);
        assert_eq!(clamp_summary_limit(10), 10);
        assert_eq!(clamp_summary_limit(5000), 1000);
    }

    #[test]
    fn home_is_shortened() {
        let Some(home) = get_home() else {
            return;
        };
        assert_eq!(shorten_home_path(&home), "~");
        let inside = home.join("projects");
        assert_eq!(
            shorten_home_path(&inside),
            format!("~{}projects", MAIN_SEPARATOR)
        );
        assert_eq!(shorten_home_path("/definitely/elsewhere"), "/definitely/elsewhere");
    }
}
