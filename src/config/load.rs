//! The main config loading module for arbor.
//!
//! Handles loading and deserializing settings from `arbor.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! Also writes the default config for `arbor --init`.

use crate::config::{Display, General, InternalGeneral, Keys, Theme};
use crate::core::preview::PreviewOptions;
use crate::utils::get_home;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Raw configuration as read from the toml file.
/// Converted into [Config] once parsed.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
    keys: Keys,
}

/// Processed configuration used by arbor.
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    theme: Theme,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display,
            theme: raw.theme,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Loads the configuration from [Config::default_path].
    ///
    /// Called by the entry point at startup. A missing or unparsable file yields the
    /// internal defaults, with a notice on stderr.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            eprintln!(
                "No arbor.toml config file found. Using internal defaults. (Tip: run 'arbor --init' to generate a config file.)"
            );
            return Self::default();
        }
        Self::load_from(&path)
    }

    /// Loads `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "config loaded");
                    config
                }
                Err(e) => {
                    eprintln!("Error parsing config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Config::from)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Options handed to the preview dispatcher.
    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            summary_limit: self.general.summary_limit(),
            glyphs: self.display.icons(),
            open_external: self.general.open_external(),
        }
    }

    /// Determine the default configuration file path.
    /// Checks the ARBOR_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/arbor/arbor.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("ARBOR_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("arbor/arbor.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/arbor/arbor.toml");
        }
        PathBuf::from("arbor.toml")
    }

    /// Writes the default configuration file to `path`.
    /// Fails if the file already exists.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

const DEFAULT_TOML: &str = r##"# arbor.toml - default configuration for arbor

# Note:
# Commented values are the internal defaults of arbor
# Use hex codes (eg. "#RRGGBB") or terminal colors ("cyan")

[general]
# summary_limit = 10
# open_external = true

[display]
# borders = "split"
# border_shape = "square"
# titles = true
# icons = "emoji"          # "emoji", "nerd" or "none"
# header = true
# footer = true
# wrap = true

# [display.layout]
# tree = 1
# preview = 2

# [theme.accent]
# fg = "default"
# bg = "default"

# [theme.selection]
# fg = "default"
# bg = "default"

# [theme.directory]
# fg = "blue"

# [theme.entry]
# fg = "default"

# [theme.denied]
# fg = "red"

# [theme.path]
# fg = "magenta"

# [theme.preview]
# fg = "default"

# [theme.code]
# fg = "yellow"

# [theme.heading]
# fg = "cyan"

# [theme.status_line]
# fg = "darkgray"

# [keys]
# go_up = ["k", "up"]
# go_down = ["j", "down"]
# go_to_top = ["g", "home"]
# go_to_bottom = ["G", "end"]
# expand = ["l", "right"]
# collapse = ["h", "left"]
# select = ["enter"]
# scroll_preview_up = ["<c-u>", "pageup"]
# scroll_preview_down = ["<c-d>", "pagedown"]
# quit = ["q"]
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generated_default_parses() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("nested/arbor.toml");
        Config::generate_default(&path)?;

        let config = Config::load_from(&path);
        assert_eq!(config.general().summary_limit(), 10);
        assert!(config.display().is_split());

        let again = Config::generate_default(&path);
        assert_eq!(
            again.map_err(|e| e.kind()).err(),
            Some(io::ErrorKind::AlreadyExists)
        );
        Ok(())
    }

    #[test]
    fn sections_flow_into_preview_options() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::parse(
            r#"
            [general]
            summary_limit = 3
            open_external = false

            [display]
            icons = "none"
            "#,
        )?;
        let opts = config.preview_options();
        assert_eq!(opts.summary_limit, 3);
        assert!(!opts.open_external);
        assert_eq!(opts.glyphs, crate::ui::icons::GlyphStyle::None);
        Ok(())
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("arbor.toml");
        fs::write(&path, "[general\nsummary_limit = ")?;

        let config = Config::load_from(&path);
        assert_eq!(config.general().summary_limit(), 10);
        assert!(Config::parse("[display]\nborders = \"wavy\"").is_err());
        Ok(())
    }
}
