//! Input configuration options for arbor
//!
//! This module defines the `[keys]` table of arbor.toml: for every action, the list of
//! key strings bound to it.

use serde::Deserialize;

/// Input configuration options of all actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    go_up: Vec<String>,
    go_down: Vec<String>,
    go_to_top: Vec<String>,
    go_to_bottom: Vec<String>,
    expand: Vec<String>,
    collapse: Vec<String>,
    select: Vec<String>,
    scroll_preview_up: Vec<String>,
    scroll_preview_down: Vec<String>,
    quit: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    go_up,
    go_down,
    go_to_top,
    go_to_bottom,
    expand,
    collapse,
    select,
    scroll_preview_up,
    scroll_preview_down,
    quit,
);

impl Default for Keys {
    fn default() -> Self {
        Keys {
            go_up: vec!["k".into(), "Up".into()],
            go_down: vec!["j".into(), "Down".into()],
            go_to_top: vec!["g".into(), "Home".into()],
            go_to_bottom: vec!["G".into(), "End".into()],
            expand: vec!["l".into(), "Right".into()],
            collapse: vec!["h".into(), "Left".into()],
            select: vec!["Enter".into()],
            scroll_preview_up: vec!["<c-u>".into(), "PageUp".into()],
            scroll_preview_down: vec!["<c-d>".into(), "PageDown".into()],
            quit: vec!["q".into()],
        }
    }
}
