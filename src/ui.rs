//! Terminal UI for arbor.
//!
//! [render] draws a frame from the app state; [panes] holds the tree and preview panes,
//! [markdown] turns preview Markdown into styled lines, [icons] the label glyphs and
//! [widgets] the small shared pieces.

pub mod icons;
pub mod markdown;
pub mod panes;
pub mod render;
pub mod widgets;

pub use render::render;
