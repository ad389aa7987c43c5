//! Configuration for arbor, read from arbor.toml.
//!
//! [load] finds and parses the file; the other modules hold one table each.

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use display::Display;
pub use general::InternalGeneral;
pub use input::Keys;
pub use load::Config;
pub use theme::Theme;

pub(crate) use general::General;
