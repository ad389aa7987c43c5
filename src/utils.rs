//! Miscellaneous utilities for arbor.
//!
//! [helpers] holds colour parsing, home-path shortening and config clamping,
//! [cli] the argument handling and [logging] the tracing setup.

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{clamp_summary_limit, get_home, parse_color, shorten_home_path};
