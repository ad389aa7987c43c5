//! Core runtime logic for arbor.
//!
//! The non-UI pieces used by the application:
//! - [classify]: extension and MIME based file classification.
//! - [listing]: shallow directory listing and directory summaries.
//! - [roots]: host drive enumeration.
//! - [preview]: the preview dispatcher producing Markdown for a payload.
//! - [opener]: hand-off of files to the system viewer.
//! - [error]: the error types shared by the above.
//! - [terminal]: terminal setup/teardown and the crossterm/ratatui event loop.

pub mod classify;
pub mod error;
pub mod listing;
pub mod opener;
pub mod preview;
pub mod roots;
pub mod terminal;

pub use classify::{Classification, classify};
pub use listing::{DirSummary, ListingEntry, Payload, list_dir, summarize_dir};
pub use opener::{Opener, SystemOpener};
pub use preview::{Dispatcher, PreviewOptions, RenderedContent};
pub use roots::{HostRoots, RootSource};
