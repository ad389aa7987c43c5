//! Application state for arbor.
//!
//! - [tree]: the lazy tree model over the filesystem.
//! - [state]: [AppState], the controller driven by key presses.
//! - [nav], [preview]: cursor and preview pane state.
//! - [keymap]: key to [Action] mapping.

pub mod keymap;
pub mod nav;
pub mod preview;
pub mod state;
pub mod tree;

pub use keymap::{Action, Keymap};
pub use nav::NavState;
pub use preview::PreviewState;
pub use state::{AppState, KeypressResult, LayoutMetrics};
pub use tree::{ExpandOutcome, Expansion, Node, NodeId, TreeModel, TreeRow};
