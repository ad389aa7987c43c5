//! The general configuration settings for arbor.
//!
//! [General] is deserialized from the `[general]` table of arbor.toml and turned into
//! [InternalGeneral], with out-of-range values clamped.

use crate::core::preview::DEFAULT_SUMMARY_LIMIT;
use crate::utils::clamp_summary_limit;

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct General {
    #[serde(default = "default_summary_limit")]
    summary_limit: usize,
    open_external: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            open_external: true,
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    summary_limit: usize,
    open_external: bool,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        Self {
            summary_limit: clamp_summary_limit(g.summary_limit),
            open_external: g.open_external,
        }
    }
}

impl InternalGeneral {
    /// Names listed per section of a directory summary before "... and N more".
    #[inline]
    pub fn summary_limit(&self) -> usize {
        self.summary_limit
    }

    /// Whether image and PDF previews launch the system viewer.
    #[inline]
    pub fn open_external(&self) -> bool {
        self.open_external
    }
}

fn default_summary_limit() -> usize {
    DEFAULT_SUMMARY_LIMIT
}
