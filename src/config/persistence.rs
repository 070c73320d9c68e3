//! Sample log output section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Sample log settings section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogSection {
    /// Output file for `.gati` sample logs
    #[serde(default = "defaults::log_path")]
    pub path: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            path: defaults::log_path(),
        }
    }
}
