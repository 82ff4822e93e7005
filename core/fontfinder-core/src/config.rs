//! Finder configuration (made by FontLab https://www.fontlab.com/)

use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};
use crate::text::ScriptAnalyzer;

/// Tunables for [`crate::finder::FontFinder`]. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Maximum number of characters examined by `analyse`.
    pub max_analyse_chars: usize,
    /// Select Hong Kong rather than Taiwanese fonts for Traditional Chinese.
    pub zh_hant_use_hk: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_analyse_chars: 2048,
            zh_hant_use_hk: false,
        }
    }
}

impl FinderConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FinderError::Config)
    }

    pub fn analyzer(&self) -> ScriptAnalyzer {
        ScriptAnalyzer::new(self.max_analyse_chars).zh_hant_use_hk(self.zh_hant_use_hk)
    }
}
