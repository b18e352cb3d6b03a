//! Configuration options for interpretation and lemma resolution.

use serde::{Deserialize, Serialize};

/// Options for the paradigm builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Mean shared-prefix ratio between singular and plural forms below which
    /// a paradigm is flagged as suppletive.
    pub suppletion_threshold: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            suppletion_threshold: 0.2,
        }
    }
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suppletion_threshold(mut self, threshold: f64) -> Self {
        self.suppletion_threshold = threshold;
        self
    }
}

/// Options for the lemma resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverOptions {
    /// Try the lowercase and title-case spellings before diacritic variants.
    /// Default: false.
    pub case_fallback: bool,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_fallback(mut self, enable: bool) -> Self {
        self.case_fallback = enable;
        self
    }
}
