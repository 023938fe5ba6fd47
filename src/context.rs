// src/context.rs
// Shared, read-only state handed to every cascade stage.

use std::fmt;
use std::sync::Arc;

use crate::{config::Thresholds, statistical::StatisticalDetector};

/// Runtime context passed to every detection stage.
///
/// Contains:
/// - `thresholds`: the cascade constants
/// - `statistical`: the model used for ambiguous scripts, shared across calls
#[derive(Clone)]
pub struct Context {
    pub thresholds: Thresholds,
    pub statistical: Arc<dyn StatisticalDetector>,
}

impl Context {
    pub fn new(thresholds: Thresholds, statistical: Arc<dyn StatisticalDetector>) -> Self {
        Self {
            thresholds,
            statistical,
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}
