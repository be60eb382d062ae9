use glide_core::{GlideError, Result};
use serde::{Deserialize, Serialize};

use crate::gestures::MIN_SWIPE_REQUIRED;

/// Tunables for a [`Carousel`](crate::Carousel). The defaults reproduce the
/// stock behaviour: 40 px to commit a swipe, 300 ms snap transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CarouselConfig {
    /// Absolute distance in pixels a drag must exceed to move to the
    /// neighbouring slide. Does not scale with slide width.
    pub swipe_threshold: f32,
    /// Duration of the snap transition in the stylesheet.
    pub transition_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: MIN_SWIPE_REQUIRED,
            transition_ms: 300,
        }
    }
}

impl CarouselConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GlideError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(GlideError::Config(format!(
                "swipeThreshold must be a finite, non-negative number of pixels (got {})",
                self.swipe_threshold
            )));
        }
        Ok(())
    }
}
