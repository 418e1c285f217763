//! Declarative animation descriptions.
//!
//! Hosts that define their animations in data (a theme file, an asset
//! manifest, …) can describe one as JSON and build an [`Animation`] from
//! it.  Every field is optional — `{}` is a valid description and yields
//! the default animation.
//!
//! # Example
//!
//! ```json
//! {
//!   "curve": "OutCubic",
//!   "playback": "Loop",
//!   "speed": 0.05,
//!   "paused": false,
//!   "progress": 0.0
//! }
//! ```

use crate::animation::{Animation, DEFAULT_SPEED};
use crate::ease::Curve;
use crate::playback::Playback;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A serializable description of an [`Animation`] over a built-in
/// [`Curve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// The easing curve.
    pub curve: Curve,
    /// The playback policy.
    pub playback: Playback,
    /// Suggested per-tick progress increment.
    pub speed: f64,
    /// Whether the animation starts paused.
    pub paused: bool,
    /// Starting progress.
    pub progress: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            curve: Curve::default(),
            playback: Playback::default(),
            speed: DEFAULT_SPEED,
            paused: false,
            progress: 0.0,
        }
    }
}

impl AnimationConfig {
    /// Load a description from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        debug!("loaded animation config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Build the described [`Animation`].
    pub fn build(&self) -> Animation<Curve> {
        Animation::builder(self.curve)
            .playback(self.playback)
            .paused(self.paused)
            .speed(self.speed)
            .progress(self.progress)
            .build()
    }
}

/// Error from loading or parsing an animation description file.
#[derive(Debug, thiserror::Error)]
#[error("animation config error: {0}")]
pub struct ConfigError(String);
