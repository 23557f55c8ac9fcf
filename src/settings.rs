//! Session settings
//!
//! Supplied once when a session is built. Loaded from JSON so the field size
//! can follow whatever surface the host renders into.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, MAX_FIELD_HEIGHT};
use crate::{GameError, Tuning};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play field width (columns respawn at this x)
    pub field_width: f32,
    /// Play field height (columns are sized from this)
    pub field_height: f32,
    /// RNG seed; `None` draws a fresh one per session
    pub seed: Option<u64>,
    /// End the run when the actor falls fully below the field
    pub floor_is_fatal: bool,
    /// Physics and difficulty values
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            seed: None,
            floor_is_fatal: false,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Default settings for a field of the given size
    pub fn with_field(field_width: f32, field_height: f32) -> Self {
        Self {
            field_width,
            field_height,
            ..Self::default()
        }
    }

    /// Builder-style seed override
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Largest top column height a recycle can draw
    pub fn max_top_height(&self) -> f32 {
        (self.field_height / 2.0).floor()
    }

    /// Check the field can always hold a column pair with its gap
    pub fn validate(&self) -> Result<(), GameError> {
        self.tuning.validate()?;

        for (field, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::invalid(field, format!("must be > 0, got {value}")));
            }
        }

        if self.field_height > MAX_FIELD_HEIGHT {
            return Err(GameError::invalid(
                "field_height",
                format!(
                    "must be at most {MAX_FIELD_HEIGHT}, got {}",
                    self.field_height
                ),
            ));
        }

        let t = &self.tuning;
        let max_top = self.max_top_height();
        if max_top < t.min_top_height {
            return Err(GameError::invalid(
                "field_height",
                format!(
                    "half the field ({max_top}) is below the minimum top column ({})",
                    t.min_top_height
                ),
            ));
        }
        // Tallest top column plus the gap must leave a non-negative bottom column
        if self.field_height - max_top - t.gap < 0.0 {
            return Err(GameError::invalid(
                "field_height",
                format!(
                    "{} cannot fit a {} top column plus a {} gap (need at least {})",
                    self.field_height,
                    max_top,
                    t.gap,
                    2.0 * t.gap
                ),
            ));
        }
        if t.actor_start_x + t.actor_width > self.field_width {
            return Err(GameError::invalid(
                "field_width",
                format!(
                    "actor at x={} with width {} does not fit in {}",
                    t.actor_start_x, t.actor_width, self.field_width
                ),
            ));
        }

        Ok(())
    }

    /// Seed to use for a new session
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            use rand::Rng;
            rand::rng().random()
        })
    }

    /// Parse settings from JSON (missing keys fall back to defaults)
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::Settings(e.to_string()))
    }

    /// Serialize settings as pretty JSON
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::Settings(e.to_string()))
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| GameError::Settings(format!("{}: {e}", path.display())))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .map_err(|e| GameError::Settings(format!("{}: {e}", path.display())))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
