//! Page configuration: every tunable table, with the lesson page's constants as defaults.

use crate::animation::spring::SpringConfig;
use crate::foundation::error::{KinemaError, KinemaResult};
use crate::scene::city::CityConfig;
use crate::scene::glass::GlassConfig;
use crate::scene::header::HeaderConfig;
use crate::scene::perspective::PerspectiveConfig;
use crate::scene::progress::RingConfig;

/// Everything needed to build a [`Page`](crate::Page).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Spring smoothing raw scroll progress for both indicators.
    pub progress_spring: SpringConfig,
    /// Seed for the progress bar's smoke trail.
    pub smoke_seed: u64,
    pub smoke_puffs: usize,
    pub ring: RingConfig,
    pub header: HeaderConfig,
    pub glass: GlassConfig,
    pub city: CityConfig,
    pub perspective: PerspectiveConfig,
    /// Video references in page order (bare ids or URLs).
    pub videos: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            progress_spring: SpringConfig::new(100.0, 30.0).with_rest_delta(0.001),
            smoke_seed: 0x5EED,
            smoke_puffs: 5,
            ring: RingConfig::default(),
            header: HeaderConfig::default(),
            glass: GlassConfig::default(),
            city: CityConfig::default(),
            perspective: PerspectiveConfig::default(),
            videos: vec!["jggrSjc1if0".to_owned(), "YshnFne48pw".to_owned()],
        }
    }
}

impl PageConfig {
    /// Parse JSON (missing fields take their defaults) and validate.
    pub fn from_json_str(s: &str) -> KinemaResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> KinemaResult<()> {
        self.progress_spring.validate()?;
        if self.smoke_puffs > 64 {
            return Err(KinemaError::validation("smoke_puffs must be <= 64"));
        }
        self.ring.validate()?;
        self.header.validate()?;
        self.glass.validate()?;
        self.city.validate()?;
        self.perspective.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
