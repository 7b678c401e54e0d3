//! Frosted-glass cards whose colour blobs drift toward the pointer.

use crate::animation::ease::Ease;
use crate::animation::looping::{Direction, LoopingMotion};
use crate::animation::spring::{SmoothedSignal, SpringConfig};
use crate::animation::tween::Tween;
use crate::foundation::core::{Rgb8, Vec2};
use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::math::{ensure_finite, ensure_positive};

/// One blurred colour blob behind the glass.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlobSpec {
    pub color: Rgb8,
    /// Diameter in px.
    pub size_px: f64,
    /// Multiplier applied to the smoothed pointer offset (negative moves away).
    pub follow: f64,
    /// Seconds per full turn.
    pub spin_secs: f64,
    pub spin: Direction,
    /// Scale reached mid-pulse.
    pub pulse_peak: f64,
    pub pulse_secs: f64,
}

impl BlobSpec {
    fn validate(&self) -> KinemaResult<()> {
        ensure_positive("blob size_px", self.size_px)?;
        ensure_finite("blob follow", self.follow)?;
        ensure_positive("blob spin_secs", self.spin_secs)?;
        ensure_positive("blob pulse_peak", self.pulse_peak)?;
        ensure_positive("blob pulse_secs", self.pulse_secs)?;
        Ok(())
    }
}

/// Shared settings for every glass card on the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlassConfig {
    pub spring: SpringConfig,
    pub blobs: Vec<BlobSpec>,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::new(150.0, 25.0),
            blobs: vec![
                BlobSpec {
                    color: Rgb8::new(0xD2, 0xE8, 0xFE),
                    size_px: 320.0,
                    follow: 0.8,
                    spin_secs: 20.0,
                    spin: Direction::Forward,
                    pulse_peak: 1.1,
                    pulse_secs: 8.0,
                },
                BlobSpec {
                    color: Rgb8::new(0xFF, 0xF4, 0xD2),
                    size_px: 384.0,
                    follow: -0.5,
                    spin_secs: 25.0,
                    spin: Direction::Backward,
                    pulse_peak: 1.2,
                    pulse_secs: 10.0,
                },
                BlobSpec {
                    color: Rgb8::new(0xFF, 0xE4, 0xE8),
                    size_px: 288.0,
                    follow: 0.3,
                    spin_secs: 15.0,
                    spin: Direction::Forward,
                    pulse_peak: 1.3,
                    pulse_secs: 12.0,
                },
            ],
        }
    }
}

impl GlassConfig {
    pub fn validate(&self) -> KinemaResult<()> {
        self.spring.validate()?;
        if self.blobs.is_empty() {
            return Err(KinemaError::validation("glass card needs at least one blob"));
        }
        self.blobs.iter().try_for_each(BlobSpec::validate)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Blob {
    spec: BlobSpec,
    spin: LoopingMotion,
    pulse: Tween,
}

impl Blob {
    fn new(spec: BlobSpec) -> KinemaResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            // Offset by half a turn so the centred position starts at 0°.
            spin: LoopingMotion::new(360.0 / spec.spin_secs, 180.0, spec.spin, 360.0)?,
            pulse: Tween::looping([1.0, spec.pulse_peak, 1.0], spec.pulse_secs)?
                .with_ease(Ease::EASE_IN_OUT),
        })
    }
}

/// Evaluated blob.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BlobFrame {
    pub color: Rgb8,
    pub size_px: f64,
    /// Offset from the card centre in px.
    pub offset: Vec2,
    pub rotation_deg: f64,
    pub scale: f64,
}

/// Output of [`GlassCard::tick`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GlassFrame {
    /// Spring-filtered pointer offset from the card centre.
    pub pointer: Vec2,
    pub blobs: Vec<BlobFrame>,
}

/// A glass card tracking the pointer across its surface.
#[derive(Clone, Debug)]
pub struct GlassCard {
    x: SmoothedSignal,
    y: SmoothedSignal,
    blobs: Vec<Blob>,
}

impl GlassCard {
    pub fn new(config: &GlassConfig) -> KinemaResult<Self> {
        config.validate()?;
        Ok(Self {
            x: SmoothedSignal::new(config.spring)?,
            y: SmoothedSignal::new(config.spring)?,
            blobs: config
                .blobs
                .iter()
                .copied()
                .map(Blob::new)
                .collect::<KinemaResult<Vec<_>>>()?,
        })
    }

    /// Pointer offset from the card centre, or `None` once the pointer leaves.
    pub fn set_pointer(&mut self, offset: Option<Vec2>) {
        let target = offset.unwrap_or(Vec2::ZERO);
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn tick(&mut self, dt: f64, elapsed: f64) -> GlassFrame {
        let pointer = Vec2::new(self.x.tick(dt), self.y.tick(dt));
        GlassFrame {
            pointer,
            blobs: self
                .blobs
                .iter()
                .map(|b| BlobFrame {
                    color: b.spec.color,
                    size_px: b.spec.size_px,
                    offset: pointer * b.spec.follow,
                    rotation_deg: b.spin.position(elapsed),
                    scale: b.pulse.sample(elapsed),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/glass.rs"]
mod tests;
