//! Reading-progress indicators: the top bar with its smoke trail and the
//! bottom ring with its orbiting car.

use std::f64::consts::TAU;

use crate::animation::curve::{CurveMapper, Span};
use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::foundation::error::KinemaResult;
use crate::foundation::math::{Rng64, ensure_positive};

/// Smoke puff parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SmokePuff {
    x: Tween,
    y: Tween,
    scale: Tween,
    opacity: Tween,
}

/// One evaluated smoke puff.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PuffFrame {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl SmokePuff {
    fn generate(index: usize, rng: &mut Rng64) -> KinemaResult<Self> {
        let delay = index as f64 * 0.2;
        let duration = 0.8 + rng.next_f64_01() * 0.5;
        let track = |values: [f64; 2]| -> KinemaResult<Tween> {
            Ok(Tween::looping(values, duration)?
                .with_delay(delay)
                .with_ease(Ease::EASE_IN_OUT))
        };
        Ok(Self {
            x: track([-10.0, -40.0 - rng.next_f64_01() * 20.0])?,
            y: track([
                (rng.next_f64_01() - 0.5) * 10.0,
                (rng.next_f64_01() - 0.5) * 30.0,
            ])?,
            scale: track([1.0, 2.0 + rng.next_f64_01()])?,
            opacity: track([0.8, 0.0])?,
        })
    }

    /// Sample at `elapsed` seconds on the page clock.
    pub fn sample(&self, elapsed: f64) -> PuffFrame {
        PuffFrame {
            x: self.x.sample(elapsed),
            y: self.y.sample(elapsed),
            scale: self.scale.sample(elapsed),
            opacity: self.opacity.sample(elapsed),
        }
    }

    /// Seconds per cycle.
    pub fn duration(&self) -> f64 {
        self.x.duration()
    }
}

/// Top progress bar.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressBar {
    puffs: Vec<SmokePuff>,
}

/// Output of [`ProgressBar::frame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BarFrame {
    /// Horizontal fill scale, origin at the left edge.
    pub scale_x: f64,
    pub smoke: Vec<PuffFrame>,
}

impl ProgressBar {
    /// Draw `puffs` smoke trails from a deterministic generator seeded with `seed`.
    pub fn new(seed: u64, puffs: usize) -> KinemaResult<Self> {
        let mut rng = Rng64::new(seed);
        let puffs = (0..puffs)
            .map(|i| SmokePuff::generate(i, &mut rng))
            .collect::<KinemaResult<Vec<_>>>()?;
        Ok(Self { puffs })
    }

    pub fn puffs(&self) -> &[SmokePuff] {
        &self.puffs
    }

    /// Bar state for a smoothed progress value.
    pub fn frame(&self, smoothed: f64, elapsed: f64) -> BarFrame {
        BarFrame {
            scale_x: smoothed,
            smoke: self.puffs.iter().map(|p| p.sample(elapsed)).collect(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_radius() -> f64 {
    40.0
}

/// Bottom ring settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Circle radius in viewBox units.
    #[serde(default = "default_radius")]
    pub radius: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            radius: default_radius(),
        }
    }
}

impl RingConfig {
    pub fn validate(&self) -> KinemaResult<()> {
        ensure_positive("ring radius", self.radius)?;
        Ok(())
    }
}

/// Bottom progress ring.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressRing {
    path_length: f64,
    mapper: CurveMapper,
    glow_scale: Tween,
    glow_opacity: Tween,
    flame_height: Tween,
    flame_opacity: Tween,
}

/// Output of [`ProgressRing::frame`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RingFrame {
    pub path_length: f64,
    /// Stroke dash offset: `path_length` when empty, `0` when full.
    pub stroke_dash_offset: f64,
    /// Orbit angle of the car, clockwise from 12 o'clock.
    pub rotation_deg: f64,
    /// Rounded percentage label.
    pub percent: u8,
    pub glow_scale: f64,
    pub glow_opacity: f64,
    pub flame_height_px: f64,
    pub flame_opacity: f64,
}

impl ProgressRing {
    pub fn new(config: RingConfig) -> KinemaResult<Self> {
        config.validate()?;
        Ok(Self {
            path_length: TAU * config.radius,
            mapper: CurveMapper::new(Span::UNIT)?,
            glow_scale: Tween::looping([1.0, 1.2, 1.0], 2.0)?.with_ease(Ease::EASE_IN_OUT),
            glow_opacity: Tween::looping([0.5, 0.8, 0.5], 2.0)?.with_ease(Ease::EASE_IN_OUT),
            flame_height: Tween::looping([10.0, 16.0, 10.0], 0.1)?.with_ease(Ease::EASE_IN_OUT),
            flame_opacity: Tween::looping([0.8, 1.0, 0.8], 0.1)?.with_ease(Ease::EASE_IN_OUT),
        })
    }

    pub fn path_length(&self) -> f64 {
        self.path_length
    }

    /// Ring state for a smoothed progress value.
    pub fn frame(&self, smoothed: f64, elapsed: f64) -> RingFrame {
        let ratio = self.mapper.ratio(smoothed);
        RingFrame {
            path_length: self.path_length,
            stroke_dash_offset: ratio.map(Span::new(self.path_length, 0.0)),
            rotation_deg: ratio.map(Span::new(0.0, 360.0)),
            percent: (ratio.value() * 100.0).round() as u8,
            glow_scale: self.glow_scale.sample(elapsed),
            glow_opacity: self.glow_opacity.sample(elapsed),
            flame_height_px: self.flame_height.sample(elapsed),
            flame_opacity: self.flame_opacity.sample(elapsed),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/progress.rs"]
mod tests;
