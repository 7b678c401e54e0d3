//! Damped-spring smoothing for jitter-free scalar animation.
//!
//! The integrator is semi-implicit Euler:
//!
//! ```text
//! a  = k * (target - p) - c * v
//! v' = v + a * dt
//! p' = p + v' * dt
//! ```
//!
//! Frame deltas are clamped to [`MAX_DT`] and integrated in sub-steps no longer than
//! [`MAX_SUBSTEP`], so a dropped frame cannot make a stiff spring blow up.

use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::math::{ensure_finite, ensure_positive, sanitize_dt};

/// Largest frame delta (seconds) a single tick will integrate.
pub const MAX_DT: f64 = 0.05;
/// Largest integration sub-step (seconds).
pub const MAX_SUBSTEP: f64 = 1.0 / 120.0;
/// Rest threshold used when a config does not name one.
pub const DEFAULT_REST_DELTA: f64 = 0.01;

fn default_rest_delta() -> f64 {
    DEFAULT_REST_DELTA
}

/// Stiffness, damping and rest threshold for a [`SmoothedSignal`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Distance and speed below which the spring snaps to its target.
    #[serde(default = "default_rest_delta")]
    pub rest_delta: f64,
}

impl SpringConfig {
    /// Build a config with [`DEFAULT_REST_DELTA`].
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            rest_delta: DEFAULT_REST_DELTA,
        }
    }

    /// Replace the rest threshold.
    pub const fn with_rest_delta(mut self, rest_delta: f64) -> Self {
        self.rest_delta = rest_delta;
        self
    }

    /// Check that every coefficient is usable.
    pub fn validate(&self) -> KinemaResult<()> {
        ensure_positive("spring stiffness", self.stiffness)?;
        ensure_finite("spring damping", self.damping)?;
        if self.damping < 0.0 {
            return Err(KinemaError::validation("spring damping must be >= 0"));
        }
        ensure_positive("spring rest_delta", self.rest_delta)?;
        Ok(())
    }
}

/// A scalar that follows its target through a damped spring.
///
/// Once the value is within `rest_delta` of the target and moving slower than `rest_delta`,
/// it snaps onto the target and stops integrating until the target changes.
#[derive(Clone, Debug)]
pub struct SmoothedSignal {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    settled: bool,
}

impl SmoothedSignal {
    /// Create a signal resting at zero.
    pub fn new(config: SpringConfig) -> KinemaResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            settled: true,
        })
    }

    /// Start at rest on `value` instead of zero.
    pub fn with_position(mut self, value: f64) -> Self {
        self.jump_to(value);
        self
    }

    /// The spring coefficients.
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Point the spring at a new target. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() || target == self.target {
            return;
        }
        self.target = target;
        self.settled = false;
    }

    /// Move to `value` immediately and rest there.
    pub fn jump_to(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
        self.settled = true;
    }

    /// Remount: forget all motion and rest on `value`.
    pub fn reset(&mut self, value: f64) {
        self.jump_to(value);
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if self.settled {
            return self.position;
        }

        let mut remaining = sanitize_dt(dt).min(MAX_DT);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            self.step(h);
            remaining -= h;
            if self.try_settle() {
                break;
            }
        }
        self.try_settle();
        self.position
    }

    fn step(&mut self, h: f64) {
        let SpringConfig {
            stiffness, damping, ..
        } = self.config;
        let accel = stiffness * (self.target - self.position) - damping * self.velocity;
        self.velocity += accel * h;
        self.position += self.velocity * h;
    }

    fn try_settle(&mut self) -> bool {
        let eps = self.config.rest_delta;
        if (self.target - self.position).abs() < eps && self.velocity.abs() < eps {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
        self.settled
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.position
    }

    /// Current velocity (units per second).
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current target.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// `true` once the spring has snapped onto its target.
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
