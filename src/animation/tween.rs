//! Keyframed tweens on the page clock.
//!
//! Keyframes are evenly spaced over one cycle and eased per segment. A tween holds its first
//! keyframe until `delay` has elapsed; a one-shot tween then holds its last keyframe.

use crate::animation::ease::Ease;
use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::math::{ensure_finite, ensure_positive, lerp, wrap};

/// How often a tween plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    /// Play one cycle and hold the last keyframe.
    Once,
    /// Restart at the first keyframe after every cycle.
    #[default]
    Forever,
}

/// Serializable description of a [`Tween`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TweenSpec {
    /// Keyframe values, evenly spaced across one cycle.
    pub values: Vec<f64>,
    /// Cycle length in seconds.
    pub duration: f64,
    /// Seconds before the first cycle starts.
    #[serde(default)]
    pub delay: f64,
    /// Easing applied inside every segment.
    #[serde(default)]
    pub ease: Ease,
    /// Repeat behaviour.
    #[serde(default)]
    pub repeat: Repeat,
}

/// A validated keyframe tween.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    values: Vec<f64>,
    duration: f64,
    delay: f64,
    ease: Ease,
    repeat: Repeat,
}

impl Tween {
    /// Validate a spec.
    pub fn new(spec: TweenSpec) -> KinemaResult<Self> {
        if spec.values.is_empty() {
            return Err(KinemaError::animation("tween needs at least one keyframe"));
        }
        if spec.values.iter().any(|v| !v.is_finite()) {
            return Err(KinemaError::animation("tween keyframes must be finite"));
        }
        let duration = ensure_positive("tween duration", spec.duration)?;
        let delay = ensure_finite("tween delay", spec.delay)?;
        if delay < 0.0 {
            return Err(KinemaError::validation("tween delay must be >= 0"));
        }
        Ok(Self {
            values: spec.values,
            duration,
            delay,
            ease: spec.ease,
            repeat: spec.repeat,
        })
    }

    /// A repeating tween with linear easing and no delay.
    pub fn looping(values: impl Into<Vec<f64>>, duration: f64) -> KinemaResult<Self> {
        Self::new(TweenSpec {
            values: values.into(),
            duration,
            delay: 0.0,
            ease: Ease::Linear,
            repeat: Repeat::Forever,
        })
    }

    /// A one-shot tween with linear easing and no delay.
    pub fn once(values: impl Into<Vec<f64>>, duration: f64) -> KinemaResult<Self> {
        Self::new(TweenSpec {
            values: values.into(),
            duration,
            delay: 0.0,
            ease: Ease::Linear,
            repeat: Repeat::Once,
        })
    }

    /// Replace the easing.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Replace the start delay. Negative or non-finite delays become zero.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = if delay.is_finite() { delay.max(0.0) } else { 0.0 };
        self
    }

    /// Fraction of the current cycle at `elapsed`, in `[0, 1]`.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if !local.is_finite() || local <= 0.0 {
            return 0.0;
        }
        match self.repeat {
            Repeat::Once => (local / self.duration).min(1.0),
            Repeat::Forever => wrap(local, self.duration) / self.duration,
        }
    }

    /// Value at `elapsed` seconds on the tween's clock.
    pub fn sample(&self, elapsed: f64) -> f64 {
        let first = self.values[0];
        let segments = self.values.len() - 1;
        if segments == 0 {
            return first;
        }

        let t = self.progress(elapsed);
        if t >= 1.0 {
            return self.values[segments];
        }
        let x = t * segments as f64;
        let i = (x.floor() as usize).min(segments - 1);
        let local_t = x - i as f64;
        lerp(self.values[i], self.values[i + 1], self.ease.apply(local_t))
    }

    /// Keyframe values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Cycle length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
