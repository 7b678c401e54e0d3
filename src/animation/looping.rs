//! Constant-velocity travel around a bounded, wrapping track.

use crate::foundation::error::KinemaResult;
use crate::foundation::math::{ensure_finite, ensure_positive, wrap};

/// Travel direction along a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Increasing position (`+1`).
    #[default]
    Forward,
    /// Decreasing position (`-1`).
    Backward,
}

impl Direction {
    /// `+1.0` or `-1.0`.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// A sprite looping around a track of fixed length, centred on the track midpoint.
///
/// `position(t) = wrap(t * speed * direction + offset, track) - track / 2`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopingMotion {
    speed: f64,
    offset: f64,
    direction: Direction,
    track_length: f64,
}

impl LoopingMotion {
    /// Validate and build. `track_length` must be positive; `speed` and `offset` finite.
    pub fn new(
        speed: f64,
        offset: f64,
        direction: Direction,
        track_length: f64,
    ) -> KinemaResult<Self> {
        Ok(Self {
            speed: ensure_finite("loop speed", speed)?,
            offset: ensure_finite("loop offset", offset)?,
            direction,
            track_length: ensure_positive("loop track_length", track_length)?,
        })
    }

    /// Unwrapped distance travelled at `elapsed` seconds.
    pub fn raw(&self, elapsed: f64) -> f64 {
        elapsed * self.speed * self.direction.sign() + self.offset
    }

    /// Midpoint-relative position in `[-track/2, track/2)`.
    pub fn position(&self, elapsed: f64) -> f64 {
        wrap_centered(self.raw(elapsed), self.track_length)
    }

    /// Fraction of the current lap completed, in `[0, 1)`.
    pub fn phase(&self, elapsed: f64) -> f64 {
        wrap(self.raw(elapsed), self.track_length) / self.track_length
    }

    /// Track length.
    pub fn track_length(&self) -> f64 {
        self.track_length
    }

    /// Travel direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Speed in track units per second.
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

/// Wrap `raw` onto a track of `track_length` and centre it on the midpoint.
pub fn wrap_centered(raw: f64, track_length: f64) -> f64 {
    wrap(raw, track_length) - track_length / 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/looping.rs"]
mod tests;
