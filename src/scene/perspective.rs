//! The "moving bus" activity: the same scene seen from the roadside or from a seat in the bus.

use std::fmt;
use std::str::FromStr;

use crate::animation::curve::Span;
use crate::animation::looping::{Direction, LoopingMotion};
use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::math::{ensure_finite, ensure_positive};

/// Observer frame of reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    /// Standing on the roadside: the bus moves.
    #[default]
    Ground,
    /// Sitting in the bus: the world moves backwards.
    Bus,
}

impl Perspective {
    pub const ALL: [Self; 2] = [Self::Ground, Self::Bus];

    /// Short phrase completing "When you are ...".
    pub fn label(self) -> &'static str {
        match self {
            Self::Ground => "on the ground",
            Self::Bus => "in the bus",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Self::Ground => {
                "The bus changes its position relative to you. Thus, you see the bus moving while the trees and yourself are at rest."
            }
            Self::Bus => {
                "The bus is at rest relative to you. However, you see the outside world (trees, people) moving backwards relative to your frame of reference."
            }
        }
    }

    /// Caption of the button selecting this perspective.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Ground => "Standing on Ground",
            Self::Bus => "Sitting in Bus",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Ground => "ground",
            Self::Bus => "bus",
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Perspective {
    type Err = KinemaError;

    fn from_str(s: &str) -> KinemaResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ground" => Ok(Self::Ground),
            "bus" => Ok(Self::Bus),
            other => Err(KinemaError::validation(format!(
                "unknown perspective '{other}' (expected 'ground' or 'bus')"
            ))),
        }
    }
}

/// Sprite tracks and layout of the activity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PerspectiveConfig {
    pub initial: Perspective,
    /// Seconds per loop.
    pub cycle_secs: f64,
    /// Horizontal travel of the trees and the pedestrian while riding the bus.
    pub world_track: Span,
    /// Horizontal travel of the bus while standing on the ground.
    pub bus_track: Span,
    /// Bus left anchor (percent of the stage width) while it is moving.
    pub bus_left_pct: f64,
    /// Bus left anchor while the viewer sits inside it.
    pub bus_seated_left_pct: f64,
    pub bus_seated_scale: f64,
}

impl Default for PerspectiveConfig {
    fn default() -> Self {
        Self {
            initial: Perspective::Ground,
            cycle_secs: 2.5,
            world_track: Span::new(-100.0, -800.0),
            bus_track: Span::new(0.0, 800.0),
            bus_left_pct: 20.0,
            bus_seated_left_pct: 40.0,
            bus_seated_scale: 1.1,
        }
    }
}

impl PerspectiveConfig {
    pub fn validate(&self) -> KinemaResult<()> {
        ensure_positive("perspective cycle_secs", self.cycle_secs)?;
        for (what, span) in [("world_track", self.world_track), ("bus_track", self.bus_track)] {
            ensure_finite(what, span.start)?;
            ensure_finite(what, span.end)?;
            if span.is_degenerate() {
                return Err(KinemaError::validation(format!(
                    "perspective {what} must not be empty"
                )));
            }
        }
        ensure_finite("perspective bus_left_pct", self.bus_left_pct)?;
        ensure_finite("perspective bus_seated_left_pct", self.bus_seated_left_pct)?;
        ensure_positive("perspective bus_seated_scale", self.bus_seated_scale)?;
        Ok(())
    }
}

/// A sprite sweeping `track.start -> track.end` once per cycle, then jumping back.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Sweep {
    track: Span,
    clock: LoopingMotion,
}

impl Sweep {
    fn new(track: Span, cycle_secs: f64) -> KinemaResult<Self> {
        let length = (track.end - track.start).abs();
        Ok(Self {
            track,
            clock: LoopingMotion::new(length / cycle_secs, 0.0, Direction::Forward, length)?,
        })
    }

    fn x(&self, elapsed: f64) -> f64 {
        self.track.at(self.clock.phase(elapsed))
    }
}

/// Output of [`PerspectiveSwitcher::frame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PerspectiveFrame {
    pub perspective: Perspective,
    pub label: &'static str,
    pub explanation: &'static str,
    pub trees_x: f64,
    pub person_x: f64,
    pub bus_x: f64,
    pub bus_scale: f64,
    pub bus_left_pct: f64,
}

/// Two-state toggle owning the activity's loop clock.
#[derive(Clone, Debug)]
pub struct PerspectiveSwitcher {
    config: PerspectiveConfig,
    world: Sweep,
    bus: Sweep,
    current: Perspective,
    switched_at: f64,
}

impl PerspectiveSwitcher {
    pub fn new(config: PerspectiveConfig) -> KinemaResult<Self> {
        config.validate()?;
        Ok(Self {
            world: Sweep::new(config.world_track, config.cycle_secs)?,
            bus: Sweep::new(config.bus_track, config.cycle_secs)?,
            current: config.initial,
            switched_at: 0.0,
            config,
        })
    }

    pub fn current(&self) -> Perspective {
        self.current
    }

    /// Page time at which the current perspective was selected.
    pub fn switched_at(&self) -> f64 {
        self.switched_at
    }

    /// Switch to `perspective` at page time `now`, restarting the loop clock.
    ///
    /// Returns `false` (and leaves the clock running) if it is already selected.
    pub fn select(&mut self, perspective: Perspective, now: f64) -> bool {
        if perspective == self.current {
            return false;
        }
        tracing::debug!(from = %self.current, to = %perspective, now, "perspective switched");
        self.current = perspective;
        self.switched_at = now;
        true
    }

    pub fn frame(&self, now: f64) -> PerspectiveFrame {
        let local = (now - self.switched_at).max(0.0);
        let (trees_x, bus_x, bus_scale, bus_left_pct) = match self.current {
            Perspective::Ground => (0.0, self.bus.x(local), 1.0, self.config.bus_left_pct),
            Perspective::Bus => (
                self.world.x(local),
                0.0,
                self.config.bus_seated_scale,
                self.config.bus_seated_left_pct,
            ),
        };
        PerspectiveFrame {
            perspective: self.current,
            label: self.current.label(),
            explanation: self.current.explanation(),
            trees_x,
            person_x: trees_x,
            bus_x,
            bus_scale,
            bus_left_pct,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/perspective.rs"]
mod tests;
