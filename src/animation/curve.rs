//! Range-to-range linear mapping for scroll-linked visuals.
//!
//! A visual that derives several properties from one input (a ring's stroke offset and its
//! orbiting icon angle, the header's offset, opacity and scale) computes a single [`Ratio`] and
//! maps it into each output range, so the properties can never drift apart.

use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::math::ensure_finite;

/// Closed interval between `start` and `end`. `start` may be greater than `end`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// Value at ratio 0.
    pub start: f64,
    /// Value at ratio 1.
    pub end: f64,
}

impl Span {
    /// The normalized range `[0, 1]`.
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// Build a span.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Return `true` when both ends coincide.
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Value at normalized position `t`, exact at both ends.
    pub fn at(self, t: f64) -> f64 {
        self.start * (1.0 - t) + self.end * t
    }
}

/// Normalized position inside an input [`Span`], already clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Ratio(f64);

impl Ratio {
    /// Clamp an arbitrary value into a ratio. NaN maps to 0.
    pub fn new(t: f64) -> Self {
        if t.is_nan() {
            Self(0.0)
        } else {
            Self(t.clamp(0.0, 1.0))
        }
    }

    /// The ratio as a plain number.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Interpolate into `output`.
    pub fn map(self, output: Span) -> f64 {
        output.at(self.0)
    }
}

/// Linear mapper from a fixed input range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveMapper {
    input: Span,
}

impl CurveMapper {
    /// Validate the input range. Degenerate or non-finite ranges are rejected.
    pub fn new(input: Span) -> KinemaResult<Self> {
        ensure_finite("curve input start", input.start)?;
        ensure_finite("curve input end", input.end)?;
        if input.is_degenerate() {
            return Err(KinemaError::validation(format!(
                "curve input range [{}, {}] is degenerate",
                input.start, input.end
            )));
        }
        Ok(Self { input })
    }

    /// The input range this mapper was built for.
    pub fn input(&self) -> Span {
        self.input
    }

    /// Position of `value` inside the input range, clamped.
    pub fn ratio(&self, value: f64) -> Ratio {
        Ratio::new((value - self.input.start) / (self.input.end - self.input.start))
    }

    /// Map `value` into `output`.
    pub fn map(&self, value: f64, output: Span) -> f64 {
        self.ratio(value).map(output)
    }
}

/// One-shot `map(value, input, output)`. A degenerate input range resolves to `output.start`.
pub fn map(value: f64, input: Span, output: Span) -> f64 {
    match CurveMapper::new(input) {
        Ok(mapper) => mapper.map(value, output),
        Err(_) => output.start,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
