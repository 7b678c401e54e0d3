use crate::foundation::error::{KinemaError, KinemaResult};

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Euclidean remainder in `[0, modulus)` for a positive modulus.
pub(crate) fn wrap(value: f64, modulus: f64) -> f64 {
    let r = ((value % modulus) + modulus) % modulus;
    // `-tiny % m + m` can round up to exactly `m`.
    if r >= modulus { 0.0 } else { r }
}

pub(crate) fn ensure_finite(what: &str, value: f64) -> KinemaResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KinemaError::validation(format!("{what} must be finite")))
    }
}

pub(crate) fn ensure_positive(what: &str, value: f64) -> KinemaResult<f64> {
    let value = ensure_finite(what, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(KinemaError::validation(format!("{what} must be > 0")))
    }
}

/// Sanitized frame delta: non-finite and negative deltas become zero.
pub(crate) fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub(crate) fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
