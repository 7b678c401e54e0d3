//! Pointer-driven camera panning around a fixed look-at point.
//!
//! The pointer only moves the camera; the camera always faces `look_at`, never the pointer.

use crate::foundation::core::{DMat4, DVec3, Point, Size, Vec2};
use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::math::{ensure_finite, ensure_positive, sanitize_dt};

/// Maximum pan distance from the base position along world X and Z.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanLimits {
    /// Pan along X for pointer x = ±1.
    pub x: f64,
    /// Pan along Z for pointer y = ∓1.
    pub z: f64,
}

/// Camera rig constants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraConfig {
    /// Rest position with the pointer centred.
    pub base: DVec3,
    /// Point the camera always faces.
    pub look_at: DVec3,
    /// Pan limits.
    pub pan: PanLimits,
    /// Exponential smoothing rate (1/s).
    pub rate: f64,
    /// Vertical field of view, degrees.
    pub fov_deg: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            base: DVec3::new(25.0, 30.0, 25.0),
            look_at: DVec3::ZERO,
            pan: PanLimits { x: 5.0, z: 5.0 },
            rate: 3.0,
            fov_deg: 35.0,
        }
    }
}

impl CameraConfig {
    /// Check the rig is usable.
    pub fn validate(&self) -> KinemaResult<()> {
        if !self.base.is_finite() || !self.look_at.is_finite() {
            return Err(KinemaError::validation("camera vectors must be finite"));
        }
        for (what, v) in [("camera pan.x", self.pan.x), ("camera pan.z", self.pan.z)] {
            if ensure_finite(what, v)? < 0.0 {
                return Err(KinemaError::validation(format!("{what} must be >= 0")));
            }
        }
        ensure_positive("camera rate", self.rate)?;
        let fov = ensure_positive("camera fov_deg", self.fov_deg)?;
        if fov >= 180.0 {
            return Err(KinemaError::validation("camera fov_deg must be < 180"));
        }
        // The eye stays at base.y and pans across this rectangle; it must never pass
        // straight above or below look_at or the view has no horizontal axis.
        let dx = (self.look_at.x - self.base.x).abs();
        let dz = (self.look_at.z - self.base.z).abs();
        if dx <= self.pan.x && dz <= self.pan.z {
            return Err(KinemaError::validation(format!(
                "camera pan area around base ({}, {}) +/- ({}, {}) passes over look_at",
                self.base.x, self.base.z, self.pan.x, self.pan.z
            )));
        }
        Ok(())
    }
}

/// Camera position plus the point it faces.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CameraPose {
    /// Eye position.
    pub position: DVec3,
    /// Look-at point.
    pub look_at: DVec3,
}

impl CameraPose {
    /// Unit vector from the eye toward the look-at point.
    pub fn forward(&self) -> DVec3 {
        (self.look_at - self.position).normalize_or_zero()
    }

    /// Right-handed look-at view matrix (+Y up), column-major.
    pub fn view_matrix(&self) -> [f64; 16] {
        DMat4::look_at_rh(self.position, self.look_at, DVec3::Y).to_cols_array()
    }
}

/// Smoothed camera that pans toward a pointer-derived target each tick.
#[derive(Clone, Debug)]
pub struct CameraFollow {
    config: CameraConfig,
    position: DVec3,
}

impl CameraFollow {
    /// Start at the base position.
    pub fn new(config: CameraConfig) -> KinemaResult<Self> {
        config.validate()?;
        Ok(Self {
            position: config.base,
            config,
        })
    }

    /// Target position for a normalized pointer sample (clamped to `[-1, 1]²`).
    pub fn target(&self, pointer: Vec2) -> DVec3 {
        let nx = clamp_unit(pointer.x);
        let ny = clamp_unit(pointer.y);
        self.config.base + DVec3::new(nx * self.config.pan.x, 0.0, -ny * self.config.pan.z)
    }

    /// Move toward the target by `1 - e^(-rate * dt)` of the remaining distance.
    pub fn tick(&mut self, dt: f64, pointer: Vec2) -> CameraPose {
        let target = self.target(pointer);
        let alpha = 1.0 - (-self.config.rate * sanitize_dt(dt)).exp();
        self.position = self.position.lerp(target, alpha);
        self.pose()
    }

    /// Jump straight to the target for `pointer`.
    pub fn snap_to(&mut self, pointer: Vec2) {
        self.position = self.target(pointer);
    }

    /// Current pose.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            look_at: self.config.look_at,
        }
    }

    /// Rig constants.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
}

/// Convert client-space pointer coordinates into `[-1, 1]²` with +Y up.
///
/// A zero-sized viewport yields the origin.
pub fn normalize_pointer(client: Point, viewport: Size) -> Vec2 {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client.x / viewport.width) * 2.0 - 1.0,
        -(client.y / viewport.height) * 2.0 + 1.0,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/camera.rs"]
mod tests;
