use crate::foundation::error::{KinemaError, KinemaResult};

pub use glam::{DMat4, DVec3};
pub use kurbo::{Affine, Point, Size, Vec2};

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> KinemaResult<Self> {
        if den == 0 {
            return Err(KinemaError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(KinemaError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Opaque sRGB colour, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn parse_hex(s: &str) -> KinemaResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || KinemaError::validation(format!("invalid hex colour '{s}'"));
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let channel = |i: usize, len: usize| -> KinemaResult<u8> {
            let v = u8::from_str_radix(&hex[i..i + len], 16).map_err(|_| bad())?;
            Ok(if len == 1 { v * 17 } else { v })
        };
        match hex.len() {
            3 => Ok(Self {
                r: channel(0, 1)?,
                g: channel(1, 1)?,
                b: channel(2, 1)?,
            }),
            6 => Ok(Self {
                r: channel(0, 2)?,
                g: channel(2, 2)?,
                b: channel(4, 2)?,
            }),
            _ => Err(bad()),
        }
    }

    /// Lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = KinemaError;

    fn try_from(s: String) -> KinemaResult<Self> {
        Self::parse_hex(&s)
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_hex()
    }
}

/// 2D transform for page-space layers (header card, glass blobs, ring ship).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    /// Translation in CSS pixels.
    pub translate: Vec2,
    /// Rotation in radians.
    pub rotation_rad: f64,
    /// Non-uniform scale.
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Transform2D {
    /// Pure translation.
    pub fn translate(v: Vec2) -> Self {
        Self {
            translate: v,
            ..Self::default()
        }
    }

    /// Replace the uniform scale.
    pub fn with_uniform_scale(mut self, s: f64) -> Self {
        self.scale = Vec2::new(s, s);
        self
    }

    /// Replace the rotation, given in degrees.
    pub fn with_rotation_deg(mut self, deg: f64) -> Self {
        self.rotation_rad = deg.to_radians();
        self
    }

    /// Compose into a single affine matrix about the layer origin.
    pub fn to_affine(self) -> Affine {
        let t_translate = Affine::translate(self.translate);
        let t_rotate = Affine::rotate(self.rotation_rad);
        let t_scale = Affine::scale_non_uniform(self.scale.x, self.scale.y);

        // T(translate) * R(rot) * S(scale)
        t_translate * t_rotate * t_scale
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
