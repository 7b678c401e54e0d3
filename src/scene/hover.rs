//! Spring-driven hover and press responses for cards, headings and buttons.

use crate::animation::spring::{SmoothedSignal, SpringConfig};
use crate::foundation::core::{Transform2D, Vec2};
use crate::foundation::error::KinemaResult;
use crate::foundation::math::ensure_finite;

fn hover_spring(damping: f64) -> SpringConfig {
    SpringConfig::new(300.0, damping).with_rest_delta(0.001)
}

fn one() -> f64 {
    1.0
}

/// Visual offsets applied in one interaction state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoverPose {
    /// Uniform scale.
    #[serde(default = "one")]
    pub scale: f64,
    /// Vertical offset in pixels (negative lifts).
    #[serde(default)]
    pub lift: f64,
    /// Horizontal offset in pixels.
    #[serde(default)]
    pub shift_x: f64,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotate_deg: f64,
}

impl HoverPose {
    /// Untouched element.
    pub const REST: Self = Self {
        scale: 1.0,
        lift: 0.0,
        shift_x: 0.0,
        rotate_deg: 0.0,
    };

    fn validate(&self) -> KinemaResult<()> {
        ensure_finite("hover scale", self.scale)?;
        ensure_finite("hover lift", self.lift)?;
        ensure_finite("hover shift_x", self.shift_x)?;
        ensure_finite("hover rotate_deg", self.rotate_deg)?;
        Ok(())
    }
}

/// Targets and spring for one interactive element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoverConfig {
    /// Pose while hovered.
    pub hover: HoverPose,
    /// Pose while pressed; falls back to `hover` when absent.
    #[serde(default)]
    pub press: Option<HoverPose>,
    /// Spring shared by every channel.
    pub spring: SpringConfig,
}

impl HoverConfig {
    /// Content card: lifts 8 px and grows 1%.
    pub fn card() -> Self {
        Self {
            hover: HoverPose {
                scale: 1.01,
                lift: -8.0,
                ..HoverPose::REST
            },
            press: None,
            spring: hover_spring(20.0),
        }
    }

    /// Small info card: lifts 5 px.
    pub fn tile() -> Self {
        Self {
            hover: HoverPose {
                lift: -5.0,
                ..HoverPose::REST
            },
            press: None,
            spring: hover_spring(20.0),
        }
    }

    /// Section heading: grows and tilts.
    pub fn heading(rotate_deg: f64) -> Self {
        Self {
            hover: HoverPose {
                scale: 1.05,
                rotate_deg,
                ..HoverPose::REST
            },
            press: None,
            spring: hover_spring(20.0),
        }
    }

    /// Heading that rises and tilts back; lower damping overshoots.
    pub fn raised_heading(damping: f64) -> Self {
        Self {
            hover: HoverPose {
                scale: 1.05,
                lift: -5.0,
                rotate_deg: -2.0,
                ..HoverPose::REST
            },
            press: None,
            spring: hover_spring(damping),
        }
    }

    /// Heading that grows and slides right.
    pub fn nudge(shift_x: f64) -> Self {
        Self {
            hover: HoverPose {
                scale: 1.05,
                shift_x,
                ..HoverPose::REST
            },
            press: None,
            spring: hover_spring(20.0),
        }
    }

    /// Push button: grows on hover, shrinks on press.
    pub fn button() -> Self {
        Self {
            hover: HoverPose {
                scale: 1.05,
                ..HoverPose::REST
            },
            press: Some(HoverPose {
                scale: 0.95,
                ..HoverPose::REST
            }),
            spring: hover_spring(20.0),
        }
    }

    /// Floating fullscreen button.
    pub fn floating_button() -> Self {
        Self {
            hover: HoverPose {
                scale: 1.1,
                lift: -2.0,
                ..HoverPose::REST
            },
            press: Some(HoverPose {
                scale: 0.95,
                ..HoverPose::REST
            }),
            spring: hover_spring(20.0),
        }
    }

    /// Check poses and spring.
    pub fn validate(&self) -> KinemaResult<()> {
        self.hover.validate()?;
        if let Some(press) = &self.press {
            press.validate()?;
        }
        self.spring.validate()
    }
}

/// Interaction state plus one spring per visual channel.
#[derive(Clone, Debug)]
pub struct HoverResponse {
    config: HoverConfig,
    scale: SmoothedSignal,
    lift: SmoothedSignal,
    shift_x: SmoothedSignal,
    rotate: SmoothedSignal,
    hovered: bool,
    pressed: bool,
}

/// Output of [`HoverResponse::tick`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HoverFrame {
    /// Uniform scale.
    pub scale: f64,
    /// Vertical offset in pixels.
    pub lift: f64,
    /// Horizontal offset in pixels.
    pub shift_x: f64,
    /// Rotation in degrees.
    pub rotate_deg: f64,
}

impl HoverFrame {
    /// Layer transform for this frame.
    pub fn transform(&self) -> Transform2D {
        Transform2D::translate(Vec2::new(self.shift_x, self.lift))
            .with_uniform_scale(self.scale)
            .with_rotation_deg(self.rotate_deg)
    }
}

impl HoverResponse {
    /// Build an element at rest.
    pub fn new(config: HoverConfig) -> KinemaResult<Self> {
        config.validate()?;
        let spring = || SmoothedSignal::new(config.spring);
        Ok(Self {
            config,
            scale: spring()?.with_position(1.0),
            lift: spring()?,
            shift_x: spring()?,
            rotate: spring()?,
            hovered: false,
            pressed: false,
        })
    }

    /// Pointer entered or left the element.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.retarget();
    }

    /// Pointer pressed or released on the element.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
        self.retarget();
    }

    /// Pose currently being approached. Press wins over hover.
    pub fn goal(&self) -> HoverPose {
        match (self.pressed, self.hovered) {
            (true, _) => self.config.press.unwrap_or(self.config.hover),
            (false, true) => self.config.hover,
            (false, false) => HoverPose::REST,
        }
    }

    fn retarget(&mut self) {
        let goal = self.goal();
        self.scale.set_target(goal.scale);
        self.lift.set_target(goal.lift);
        self.shift_x.set_target(goal.shift_x);
        self.rotate.set_target(goal.rotate_deg);
    }

    /// Advance every channel.
    pub fn tick(&mut self, dt: f64) -> HoverFrame {
        HoverFrame {
            scale: self.scale.tick(dt),
            lift: self.lift.tick(dt),
            shift_x: self.shift_x.tick(dt),
            rotate_deg: self.rotate.tick(dt),
        }
    }

    /// `true` while hovered.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// `true` while pressed.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/hover.rs"]
mod tests;
