//! Kinema is the animation engine behind a scroll-driven physics lesson page.
//!
//! The page is modelled as a frame loop: the host feeds [`PageEvent`]s (scroll, pointer,
//! clicks, fullscreen notifications) into a [`Page`], then calls [`Page::tick`] once per
//! display frame. Each tick returns an owned [`PageFrame`] which can be flattened into a
//! [`RenderState`] and diffed through [`Retained`] so only moving properties are re-rendered.
//!
//! The building blocks are usable on their own:
//!
//! - [`SmoothedSignal`]: damped spring following a target
//! - [`CurveMapper`] / [`map`]: clamped range-to-range mapping with a shared [`Ratio`]
//! - [`LoopingMotion`]: constant-speed travel around a wrapping track
//! - [`CameraFollow`]: pointer-panned camera with exponential smoothing
//! - [`ScrollProgressSource`]: scroll metrics to normalized progress
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
/// Page configuration.
pub mod config;
/// The page and its frame loop.
pub mod page;
pub mod render;
pub(crate) mod scene;
/// Scroll progress tracking.
pub mod scroll;

pub use crate::foundation::core::{
    Affine, DMat4, DVec3, Fps, Point, Rgb8, Size, Transform2D, Vec2,
};
pub use crate::foundation::error::{KinemaError, KinemaResult};

pub use crate::animation::camera::{
    CameraConfig, CameraFollow, CameraPose, PanLimits, normalize_pointer,
};
pub use crate::animation::curve::{CurveMapper, Ratio, Span, map};
pub use crate::animation::ease::Ease;
pub use crate::animation::looping::{Direction, LoopingMotion, wrap_centered};
pub use crate::animation::spring::{SmoothedSignal, SpringConfig};
pub use crate::animation::tween::{Repeat, Tween, TweenSpec};

pub use crate::config::PageConfig;
pub use crate::page::{FullscreenFrame, GlassId, Interactive, Page, PageEvent, PageFrame};
pub use crate::render::retained::{PropChange, RenderDiff, Retained, diff};
pub use crate::render::state::{PropValue, RenderState};
pub use crate::scroll::{
    ScrollListener, ScrollMetrics, ScrollProgressSource, SubscriptionId, scroll_progress,
};

pub use crate::scene::city::{CarFrame, CarSpec, CityConfig, CityFrame, CityScene};
pub use crate::scene::fullscreen::{
    FullscreenHost, FullscreenIcon, FullscreenToggle, HeadlessHost,
};
pub use crate::scene::glass::{BlobFrame, BlobSpec, GlassCard, GlassConfig, GlassFrame};
pub use crate::scene::header::{
    GlyphFrame, HeaderConfig, HeaderFrame, ParallaxHeader, WaveGlyph, WaveText,
};
pub use crate::scene::hover::{HoverConfig, HoverFrame, HoverPose, HoverResponse};
pub use crate::scene::perspective::{
    Perspective, PerspectiveConfig, PerspectiveFrame, PerspectiveSwitcher,
};
pub use crate::scene::progress::{
    BarFrame, ProgressBar, ProgressRing, PuffFrame, RingConfig, RingFrame, SmokePuff,
};
pub use crate::scene::video::VideoEmbed;
