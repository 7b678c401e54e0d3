pub(crate) mod camera;
pub(crate) mod curve;
pub(crate) mod ease;
pub(crate) mod looping;
pub(crate) mod spring;
pub(crate) mod tween;
