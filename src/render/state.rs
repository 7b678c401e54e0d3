use std::collections::BTreeMap;

use crate::foundation::core::Affine;
use crate::page::PageFrame;

/// One renderable property value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Scalar(f64),
    /// Column-major 4x4 matrix.
    Matrix([f64; 16]),
    /// 2D affine coefficients `[a, b, c, d, e, f]`.
    Affine([f64; 6]),
    Text(String),
    Flag(bool),
}

impl PropValue {
    /// Equal within `eps` for numeric payloads, exactly equal otherwise.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        fn close(a: &[f64], b: &[f64], eps: f64) -> bool {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= eps)
        }
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => (a - b).abs() <= eps,
            (Self::Matrix(a), Self::Matrix(b)) => close(a, b, eps),
            (Self::Affine(a), Self::Affine(b)) => close(a, b, eps),
            (a, b) => a == b,
        }
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Affine> for PropValue {
    fn from(v: Affine) -> Self {
        Self::Affine(v.as_coeffs())
    }
}

/// Sorted map from property key (`"ring.rotation_deg"`, `"city.car.3.x"`, ...) to value.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct RenderState {
    props: BTreeMap<String, PropValue>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.props.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// Scalar at `key`, if present and numeric.
    pub fn scalar(&self, key: &str) -> Option<f64> {
        match self.props.get(key) {
            Some(PropValue::Scalar(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flatten a page frame.
    pub fn from_frame(frame: &PageFrame) -> Self {
        let mut s = Self::new();

        s.set("page.time", frame.time);
        s.set("page.scroll_offset", frame.scroll_offset);
        s.set("page.progress", frame.progress);
        s.set("page.smoothed_progress", frame.smoothed_progress);

        s.set("bar.scale_x", frame.bar.scale_x);
        for (i, puff) in frame.bar.smoke.iter().enumerate() {
            s.set(format!("bar.smoke.{i}.x"), puff.x);
            s.set(format!("bar.smoke.{i}.y"), puff.y);
            s.set(format!("bar.smoke.{i}.scale"), puff.scale);
            s.set(format!("bar.smoke.{i}.opacity"), puff.opacity);
        }

        if let Some(ring) = &frame.ring {
            s.set("ring.path_length", ring.path_length);
            s.set("ring.stroke_dash_offset", ring.stroke_dash_offset);
            s.set("ring.rotation_deg", ring.rotation_deg);
            s.set("ring.percent", f64::from(ring.percent));
            s.set("ring.glow.scale", ring.glow_scale);
            s.set("ring.glow.opacity", ring.glow_opacity);
            s.set("ring.flame.height_px", ring.flame_height_px);
            s.set("ring.flame.opacity", ring.flame_opacity);
        }

        let header = &frame.header;
        s.set("header.y", header.y);
        s.set("header.opacity", header.opacity);
        s.set("header.scale", header.scale);
        s.set("header.transform", header.transform().to_affine());
        s.set("header.intro.opacity", header.intro_opacity);
        s.set("header.intro.y", header.intro_y);
        for (i, g) in header.glyphs.iter().enumerate() {
            s.set(format!("header.glyph.{i}.char"), g.ch.to_string());
            s.set(format!("header.glyph.{i}.y"), g.y);
            s.set(format!("header.glyph.{i}.rotate_deg"), g.rotate_deg);
        }

        let city = &frame.city;
        let eye = city.camera.position;
        s.set("city.camera.x", eye.x);
        s.set("city.camera.y", eye.y);
        s.set("city.camera.z", eye.z);
        s.set("city.camera.fov_deg", city.fov_deg);
        s.set("city.camera.view", PropValue::Matrix(city.camera.view_matrix()));
        for (i, car) in city.cars.iter().enumerate() {
            s.set(format!("city.car.{i}.x"), car.position.x);
            s.set(format!("city.car.{i}.y"), car.position.y);
            s.set(format!("city.car.{i}.z"), car.position.z);
            s.set(format!("city.car.{i}.cabin_x"), car.cabin_x);
            s.set(format!("city.car.{i}.color"), car.color.to_hex());
        }

        for (id, glass) in &frame.glass {
            let id = id.as_str();
            s.set(format!("glass.{id}.pointer.x"), glass.pointer.x);
            s.set(format!("glass.{id}.pointer.y"), glass.pointer.y);
            for (j, blob) in glass.blobs.iter().enumerate() {
                s.set(format!("glass.{id}.blob.{j}.x"), blob.offset.x);
                s.set(format!("glass.{id}.blob.{j}.y"), blob.offset.y);
                s.set(format!("glass.{id}.blob.{j}.rotation_deg"), blob.rotation_deg);
                s.set(format!("glass.{id}.blob.{j}.scale"), blob.scale);
                s.set(format!("glass.{id}.blob.{j}.color"), blob.color.to_hex());
            }
        }

        for (id, hover) in &frame.interactives {
            s.set(
                format!("hover.{}.transform", id.as_str()),
                hover.transform().to_affine(),
            );
        }

        let p = &frame.perspective;
        s.set("perspective.current", p.perspective.to_string());
        s.set("perspective.label", p.label);
        s.set("perspective.explanation", p.explanation);
        s.set("perspective.trees_x", p.trees_x);
        s.set("perspective.person_x", p.person_x);
        s.set("perspective.bus_x", p.bus_x);
        s.set("perspective.bus_scale", p.bus_scale);
        s.set("perspective.bus_left_pct", p.bus_left_pct);

        s.set("fullscreen.active", frame.fullscreen.active);
        s.set("fullscreen.icon", frame.fullscreen.icon.as_str());

        for (i, video) in frame.videos.iter().enumerate() {
            s.set(format!("video.{i}.embed_url"), video.embed_url.as_str());
        }

        s
    }
}

impl PageFrame {
    /// Flatten into a [`RenderState`].
    pub fn to_render_state(&self) -> RenderState {
        RenderState::from_frame(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/state.rs"]
mod tests;
