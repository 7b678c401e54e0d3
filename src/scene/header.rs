//! Parallax chapter header and its wavy title.

use crate::animation::curve::{CurveMapper, Span};
use crate::animation::ease::Ease;
use crate::animation::tween::{Repeat, Tween, TweenSpec};
use crate::foundation::core::{Transform2D, Vec2};
use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::math::ensure_positive;

const NBSP: char = '\u{00A0}';

/// Header parallax and intro settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Title rendered as wave text.
    pub title: String,
    /// Absolute scroll offsets (px) over which the header recedes.
    pub scroll_range: Span,
    /// Vertical drift in px.
    pub y: Span,
    pub opacity: Span,
    pub scale: Span,
    /// Intro fade-in duration in seconds.
    pub intro_secs: f64,
    /// Intro rise distance in px.
    pub intro_rise: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: "MOTION".to_owned(),
            scroll_range: Span::new(0.0, 400.0),
            y: Span::new(0.0, 150.0),
            opacity: Span::new(1.0, 0.0),
            scale: Span::new(1.0, 1.1),
            intro_secs: 0.8,
            intro_rise: 30.0,
        }
    }
}

impl HeaderConfig {
    pub fn validate(&self) -> KinemaResult<()> {
        CurveMapper::new(self.scroll_range)?;
        for (what, span) in [("y", self.y), ("opacity", self.opacity), ("scale", self.scale)] {
            if !(span.start.is_finite() && span.end.is_finite()) {
                return Err(KinemaError::validation(format!(
                    "header {what} range must be finite"
                )));
            }
        }
        ensure_positive("header intro_secs", self.intro_secs)?;
        if !self.intro_rise.is_finite() {
            return Err(KinemaError::validation("header intro_rise must be finite"));
        }
        Ok(())
    }
}

/// Scroll-linked header layer plus the one-shot intro card.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxHeader {
    config: HeaderConfig,
    mapper: CurveMapper,
    intro_opacity: Tween,
    intro_y: Tween,
    title: WaveText,
}

/// Output of [`ParallaxHeader::frame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeaderFrame {
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub intro_opacity: f64,
    pub intro_y: f64,
    pub glyphs: Vec<GlyphFrame>,
}

impl HeaderFrame {
    /// Layer transform for the receding header.
    pub fn transform(&self) -> Transform2D {
        Transform2D::translate(Vec2::new(0.0, self.y)).with_uniform_scale(self.scale)
    }
}

impl ParallaxHeader {
    pub fn new(config: HeaderConfig) -> KinemaResult<Self> {
        config.validate()?;
        let intro = |values: [f64; 2]| -> KinemaResult<Tween> {
            Ok(Tween::once(values, config.intro_secs)?.with_ease(Ease::EASE_OUT))
        };
        Ok(Self {
            mapper: CurveMapper::new(config.scroll_range)?,
            intro_opacity: intro([0.0, 1.0])?,
            intro_y: intro([config.intro_rise, 0.0])?,
            title: WaveText::new(&config.title)?,
            config,
        })
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn title(&self) -> &WaveText {
        &self.title
    }

    /// Evaluate at absolute scroll offset `scroll_y` and page time `elapsed`.
    pub fn frame(&self, scroll_y: f64, elapsed: f64) -> HeaderFrame {
        let ratio = self.mapper.ratio(scroll_y);
        HeaderFrame {
            y: ratio.map(self.config.y),
            opacity: ratio.map(self.config.opacity),
            scale: ratio.map(self.config.scale),
            intro_opacity: self.intro_opacity.sample(elapsed),
            intro_y: self.intro_y.sample(elapsed),
            glyphs: self.title.frame(elapsed),
        }
    }
}

/// One character of the wavy title.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveGlyph {
    ch: char,
    y: Tween,
    rotate: Tween,
}

impl WaveGlyph {
    fn new(index: usize, ch: char) -> KinemaResult<Self> {
        let tilt = if index % 2 == 0 { 5.0 } else { -5.0 };
        let wave = |values: [f64; 3]| -> KinemaResult<Tween> {
            Tween::new(TweenSpec {
                values: values.to_vec(),
                duration: 1.5,
                delay: index as f64 * 0.1,
                ease: Ease::EASE_IN_OUT,
                repeat: Repeat::Forever,
            })
        };
        Ok(Self {
            ch: if ch == ' ' { NBSP } else { ch },
            y: wave([0.0, -20.0, 0.0])?,
            rotate: wave([0.0, tilt, 0.0])?,
        })
    }

    /// Displayed character (spaces become non-breaking).
    pub fn ch(&self) -> char {
        self.ch
    }
}

/// Evaluated glyph.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GlyphFrame {
    pub ch: char,
    pub y: f64,
    pub rotate_deg: f64,
}

/// Ordered glyphs sharing the page clock, each delayed by its index.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveText {
    glyphs: Vec<WaveGlyph>,
}

impl WaveText {
    pub fn new(text: &str) -> KinemaResult<Self> {
        let glyphs = text
            .chars()
            .enumerate()
            .map(|(i, ch)| WaveGlyph::new(i, ch))
            .collect::<KinemaResult<Vec<_>>>()?;
        Ok(Self { glyphs })
    }

    pub fn glyphs(&self) -> &[WaveGlyph] {
        &self.glyphs
    }

    /// Displayed text.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(WaveGlyph::ch).collect()
    }

    pub fn frame(&self, elapsed: f64) -> Vec<GlyphFrame> {
        self.glyphs
            .iter()
            .map(|g| GlyphFrame {
                ch: g.ch,
                y: g.y.sample(elapsed),
                rotate_deg: g.rotate.sample(elapsed),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/header.rs"]
mod tests;
