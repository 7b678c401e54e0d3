//! The lesson page: input cells, the frame clock and every animated component.

use std::collections::BTreeMap;

use crate::animation::camera::normalize_pointer;
use crate::animation::spring::SmoothedSignal;
use crate::config::PageConfig;
use crate::foundation::core::{Point, Size, Vec2};
use crate::foundation::error::KinemaResult;
use crate::foundation::math::sanitize_dt;
use crate::scene::city::{CityFrame, CityScene};
use crate::scene::fullscreen::{FullscreenHost, FullscreenIcon, FullscreenToggle};
use crate::scene::glass::{GlassCard, GlassFrame};
use crate::scene::header::{HeaderFrame, ParallaxHeader};
use crate::scene::hover::{HoverConfig, HoverFrame, HoverResponse};
use crate::scene::perspective::{Perspective, PerspectiveFrame, PerspectiveSwitcher};
use crate::scene::progress::{BarFrame, ProgressBar, ProgressRing, RingFrame};
use crate::scene::video::VideoEmbed;
use crate::scroll::{ScrollListener, ScrollMetrics, ScrollProgressSource, SubscriptionId};

/// Elements with a hover (and possibly press) response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interactive {
    ModuleCard,
    ModuleHeading,
    ThinkHeading,
    RelativeCard,
    RelativeHeading,
    InferredHeading,
    AirCard,
    EarthCard,
    ActivityHeading,
    GroundButton,
    BusButton,
    FullscreenButton,
}

impl Interactive {
    pub const ALL: [Self; 12] = [
        Self::ModuleCard,
        Self::ModuleHeading,
        Self::ThinkHeading,
        Self::RelativeCard,
        Self::RelativeHeading,
        Self::InferredHeading,
        Self::AirCard,
        Self::EarthCard,
        Self::ActivityHeading,
        Self::GroundButton,
        Self::BusButton,
        Self::FullscreenButton,
    ];

    /// Stable snake_case key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModuleCard => "module_card",
            Self::ModuleHeading => "module_heading",
            Self::ThinkHeading => "think_heading",
            Self::RelativeCard => "relative_card",
            Self::RelativeHeading => "relative_heading",
            Self::InferredHeading => "inferred_heading",
            Self::AirCard => "air_card",
            Self::EarthCard => "earth_card",
            Self::ActivityHeading => "activity_heading",
            Self::GroundButton => "ground_button",
            Self::BusButton => "bus_button",
            Self::FullscreenButton => "fullscreen_button",
        }
    }

    fn hover_config(self) -> HoverConfig {
        match self {
            Self::ModuleCard | Self::RelativeCard => HoverConfig::card(),
            Self::ModuleHeading | Self::InferredHeading => HoverConfig::heading(2.0),
            Self::ThinkHeading => HoverConfig::nudge(10.0),
            Self::RelativeHeading => HoverConfig::raised_heading(20.0),
            Self::ActivityHeading => HoverConfig::raised_heading(10.0),
            Self::AirCard | Self::EarthCard => HoverConfig::tile(),
            Self::GroundButton | Self::BusButton => HoverConfig::button(),
            Self::FullscreenButton => HoverConfig::floating_button(),
        }
    }
}

/// The page's glass cards, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassId {
    ThinkAndAct,
    InferredMotion,
    Activities,
}

impl GlassId {
    pub const ALL: [Self; 3] = [Self::ThinkAndAct, Self::InferredMotion, Self::Activities];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThinkAndAct => "think_and_act",
            Self::InferredMotion => "inferred_motion",
            Self::Activities => "activities",
        }
    }
}

/// Host input delivered between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent {
    /// Scroll or resize.
    Scroll(ScrollMetrics),
    /// Window-level pointer movement in client coordinates.
    PointerMove { client: Point, viewport: Size },
    /// Pointer offset from a glass card's centre; `None` when it leaves the card.
    GlassPointer { card: GlassId, offset: Option<Vec2> },
    Hover { target: Interactive, hovered: bool },
    Press { target: Interactive, pressed: bool },
    SelectPerspective(Perspective),
    /// Fullscreen button clicked.
    ToggleFullscreen,
    /// Host reported entering (`true`) or leaving fullscreen.
    FullscreenChanged(bool),
}

/// Latest value per input cell since the previous tick.
#[derive(Clone, Debug, Default)]
struct Inputs {
    scroll: Option<ScrollMetrics>,
    pointer: Option<(Point, Size)>,
    glass: BTreeMap<GlassId, Option<Vec2>>,
    hovered: BTreeMap<Interactive, bool>,
    pressed: BTreeMap<Interactive, bool>,
    perspective: Option<Perspective>,
    toggle_requests: u32,
    fullscreen: Option<bool>,
}

/// Fullscreen button state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FullscreenFrame {
    pub active: bool,
    pub icon: FullscreenIcon,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageFrame {
    /// Frame counter, starting at 1 for the first tick.
    pub index: u64,
    /// Seconds since the page was built.
    pub time: f64,
    pub scroll_offset: f64,
    /// Raw scroll progress in `[0, 1]`.
    pub progress: f64,
    /// Spring-smoothed progress shared by the bar and ring.
    pub smoothed_progress: f64,
    pub bar: BarFrame,
    pub ring: Option<RingFrame>,
    pub header: HeaderFrame,
    pub city: CityFrame,
    pub glass: BTreeMap<GlassId, GlassFrame>,
    pub interactives: BTreeMap<Interactive, HoverFrame>,
    pub perspective: PerspectiveFrame,
    pub fullscreen: FullscreenFrame,
    pub videos: Vec<VideoEmbed>,
}

/// The lesson page.
///
/// Events only write input cells. [`Page::tick`] snapshots those cells, applies them and then
/// advances every component, so an event arriving mid-frame shows up on the next tick.
pub struct Page {
    config: PageConfig,
    clock: f64,
    index: u64,
    inputs: Inputs,
    scroll: ScrollProgressSource,
    smoothed: SmoothedSignal,
    pointer: Vec2,
    bar: ProgressBar,
    ring: Option<ProgressRing>,
    header: ParallaxHeader,
    city: CityScene,
    glass: BTreeMap<GlassId, GlassCard>,
    hovers: BTreeMap<Interactive, HoverResponse>,
    perspective: PerspectiveSwitcher,
    fullscreen: FullscreenToggle,
    videos: Vec<VideoEmbed>,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("clock", &self.clock)
            .field("index", &self.index)
            .field("progress", &self.scroll.progress())
            .field("perspective", &self.perspective.current())
            .field("fullscreen", &self.fullscreen.is_active())
            .finish_non_exhaustive()
    }
}

impl Page {
    /// Build every component from a validated config.
    #[tracing::instrument(skip(config))]
    pub fn new(config: PageConfig) -> KinemaResult<Self> {
        config.validate()?;

        let glass = GlassId::ALL
            .into_iter()
            .map(|id| -> KinemaResult<_> { Ok((id, GlassCard::new(&config.glass)?)) })
            .collect::<KinemaResult<BTreeMap<_, _>>>()?;
        let hovers = Interactive::ALL
            .into_iter()
            .map(|id| -> KinemaResult<_> { Ok((id, HoverResponse::new(id.hover_config())?)) })
            .collect::<KinemaResult<BTreeMap<_, _>>>()?;
        let ring = if config.ring.enabled {
            Some(ProgressRing::new(config.ring)?)
        } else {
            None
        };

        let page = Self {
            clock: 0.0,
            index: 0,
            inputs: Inputs::default(),
            scroll: ScrollProgressSource::new(),
            smoothed: SmoothedSignal::new(config.progress_spring)?,
            pointer: Vec2::ZERO,
            bar: ProgressBar::new(config.smoke_seed, config.smoke_puffs)?,
            ring,
            header: ParallaxHeader::new(config.header.clone())?,
            city: CityScene::new(&config.city)?,
            glass,
            hovers,
            perspective: PerspectiveSwitcher::new(config.perspective)?,
            fullscreen: FullscreenToggle::new(),
            videos: config.videos.iter().map(|v| VideoEmbed::from_url(v)).collect(),
            config,
        };
        tracing::debug!(
            cars = page.config.city.cars.len(),
            ring = page.ring.is_some(),
            videos = page.videos.len(),
            "page built"
        );
        Ok(page)
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Seconds since construction.
    pub fn time(&self) -> f64 {
        self.clock
    }

    /// Raw scroll progress as of the last tick.
    pub fn progress(&self) -> f64 {
        self.scroll.progress()
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective.current()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_active()
    }

    /// Be told about every scroll progress change, as applied at tick start.
    pub fn subscribe_progress(&mut self, listener: ScrollListener) -> SubscriptionId {
        self.scroll.subscribe(listener)
    }

    pub fn unsubscribe_progress(&mut self, id: SubscriptionId) -> bool {
        self.scroll.unsubscribe(id)
    }

    /// Record an input. Nothing is evaluated until the next [`Page::tick`].
    pub fn handle_event(&mut self, event: PageEvent) {
        let inputs = &mut self.inputs;
        match event {
            PageEvent::Scroll(metrics) => inputs.scroll = Some(metrics),
            PageEvent::PointerMove { client, viewport } => {
                inputs.pointer = Some((client, viewport));
            }
            PageEvent::GlassPointer { card, offset } => {
                inputs.glass.insert(card, offset);
            }
            PageEvent::Hover { target, hovered } => {
                inputs.hovered.insert(target, hovered);
            }
            PageEvent::Press { target, pressed } => {
                inputs.pressed.insert(target, pressed);
            }
            PageEvent::SelectPerspective(p) => inputs.perspective = Some(p),
            PageEvent::ToggleFullscreen => inputs.toggle_requests += 1,
            PageEvent::FullscreenChanged(active) => inputs.fullscreen = Some(active),
        }
    }

    /// Advance the page clock by `dt` seconds and evaluate a frame.
    pub fn tick(&mut self, dt: f64, host: &mut dyn FullscreenHost) -> PageFrame {
        let dt = sanitize_dt(dt);
        self.clock += dt;
        self.index += 1;
        let now = self.clock;

        let inputs = std::mem::take(&mut self.inputs);
        self.apply(inputs, now, host);

        let smoothed = self.smoothed.tick(dt);
        let scroll_offset = self.scroll.offset();

        PageFrame {
            index: self.index,
            time: now,
            scroll_offset,
            progress: self.scroll.progress(),
            smoothed_progress: smoothed,
            bar: self.bar.frame(smoothed, now),
            ring: self.ring.as_ref().map(|r| r.frame(smoothed, now)),
            header: self.header.frame(scroll_offset, now),
            city: self.city.tick(dt, now, self.pointer),
            glass: self
                .glass
                .iter_mut()
                .map(|(&id, card)| (id, card.tick(dt, now)))
                .collect(),
            interactives: self
                .hovers
                .iter_mut()
                .map(|(&id, hover)| (id, hover.tick(dt)))
                .collect(),
            perspective: self.perspective.frame(now),
            fullscreen: FullscreenFrame {
                active: self.fullscreen.is_active(),
                icon: self.fullscreen.icon(),
            },
            videos: self.videos.clone(),
        }
    }

    fn apply(&mut self, inputs: Inputs, now: f64, host: &mut dyn FullscreenHost) {
        if let Some(metrics) = inputs.scroll {
            let progress = self.scroll.update(metrics);
            self.smoothed.set_target(progress);
        }
        if let Some((client, viewport)) = inputs.pointer {
            self.pointer = normalize_pointer(client, viewport);
        }
        for (id, offset) in inputs.glass {
            if let Some(card) = self.glass.get_mut(&id) {
                card.set_pointer(offset);
            }
        }
        for (id, hovered) in inputs.hovered {
            if let Some(h) = self.hovers.get_mut(&id) {
                h.set_hovered(hovered);
            }
        }
        for (id, pressed) in inputs.pressed {
            if let Some(h) = self.hovers.get_mut(&id) {
                h.set_pressed(pressed);
            }
        }
        if let Some(p) = inputs.perspective {
            self.perspective.select(p, now);
        }
        if let Some(active) = inputs.fullscreen {
            self.fullscreen.on_change(active);
        }
        for _ in 0..inputs.toggle_requests {
            self.fullscreen.toggle(host);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/page.rs"]
mod tests;
