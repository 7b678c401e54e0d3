//! Fullscreen toggle button state.

use std::collections::VecDeque;

use crate::foundation::error::{KinemaError, KinemaResult};

/// Host side of the fullscreen API.
///
/// Requests are asynchronous: success is reported later through
/// [`FullscreenToggle::on_change`], never through the return value.
pub trait FullscreenHost {
    fn request_fullscreen(&mut self) -> KinemaResult<()>;
    fn exit_fullscreen(&mut self) -> KinemaResult<()>;
}

/// Button icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenIcon {
    Maximize,
    Minimize,
}

impl FullscreenIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Maximize => "maximize",
            Self::Minimize => "minimize",
        }
    }
}

/// Binary fullscreen cell; only host notifications write it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FullscreenToggle {
    active: bool,
}

impl FullscreenToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the host to enter fullscreen when windowed, or to leave it otherwise.
    ///
    /// A rejected request is logged and leaves the state untouched.
    pub fn toggle(&self, host: &mut dyn FullscreenHost) {
        let (action, result) = if self.active {
            ("exit", host.exit_fullscreen())
        } else {
            ("enter", host.request_fullscreen())
        };
        if let Err(err) = result {
            tracing::warn!(action, error = %err, "fullscreen request failed");
        }
    }

    /// Host reported a fullscreen change.
    pub fn on_change(&mut self, active: bool) {
        if self.active != active {
            tracing::debug!(active, "fullscreen changed");
        }
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn icon(&self) -> FullscreenIcon {
        if self.active {
            FullscreenIcon::Minimize
        } else {
            FullscreenIcon::Maximize
        }
    }
}

/// In-process host that records requests and queues the resulting change notifications.
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    allow: bool,
    active: bool,
    pending: VecDeque<bool>,
    requests: usize,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::accepting()
    }
}

impl HeadlessHost {
    /// A host that grants every request.
    pub fn accepting() -> Self {
        Self {
            allow: true,
            active: false,
            pending: VecDeque::new(),
            requests: 0,
        }
    }

    /// A host that refuses to enter fullscreen.
    pub fn rejecting() -> Self {
        Self {
            allow: false,
            ..Self::accepting()
        }
    }

    /// Next queued change notification, oldest first.
    pub fn take_change(&mut self) -> Option<bool> {
        self.pending.pop_front()
    }

    /// Number of enter/exit requests received.
    pub fn requests(&self) -> usize {
        self.requests
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn set(&mut self, active: bool) {
        if self.active != active {
            self.active = active;
            self.pending.push_back(active);
        }
    }
}

impl FullscreenHost for HeadlessHost {
    fn request_fullscreen(&mut self) -> KinemaResult<()> {
        self.requests += 1;
        if !self.allow {
            return Err(KinemaError::host("fullscreen request denied"));
        }
        self.set(true);
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> KinemaResult<()> {
        self.requests += 1;
        self.set(false);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fullscreen.rs"]
mod tests;
