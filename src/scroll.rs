//! Scroll position to normalized progress.

/// Raw scroll geometry reported by the host viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset in CSS pixels.
    pub offset: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
    /// Full height of the scrolled content.
    pub content_height: f64,
}

impl ScrollMetrics {
    /// Metrics for a known scrollable extent (viewport height folded into the extent).
    pub fn from_extent(extent: f64, offset: f64) -> Self {
        Self {
            offset,
            viewport_height: 0.0,
            content_height: extent,
        }
    }

    /// Scrollable distance, never negative.
    pub fn extent(&self) -> f64 {
        let e = self.content_height - self.viewport_height;
        if e.is_finite() { e.max(0.0) } else { 0.0 }
    }

    /// Normalized progress for these metrics.
    pub fn progress(&self) -> f64 {
        scroll_progress(self.extent(), self.offset)
    }
}

/// `clamp(offset / extent, 0, 1)`; a zero or invalid extent yields `0`.
pub fn scroll_progress(extent: f64, offset: f64) -> f64 {
    if !(extent.is_finite() && extent > 0.0) || offset.is_nan() {
        return 0.0;
    }
    (offset / extent).clamp(0.0, 1.0)
}

/// Handle returned by [`ScrollProgressSource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked with the new progress after every update.
pub type ScrollListener = Box<dyn FnMut(f64)>;

/// Tracks scroll metrics and publishes normalized progress to subscribers.
#[derive(Default)]
pub struct ScrollProgressSource {
    metrics: ScrollMetrics,
    progress: f64,
    listeners: Vec<(SubscriptionId, ScrollListener)>,
    next_id: u64,
}

impl std::fmt::Debug for ScrollProgressSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollProgressSource")
            .field("metrics", &self.metrics)
            .field("progress", &self.progress)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ScrollProgressSource {
    /// A source at the top of an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute progress from a scroll or resize and notify subscribers.
    pub fn update(&mut self, metrics: ScrollMetrics) -> f64 {
        self.metrics = metrics;
        self.progress = metrics.progress();
        for (_, listener) in &mut self.listeners {
            listener(self.progress);
        }
        self.progress
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: ScrollListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` when the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Last computed progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Last raw scroll offset.
    pub fn offset(&self) -> f64 {
        self.metrics.offset
    }

    /// Last metrics.
    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }
}

#[cfg(test)]
#[path = "../tests/unit/scroll.rs"]
mod tests;
