//! Timeline session driven by injected viewport signals
//!
//! The host pushes discrete signals in; the session answers with the date
//! keys that should currently be rendered. It holds no reference to any UI
//! state and performs no debouncing of scroll signals: each scroll signal
//! extends the window exactly once.
//!
//! ```text
//! payload ──► DateIndex ──► WindowManager ──► visible day sections
//!                                   ▲
//! ViewportSignal ───────────────────┘ (scroll / jump)
//! ViewportSignal ──► VisibilityGate      (day-section reveal)
//! item click     ──► SlideSequence       (all dates, display order)
//! ```

use super::error::TimelineError;
use super::index::{DateIndex, TimelineOrder};
use super::visibility::{VisibilityGate, estimate_visible_sections};
use super::window::WindowManager;
use crate::config::FotoreelConfig;
use crate::models::{DateBuckets, MediaItem};
use crate::slides::SlideSequence;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Session result type
pub type Result<T> = std::result::Result<T, TimelineError>;

/// A discrete signal from the rendering host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportSignal {
    /// The viewport approached the first rendered section
    ScrolledNearTop,
    /// The viewport approached the last rendered section
    ScrolledNearBottom,
    /// The user picked a date to jump to
    JumpTo(String),
    /// A day section entered or left the viewport
    VisibilityChanged {
        section: usize,
        visible: bool,
        at: Instant,
    },
}

/// Tunables for a `TimelineSession`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub min_range: usize,
    pub max_range: usize,
    pub extend_step: usize,
    pub visibility_delay: Duration,
    pub order: TimelineOrder,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&FotoreelConfig::default())
    }
}

impl From<&FotoreelConfig> for SessionSettings {
    fn from(config: &FotoreelConfig) -> Self {
        Self {
            min_range: config.min_range,
            max_range: config.max_range,
            extend_step: config.extend_step,
            visibility_delay: Duration::from_millis(config.visibility_delay_ms),
            order: config.timeline_order,
        }
    }
}

/// One rendered day section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySection<'a> {
    /// Position of the date in the index
    pub position: usize,
    pub date: &'a str,
    pub items: &'a [MediaItem],
    /// Whether thumbnails for this section may load
    pub revealed: bool,
}

/// Timeline state for one loaded dataset
#[derive(Debug, Clone)]
pub struct TimelineSession {
    buckets: DateBuckets,
    window: WindowManager,
    gate: VisibilityGate,
    extend_step: usize,
}

impl TimelineSession {
    /// Start a session over a freshly loaded payload
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::Window` if the window bounds are inconsistent.
    pub fn new(buckets: DateBuckets, settings: SessionSettings) -> Result<Self> {
        let index = DateIndex::from_buckets(&buckets, settings.order);
        let window = WindowManager::new(index, settings.min_range, settings.max_range)?;

        info!(
            dates = buckets.len(),
            min_range = settings.min_range,
            max_range = settings.max_range,
            "timeline session started"
        );
        Ok(Self {
            buckets,
            window,
            gate: VisibilityGate::new(settings.visibility_delay),
            extend_step: settings.extend_step,
        })
    }

    /// Apply one viewport signal and return the keys now in the window
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::Window` if a jump targets an unknown date.
    pub fn handle(&mut self, signal: ViewportSignal) -> Result<&[String]> {
        match signal {
            ViewportSignal::ScrolledNearTop => {
                self.window.extend_top(self.extend_step);
            }
            ViewportSignal::ScrolledNearBottom => {
                self.window.extend_bottom(self.extend_step);
            }
            ViewportSignal::JumpTo(date) => {
                self.window.move_to(&date)?;
            }
            ViewportSignal::VisibilityChanged { section, visible, at } => {
                // a stale "visible" for a section the window already shed is dropped
                if visible && !self.window.range().contains(section) {
                    debug!(section, "visibility signal outside window ignored");
                } else {
                    self.gate.signal(section, visible, at);
                }
            }
        }
        Ok(self.window.visible())
    }

    /// Reveal the sections assumed visible before any intersection signal
    ///
    /// Returns the positions newly revealed.
    pub fn preload(&mut self, viewport_height: u32, section_height: u32) -> Vec<usize> {
        let range = self.window.range();
        let estimate = estimate_visible_sections(viewport_height, section_height);
        let end = range.top.saturating_add(estimate).min(range.bottom);

        let revealed: Vec<usize> = (range.top..end).filter(|&position| self.gate.reveal_now(position)).collect();
        debug!(count = revealed.len(), "sections preloaded");
        revealed
    }

    /// Reveal sections whose visibility delay has elapsed by `now`
    pub fn poll(&mut self, now: Instant) -> Vec<usize> {
        self.gate.due(now)
    }

    /// Day sections inside the current window
    #[must_use]
    pub fn sections(&self) -> Vec<DaySection<'_>> {
        let range = self.window.range();
        self.window
            .visible()
            .iter()
            .zip(range.top..)
            .map(|(date, position)| DaySection {
                position,
                date,
                items: self.buckets.get(date).map(Vec::as_slice).unwrap_or(&[]),
                revealed: self.gate.is_revealed(position),
            })
            .collect()
    }

    /// Open a presentation at `item_id` spanning every date in display order
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::Slide` if the item is not in the payload.
    pub fn open_presentation(&self, item_id: i64) -> Result<SlideSequence> {
        let keys = self.window.index().keys();
        Ok(SlideSequence::bucketed(keys, &self.buckets, item_id)?)
    }

    /// Replace the payload, resetting the window and reveal state
    ///
    /// On error the session keeps its previous payload.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::Window` if the window bounds are inconsistent.
    pub fn reload(&mut self, buckets: DateBuckets, settings: SessionSettings) -> Result<()> {
        let index = DateIndex::from_buckets(&buckets, settings.order);
        self.window = WindowManager::new(index, settings.min_range, settings.max_range)?;
        self.gate.reset(settings.visibility_delay);
        self.extend_step = settings.extend_step;
        self.buckets = buckets;

        info!(dates = self.buckets.len(), "timeline session reloaded");
        Ok(())
    }

    #[must_use]
    pub const fn window(&self) -> &WindowManager {
        &self.window
    }

    #[must_use]
    pub const fn gate(&self) -> &VisibilityGate {
        &self.gate
    }

    #[must_use]
    pub const fn buckets(&self) -> &DateBuckets {
        &self.buckets
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
