//! Debounced day-section reveal
//!
//! A day section only loads its thumbnails once it has been reported visible
//! for a short, fixed delay. A newer signal for the same section replaces the
//! pending check; a "no longer visible" signal cancels it. Time is injected by
//! the host so the gate holds no timers of its own.

use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};
use tracing::debug;

/// Tracks pending and completed reveals for day sections
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    delay: Duration,
    pending: BTreeMap<usize, Instant>,
    revealed: BTreeSet<usize>,
}

impl VisibilityGate {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: BTreeMap::new(),
            revealed: BTreeSet::new(),
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a visibility change for `section` observed at `now`
    pub fn signal(&mut self, section: usize, visible: bool, now: Instant) {
        if self.revealed.contains(&section) {
            return;
        }

        if visible {
            let deadline = now + self.delay;
            if self.pending.insert(section, deadline).is_some() {
                debug!(section, "pending reveal rescheduled");
            } else {
                debug!(section, delay = ?self.delay, "reveal scheduled");
            }
        } else if self.pending.remove(&section).is_some() {
            debug!(section, "pending reveal cancelled");
        }
    }

    /// Reveal every section whose deadline has passed by `now`
    ///
    /// Returns the newly revealed sections in ascending order.
    pub fn due(&mut self, now: Instant) -> Vec<usize> {
        let ready: Vec<usize> = self
            .pending
            .iter()
            .filter(|&(_, deadline)| *deadline <= now)
            .map(|(&section, _)| section)
            .collect();

        for section in &ready {
            self.pending.remove(section);
            self.revealed.insert(*section);
        }
        if !ready.is_empty() {
            debug!(count = ready.len(), "sections revealed");
        }
        ready
    }

    /// Reveal `section` without waiting for the delay
    ///
    /// Returns `true` if the section was not revealed before.
    pub fn reveal_now(&mut self, section: usize) -> bool {
        self.pending.remove(&section);
        self.revealed.insert(section)
    }

    #[must_use]
    pub fn is_revealed(&self, section: usize) -> bool {
        self.revealed.contains(&section)
    }

    #[must_use]
    pub fn is_pending(&self, section: usize) -> bool {
        self.pending.contains_key(&section)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Forget all pending and revealed sections and adopt `delay` (dataset reload)
    pub fn reset(&mut self, delay: Duration) {
        self.delay = delay;
        self.pending.clear();
        self.revealed.clear();
    }
}

/// Number of sections assumed visible before any intersection signal arrives
///
/// Over-approximates with `ceil(viewport_height / section_height)`.
#[must_use]
pub const fn estimate_visible_sections(viewport_height: u32, section_height: u32) -> usize {
    if section_height == 0 {
        return 0;
    }
    viewport_height.div_ceil(section_height) as usize
}
