//! Windowed timeline navigation
//!
//! The timeline can hold thousands of dates; only a bounded, contiguous window
//! of them is rendered at once. The window grows as the user scrolls toward
//! either edge, sheds dates at the opposite edge once it reaches its cap, and
//! can jump to any date.
//!
//! # Architecture
//!
//! - `index`: `DateIndex`, the immutable ordered date keys
//! - `window`: `WindowManager`, the sliding window over an index
//! - `visibility`: `VisibilityGate`, the debounced day-section reveal
//! - `session`: `TimelineSession`, which applies injected viewport signals

pub mod error;
pub mod index;
pub mod session;
pub mod visibility;
pub mod window;

pub use error::{IndexError, TimelineError, WindowError};
pub use index::{DateIndex, TimelineOrder};
pub use session::{DaySection, SessionSettings, TimelineSession, ViewportSignal};
pub use visibility::{VisibilityGate, estimate_visible_sections};
pub use window::{WindowManager, WindowRange};
