//! Domain Layer
//!
//! Countdown records, instant handling and the remaining-time engine.
//! Nothing here touches storage or the browser.

mod countdown;
mod error;
mod instant;
mod remaining;

pub use countdown::{Countdown, CountdownDraft, CountdownPatch, ImportDraft};
pub use error::{DomainError, DomainResult};
pub use instant::{compose_target, format_instant, format_target, parse_instant};
pub use remaining::{compute_remaining, TimeRemaining, Urgency};

pub(crate) use countdown::normalize_description;
