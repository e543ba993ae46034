//! Countdown Core
//!
//! Layered architecture:
//! - domain: Countdown entity, instants, remaining-time math, errors
//! - repository: Persistence adapters and the ordered countdown store
//! - share: Share-link token codec and URL query helpers
//! - import: Staging and committing imported drafts
//! - ticker / reorder: Scheduler and drag working copy used by the UI

pub mod config;
pub mod domain;
pub mod import;
pub mod reorder;
pub mod repository;
pub mod share;
pub mod ticker;

pub use config::{AppConfig, UrgencyThresholds};
pub use domain::{
    compose_target, compute_remaining, format_instant, format_target, parse_instant, Countdown,
    CountdownDraft, CountdownPatch, DomainError, DomainResult, ImportDraft, TimeRemaining, Urgency,
};
pub use import::{ImportReport, PendingImport};
pub use reorder::DragSession;
pub use repository::{
    Clock, CountdownStore, FixedClock, IdGenerator, KeyValueStorage, MemoryStorage, SequentialIds,
    StorageError, SystemClock, UuidGenerator, ViewOptions,
};
pub use share::ImportSource;
pub use ticker::{Subscription, TickScheduler};
