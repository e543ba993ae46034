//! Repository Layer
//!
//! Collaborator abstractions (storage, clock, ids) and the ordered
//! countdown store built on top of them.

mod countdown_store;
mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use countdown_store::{CountdownStore, ViewOptions};
pub use memory::MemoryStorage;
pub use traits::{
    Clock, FixedClock, IdGenerator, KeyValueStorage, SequentialIds, StorageError, SystemClock,
    UuidGenerator,
};
