//! Countdown Store
//!
//! Owns the ordered countdown collection. Every successful mutation writes
//! the whole collection back to storage; a failed one changes nothing.

use std::collections::{HashMap, HashSet};

use log::{debug, error, warn};

use super::traits::{Clock, IdGenerator, KeyValueStorage, SystemClock, UuidGenerator};
use crate::config::AppConfig;
use crate::domain::{
    compute_remaining, Countdown, CountdownDraft, CountdownPatch, DomainError, DomainResult,
};

/// Attempts at drawing an id not already in the collection
const MAX_ID_ATTEMPTS: usize = 16;

/// Presentation toggles applied to a snapshot; stored order is never touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Ascending by target instant
    pub sort_by_time: bool,
    /// Drop countdowns whose target has passed
    pub hide_expired: bool,
}

/// Ordered countdown collection backed by a key-value store
pub struct CountdownStore<S, G = UuidGenerator, C = SystemClock> {
    countdowns: Vec<Countdown>,
    storage: S,
    ids: G,
    clock: C,
    key: String,
}

impl<S: KeyValueStorage> CountdownStore<S> {
    /// Load from `storage` under the default key with random ids and the wall clock
    pub fn load(storage: S) -> (Self, Option<DomainError>) {
        Self::load_with(storage, UuidGenerator, SystemClock, AppConfig::DEFAULT_STORAGE_KEY)
    }
}

impl<S, G, C> CountdownStore<S, G, C>
where
    S: KeyValueStorage,
    G: IdGenerator,
    C: Clock,
{
    /// Load the collection stored under `key`.
    ///
    /// A corrupt blob never fails the load: the store starts empty and the
    /// returned `PersistenceLoad` error is meant to be shown as a warning.
    pub fn load_with(storage: S, ids: G, clock: C, key: &str) -> (Self, Option<DomainError>) {
        let (countdowns, warning) = match storage.load(key) {
            None => (Vec::new(), None),
            Some(blob) => match decode_blob(&blob) {
                Ok(countdowns) => (countdowns, None),
                Err(e) => {
                    warn!("[STORE] {}; starting empty", e);
                    (Vec::new(), Some(e))
                }
            },
        };
        debug!("[STORE] Loaded {} countdowns from '{}'", countdowns.len(), key);

        let store = Self {
            countdowns,
            storage,
            ids,
            clock,
            key: key.to_string(),
        };
        (store, warning)
    }

    /// Validate `draft`, append it with a fresh id and persist
    pub fn create(&mut self, draft: &CountdownDraft) -> DomainResult<Countdown> {
        let id = self.fresh_id()?;
        let countdown = Countdown::from_draft(id, draft)?;

        self.countdowns.push(countdown.clone());
        self.persist();
        debug!("[STORE] Created countdown {} ({})", countdown.id, countdown.title);
        Ok(countdown)
    }

    /// Replace the patched fields of `id` in place
    pub fn update(&mut self, id: &str, patch: &CountdownPatch) -> DomainResult<Countdown> {
        let index = self.position(id).ok_or_else(|| DomainError::not_found(id))?;
        if patch.is_empty() {
            debug!("[STORE] Empty patch for {}, nothing to write", id);
            return Ok(self.countdowns[index].clone());
        }
        let updated = self.countdowns[index].patched(patch)?;

        self.countdowns[index] = updated.clone();
        self.persist();
        debug!("[STORE] Updated countdown {}", id);
        Ok(updated)
    }

    /// Remove `id`; unknown ids are reported as `NotFound`
    pub fn delete(&mut self, id: &str) -> DomainResult<()> {
        let index = self.position(id).ok_or_else(|| DomainError::not_found(id))?;

        self.countdowns.remove(index);
        self.persist();
        debug!("[STORE] Deleted countdown {}", id);
        Ok(())
    }

    /// Adopt `new_order`, which must be an exact permutation of the current ids
    pub fn reorder<T: AsRef<str>>(&mut self, new_order: &[T]) -> DomainResult<()> {
        if new_order.len() != self.countdowns.len() {
            return Err(DomainError::InvalidOperation(format!(
                "expected {} ids, got {}",
                self.countdowns.len(),
                new_order.len()
            )));
        }

        let mut by_id: HashMap<&str, &Countdown> =
            self.countdowns.iter().map(|c| (c.id.as_str(), c)).collect();
        let mut reordered = Vec::with_capacity(new_order.len());
        for id in new_order {
            let id = id.as_ref();
            // Removing as we go catches duplicates and unknown ids alike
            let countdown = by_id.remove(id).ok_or_else(|| {
                DomainError::InvalidOperation(format!("'{}' is unknown or repeated", id))
            })?;
            reordered.push(countdown.clone());
        }

        self.countdowns = reordered;
        self.persist();
        debug!("[STORE] Reordered {} countdowns", self.countdowns.len());
        Ok(())
    }

    /// Stored-order snapshot
    pub fn list(&self) -> &[Countdown] {
        &self.countdowns
    }

    /// Snapshot filtered and sorted for display
    pub fn view(&self, options: ViewOptions) -> Vec<Countdown> {
        let now = self.clock.now();
        let mut visible: Vec<Countdown> = self
            .countdowns
            .iter()
            .filter(|c| !options.hide_expired || !compute_remaining(c.target_date, now).is_expired)
            .cloned()
            .collect();
        if options.sort_by_time {
            visible.sort_by_key(|c| c.target_date);
        }
        visible
    }

    pub fn get(&self, id: &str) -> Option<&Countdown> {
        self.countdowns.iter().find(|c| c.id == id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.countdowns.iter().map(|c| c.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.countdowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countdowns.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.countdowns.iter().position(|c| c.id == id)
    }

    fn fresh_id(&mut self) -> DomainResult<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.new_id();
            if self.position(&id).is_none() {
                return Ok(id);
            }
        }
        Err(DomainError::InvalidOperation("could not allocate a unique id".to_string()))
    }

    /// Write the whole collection; in-memory state wins if the write fails
    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.countdowns) {
            Ok(blob) => blob,
            Err(e) => {
                error!("[STORE] Failed to serialize countdowns: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.save(&self.key, &blob) {
            error!("[STORE] Failed to persist countdowns: {}", e);
        }
    }
}

/// Parse a stored blob, keeping the first record for any repeated id.
///
/// Records that fail validation are dropped one by one; only a blob that is
/// not a list of countdowns at all fails the load.
fn decode_blob(blob: &str) -> DomainResult<Vec<Countdown>> {
    let records: Vec<Countdown> =
        serde_json::from_str(blob).map_err(|e| DomainError::PersistenceLoad(e.to_string()))?;

    let mut seen = HashSet::new();
    let countdowns = records
        .into_iter()
        .filter_map(|record| {
            let id = record.id.clone();
            match record.validated() {
                Ok(countdown) => Some(countdown),
                Err(e) => {
                    warn!("[STORE] Dropping stored countdown '{}': {}", id, e);
                    None
                }
            }
        })
        .filter(|c| {
            let first = seen.insert(c.id.clone());
            if !first {
                warn!("[STORE] Dropping stored countdown with repeated id {}", c.id);
            }
            first
        })
        .collect();
    Ok(countdowns)
}
