use std::collections::{BTreeSet, HashSet};

use log::{debug, warn};

use crate::domain::{parse_instant, Countdown, CountdownDraft, ImportDraft};
use crate::repository::{Clock, CountdownStore, IdGenerator, KeyValueStorage};

/// Outcome of committing a staged import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub committed: usize,
    /// Selected drafts the store refused
    pub skipped: usize,
}

/// A reviewed-but-uncommitted batch of drafts plus the user's selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingImport {
    drafts: Vec<ImportDraft>,
    selected: BTreeSet<usize>,
}

impl PendingImport {
    pub fn drafts(&self) -> &[ImportDraft] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Flip one draft's selection; out-of-range indices are ignored
    pub fn toggle(&mut self, index: usize) {
        if index >= self.drafts.len() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn select_all(&mut self) {
        self.selected = (0..self.drafts.len()).collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Indices of drafts whose title and instant already exist in `existing`
    pub fn existing_matches(&self, existing: &[Countdown]) -> Vec<usize> {
        self.drafts
            .iter()
            .enumerate()
            .filter(|(_, draft)| {
                let Ok(target) = parse_instant(&draft.date) else {
                    return false;
                };
                existing
                    .iter()
                    .any(|c| c.target_date == target && c.title == draft.title.trim())
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Commit the current selection
    pub fn confirm<S, G, C>(self, store: &mut CountdownStore<S, G, C>) -> ImportReport
    where
        S: KeyValueStorage,
        G: IdGenerator,
        C: Clock,
    {
        let selected = self.selected_indices();
        confirm(store, self, &selected)
    }
}

/// Stage decoded drafts: invalid and repeated drafts are dropped, the rest
/// start out selected.
pub fn stage(drafts: Vec<ImportDraft>) -> PendingImport {
    let total = drafts.len();
    let mut seen = HashSet::new();
    let drafts: Vec<ImportDraft> = drafts
        .into_iter()
        .filter(|draft| draft.is_valid() && seen.insert(draft.clone()))
        .collect();
    if drafts.len() < total {
        debug!("[IMPORT] Dropped {} invalid or repeated drafts", total - drafts.len());
    }

    let selected = (0..drafts.len()).collect();
    PendingImport { drafts, selected }
}

/// Create one countdown per selected draft, in original order.
///
/// Unknown indices are ignored and drafts the store rejects are skipped, so
/// one bad draft never sinks the batch.
pub fn confirm<S, G, C>(
    store: &mut CountdownStore<S, G, C>,
    pending: PendingImport,
    selected: &[usize],
) -> ImportReport
where
    S: KeyValueStorage,
    G: IdGenerator,
    C: Clock,
{
    let selected: BTreeSet<usize> = selected.iter().copied().collect();
    let mut report = ImportReport::default();

    for (index, draft) in pending.drafts.iter().enumerate() {
        if !selected.contains(&index) {
            continue;
        }
        match store.create(&CountdownDraft::from(draft)) {
            Ok(_) => report.committed += 1,
            Err(e) => {
                warn!("[IMPORT] Skipping '{}': {}", draft.title, e);
                report.skipped += 1;
            }
        }
    }

    debug!(
        "[IMPORT] Committed {} countdowns, skipped {}",
        report.committed, report.skipped
    );
    report
}

/// Discard a staged batch without touching the store
pub fn cancel(pending: PendingImport) {
    debug!("[IMPORT] Cancelled import of {} drafts", pending.len());
}
