use std::mem;

use crate::{Profile, SessionId, SessionStore};

/// Changes collected between two frame boundaries for one profile kind.
///
/// Added and updated entries are kept as ids and resolved against the
/// session store at flush time, so the latest `set` for an id always wins.
/// Removed entries carry the profile itself, since it has already left the
/// store.
pub struct PendingChanges<P: Profile> {
    added: Vec<SessionId>,
    updated: Vec<SessionId>,
    removed: Vec<P>,
}

/// The materialized result of one flush
pub struct FrameBatches<P> {
    pub added: Vec<P>,
    pub updated: Vec<P>,
    pub removed: Vec<P>,
}

impl<P> FrameBatches<P> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

impl<P: Profile> PendingChanges<P> {
    pub fn new() -> Self {
        Self {
            added: Vec::new(),
            updated: Vec::new(),
            removed: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }

    pub fn added_ids(&self) -> &[SessionId] {
        &self.added
    }

    pub fn updated_ids(&self) -> &[SessionId] {
        &self.updated
    }

    pub fn removed(&self) -> &[P] {
        &self.removed
    }

    pub fn record_added(&mut self, session_id: SessionId) {
        // removed and set again before the flush: the session never ended
        if let Some(index) = self.removed_index(session_id) {
            self.removed.remove(index);
            self.record_updated(session_id);
            return;
        }
        if !self.added.contains(&session_id) {
            self.added.push(session_id);
        }
    }

    /// An id still waiting to be reported as added stays added.
    pub fn record_updated(&mut self, session_id: SessionId) {
        if self.added.contains(&session_id) || self.updated.contains(&session_id) {
            return;
        }
        self.updated.push(session_id);
    }

    /// A profile added and removed within one frame is never reported.
    pub fn record_removed(&mut self, profile: P) {
        let session_id = profile.session_id();
        self.updated.retain(|updated| *updated != session_id);

        if let Some(index) = self.added.iter().position(|added| *added == session_id) {
            self.added.remove(index);
            return;
        }
        self.removed.push(profile);
    }

    /// Resolves pending ids against `active` and leaves this set empty.
    pub fn take_batches(&mut self, active: &SessionStore<P>) -> FrameBatches<P> {
        let resolve = |ids: Vec<SessionId>| -> Vec<P> {
            ids.into_iter()
                .filter_map(|session_id| active.get(session_id).cloned())
                .collect()
        };

        FrameBatches {
            added: resolve(mem::take(&mut self.added)),
            updated: resolve(mem::take(&mut self.updated)),
            removed: mem::take(&mut self.removed),
        }
    }

    fn removed_index(&self, session_id: SessionId) -> Option<usize> {
        self.removed
            .iter()
            .position(|profile| profile.session_id() == session_id)
    }
}

impl<P: Profile> Default for PendingChanges<P> {
    fn default() -> Self {
        Self::new()
    }
}
