use std::mem;

use crate::{Profile, SessionId, SessionStoreError};

/// The active profiles of one kind, kept in ascending session id order.
///
/// Ordering is maintained on every insert, so lookups are binary searches
/// and snapshots come out sorted without extra work.
pub struct SessionStore<P: Profile> {
    profiles: Vec<P>,
}

impl<P: Profile> SessionStore<P> {
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.profiles.iter()
    }

    pub fn get(&self, session_id: SessionId) -> Option<&P> {
        let index = self.position(session_id).ok()?;
        self.profiles.get(index)
    }

    pub fn get_mut(&mut self, session_id: SessionId) -> Option<&mut P> {
        let index = self.position(session_id).ok()?;
        self.profiles.get_mut(index)
    }

    /// Inserts a profile at its sorted position.
    /// Returns an error if its session id is already active.
    pub fn try_insert(&mut self, profile: P) -> Result<(), SessionStoreError> {
        match self.position(profile.session_id()) {
            Ok(_) => Err(SessionStoreError::DuplicateSession {
                session_id: profile.session_id(),
            }),
            Err(index) => {
                self.profiles.insert(index, profile);
                Ok(())
            }
        }
    }

    /// Replaces the stored value for the profile's session id, returning the
    /// previous value. Hands the profile back if the id is not active.
    pub fn replace(&mut self, profile: P) -> Result<P, P> {
        match self.get_mut(profile.session_id()) {
            Some(stored) => Ok(mem::replace(stored, profile)),
            None => Err(profile),
        }
    }

    /// Removes every profile from `source` whose id is not in `alive`, and
    /// returns them in session id order. `alive` must be sorted.
    pub fn retain_alive(&mut self, source: &str, alive: &[SessionId]) -> Vec<P> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.profiles.len());

        for profile in mem::take(&mut self.profiles) {
            if profile.source() == source && alive.binary_search(&profile.session_id()).is_err() {
                removed.push(profile);
            } else {
                kept.push(profile);
            }
        }

        self.profiles = kept;
        removed
    }

    pub fn to_vec(&self) -> Vec<P> {
        self.profiles.clone()
    }

    fn position(&self, session_id: SessionId) -> Result<usize, usize> {
        self.profiles
            .binary_search_by_key(&session_id, |profile| profile.session_id())
    }
}

impl<P: Profile> Default for SessionStore<P> {
    fn default() -> Self {
        Self::new()
    }
}
