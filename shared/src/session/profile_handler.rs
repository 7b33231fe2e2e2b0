use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, trace};
use rosc::OscMessage;

use crate::{
    ArgReader, CallbackSlot, FrameBatches, FrameDecision, FrameId, FrameTracker, MessageType,
    PastFrameThreshold, PendingChanges, Profile, ProfileError, ProfileFn, ProfileKind,
    SessionId, SessionStore,
};

struct HandlerState<P: Profile> {
    current_source: String,
    active: SessionStore<P>,
    pending: PendingChanges<P>,
    frames: FrameTracker,
}

/// Reconciles the message stream of one profile kind into add, update and
/// remove batches.
///
/// `set` and `alive` messages accumulate changes against the active
/// profiles. An `fseq` message closes the frame: if its frame id is accepted
/// the pending changes are materialized and handed to the callbacks, each
/// batch in a single call.
///
/// State lives behind one lock that is never held while a callback runs, so
/// callbacks may query [`ProfileHandler::active_profiles`] freely.
pub struct ProfileHandler<P: Profile> {
    state: Mutex<HandlerState<P>>,
    added: CallbackSlot<P>,
    updated: CallbackSlot<P>,
    removed: CallbackSlot<P>,
    past_frame_threshold: PastFrameThreshold,
}

impl<P: Profile> ProfileHandler<P> {
    pub fn new(past_frame_threshold: PastFrameThreshold) -> Self {
        Self {
            state: Mutex::new(HandlerState {
                current_source: String::new(),
                active: SessionStore::new(),
                pending: PendingChanges::new(),
                frames: FrameTracker::new(),
            }),
            added: CallbackSlot::new(),
            updated: CallbackSlot::new(),
            removed: CallbackSlot::new(),
            past_frame_threshold,
        }
    }

    pub fn kind(&self) -> ProfileKind {
        P::KIND
    }

    pub fn address(&self) -> &'static str {
        P::KIND.address()
    }

    /// Applies one message addressed to this profile kind.
    ///
    /// A rejected message leaves every piece of state untouched.
    pub fn handle_message(&self, message: &OscMessage) -> Result<(), ProfileError> {
        let message_type = MessageType::parse(message)?;
        trace!(
            "{} message on {} with {} arguments",
            message_type,
            message.addr,
            message.args.len()
        );

        match message_type {
            MessageType::Source => self.handle_source(message),
            MessageType::Set => self.handle_set(message),
            MessageType::Alive => self.handle_alive(message),
            MessageType::Fseq => self.handle_fseq(message),
        }
    }

    /// Snapshot of the active profiles, in session id order
    pub fn active_profiles(&self) -> Vec<P> {
        self.lock_state().active.to_vec()
    }

    pub fn active_count(&self) -> usize {
        self.lock_state().active.len()
    }

    pub fn current_source(&self) -> String {
        self.lock_state().current_source.clone()
    }

    pub fn last_frame(&self, source: &str) -> FrameId {
        self.lock_state().frames.last_frame(source)
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.lock_state().pending.is_empty()
    }

    pub fn past_frame_threshold(&self) -> &PastFrameThreshold {
        &self.past_frame_threshold
    }

    pub fn set_added_callback(&self, callback: ProfileFn<P>) {
        self.added.set(callback);
    }

    pub fn set_updated_callback(&self, callback: ProfileFn<P>) {
        self.updated.set(callback);
    }

    pub fn set_removed_callback(&self, callback: ProfileFn<P>) {
        self.removed.set(callback);
    }

    pub fn clear_callbacks(&self) {
        self.added.clear();
        self.updated.clear();
        self.removed.clear();
    }

    pub fn has_callbacks(&self) -> bool {
        self.added.is_set() || self.updated.is_set() || self.removed.is_set()
    }

    // source <name>
    fn handle_source(&self, message: &OscMessage) -> Result<(), ProfileError> {
        let mut reader = ArgReader::new(message);
        reader.expect_at_least("source", 2)?;
        reader.skip();
        let source = reader.read_str()?;

        source.clone_into(&mut self.lock_state().current_source);
        Ok(())
    }

    fn handle_set(&self, message: &OscMessage) -> Result<(), ProfileError> {
        let mut profile = P::decode(message)?;

        let mut guard = self.lock_state();
        let state = &mut *guard;
        profile.set_source(&state.current_source);
        let session_id = profile.session_id();

        match state.active.replace(profile) {
            Ok(_) => state.pending.record_updated(session_id),
            Err(profile) => {
                if state.active.try_insert(profile).is_ok() {
                    state.pending.record_added(session_id);
                }
            }
        }
        Ok(())
    }

    // alive <id>*: every id not listed has left the current source
    fn handle_alive(&self, message: &OscMessage) -> Result<(), ProfileError> {
        let mut reader = ArgReader::new(message);
        reader.skip();
        let mut alive: Vec<SessionId> = reader.read_remaining_i32()?;
        alive.sort_unstable();

        let mut guard = self.lock_state();
        let state = &mut *guard;
        for profile in state.active.retain_alive(&state.current_source, &alive) {
            state.pending.record_removed(profile);
        }
        Ok(())
    }

    fn handle_fseq(&self, message: &OscMessage) -> Result<(), ProfileError> {
        let mut reader = ArgReader::new(message);
        reader.expect_len("fseq", 2)?;
        reader.skip();
        let frame = reader.read_i32()?;

        let batches = {
            let mut guard = self.lock_state();
            let state = &mut *guard;
            let source = state.current_source.as_str();
            let threshold = self.past_frame_threshold.get();

            match state.frames.check(source, frame, threshold) {
                FrameDecision::Stale => {
                    debug!(
                        "Ignoring stale frame {} from source '{}' on {} (last frame {})",
                        frame,
                        source,
                        P::KIND,
                        state.frames.last_frame(source)
                    );
                    return Ok(());
                }
                FrameDecision::NewEpoch => {
                    debug!(
                        "Source '{}' on {} jumped back from frame {} to {}, treating it as restarted",
                        source,
                        P::KIND,
                        state.frames.last_frame(source),
                        frame
                    );
                }
                FrameDecision::Flush | FrameDecision::AlwaysFlush => {}
            }

            state.frames.accept(source, frame);
            state.pending.take_batches(&state.active)
        };

        self.dispatch(batches);
        Ok(())
    }

    fn dispatch(&self, batches: FrameBatches<P>) {
        if batches.is_empty() {
            return;
        }
        trace!(
            "Flushing {}: {} added, {} updated, {} removed",
            P::KIND,
            batches.added.len(),
            batches.updated.len(),
            batches.removed.len()
        );

        if !batches.added.is_empty() {
            self.added.invoke(&batches.added);
        }
        if !batches.updated.is_empty() {
            self.updated.invoke(&batches.updated);
        }
        if !batches.removed.is_empty() {
            self.removed.invoke(&batches.removed);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, HandlerState<P>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: Profile> Default for ProfileHandler<P> {
    fn default() -> Self {
        Self::new(PastFrameThreshold::default())
    }
}
