use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicI32, Ordering},
        Arc,
    },
};

use crate::{FrameId, DEFAULT_PAST_FRAME_THRESHOLD, FRAME_ALWAYS};

/// Live, shared setting for how far back a frame id may jump before the
/// jump is read as a sender restart. Clones observe each other's updates.
#[derive(Clone, Debug)]
pub struct PastFrameThreshold {
    inner: Arc<AtomicI32>,
}

impl PastFrameThreshold {
    pub fn new(threshold: i32) -> Self {
        Self {
            inner: Arc::new(AtomicI32::new(threshold)),
        }
    }

    pub fn get(&self) -> i32 {
        self.inner.load(Ordering::Relaxed)
    }

    pub fn set(&self, threshold: i32) {
        self.inner.store(threshold, Ordering::Relaxed);
    }
}

impl Default for PastFrameThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_PAST_FRAME_THRESHOLD)
    }
}

/// What an `fseq` message means for the pending changes of its source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameDecision {
    /// Frame id is newer than the last accepted one
    Flush,
    /// Frame id is the `-1` sentinel
    AlwaysFlush,
    /// Frame id jumped back further than the threshold: the source restarted
    NewEpoch,
    /// Frame id is a duplicate or a late arrival
    Stale,
}

/// Last accepted frame id per source. Unknown sources start at 0.
#[derive(Default)]
pub struct FrameTracker {
    last_frames: HashMap<String, FrameId>,
}

impl FrameTracker {
    pub fn new() -> Self {
        Self {
            last_frames: HashMap::new(),
        }
    }

    pub fn last_frame(&self, source: &str) -> FrameId {
        self.last_frames.get(source).copied().unwrap_or(0)
    }

    pub fn check(&self, source: &str, frame: FrameId, past_frame_threshold: i32) -> FrameDecision {
        if frame == FRAME_ALWAYS {
            return FrameDecision::AlwaysFlush;
        }

        let delta = i64::from(frame) - i64::from(self.last_frame(source));
        if delta > 0 {
            FrameDecision::Flush
        } else if delta < -i64::from(past_frame_threshold.max(0)) {
            FrameDecision::NewEpoch
        } else {
            FrameDecision::Stale
        }
    }

    /// Records `frame` as the last one seen from `source`. The sentinel is
    /// never recorded.
    pub fn accept(&mut self, source: &str, frame: FrameId) {
        if frame == FRAME_ALWAYS {
            return;
        }
        match self.last_frames.get_mut(source) {
            Some(last_frame) => *last_frame = frame,
            None => {
                self.last_frames.insert(source.to_string(), frame);
            }
        }
    }
}
