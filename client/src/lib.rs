//! # Tuio Client
//! A listener that receives TUIO 1.1 messages, over UDP or an in-process
//! transport, keeps the active cursors, objects and blobs of every tracked
//! profile, and hands frame-batched add/update/remove events to application
//! callbacks.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate cfg_if;

pub mod transport;
pub mod shared {
    pub use tuio_shared::{
        ArgReader, CallbackSlot, FrameDecision, FrameTracker, MessageType, OscBundle,
        OscMessage, OscPacket, OscTime, OscType, PastFrameThreshold, ProfileError,
        ProfileFn, ProfileHandler, ProfileKindError, SessionStore, SessionStoreError,
        DEFAULT_PAST_FRAME_THRESHOLD, DEFAULT_TUIO_PORT, FRAME_ALWAYS,
    };
}

mod listener;
mod listener_config;
mod registry;

pub use listener::Listener;
pub use listener_config::{AddressFamily, ListenerConfig};
pub use registry::ListenerProfile;

pub use tuio_shared::{
    Blob25D, Blob2D, Blob3D, Cursor25D, Cursor2D, Cursor3D, FrameId, Object25D, Object2D,
    Object3D, Profile, ProfileKind, SessionId, Touch, TouchEvent, Vec2, Vec3,
};
