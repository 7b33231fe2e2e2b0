//! # Tuio Shared
//! Profile types and the session reconciliation engine shared by the tuio
//! crates. Everything here works on already-decoded OSC messages.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use rosc::{OscBundle, OscMessage, OscPacket, OscTime, OscType};

mod constants;
mod message;
mod profile;
mod session;
mod types;

pub use constants::{DEFAULT_PAST_FRAME_THRESHOLD, DEFAULT_TUIO_PORT, FRAME_ALWAYS};
pub use message::{
    arg_reader::ArgReader, error::ProfileError, message_type::MessageType,
};
pub use profile::{
    blob::{Blob25D, Blob2D, Blob3D},
    cursor::{Cursor25D, Cursor2D, Cursor3D},
    error::ProfileKindError,
    object::{Object25D, Object2D, Object3D},
    profile_kind::ProfileKind,
    touch::{Touch, TouchEvent},
    Profile,
};
pub use session::{
    callback_slot::{CallbackSlot, ProfileFn},
    error::SessionStoreError,
    frame_tracker::{FrameDecision, FrameTracker, PastFrameThreshold},
    pending_changes::{FrameBatches, PendingChanges},
    profile_handler::ProfileHandler,
    session_store::SessionStore,
};
pub use types::{FrameId, SessionId, Vec2, Vec3};
