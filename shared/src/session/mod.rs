pub mod callback_slot;
pub mod error;
pub mod frame_tracker;
pub mod pending_changes;
pub mod profile_handler;
pub mod session_store;
