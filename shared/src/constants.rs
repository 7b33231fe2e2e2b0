use crate::FrameId;

/// UDP port TUIO trackers send to unless configured otherwise.
pub const DEFAULT_TUIO_PORT: u16 = 3333;

/// How far a source's frame id may jump backwards before the jump is read as
/// the sender restarting, rather than a late or duplicate frame.
pub const DEFAULT_PAST_FRAME_THRESHOLD: i32 = 10;

/// An `fseq` carrying this frame id always closes the frame, and is never
/// recorded as the source's last frame.
pub const FRAME_ALWAYS: FrameId = -1;
