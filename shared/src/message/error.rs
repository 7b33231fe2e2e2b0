use thiserror::Error;

/// Errors that can occur while reading a TUIO message
///
/// Every variant is local to the one message that produced it: the message
/// is dropped and the session state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Message carried no arguments, or its first argument is not a string
    #[error("Message on {address} has no message type. TUIO messages must start with a string command")]
    MissingMessageType { address: String },

    /// First argument is a string, but not one of `source`, `set`, `alive` or `fseq`
    #[error("Unknown message type '{message_type}' on {address}. Expected one of source, set, alive or fseq")]
    UnknownMessageType {
        address: String,
        message_type: String,
    },

    /// Argument count does not match the shape of the message
    #[error("Malformed '{message_type}' message on {address}: expected {expected} arguments, received {actual}")]
    MalformedMessage {
        address: String,
        message_type: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Argument at `index` has the wrong OSC type
    #[error("Argument {index} of message on {address} should be {expected}, received {received}")]
    UnexpectedArgument {
        address: String,
        index: usize,
        expected: &'static str,
        received: &'static str,
    },
}
