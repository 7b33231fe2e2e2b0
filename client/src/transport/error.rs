use thiserror::Error;

/// Errors that can occur while binding, starting or stopping a transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// `bind()` was called on a receiver that already holds its resource
    #[error("Receiver is already bound to {address}. Must call `close()` before binding again")]
    AlreadyBound { address: String },

    /// `listen()` was called before `bind()`
    #[error("Receiver is not bound. Must call `bind()` before `listen()`")]
    NotBound,

    /// `listen()` was called twice without `close()` in between
    #[error("Receiver is already listening")]
    AlreadyListening,

    /// The operating system refused the socket
    #[error("Failed to bind UDP socket at {address}: {reason}")]
    BindFailed { address: String, reason: String },

    /// The socket was bound but could not be configured for polling
    #[error("Failed to configure socket: {reason}")]
    SocketConfigFailed { reason: String },

    /// The receive thread could not be started
    #[error("Failed to spawn receive thread: {reason}")]
    ThreadSpawnFailed { reason: String },
}
