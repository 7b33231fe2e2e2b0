use std::thread::{self, JoinHandle};

use log::warn;

cfg_if! {
    if #[cfg(feature = "transport_udp")] {
        pub mod udp;
    } else {}
}

pub mod local;

mod dispatcher;
mod error;

pub use dispatcher::{Dispatcher, MessageHandler};
pub use error::TransportError;

/// A source of decoded OSC messages.
///
/// Implementations own whatever socket or channel the messages come from.
/// Every message is routed by its exact address to the handler registered
/// for it; bundles are unpacked before routing.
pub trait MessageReceiver: Send {
    /// Acquires the underlying resource, such as a UDP socket
    fn bind(&mut self) -> Result<(), TransportError>;
    /// Starts delivering messages to registered handlers
    fn listen(&mut self) -> Result<(), TransportError>;
    /// Stops delivery and releases the underlying resource without waiting
    /// for a receive thread to exit. Returns that thread, if there is one,
    /// so the caller can join it once no lock it shares is held.
    fn stop(&mut self) -> Result<Option<JoinHandle<()>>, TransportError>;
    /// Stops delivery, releases the underlying resource and waits for the
    /// receive thread. Closing a receiver that is not bound is not an error.
    fn close(&mut self) -> Result<(), TransportError> {
        let thread = self.stop()?;
        join_receive_thread(thread);
        Ok(())
    }
    /// The routing table this receiver delivers into
    fn dispatcher(&self) -> Dispatcher;
    /// Routes messages sent to `address` to `handler`, replacing any handler
    /// already registered there. Takes effect immediately, even while
    /// listening.
    fn set_listener(&self, address: &str, handler: MessageHandler) {
        self.dispatcher().subscribe(address, handler);
    }
    fn is_bound(&self) -> bool;
    fn is_listening(&self) -> bool;
}

/// Waits for a receive thread returned by [`MessageReceiver::stop`]. Does
/// nothing when called from that thread, which exits on its own once the
/// current dispatch returns.
pub fn join_receive_thread(thread: Option<JoinHandle<()>>) {
    let Some(thread) = thread else {
        return;
    };
    if thread.thread().id() == thread::current().id() {
        return;
    }
    if thread.join().is_err() {
        warn!("TUIO receive thread panicked before shutdown");
    }
}
