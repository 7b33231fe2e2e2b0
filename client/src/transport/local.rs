//! In-process transport. Packets handed to a [`LocalSender`] are dispatched
//! synchronously on the sender's thread, which makes delivery deterministic
//! for tests and lets embedders feed in messages decoded elsewhere.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::JoinHandle,
};

use log::trace;

use tuio_shared::{OscMessage, OscPacket};

use super::{Dispatcher, MessageReceiver, TransportError};

const LOCAL_ADDRESS: &str = "local";

#[derive(Default)]
struct LocalState {
    bound: AtomicBool,
    listening: AtomicBool,
}

/// Receiving half of the in-process transport
pub struct LocalReceiver {
    dispatcher: Dispatcher,
    state: Arc<LocalState>,
}

impl LocalReceiver {
    pub fn new() -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            state: Arc::new(LocalState::default()),
        }
    }

    /// A sender feeding this receiver. Any number may be created.
    pub fn sender(&self) -> LocalSender {
        LocalSender {
            dispatcher: self.dispatcher.clone(),
            state: self.state.clone(),
        }
    }
}

impl Default for LocalReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageReceiver for LocalReceiver {
    fn bind(&mut self) -> Result<(), TransportError> {
        if self.state.bound.swap(true, Ordering::AcqRel) {
            return Err(TransportError::AlreadyBound {
                address: LOCAL_ADDRESS.to_string(),
            });
        }
        Ok(())
    }

    fn listen(&mut self) -> Result<(), TransportError> {
        if !self.state.bound.load(Ordering::Acquire) {
            return Err(TransportError::NotBound);
        }
        if self.state.listening.swap(true, Ordering::AcqRel) {
            return Err(TransportError::AlreadyListening);
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<Option<JoinHandle<()>>, TransportError> {
        self.state.listening.store(false, Ordering::Release);
        self.state.bound.store(false, Ordering::Release);
        Ok(None)
    }

    fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    fn is_bound(&self) -> bool {
        self.state.bound.load(Ordering::Acquire)
    }

    fn is_listening(&self) -> bool {
        self.state.listening.load(Ordering::Acquire)
    }
}

/// Sending half of the in-process transport
#[derive(Clone)]
pub struct LocalSender {
    dispatcher: Dispatcher,
    state: Arc<LocalState>,
}

impl LocalSender {
    /// Dispatches `packet` before returning. Packets sent while the receiver
    /// is not listening are dropped, as a closed socket would drop them.
    /// Returns whether the packet was delivered.
    pub fn send(&self, packet: &OscPacket) -> bool {
        if !self.state.listening.load(Ordering::Acquire) {
            trace!("Dropping local packet: receiver is not listening");
            return false;
        }
        self.dispatcher.dispatch_packet(packet);
        true
    }

    pub fn send_message(&self, message: OscMessage) -> bool {
        self.send(&OscPacket::Message(message))
    }
}
