use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use log::trace;

use tuio_shared::{OscMessage, OscPacket};

/// Called with every message sent to the address it is registered for
pub type MessageHandler = Arc<dyn Fn(&OscMessage) + Send + Sync>;

/// Routes decoded OSC packets to handlers by exact address.
///
/// Clones share one routing table, so a transport thread and the code that
/// registers handlers can each hold a `Dispatcher`.
#[derive(Clone, Default)]
pub struct Dispatcher {
    handlers: Arc<RwLock<HashMap<String, MessageHandler>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, address: &str, handler: MessageHandler) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(address.to_string(), handler);
    }

    /// Returns whether a handler was registered for `address`.
    pub fn unsubscribe(&self, address: &str) -> bool {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(address)
            .is_some()
    }

    pub fn is_subscribed(&self, address: &str) -> bool {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(address)
    }

    /// Delivers every message in `packet`, descending into nested bundles in
    /// order.
    pub fn dispatch_packet(&self, packet: &OscPacket) {
        match packet {
            OscPacket::Message(message) => {
                self.dispatch_message(message);
            }
            OscPacket::Bundle(bundle) => {
                for inner in &bundle.content {
                    self.dispatch_packet(inner);
                }
            }
        }
    }

    /// Returns whether a handler received the message.
    pub fn dispatch_message(&self, message: &OscMessage) -> bool {
        // the table lock is released before the handler runs, so a handler
        // may subscribe new addresses
        let handler = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&message.addr)
            .cloned();

        match handler {
            Some(handler) => {
                handler(message);
                true
            }
            None => {
                trace!("No handler subscribed to {}", message.addr);
                false
            }
        }
    }
}
