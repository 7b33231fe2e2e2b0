//! UDP transport. A bound socket is polled on a dedicated thread; every
//! datagram is decoded with `rosc` and its messages dispatched on that
//! thread.

use std::{
    io::ErrorKind,
    net::{SocketAddr, UdpSocket},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{info, warn};

use super::{join_receive_thread, Dispatcher, MessageReceiver, TransportError};
use crate::ListenerConfig;

// Largest payload a single IPv4 UDP datagram can carry
const MAX_DATAGRAM_SIZE: usize = 65_507;

pub struct UdpReceiver {
    address: SocketAddr,
    poll_interval: Duration,
    socket: Option<UdpSocket>,
    dispatcher: Dispatcher,
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl UdpReceiver {
    pub fn new(config: &ListenerConfig) -> Self {
        Self::with_address(config.socket_addr(), config.poll_interval)
    }

    pub fn with_address(address: SocketAddr, poll_interval: Duration) -> Self {
        Self {
            address,
            poll_interval,
            socket: None,
            dispatcher: Dispatcher::new(),
            running: Arc::new(AtomicBool::new(false)),
            thread: None,
        }
    }

    /// The address actually bound, which differs from the configured one
    /// when port 0 was requested
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|socket| socket.local_addr().ok())
    }
}

impl MessageReceiver for UdpReceiver {
    fn bind(&mut self) -> Result<(), TransportError> {
        if let Some(socket) = &self.socket {
            let address = socket.local_addr().unwrap_or(self.address);
            return Err(TransportError::AlreadyBound {
                address: address.to_string(),
            });
        }

        let socket =
            UdpSocket::bind(self.address).map_err(|error| TransportError::BindFailed {
                address: self.address.to_string(),
                reason: error.to_string(),
            })?;
        // a blocking read with a timeout lets the receive thread notice `close()`
        socket
            .set_read_timeout(Some(self.poll_interval))
            .map_err(|error| TransportError::SocketConfigFailed {
                reason: error.to_string(),
            })?;

        info!(
            "TUIO listener bound to {}",
            socket.local_addr().unwrap_or(self.address)
        );
        self.socket = Some(socket);
        Ok(())
    }

    fn listen(&mut self) -> Result<(), TransportError> {
        if self.thread.is_some() {
            return Err(TransportError::AlreadyListening);
        }
        let socket = self
            .socket
            .as_ref()
            .ok_or(TransportError::NotBound)?
            .try_clone()
            .map_err(|error| TransportError::SocketConfigFailed {
                reason: error.to_string(),
            })?;

        // each receive thread gets its own flag, so a thread left to exit on
        // its own after `stop()` is never revived by a later `listen()`
        let running = Arc::new(AtomicBool::new(true));
        let dispatcher = self.dispatcher.clone();
        let thread_running = running.clone();
        let thread = thread::Builder::new()
            .name("tuio-udp".to_string())
            .spawn(move || receive_loop(socket, dispatcher, thread_running))
            .map_err(|error| TransportError::ThreadSpawnFailed {
                reason: error.to_string(),
            })?;

        info!("TUIO listener receiving on {}", self.address);
        self.running = running;
        self.thread = Some(thread);
        Ok(())
    }

    fn stop(&mut self) -> Result<Option<JoinHandle<()>>, TransportError> {
        self.running.store(false, Ordering::Release);

        if self.socket.take().is_some() {
            info!("TUIO listener on {} closed", self.address);
        }
        Ok(self.thread.take())
    }

    fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    fn is_bound(&self) -> bool {
        self.socket.is_some()
    }

    fn is_listening(&self) -> bool {
        self.thread.is_some()
    }
}

impl Drop for UdpReceiver {
    fn drop(&mut self) {
        if let Ok(thread) = self.stop() {
            join_receive_thread(thread);
        }
    }
}

fn receive_loop(socket: UdpSocket, dispatcher: Dispatcher, running: Arc<AtomicBool>) {
    let mut buffer = vec![0u8; MAX_DATAGRAM_SIZE];

    while running.load(Ordering::Acquire) {
        match socket.recv_from(&mut buffer) {
            Ok((size, from)) => match rosc::decoder::decode_udp(&buffer[..size]) {
                Ok((_, packet)) => dispatcher.dispatch_packet(&packet),
                Err(error) => {
                    warn!("Dropping undecodable datagram from {}: {:?}", from, error);
                }
            },
            Err(error) if matches!(error.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {}
            Err(error) => {
                warn!("TUIO receive error: {}", error);
            }
        }
    }
}
