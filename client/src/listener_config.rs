use std::{
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    time::Duration,
};

use tuio_shared::{DEFAULT_PAST_FRAME_THRESHOLD, DEFAULT_TUIO_PORT};

/// IP version of the socket a listener binds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressFamily {
    #[default]
    V4,
    V6,
}

/// Contains Config properties which will be used by a Listener
#[derive(Clone, Debug)]
pub struct ListenerConfig {
    /// Port to receive TUIO datagrams on. 3333 is the port trackers send to
    /// unless told otherwise.
    pub local_port: u16,
    /// Whether to bind the unspecified IPv4 or IPv6 address
    pub address_family: AddressFamily,
    /// How far back, in frames, an `fseq` may jump before it is taken as the
    /// sender restarting rather than a late frame. Can be changed at runtime
    /// through `Listener::set_past_frame_threshold`.
    pub past_frame_threshold: i32,
    /// How often a blocking transport wakes up to check whether it has been
    /// closed
    pub poll_interval: Duration,
}

impl ListenerConfig {
    /// Address to bind: the unspecified address of the configured family on
    /// `local_port`
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = match self.address_family {
            AddressFamily::V4 => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            AddressFamily::V6 => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        };
        SocketAddr::new(ip, self.local_port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            local_port: DEFAULT_TUIO_PORT,
            address_family: AddressFamily::V4,
            past_frame_threshold: DEFAULT_PAST_FRAME_THRESHOLD,
            poll_interval: Duration::from_millis(100),
        }
    }
}
