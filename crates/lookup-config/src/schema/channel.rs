//! Command channel (loopback TCP) settings.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 5050;

/// Where the running instance listens for lookup words.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChannelConfig {
    /// Must be a loopback address.
    pub host: IpAddr,
    pub port: u16,
    /// Client connect timeout (valid range: 50-10000).
    pub connect_timeout_ms: u64,
    /// Per-connection idle limit on the server (valid range: 100-60000).
    pub read_timeout_ms: u64,
    /// Largest accepted payload (valid range: 16-65536).
    pub max_payload_bytes: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            connect_timeout_ms: 1000,
            read_timeout_ms: 5000,
            max_payload_bytes: 4096,
        }
    }
}

impl ChannelConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}
