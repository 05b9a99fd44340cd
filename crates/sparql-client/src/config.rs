use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for the pooled HTTP transport backing a client.
///
/// Proxy resolution follows the process environment and dual-stack dialing
/// is handled by the transport layer; neither is configurable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Timeout for establishing a new TCP connection.
    pub connect_timeout: Duration,
    /// TCP keep-alive interval for established connections.
    pub keep_alive: Duration,
    /// Maximum number of idle pooled connections kept per host.
    pub max_idle_conns: usize,
    /// How long an idle pooled connection may live before eviction.
    pub idle_conn_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            keep_alive: Duration::from_secs(30),
            max_idle_conns: 100,
            idle_conn_timeout: Duration::from_secs(90),
        }
    }
}

impl ConnectionConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.connect_timeout.is_zero() {
            return Err("Connect timeout must be greater than 0".to_string());
        }
        if self.keep_alive.is_zero() {
            return Err("Keep-alive interval must be greater than 0".to_string());
        }
        if self.max_idle_conns == 0 {
            return Err("Max idle connections must be greater than 0".to_string());
        }
        if self.idle_conn_timeout.is_zero() {
            return Err("Idle connection timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}
