//! Command-line and environment configuration.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::lifecycle::DEFAULT_CHANNEL_CAPACITY;

/// In-memory study tracker HTTP service.
#[derive(Parser, Debug, Clone)]
#[command(name = "study-tracker", version, about)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "STUDY_TRACKER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "STUDY_TRACKER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Capacity of the Store actor's mailbox.
    #[arg(
        long,
        env = "STUDY_TRACKER_CHANNEL_CAPACITY",
        default_value_t = DEFAULT_CHANNEL_CAPACITY,
        value_parser = parse_capacity,
    )]
    pub channel_capacity: usize,

    /// Reject deadlines that cannot be parsed instead of storing them as null.
    #[arg(long, env = "STUDY_TRACKER_STRICT_DEADLINES", default_value_t = false)]
    pub strict_deadlines: bool,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("channel capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(e.to_string()),
    }
}
