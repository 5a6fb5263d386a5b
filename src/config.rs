//! Process configuration, read from flags or `APP_*` environment variables.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::time::Duration;

/// Which fields of an inbound entity must be non-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ValidationPolicy {
    /// Every field.
    #[default]
    Strict,
    /// Only the id.
    IdOnly,
}

/// Per-call limits for backend access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadlines {
    pub read: Duration,
    pub write: Duration,
}

impl Default for Deadlines {
    fn default() -> Self {
        Self {
            read: Duration::from_secs(30),
            write: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "post_service", about = "Users and posts over HTTP")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "APP_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Deadline for lookups and scans, in seconds.
    #[arg(long, env = "APP_READ_TIMEOUT_SECS", default_value_t = 30)]
    pub read_timeout_secs: u64,

    /// Deadline for inserts, in seconds.
    #[arg(long, env = "APP_WRITE_TIMEOUT_SECS", default_value_t = 5)]
    pub write_timeout_secs: u64,

    /// Which fields must be non-empty on create.
    #[arg(long, env = "APP_VALIDATION", value_enum, default_value_t = ValidationPolicy::Strict)]
    pub validation: ValidationPolicy,

    /// Fallback log filter when `RUST_LOG` is unset.
    #[arg(long, env = "APP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn deadlines(&self) -> Deadlines {
        Deadlines {
            read: Duration::from_secs(self.read_timeout_secs),
            write: Duration::from_secs(self.write_timeout_secs),
        }
    }
}
