//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. All state is held in memory, so there is no database or cache
//! backend to configure.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CLICK_QUEUE_CAPACITY` - Click event buffer size (default: 10000, min: 100)
//! - `CLICK_FLUSH_INTERVAL_MS` - Click worker tick interval (default: 100)
//! - `CLICK_BATCH_SIZE` - Max click events applied per tick (default: 256)
//! - `TOKEN_SIGNING_SECRET` - HMAC key for password hashing (default: dev-only secret)

use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Bounded capacity of the click event channel. Events beyond capacity
    /// are dropped by the producer, never queued.
    pub click_queue_capacity: usize,
    /// Cadence of the background click worker in milliseconds.
    pub click_flush_interval_ms: u64,
    /// Maximum number of click events applied per worker tick.
    pub click_batch_size: usize,
    /// HMAC signing secret used to hash credentials before storage.
    /// Loaded from `TOKEN_SIGNING_SECRET`.
    pub token_signing_secret: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let click_queue_capacity = env::var("CLICK_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000)
            .max(100);

        let click_flush_interval_ms = env::var("CLICK_FLUSH_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let click_batch_size = env::var("CLICK_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(256)
            .max(1);

        let token_signing_secret = env::var("TOKEN_SIGNING_SECRET").unwrap_or_else(|_| {
            tracing::warn!("TOKEN_SIGNING_SECRET not set, using insecure development secret");
            "insecure-dev-secret".to_string()
        });

        Self {
            listen_addr,
            log_level,
            log_format,
            click_queue_capacity,
            click_flush_interval_ms,
            click_batch_size,
            token_signing_secret,
        }
    }
}
