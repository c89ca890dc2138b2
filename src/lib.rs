//! # linkpulse
//!
//! A URL shortener with asynchronous click analytics, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, repository traits,
//!   and the click ingestion worker
//! - **Application Layer** ([`application`]) - Business logic and service
//!   orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory storage, the
//!   redirect cache, and the category classifier
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Design
//!
//! The redirect hot path resolves a short code through a read-through cache
//! and records the click by pushing an event into a bounded channel; a
//! background worker drains the channel on a fixed cadence and applies the
//! events to the link store and the append-only event log. Click counts are
//! eventually consistent: they converge once the queue drains.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:3000"
//! export TOKEN_SIGNING_SECRET="change-me"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthService, LinkService, MetricsService, OwnerMetrics, RedirectService,
    };
    pub use crate::domain::click_event::ClickEvent;
    pub use crate::domain::entities::{Click, Link, NewLink, UserProfile};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
