//! REST API handlers.

mod auth;
mod health;
mod links;
mod metrics;
mod redirect;

pub use auth::{login_handler, me_handler, signup_handler};
pub use health::health_handler;
pub use links::{list_links_handler, shorten_handler};
pub use metrics::metrics_handler;
pub use redirect::redirect_handler;
