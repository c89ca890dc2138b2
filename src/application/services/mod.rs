//! Business logic services orchestrating repositories and external collaborators.

mod auth_service;
mod link_service;
mod metrics_service;
mod redirect_service;

pub use auth_service::AuthService;
pub use link_service::LinkService;
pub use metrics_service::{MetricsService, OwnerMetrics};
pub use redirect_service::RedirectService;
