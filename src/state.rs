//! Shared application state injected into handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AuthService, LinkService, MetricsService, RedirectService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{
    MemoryEventLog, MemoryLinkRepository, MemorySessionRepository, MemoryUserRepository,
};

/// Service aliases bound to the in-memory backends.
pub type AppLinkService = LinkService<MemoryLinkRepository>;
pub type AppRedirectService = RedirectService<MemoryLinkRepository>;
pub type AppMetricsService = MetricsService<MemoryLinkRepository, MemoryEventLog>;
pub type AppAuthService = AuthService<MemoryUserRepository, MemorySessionRepository>;

/// Explicit service objects owning the shared maps; lifecycle tied to
/// process start/stop, never accessed as ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub redirect_service: Arc<AppRedirectService>,
    pub metrics_service: Arc<AppMetricsService>,
    pub auth_service: Arc<AppAuthService>,
    pub cache: Arc<dyn CacheService>,
    /// Kept alongside the redirect service's own sender so the health
    /// endpoint can report queue capacity.
    pub click_sender: mpsc::Sender<ClickEvent>,
}
