//! Repository traits decoupling services from the storage backend.

mod event_log;
mod link_repository;
mod session_repository;
mod user_repository;

pub use event_log::EventLog;
pub use link_repository::LinkRepository;
pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use event_log::MockEventLog;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
