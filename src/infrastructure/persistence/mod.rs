//! In-memory repository implementations.
//!
//! Coarse `RwLock<HashMap>` containers behind the domain repository traits.
//! A durable backend would slot in at the same trait seams.

mod memory_event_log;
mod memory_link_repository;
mod memory_session_repository;
mod memory_user_repository;

pub use memory_event_log::MemoryEventLog;
pub use memory_link_repository::MemoryLinkRepository;
pub use memory_session_repository::MemorySessionRepository;
pub use memory_user_repository::MemoryUserRepository;
