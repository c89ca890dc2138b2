//! Core business entities.

mod click;
mod link;
mod user;

pub use click::Click;
pub use link::{Link, NewLink};
pub use user::{StoredCredential, UserProfile};
