//! Synchronization core for a polled group-chat client.
//!
//! The backend is a plain REST document store (Firebase-style): a shared
//! message list per group and an ephemeral typing map, both reconciled by a
//! background poll loop. The presentation layer is an external collaborator:
//! it calls the intent API on [`usecases::session::ChatSession`] and drains
//! typed [`domain::events::ChatEvent`]s from an mpsc receiver.

pub mod domain;
pub mod infra;
pub mod store;
#[cfg(test)]
mod test_support;
pub mod usecases;

pub use domain::events::ChatEvent;
pub use domain::session::Session;
pub use usecases::bootstrap::bootstrap;
pub use usecases::context::AppContext;
pub use usecases::session::{ChatSession, SessionOptions};
