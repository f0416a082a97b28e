//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod group_code;
pub mod idle_timer;
pub mod notify;
pub mod send_message;
pub mod session;
pub mod sync;
pub mod typing;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
