//! Core types for the kanban board service
//!
//! Domain records shared by storage, HTTP handlers and the client state
//! reconciler, plus environment-driven configuration.

mod board;
mod config;
mod constants;
mod env_config;
mod status;

pub use board::*;
pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use status::*;
