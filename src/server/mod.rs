//! Server module for Duet
//!
//! Contains the server initialization and runtime logic.
//!
//! # Module Structure
//!
//! - `config`: Server settings (listener, agent config location, simulated latencies)
//! - `loader`: Configuration loading from files and environment
//! - `init`: Application state, router assembly and the run loop

pub mod config;
pub(crate) mod init;
mod loader;

pub use init::run;
pub use loader::load_config;
