// Triage Core - Domain Logic & Ports
// NO terminal or filesystem dependencies (hexagonal core)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use application::Registry;
pub use config::RegistryConfig;
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
