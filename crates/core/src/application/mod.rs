// Application Layer - Routing and cross-category views

pub mod registry;

// Re-exports
pub use registry::Registry;
