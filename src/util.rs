//! Shared utility modules.

pub mod combinations;

// Re-export commonly used types
pub use combinations::Combinations;
