//! Shared utilities and common types for the Kukaya server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response envelope
//! - Utility functions (phone validation, masking, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig};
pub use types::response::{ApiResponse, FieldErrors};
pub use utils::phone;
