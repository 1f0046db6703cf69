//! Shared types, error model, and configuration for clientdocs.
//!
//! This crate is the foundation depended on by all other clientdocs crates.
//! It provides:
//! - [`ClientDocsError`], the unified error type
//! - Domain types ([`Category`], [`SourceDocument`])
//! - Configuration ([`GeneratorConfig`])

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::GeneratorConfig;
pub use error::{ClientDocsError, Result};
pub use types::{Category, SourceDocument};
