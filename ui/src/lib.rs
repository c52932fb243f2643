//! # Folio
//!
//! Theme engine and command line front end for the Folio portfolio site.
//!
//! ## Features
//!
//! - Six themes (dark/light crossed with purple, blue and green accents) plus style variants
//! - Theme state persisted between runs and applied to a document model
//! - Spotify "now playing" badge, one-shot or watched, and the proxy route
//! - Project listings read from `.mdx` files
//!
//! ## Modules
//!
//! - [`theme`] - Theme registry, applier, persistence and session manager
//! - [`commands`] - One function per `folio` subcommand
//! - [`cli`] - Command line definition
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Logging configuration
//! - [`validation`] - Shared validator trait
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod theme;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use error::AppError;

// Re-export validation trait for broader use
pub use validation::Validator;
