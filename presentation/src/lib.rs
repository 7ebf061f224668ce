//! Presentation layer for sanctuary
//!
//! This crate contains the HTTP API, CLI definitions, output formatters
//! and progress reporting.

pub mod cli;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::LookupSpinner;
pub use server::{ApiError, AppState, router, run};
