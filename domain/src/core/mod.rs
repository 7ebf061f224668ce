//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated, non-blank question
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: truncation and URI component encoding helpers

pub mod error;
pub mod question;
pub mod string;
