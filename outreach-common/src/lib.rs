//! # Outreach Common Library
//!
//! Shared code for the outreach desk service:
//! - Error type used across crates
//! - Configuration loading and root folder resolution
//! - SQLite pool initialization and key-value settings access

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
