//! # botwire-core
//!
//! Core types, the update handler trait, configuration, and error handling
//! shared by the botwire crates.

pub mod config;
pub mod error;
pub mod token;
pub mod traits;
pub mod types;
