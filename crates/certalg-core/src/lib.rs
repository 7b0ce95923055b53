#![forbid(unsafe_code)]

//! Core types for the certalg algorithm identity toolkit.
//!
//! Holds the canonical signature-algorithm names, the object identifiers the
//! rest of the workspace resolves against, the shared error type and the
//! runtime configuration.

pub mod algorithm;
pub mod config;
pub mod error;

pub use config::AlgorithmConfig;
pub use error::{Error, Result};
