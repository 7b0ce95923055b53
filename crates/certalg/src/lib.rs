#![forbid(unsafe_code)]

//! Certificate algorithm identity and compatibility resolution.
//!
//! Re-exports the workspace crates under one name.

pub use certalg_core as core;
pub use certalg_crypto as crypto;
pub use certalg_keys as keys;

pub use certalg_core::{AlgorithmConfig, Error, Result};
pub use certalg_crypto::{AlgorithmRegistry, Catalog, CurveTable, DigestKind, KeyAlgorithm};
pub use certalg_keys::{is_compatible, key_specification, normalize, PublicKey};
