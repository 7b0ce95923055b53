#![forbid(unsafe_code)]

//! Algorithm tables for certalg.
//!
//! Provides the digest provider, the signature-algorithm catalog and the
//! named-curve resolver. All tables are built once on first use and are
//! read-only afterwards.

pub mod catalog;
pub mod curves;
pub mod digest;
pub mod registry;

pub use catalog::{Catalog, KeyAlgorithm, PaddingScheme, SignatureAlgorithmSpec};
pub use curves::{CurveEntry, CurveSource, CurveTable};
pub use digest::{DigestAlgorithm, DigestKind};
pub use registry::AlgorithmRegistry;
