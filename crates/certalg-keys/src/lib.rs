#![forbid(unsafe_code)]

//! Public-key side of certalg.
//!
//! Classifies public keys by capability shape, decides which signature
//! algorithms a key may be used with, decodes SubjectPublicKeyInfo and
//! normalizes the signature algorithm names certificates report.

pub mod compat;
pub mod key;
pub mod keyspec;
pub mod loader;
pub mod x509;

pub use compat::{encryption_signature_algorithm, is_compatible, signature_algorithms};
pub use key::{DsaParams, KeyShape, PublicKey};
pub use keyspec::key_specification;
pub use x509::{normalize, CertificateSignature};
