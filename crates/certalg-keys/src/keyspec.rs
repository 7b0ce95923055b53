#![forbid(unsafe_code)]

//! Key specification strings: key size or curve name.

use certalg_crypto::{CurveTable, KeyAlgorithm};

use crate::key::{KeyShape, PublicKey};

const UNKNOWN: &str = "unknown";

/// Describe the size or curve of `key`.
///
/// RSA gives the modulus bit length, DSA the bit length of `p`, the EC
/// families the canonical curve name and EdDSA the algorithm name. Keys
/// whose parameters are missing or whose curve is not in the table give
/// `"unknown"`. Unsupported keys give `None`.
pub fn key_specification(key: &PublicKey) -> Option<String> {
    key_specification_with(CurveTable::builtin(), key)
}

/// [`key_specification`] against an explicit curve table.
pub fn key_specification_with(curves: &CurveTable, key: &PublicKey) -> Option<String> {
    let key_algorithm = key.classify();
    match (&key.shape, key_algorithm) {
        (_, KeyAlgorithm::Unsupported) => None,
        (_, KeyAlgorithm::Ed25519 | KeyAlgorithm::Ed448) => Some(key_algorithm.name().to_owned()),
        (KeyShape::Rsa { modulus, .. }, _) => Some(modulus.bits().to_string()),
        (KeyShape::Dsa { params, .. }, _) => Some(match params {
            Some(p) => p.p.bits().to_string(),
            None => UNKNOWN.to_owned(),
        }),
        (KeyShape::Ec { curve, .. }, _) => {
            let name = curve
                .as_deref()
                .and_then(|c| curves.resolve(c))
                .map(|entry| entry.canonical_name);
            if name.is_none() {
                tracing::debug!(curve = ?curve, "curve not in table");
            }
            Some(name.unwrap_or(UNKNOWN).to_owned())
        }
        (KeyShape::Opaque { .. }, _) => None,
    }
}
