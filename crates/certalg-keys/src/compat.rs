#![forbid(unsafe_code)]

//! Compatibility matrix between public keys and signature algorithms.
//!
//! The matrix is an explicit rule per key algorithm rather than one
//! equality check: EC-shaped keys split into four families (ECDSA, GOST,
//! DSTU and, by name only, EdDSA) that never share signature algorithms.

use certalg_core::algorithm;
use certalg_crypto::{AlgorithmRegistry, Catalog, DigestKind, KeyAlgorithm};

use crate::key::PublicKey;

/// Signature algorithms recognised by the compatibility check but never
/// enumerated or composed.
const LEGACY_ALGORITHMS: &[(&str, KeyAlgorithm)] =
    &[(algorithm::SIGALG_MD5_WITH_RSA, KeyAlgorithm::Rsa)];

fn legacy_key_algorithm(signature_algorithm: &str) -> Option<KeyAlgorithm> {
    let name = signature_algorithm.trim();
    LEGACY_ALGORITHMS
        .iter()
        .find(|(legacy, _)| legacy.eq_ignore_ascii_case(name))
        .map(|&(_, key_algorithm)| key_algorithm)
}

/// Whether `signature_algorithm` may be used to sign with `key`, under the
/// built-in tables and default configuration.
pub fn is_compatible(key: &PublicKey, signature_algorithm: &str) -> bool {
    is_compatible_with(&AlgorithmRegistry::builtin(), key, signature_algorithm)
}

/// Whether `signature_algorithm` may be used to sign with `key`.
///
/// Legacy names such as `MD5withRSA` match their key family unless the
/// configuration turns them off. Other names outside the catalog are never
/// compatible. SHA1 algorithms are rejected when the configuration turns
/// them off.
pub fn is_compatible_with(
    registry: &AlgorithmRegistry<'_>,
    key: &PublicKey,
    signature_algorithm: &str,
) -> bool {
    let Some(spec) = registry.catalog.lookup(signature_algorithm) else {
        if let Some(key_algorithm) = legacy_key_algorithm(signature_algorithm) {
            if !registry.config.accept_legacy {
                tracing::debug!(signature_algorithm, "legacy signature algorithms are disabled");
                return false;
            }
            return key.classify() == key_algorithm;
        }
        tracing::debug!(signature_algorithm, "unknown signature algorithm is not compatible");
        return false;
    };
    if spec.digest == DigestKind::Sha1 && !registry.config.accept_sha1 {
        tracing::debug!(signature_algorithm, "SHA1 signature algorithms are disabled");
        return false;
    }

    match key.classify() {
        // PKCS#1 v1.5 and MGF1 alike
        KeyAlgorithm::Rsa => spec.key_algorithm == KeyAlgorithm::Rsa,
        KeyAlgorithm::Dsa => spec.key_algorithm == KeyAlgorithm::Dsa,
        KeyAlgorithm::Ecdsa => spec.key_algorithm == KeyAlgorithm::Ecdsa,
        KeyAlgorithm::Ed25519 => spec.name == algorithm::SIGALG_ED25519,
        KeyAlgorithm::Ed448 => spec.name == algorithm::SIGALG_ED448,
        KeyAlgorithm::EcGost3410 => spec.name == algorithm::SIGALG_GOST3411_WITH_ECGOST3410,
        KeyAlgorithm::Dstu4145 => spec.name == algorithm::SIGALG_GOST3411_WITH_DSTU4145,
        KeyAlgorithm::Unsupported => false,
    }
}

/// Every catalog signature algorithm for the key's family, in catalog
/// order. Empty for unsupported keys.
pub fn signature_algorithms(key: &PublicKey) -> Vec<&'static str> {
    Catalog::builtin().signature_algorithms_for(key.classify())
}

/// Signature algorithms for `key` that pass [`is_compatible_with`] under
/// the registry's configuration.
pub fn compatible_signature_algorithms(
    registry: &AlgorithmRegistry<'_>,
    key: &PublicKey,
) -> Vec<&'static str> {
    registry
        .signature_algorithms_for(key.classify())
        .into_iter()
        .filter(|name| is_compatible_with(registry, key, name))
        .collect()
}

/// Signature algorithm to use when `key` is an encryption key and the CA
/// signs with `signature_algorithm`.
pub fn encryption_signature_algorithm(signature_algorithm: &str, key: &PublicKey) -> String {
    encryption_signature_algorithm_with(Catalog::builtin(), signature_algorithm, key)
}

/// [`encryption_signature_algorithm`] against an explicit catalog.
///
/// For RSA keys, ECDSA and DSA names are moved to RSA with the same digest.
/// For EC keys, RSA and MGF1 names are moved to ECDSA, DSA names to RSA.
/// GOST and DSTU names become `SHA1withRSA`, EdDSA names `SHA256withRSA`.
/// Unknown names and other key algorithms leave the name as given.
pub fn encryption_signature_algorithm_with(
    catalog: &Catalog,
    signature_algorithm: &str,
    key: &PublicKey,
) -> String {
    use KeyAlgorithm as K;

    let Some(spec) = catalog.lookup(signature_algorithm) else {
        return signature_algorithm.to_owned();
    };
    let key_algorithm = key.classify();
    if !matches!(key_algorithm, K::Rsa | K::Ecdsa) {
        return signature_algorithm.to_owned();
    }

    let target = match (key_algorithm, spec.key_algorithm) {
        (_, K::EcGost3410 | K::Dstu4145) => algorithm::SIGALG_SHA1_WITH_RSA,
        (_, K::Ed25519 | K::Ed448) => algorithm::SIGALG_SHA256_WITH_RSA,
        (K::Rsa, K::Rsa) | (K::Ecdsa, K::Ecdsa) => spec.name,
        (K::Rsa, _) | (K::Ecdsa, K::Dsa) => catalog.compose_name(spec.digest, K::Rsa),
        (K::Ecdsa, _) => catalog.compose_name(spec.digest, K::Ecdsa),
        _ => spec.name,
    };
    target.to_owned()
}
