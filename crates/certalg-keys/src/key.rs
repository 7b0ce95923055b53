#![forbid(unsafe_code)]

//! Public key capability shapes and the key-algorithm classifier.

use certalg_core::algorithm;
use certalg_crypto::KeyAlgorithm;
use num_bigint_dig::BigUint;

/// DSA domain parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct DsaParams {
    pub p: BigUint,
    pub q: BigUint,
    pub g: BigUint,
}

/// The capability surface a public key exposes.
///
/// ECDSA, GOST R 34.10 and DSTU 4145 keys share the `Ec` shape and are told
/// apart by the reported algorithm name.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyShape {
    Rsa {
        modulus: BigUint,
        public_exponent: BigUint,
    },
    Dsa {
        y: BigUint,
        params: Option<DsaParams>,
    },
    Ec {
        /// Encoded public point.
        point: Option<Vec<u8>>,
        /// Named curve, as a dotted OID or a curve name.
        curve: Option<String>,
    },
    /// No structured fields, only an encoding (EdDSA and anything unknown).
    Opaque { encoded: Vec<u8> },
}

/// A public key as handed over by a key-decoding collaborator.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub shape: KeyShape,
    /// Algorithm name reported alongside the key, if any.
    pub algorithm: Option<String>,
}

impl PublicKey {
    pub fn rsa(modulus: BigUint, public_exponent: BigUint) -> Self {
        Self {
            shape: KeyShape::Rsa {
                modulus,
                public_exponent,
            },
            algorithm: Some(algorithm::KEYALG_RSA.to_owned()),
        }
    }

    pub fn dsa(y: BigUint, params: Option<DsaParams>) -> Self {
        Self {
            shape: KeyShape::Dsa { y, params },
            algorithm: Some(algorithm::KEYALG_DSA.to_owned()),
        }
    }

    pub fn ec(algorithm: &str, point: Option<Vec<u8>>, curve: Option<String>) -> Self {
        Self {
            shape: KeyShape::Ec { point, curve },
            algorithm: Some(algorithm.to_owned()),
        }
    }

    pub fn opaque(algorithm: Option<&str>, encoded: Vec<u8>) -> Self {
        Self {
            shape: KeyShape::Opaque { encoded },
            algorithm: algorithm.map(str::to_owned),
        }
    }

    /// Replace the reported algorithm name.
    pub fn with_algorithm(mut self, algorithm: &str) -> Self {
        self.algorithm = Some(algorithm.to_owned());
        self
    }

    pub fn algorithm(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    /// Classify the key by shape first, then by reported name.
    ///
    /// Never fails: a key matching no known shape is
    /// [`KeyAlgorithm::Unsupported`].
    pub fn classify(&self) -> KeyAlgorithm {
        match &self.shape {
            KeyShape::Rsa { .. } => KeyAlgorithm::Rsa,
            KeyShape::Dsa { .. } => KeyAlgorithm::Dsa,
            KeyShape::Ec { .. } => {
                let name = self.algorithm().unwrap_or_default().to_ascii_uppercase();
                if name.contains("GOST") {
                    KeyAlgorithm::EcGost3410
                } else if name.contains("DSTU") {
                    KeyAlgorithm::Dstu4145
                } else {
                    KeyAlgorithm::Ecdsa
                }
            }
            KeyShape::Opaque { .. } => match self.algorithm() {
                Some(name) if name.eq_ignore_ascii_case(algorithm::KEYALG_ED25519) => {
                    KeyAlgorithm::Ed25519
                }
                Some(name) if name.eq_ignore_ascii_case(algorithm::KEYALG_ED448) => {
                    KeyAlgorithm::Ed448
                }
                other => {
                    tracing::debug!(algorithm = ?other, "public key matches no known shape");
                    KeyAlgorithm::Unsupported
                }
            },
        }
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.algorithm().unwrap_or("?");
        match &self.shape {
            KeyShape::Rsa { modulus, .. } => {
                write!(f, "{name} public key ({} bit modulus)", modulus.bits())
            }
            KeyShape::Dsa { params, .. } => match params {
                Some(p) => write!(f, "{name} public key ({} bit p)", p.p.bits()),
                None => write!(f, "{name} public key (no params)"),
            },
            KeyShape::Ec { curve, .. } => {
                write!(f, "{name} public key (curve {})", curve.as_deref().unwrap_or("?"))
            }
            KeyShape::Opaque { encoded } => {
                write!(f, "{name} public key ({} bytes)", encoded.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_rsa() -> PublicKey {
        PublicKey::rsa(BigUint::from(1000u32), BigUint::from(1u32))
    }

    fn mock_dsa() -> PublicKey {
        PublicKey::dsa(BigUint::from(1u32), None)
    }

    #[test]
    fn test_classify_shapes() {
        assert_eq!(mock_rsa().classify(), KeyAlgorithm::Rsa);
        assert_eq!(mock_dsa().classify(), KeyAlgorithm::Dsa);
        assert_eq!(PublicKey::ec("ECDSA mock", None, None).classify(), KeyAlgorithm::Ecdsa);
    }

    #[test]
    fn test_classify_ec_subfamilies_by_name() {
        assert_eq!(
            PublicKey::ec("GOST mock", None, None).classify(),
            KeyAlgorithm::EcGost3410
        );
        assert_eq!(
            PublicKey::ec("DSTU mock", None, None).classify(),
            KeyAlgorithm::Dstu4145
        );
        assert_eq!(PublicKey::ec("EC", None, None).classify(), KeyAlgorithm::Ecdsa);
    }

    #[test]
    fn test_classify_eddsa_by_name() {
        assert_eq!(
            PublicKey::opaque(Some("Ed25519"), vec![0; 32]).classify(),
            KeyAlgorithm::Ed25519
        );
        assert_eq!(
            PublicKey::opaque(Some("Ed448"), vec![0; 57]).classify(),
            KeyAlgorithm::Ed448
        );
    }

    #[test]
    fn test_classify_unsupported() {
        assert_eq!(PublicKey::opaque(None, Vec::new()).classify(), KeyAlgorithm::Unsupported);
        assert_eq!(
            PublicKey::opaque(Some("1.2.3.4"), vec![1, 2, 3]).classify(),
            KeyAlgorithm::Unsupported
        );
    }

    #[test]
    fn test_name_does_not_override_shape() {
        let key = mock_rsa().with_algorithm("Ed25519");
        assert_eq!(key.classify(), KeyAlgorithm::Rsa);
    }

    #[test]
    fn test_debug_hides_key_material() {
        let debug = format!("{:?}", mock_rsa());
        assert_eq!(debug, "RSA public key (10 bit modulus)");
    }
}
