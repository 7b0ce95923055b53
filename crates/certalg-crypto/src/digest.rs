#![forbid(unsafe_code)]

//! Digest kinds and the digest provider.
//!
//! A [`DigestKind`] names the hash a signature algorithm is built on. Only
//! some kinds can be instantiated: EdDSA carries no separate digest and
//! GOST R 34.11-94 has no provider here, so both fail with
//! [`Error::UnsupportedDigest`].

use std::fmt;

use certalg_core::{algorithm, Error, Result};
use digest::Digest;

/// The digest half of a signature algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DigestKind {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Gost3411,
    /// Pure EdDSA: the signature algorithm name is the whole identity.
    None,
}

impl DigestKind {
    pub const ALL: [DigestKind; 10] = [
        DigestKind::Sha1,
        DigestKind::Sha224,
        DigestKind::Sha256,
        DigestKind::Sha384,
        DigestKind::Sha512,
        DigestKind::Sha3_256,
        DigestKind::Sha3_384,
        DigestKind::Sha3_512,
        DigestKind::Gost3411,
        DigestKind::None,
    ];

    /// Name as it appears in front of `with` in a signature-algorithm name.
    pub fn name(self) -> &'static str {
        match self {
            DigestKind::Sha1 => "SHA1",
            DigestKind::Sha224 => "SHA224",
            DigestKind::Sha256 => "SHA256",
            DigestKind::Sha384 => "SHA384",
            DigestKind::Sha512 => "SHA512",
            DigestKind::Sha3_256 => "SHA3-256",
            DigestKind::Sha3_384 => "SHA3-384",
            DigestKind::Sha3_512 => "SHA3-512",
            DigestKind::Gost3411 => "GOST3411",
            DigestKind::None => "NONE",
        }
    }

    pub fn oid(self) -> Option<&'static str> {
        match self {
            DigestKind::Sha1 => Some(algorithm::OID_SHA1),
            DigestKind::Sha224 => Some(algorithm::OID_SHA224),
            DigestKind::Sha256 => Some(algorithm::OID_SHA256),
            DigestKind::Sha384 => Some(algorithm::OID_SHA384),
            DigestKind::Sha512 => Some(algorithm::OID_SHA512),
            DigestKind::Sha3_256 => Some(algorithm::OID_SHA3_256),
            DigestKind::Sha3_384 => Some(algorithm::OID_SHA3_384),
            DigestKind::Sha3_512 => Some(algorithm::OID_SHA3_512),
            DigestKind::Gost3411 => Some(algorithm::OID_GOST3411),
            DigestKind::None => None,
        }
    }

    /// Parse a digest name (`SHA256`, `SHA-256`, `sha3_256`, ...) or a dotted
    /// digest OID.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Some(kind) = Self::ALL.iter().find(|k| k.oid() == Some(name)) {
            return Some(*kind);
        }
        match name.to_ascii_uppercase().replace('_', "-").as_str() {
            "SHA1" | "SHA-1" => Some(DigestKind::Sha1),
            "SHA224" | "SHA-224" => Some(DigestKind::Sha224),
            "SHA256" | "SHA-256" => Some(DigestKind::Sha256),
            "SHA384" | "SHA-384" => Some(DigestKind::Sha384),
            "SHA512" | "SHA-512" => Some(DigestKind::Sha512),
            "SHA3-256" => Some(DigestKind::Sha3_256),
            "SHA3-384" => Some(DigestKind::Sha3_384),
            "SHA3-512" => Some(DigestKind::Sha3_512),
            "GOST3411" | "GOSTR3411" | "GOST3411-94" | "GOSTR3411-94" => Some(DigestKind::Gost3411),
            "NONE" => Some(DigestKind::None),
            _ => None,
        }
    }

    /// Create a hasher for this digest.
    pub fn instantiate(self) -> Result<Box<dyn DigestAlgorithm>> {
        match self {
            DigestKind::Sha1 => Ok(Box::new(Sha1Digest::new())),
            DigestKind::Sha224 => Ok(Box::new(Sha224Digest::new())),
            DigestKind::Sha256 => Ok(Box::new(Sha256Digest::new())),
            DigestKind::Sha384 => Ok(Box::new(Sha384Digest::new())),
            DigestKind::Sha512 => Ok(Box::new(Sha512Digest::new())),
            DigestKind::Sha3_256 => Ok(Box::new(Sha3_256Digest::new())),
            DigestKind::Sha3_384 => Ok(Box::new(Sha3_384Digest::new())),
            DigestKind::Sha3_512 => Ok(Box::new(Sha3_512Digest::new())),
            DigestKind::Gost3411 | DigestKind::None => {
                Err(Error::UnsupportedDigest(self.name().to_owned()))
            }
        }
    }
}

impl fmt::Display for DigestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for digest algorithms.
pub trait DigestAlgorithm: Send {
    /// Feed data into the hash.
    fn update(&mut self, data: &[u8]);
    /// Finalize and return the hash value.
    fn finalize(self: Box<Self>) -> Vec<u8>;
    /// Output length in bytes.
    fn output_size(&self) -> usize;
    fn kind(&self) -> DigestKind;
}

/// Compute a digest in one shot.
pub fn digest(kind: DigestKind, data: &[u8]) -> Result<Vec<u8>> {
    let mut hasher = kind.instantiate()?;
    hasher.update(data);
    Ok(hasher.finalize())
}

// ── Concrete implementations ─────────────────────────────────────────

macro_rules! impl_digest {
    ($name:ident, $hasher:ty, $kind:expr) => {
        struct $name {
            inner: $hasher,
        }

        impl $name {
            fn new() -> Self {
                Self {
                    inner: <$hasher>::new(),
                }
            }
        }

        impl DigestAlgorithm for $name {
            fn update(&mut self, data: &[u8]) {
                Digest::update(&mut self.inner, data);
            }

            fn finalize(self: Box<Self>) -> Vec<u8> {
                Digest::finalize(self.inner).to_vec()
            }

            fn output_size(&self) -> usize {
                <$hasher as Digest>::output_size()
            }

            fn kind(&self) -> DigestKind {
                $kind
            }
        }
    };
}

impl_digest!(Sha1Digest, sha1::Sha1, DigestKind::Sha1);
impl_digest!(Sha224Digest, sha2::Sha224, DigestKind::Sha224);
impl_digest!(Sha256Digest, sha2::Sha256, DigestKind::Sha256);
impl_digest!(Sha384Digest, sha2::Sha384, DigestKind::Sha384);
impl_digest!(Sha512Digest, sha2::Sha512, DigestKind::Sha512);
impl_digest!(Sha3_256Digest, sha3::Sha3_256, DigestKind::Sha3_256);
impl_digest!(Sha3_384Digest, sha3::Sha3_384, DigestKind::Sha3_384);
impl_digest!(Sha3_512Digest, sha3::Sha3_512, DigestKind::Sha3_512);

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn test_sha256() {
        let result = digest(DigestKind::Sha256, b"hello").unwrap();
        assert_eq!(
            hex(&result),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_output_sizes() {
        let expected = [
            (DigestKind::Sha1, 20),
            (DigestKind::Sha224, 28),
            (DigestKind::Sha256, 32),
            (DigestKind::Sha384, 48),
            (DigestKind::Sha512, 64),
            (DigestKind::Sha3_256, 32),
            (DigestKind::Sha3_384, 48),
            (DigestKind::Sha3_512, 64),
        ];
        for (kind, size) in expected {
            let hasher = kind.instantiate().unwrap();
            assert_eq!(hasher.output_size(), size, "{kind}");
            assert_eq!(hasher.kind(), kind);
            assert_eq!(hasher.finalize().len(), size, "{kind}");
        }
    }

    #[test]
    fn test_no_provider_for_none_and_gost() {
        assert!(matches!(
            DigestKind::None.instantiate(),
            Err(Error::UnsupportedDigest(_))
        ));
        assert!(matches!(
            DigestKind::Gost3411.instantiate(),
            Err(Error::UnsupportedDigest(_))
        ));
    }

    #[test]
    fn test_from_name_variants() {
        assert_eq!(DigestKind::from_name("SHA-1"), Some(DigestKind::Sha1));
        assert_eq!(DigestKind::from_name("sha256"), Some(DigestKind::Sha256));
        assert_eq!(DigestKind::from_name("SHA3_384"), Some(DigestKind::Sha3_384));
        assert_eq!(DigestKind::from_name("GOSTR3411-94"), Some(DigestKind::Gost3411));
        assert_eq!(DigestKind::from_name("MD4"), None);
    }

    #[test]
    fn test_from_oid() {
        assert_eq!(DigestKind::from_name("1.3.14.3.2.26"), Some(DigestKind::Sha1));
        assert_eq!(
            DigestKind::from_name("2.16.840.1.101.3.4.2.4"),
            Some(DigestKind::Sha224)
        );
        assert_eq!(
            DigestKind::from_name("2.16.840.1.101.3.4.2.10"),
            Some(DigestKind::Sha3_512)
        );
        for kind in DigestKind::ALL {
            if let Some(oid) = kind.oid() {
                assert_eq!(DigestKind::from_name(oid), Some(kind));
            }
        }
    }
}
