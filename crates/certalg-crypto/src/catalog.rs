#![forbid(unsafe_code)]

//! Signature-algorithm catalog.
//!
//! The catalog is the single source of truth for which signature algorithms
//! exist, which key algorithm each one belongs to and which digest it is
//! built on. Enumeration, decomposition and composition all read the table;
//! nothing is inferred from the shape of a name except as a last resort in
//! [`Catalog::digest_for`].

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use certalg_core::{algorithm, Error, Result};

use crate::digest::{DigestAlgorithm, DigestKind};

/// The cryptographic family a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyAlgorithm {
    Rsa,
    Dsa,
    Ecdsa,
    Ed25519,
    Ed448,
    EcGost3410,
    Dstu4145,
    /// The key matched no known capability shape.
    Unsupported,
}

impl KeyAlgorithm {
    pub const ALL: [KeyAlgorithm; 8] = [
        KeyAlgorithm::Rsa,
        KeyAlgorithm::Dsa,
        KeyAlgorithm::Ecdsa,
        KeyAlgorithm::Ed25519,
        KeyAlgorithm::Ed448,
        KeyAlgorithm::EcGost3410,
        KeyAlgorithm::Dstu4145,
        KeyAlgorithm::Unsupported,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => algorithm::KEYALG_RSA,
            KeyAlgorithm::Dsa => algorithm::KEYALG_DSA,
            KeyAlgorithm::Ecdsa => algorithm::KEYALG_ECDSA,
            KeyAlgorithm::Ed25519 => algorithm::KEYALG_ED25519,
            KeyAlgorithm::Ed448 => algorithm::KEYALG_ED448,
            KeyAlgorithm::EcGost3410 => algorithm::KEYALG_ECGOST3410,
            KeyAlgorithm::Dstu4145 => algorithm::KEYALG_DSTU4145,
            KeyAlgorithm::Unsupported => "Unsupported",
        }
    }

    /// Parse a key algorithm name, case-insensitively. `EC` is accepted as
    /// an alias for ECDSA.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case(algorithm::KEYALG_EC) {
            return Some(KeyAlgorithm::Ecdsa);
        }
        Self::ALL
            .iter()
            .copied()
            .filter(|k| *k != KeyAlgorithm::Unsupported)
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }

    /// EdDSA, GOST and DSTU each have exactly one signature algorithm whose
    /// name is the complete identity.
    pub fn has_single_signature_algorithm(self) -> bool {
        matches!(
            self,
            KeyAlgorithm::Ed25519
                | KeyAlgorithm::Ed448
                | KeyAlgorithm::EcGost3410
                | KeyAlgorithm::Dstu4145
        )
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature padding applied on top of the raw key operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingScheme {
    None,
    /// RSA PKCS#1 v1.5.
    Pkcs1,
    /// RSASSA-PSS with MGF1.
    Mgf1,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureAlgorithmSpec {
    pub name: &'static str,
    pub digest: DigestKind,
    pub key_algorithm: KeyAlgorithm,
    pub padding: PaddingScheme,
    /// Signature algorithm OID. `None` for RSASSA-PSS, whose single OID is
    /// qualified by its hash parameter.
    pub oid: Option<&'static str>,
}

const fn spec(
    name: &'static str,
    digest: DigestKind,
    key_algorithm: KeyAlgorithm,
    padding: PaddingScheme,
    oid: Option<&'static str>,
) -> SignatureAlgorithmSpec {
    SignatureAlgorithmSpec {
        name,
        digest,
        key_algorithm,
        padding,
        oid,
    }
}

use algorithm as a;
use DigestKind as D;
use KeyAlgorithm as K;
use PaddingScheme as P;

/// Built-in entries, in the order enumeration reports them.
const BUILTIN: &[SignatureAlgorithmSpec] = &[
    // RSA PKCS#1 v1.5
    spec(a::SIGALG_SHA1_WITH_RSA, D::Sha1, K::Rsa, P::Pkcs1, Some(a::OID_SHA1_WITH_RSA)),
    spec(a::SIGALG_SHA256_WITH_RSA, D::Sha256, K::Rsa, P::Pkcs1, Some(a::OID_SHA256_WITH_RSA)),
    spec(a::SIGALG_SHA384_WITH_RSA, D::Sha384, K::Rsa, P::Pkcs1, Some(a::OID_SHA384_WITH_RSA)),
    spec(a::SIGALG_SHA512_WITH_RSA, D::Sha512, K::Rsa, P::Pkcs1, Some(a::OID_SHA512_WITH_RSA)),
    spec(
        a::SIGALG_SHA3_256_WITH_RSA,
        D::Sha3_256,
        K::Rsa,
        P::Pkcs1,
        Some(a::OID_SHA3_256_WITH_RSA),
    ),
    spec(
        a::SIGALG_SHA3_384_WITH_RSA,
        D::Sha3_384,
        K::Rsa,
        P::Pkcs1,
        Some(a::OID_SHA3_384_WITH_RSA),
    ),
    spec(
        a::SIGALG_SHA3_512_WITH_RSA,
        D::Sha3_512,
        K::Rsa,
        P::Pkcs1,
        Some(a::OID_SHA3_512_WITH_RSA),
    ),
    // RSASSA-PSS
    spec(a::SIGALG_SHA1_WITH_RSA_AND_MGF1, D::Sha1, K::Rsa, P::Mgf1, None),
    spec(a::SIGALG_SHA256_WITH_RSA_AND_MGF1, D::Sha256, K::Rsa, P::Mgf1, None),
    spec(a::SIGALG_SHA384_WITH_RSA_AND_MGF1, D::Sha384, K::Rsa, P::Mgf1, None),
    spec(a::SIGALG_SHA512_WITH_RSA_AND_MGF1, D::Sha512, K::Rsa, P::Mgf1, None),
    // DSA
    spec(a::SIGALG_SHA1_WITH_DSA, D::Sha1, K::Dsa, P::None, Some(a::OID_SHA1_WITH_DSA)),
    spec(a::SIGALG_SHA256_WITH_DSA, D::Sha256, K::Dsa, P::None, Some(a::OID_SHA256_WITH_DSA)),
    // ECDSA
    spec(a::SIGALG_SHA1_WITH_ECDSA, D::Sha1, K::Ecdsa, P::None, Some(a::OID_SHA1_WITH_ECDSA)),
    spec(a::SIGALG_SHA224_WITH_ECDSA, D::Sha224, K::Ecdsa, P::None, Some(a::OID_SHA224_WITH_ECDSA)),
    spec(a::SIGALG_SHA256_WITH_ECDSA, D::Sha256, K::Ecdsa, P::None, Some(a::OID_SHA256_WITH_ECDSA)),
    spec(a::SIGALG_SHA384_WITH_ECDSA, D::Sha384, K::Ecdsa, P::None, Some(a::OID_SHA384_WITH_ECDSA)),
    spec(a::SIGALG_SHA512_WITH_ECDSA, D::Sha512, K::Ecdsa, P::None, Some(a::OID_SHA512_WITH_ECDSA)),
    spec(
        a::SIGALG_SHA3_256_WITH_ECDSA,
        D::Sha3_256,
        K::Ecdsa,
        P::None,
        Some(a::OID_SHA3_256_WITH_ECDSA),
    ),
    spec(
        a::SIGALG_SHA3_384_WITH_ECDSA,
        D::Sha3_384,
        K::Ecdsa,
        P::None,
        Some(a::OID_SHA3_384_WITH_ECDSA),
    ),
    spec(
        a::SIGALG_SHA3_512_WITH_ECDSA,
        D::Sha3_512,
        K::Ecdsa,
        P::None,
        Some(a::OID_SHA3_512_WITH_ECDSA),
    ),
    // EdDSA
    spec(a::SIGALG_ED25519, D::None, K::Ed25519, P::None, Some(a::OID_ED25519)),
    spec(a::SIGALG_ED448, D::None, K::Ed448, P::None, Some(a::OID_ED448)),
    // GOST R 34.10-2001 and DSTU 4145
    spec(
        a::SIGALG_GOST3411_WITH_ECGOST3410,
        D::Gost3411,
        K::EcGost3410,
        P::None,
        Some(a::OID_GOST3411_WITH_GOST3410_2001),
    ),
    spec(
        a::SIGALG_GOST3411_WITH_DSTU4145,
        D::Gost3411,
        K::Dstu4145,
        P::None,
        Some(a::OID_DSTU4145_BE),
    ),
];

/// Returned by the composition operations when no entry matches.
pub const DEFAULT_SIGNATURE_ALGORITHM: &str = algorithm::SIGALG_SHA256_WITH_RSA;

/// Returned by [`Catalog::key_algorithm_for`] for names outside the catalog.
pub const DEFAULT_KEY_ALGORITHM: KeyAlgorithm = KeyAlgorithm::Rsa;

/// Returned by [`Catalog::digest_for`] when nothing can be resolved.
pub const DEFAULT_DIGEST: DigestKind = DigestKind::Sha256;

/// Immutable, indexed set of signature-algorithm entries.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<SignatureAlgorithmSpec>,
    by_name: HashMap<String, usize>,
    by_oid: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Build a catalog over the given entries. Earlier entries win when two
    /// share a name or OID.
    pub fn new(entries: Vec<SignatureAlgorithmSpec>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_oid = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            by_name.entry(entry.name.to_ascii_lowercase()).or_insert(i);
            if let Some(oid) = entry.oid {
                by_oid.entry(oid).or_insert(i);
            }
        }
        Self {
            entries,
            by_name,
            by_oid,
        }
    }

    /// The process-wide built-in catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(BUILTIN.to_vec()))
    }

    pub fn entries(&self) -> &[SignatureAlgorithmSpec] {
        &self.entries
    }

    /// Case-insensitive lookup by signature-algorithm name.
    pub fn lookup(&self, name: &str) -> Option<&SignatureAlgorithmSpec> {
        self.by_name
            .get(&name.trim().to_ascii_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Lookup by dotted signature-algorithm OID.
    pub fn by_oid(&self, oid: &str) -> Option<&SignatureAlgorithmSpec> {
        self.by_oid.get(oid.trim()).map(|&i| &self.entries[i])
    }

    /// Canonical casing of a catalog name.
    pub fn canonical_name(&self, name: &str) -> Option<&'static str> {
        self.lookup(name).map(|s| s.name)
    }

    /// Every signature algorithm usable with the given key algorithm, in
    /// catalog order. Empty for [`KeyAlgorithm::Unsupported`].
    pub fn signature_algorithms_for(&self, key_algorithm: KeyAlgorithm) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|s| s.key_algorithm == key_algorithm)
            .map(|s| s.name)
            .collect()
    }

    /// Key algorithm a signature algorithm is declared for. Names outside
    /// the catalog resolve to [`DEFAULT_KEY_ALGORITHM`].
    pub fn key_algorithm_for(&self, name: &str) -> KeyAlgorithm {
        match self.lookup(name) {
            Some(spec) => spec.key_algorithm,
            None => {
                tracing::debug!(
                    name,
                    default = %DEFAULT_KEY_ALGORITHM,
                    "unknown signature algorithm, using default key algorithm"
                );
                DEFAULT_KEY_ALGORITHM
            }
        }
    }

    /// Digest a signature algorithm is built on.
    ///
    /// Catalog names resolve from the table. Otherwise the part before
    /// `with` is parsed as a digest name. Names without a `with` part get
    /// [`DEFAULT_DIGEST`]. `None` means the name carries a digest that is
    /// not known, such as `MD5withRSA`. EdDSA resolves to
    /// [`DigestKind::None`].
    pub fn digest_for(&self, name: &str) -> Option<DigestKind> {
        if let Some(spec) = self.lookup(name) {
            return Some(spec.digest);
        }
        let lower = name.trim().to_ascii_lowercase();
        match lower.split_once("with") {
            Some((prefix, _)) => {
                let kind = DigestKind::from_name(prefix);
                if kind.is_none() {
                    tracing::debug!(name, prefix, "unknown digest in signature algorithm name");
                }
                kind
            }
            None => {
                tracing::debug!(
                    name,
                    default = %DEFAULT_DIGEST,
                    "no digest in signature algorithm name, using default"
                );
                Some(DEFAULT_DIGEST)
            }
        }
    }

    /// Instantiate the digest for a signature algorithm.
    ///
    /// Fails with `UnsupportedDigest` for EdDSA, which has no separate
    /// hash, for digests without a provider, and for names whose digest
    /// part is not known.
    pub fn hash_for(&self, name: &str) -> Result<Box<dyn DigestAlgorithm>> {
        self.digest_for(name)
            .ok_or_else(|| Error::UnsupportedDigest(name.trim().to_owned()))?
            .instantiate()
    }

    /// Canonical name for a (digest, key algorithm) pair.
    ///
    /// Key algorithms with a single signature algorithm ignore the digest.
    /// MGF1 variants are never chosen. Pairs with no entry fall back to
    /// [`DEFAULT_SIGNATURE_ALGORITHM`].
    pub fn compose_name(&self, digest: DigestKind, key_algorithm: KeyAlgorithm) -> &'static str {
        let found = self.entries.iter().find(|s| {
            s.key_algorithm == key_algorithm
                && s.padding != PaddingScheme::Mgf1
                && (s.digest == digest || key_algorithm.has_single_signature_algorithm())
        });
        match found {
            Some(spec) => spec.name,
            None => {
                tracing::debug!(
                    %digest,
                    %key_algorithm,
                    "no signature algorithm for pair, using default"
                );
                DEFAULT_SIGNATURE_ALGORITHM
            }
        }
    }

    /// [`Catalog::compose_name`] over unparsed inputs. `digest` may be a
    /// digest name or OID, `key_algorithm` a key algorithm name such as
    /// `RSA` or `EC`.
    pub fn compose_name_from_strings(&self, digest: &str, key_algorithm: &str) -> &'static str {
        match (
            DigestKind::from_name(digest),
            KeyAlgorithm::from_name(key_algorithm),
        ) {
            (Some(d), Some(k)) => self.compose_name(d, k),
            _ => {
                tracing::debug!(
                    digest,
                    key_algorithm,
                    "unparseable digest or key algorithm, using default"
                );
                DEFAULT_SIGNATURE_ALGORITHM
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certalg_core::Error;
    use proptest::prelude::*;

    #[test]
    fn test_round_trip_every_family() {
        let catalog = Catalog::builtin();
        for key_alg in KeyAlgorithm::ALL {
            for name in catalog.signature_algorithms_for(key_alg) {
                assert_eq!(catalog.key_algorithm_for(name), key_alg, "{name}");
            }
        }
    }

    #[test]
    fn test_eddsa_has_exactly_one_entry() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.signature_algorithms_for(KeyAlgorithm::Ed25519), vec!["Ed25519"]);
        assert_eq!(catalog.signature_algorithms_for(KeyAlgorithm::Ed448), vec!["Ed448"]);
        assert!(catalog.signature_algorithms_for(KeyAlgorithm::Rsa).len() > 1);
        assert!(catalog.signature_algorithms_for(KeyAlgorithm::Ecdsa).len() > 1);
    }

    #[test]
    fn test_unsupported_enumerates_nothing() {
        assert!(Catalog::builtin()
            .signature_algorithms_for(KeyAlgorithm::Unsupported)
            .is_empty());
    }

    #[test]
    fn test_key_algorithm_for() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.key_algorithm_for("SHA256WithECDSA"), KeyAlgorithm::Ecdsa);
        assert_eq!(catalog.key_algorithm_for("SHA256WITHRSAANDMGF1"), KeyAlgorithm::Rsa);
        assert_eq!(catalog.key_algorithm_for("GOST3411withDSTU4145"), KeyAlgorithm::Dstu4145);
        assert_eq!(catalog.key_algorithm_for("_NonExistingAlg"), KeyAlgorithm::Rsa);
    }

    #[test]
    fn test_digest_for() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.digest_for("SHA384withRSAandMGF1"), Some(DigestKind::Sha384));
        assert_eq!(catalog.digest_for("SHA3-512withECDSA"), Some(DigestKind::Sha3_512));
        assert_eq!(catalog.digest_for("Ed448"), Some(DigestKind::None));
        assert_eq!(catalog.digest_for("SHA224withRSA"), Some(DigestKind::Sha224));
        assert_eq!(catalog.digest_for("Foobar"), Some(DigestKind::Sha256));
        assert_eq!(catalog.digest_for("MD5withRSA"), None);
        assert_eq!(catalog.digest_for("RIPEMD160withRSA"), None);
    }

    #[test]
    fn test_hash_for_catalog_names() {
        let catalog = Catalog::builtin();
        for name in [
            "SHA256withECDSA",
            "SHA256withRSA",
            "SHA256withRSAandMGF1",
            "SHA384withECDSA",
            "SHA384withRSA",
            "SHA512withRSAandMGF1",
            "SHA3-256withECDSA",
            "SHA3-384withRSA",
            "SHA3-512withRSA",
        ] {
            let mut hasher = catalog.hash_for(name).expect(name);
            hasher.update(b"Dummy data to hash");
            assert!(!hasher.finalize().is_empty());
        }
    }

    #[test]
    fn test_hash_for_eddsa_fails() {
        let catalog = Catalog::builtin();
        for name in ["Ed25519", "Ed448"] {
            assert!(matches!(catalog.hash_for(name), Err(Error::UnsupportedDigest(_))));
        }
    }

    #[test]
    fn test_hash_for_unknown_digest_fails() {
        let catalog = Catalog::builtin();
        for name in ["MD5withRSA", "md5WithRSAEncryption", "RIPEMD160withRSA"] {
            assert!(
                matches!(catalog.hash_for(name), Err(Error::UnsupportedDigest(_))),
                "{name}"
            );
        }
        // no digest part at all keeps the default
        assert_eq!(catalog.hash_for("Foobar").map(|h| h.kind()).ok(), Some(DigestKind::Sha256));
    }

    #[test]
    fn test_builtin_shared_across_threads() {
        let ptrs: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| Catalog::builtin() as *const Catalog as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        let expected = Catalog::builtin() as *const Catalog as usize;
        assert!(ptrs.iter().all(|&p| p == expected));
        assert_eq!(Catalog::builtin().entries().len(), BUILTIN.len());
    }

    #[test]
    fn test_compose_name() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.compose_name(DigestKind::Sha1, KeyAlgorithm::Rsa), "SHA1withRSA");
        assert_eq!(catalog.compose_name(DigestKind::Sha256, KeyAlgorithm::Dsa), "SHA256withDSA");
        assert_eq!(
            catalog.compose_name(DigestKind::Sha224, KeyAlgorithm::Ecdsa),
            "SHA224withECDSA"
        );
        assert_eq!(
            catalog.compose_name(DigestKind::Sha3_384, KeyAlgorithm::Rsa),
            "SHA3-384withRSA"
        );
        assert_eq!(catalog.compose_name(DigestKind::None, KeyAlgorithm::Ed25519), "Ed25519");
        assert_eq!(
            catalog.compose_name(DigestKind::Sha256, KeyAlgorithm::EcGost3410),
            "GOST3411withECGOST3410"
        );
        // no SHA224 RSA entry
        assert_eq!(catalog.compose_name(DigestKind::Sha224, KeyAlgorithm::Rsa), "SHA256withRSA");
        assert_eq!(
            catalog.compose_name(DigestKind::Sha1, KeyAlgorithm::Unsupported),
            "SHA256withRSA"
        );
    }

    #[test]
    fn test_compose_name_from_strings() {
        let catalog = Catalog::builtin();
        let cases = [
            ("1.3.14.3.2.26", "RSA", "SHA1withRSA"),
            ("1.3.14.3.2.26", "DSA", "SHA1withDSA"),
            ("2.16.840.1.101.3.4.2.1", "RSA", "SHA256withRSA"),
            ("2.16.840.1.101.3.4.2.1", "DSA", "SHA256withDSA"),
            ("2.16.840.1.101.3.4.2.2", "RSA", "SHA384withRSA"),
            ("2.16.840.1.101.3.4.2.3", "RSA", "SHA512withRSA"),
            ("1.3.14.3.2.26", "EC", "SHA1withECDSA"),
            ("2.16.840.1.101.3.4.2.4", "EC", "SHA224withECDSA"),
            ("2.16.840.1.101.3.4.2.1", "EC", "SHA256withECDSA"),
            ("2.16.840.1.101.3.4.2.2", "EC", "SHA384withECDSA"),
            ("2.16.840.1.101.3.4.2.3", "EC", "SHA512withECDSA"),
            ("2.16.840.1.101.3.4.2.8", "RSA", "SHA3-256withRSA"),
            ("2.16.840.1.101.3.4.2.9", "RSA", "SHA3-384withRSA"),
            ("2.16.840.1.101.3.4.2.10", "RSA", "SHA3-512withRSA"),
            ("2.16.840.1.101.3.4.2.8", "EC", "SHA3-256withECDSA"),
            ("2.16.840.1.101.3.4.2.9", "EC", "SHA3-384withECDSA"),
            ("2.16.840.1.101.3.4.2.10", "EC", "SHA3-512withECDSA"),
            ("Foobar", "Foo", "SHA256withRSA"),
        ];
        for (digest, key, expected) in cases {
            assert_eq!(catalog.compose_name_from_strings(digest, key), expected, "{digest}/{key}");
        }
    }

    #[test]
    fn test_by_oid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_oid("1.2.840.10045.4.3.2").map(|s| s.name), Some("SHA256withECDSA"));
        assert_eq!(catalog.by_oid("1.2.643.2.2.3").map(|s| s.name), Some("GOST3411withECGOST3410"));
        assert!(catalog.by_oid("1.2.840.113549.1.1.10").is_none());
    }

    #[test]
    fn test_alternate_table() {
        let catalog = Catalog::new(vec![spec(
            "SHA512withDSA",
            DigestKind::Sha512,
            KeyAlgorithm::Dsa,
            PaddingScheme::None,
            None,
        )]);
        assert_eq!(catalog.signature_algorithms_for(KeyAlgorithm::Dsa), vec!["SHA512withDSA"]);
        assert!(catalog.signature_algorithms_for(KeyAlgorithm::Rsa).is_empty());
        assert_eq!(catalog.compose_name(DigestKind::Sha512, KeyAlgorithm::Dsa), "SHA512withDSA");
    }

    #[test]
    fn test_key_algorithm_names() {
        assert_eq!(KeyAlgorithm::from_name("EC"), Some(KeyAlgorithm::Ecdsa));
        assert_eq!(KeyAlgorithm::from_name("ecdsa"), Some(KeyAlgorithm::Ecdsa));
        assert_eq!(KeyAlgorithm::from_name("ed25519"), Some(KeyAlgorithm::Ed25519));
        assert_eq!(KeyAlgorithm::from_name("ECGOST3410"), Some(KeyAlgorithm::EcGost3410));
        assert_eq!(KeyAlgorithm::from_name("Unsupported"), None);
        assert_eq!(KeyAlgorithm::from_name("Foo"), None);
    }

    fn mixed_case(name: &str, mask: &[bool]) -> String {
        name.chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect()
    }

    proptest! {
        #[test]
        fn lookup_ignores_case(
            index in 0..BUILTIN.len(),
            mask in proptest::collection::vec(any::<bool>(), 1..16),
        ) {
            let catalog = Catalog::builtin();
            let entry = &BUILTIN[index];
            let probe = mixed_case(entry.name, &mask);
            prop_assert_eq!(catalog.canonical_name(&probe), Some(entry.name));
            prop_assert_eq!(catalog.key_algorithm_for(&probe), entry.key_algorithm);
        }
    }
}
