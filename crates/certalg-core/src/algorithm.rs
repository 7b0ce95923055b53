#![forbid(unsafe_code)]

//! Algorithm name and object identifier constants.
//!
//! Signature-algorithm names use the canonical display casing
//! (`SHA256withRSA`, `SHA3-256withECDSA`, ...). Lookups elsewhere in the
//! workspace compare them case-insensitively.

// ── Key algorithm names ──────────────────────────────────────────────

pub const KEYALG_RSA: &str = "RSA";
pub const KEYALG_DSA: &str = "DSA";
pub const KEYALG_EC: &str = "EC";
pub const KEYALG_ECDSA: &str = "ECDSA";
pub const KEYALG_ED25519: &str = "Ed25519";
pub const KEYALG_ED448: &str = "Ed448";
pub const KEYALG_ECGOST3410: &str = "ECGOST3410";
pub const KEYALG_DSTU4145: &str = "DSTU4145";

// ── RSA signature algorithms ─────────────────────────────────────────

pub const SIGALG_SHA1_WITH_RSA: &str = "SHA1withRSA";
pub const SIGALG_SHA256_WITH_RSA: &str = "SHA256withRSA";
pub const SIGALG_SHA384_WITH_RSA: &str = "SHA384withRSA";
pub const SIGALG_SHA512_WITH_RSA: &str = "SHA512withRSA";
pub const SIGALG_SHA3_256_WITH_RSA: &str = "SHA3-256withRSA";
pub const SIGALG_SHA3_384_WITH_RSA: &str = "SHA3-384withRSA";
pub const SIGALG_SHA3_512_WITH_RSA: &str = "SHA3-512withRSA";
pub const SIGALG_SHA1_WITH_RSA_AND_MGF1: &str = "SHA1withRSAandMGF1";
pub const SIGALG_SHA256_WITH_RSA_AND_MGF1: &str = "SHA256withRSAandMGF1";
pub const SIGALG_SHA384_WITH_RSA_AND_MGF1: &str = "SHA384withRSAandMGF1";
pub const SIGALG_SHA512_WITH_RSA_AND_MGF1: &str = "SHA512withRSAandMGF1";

/// Shown for legacy certificates only; never offered for new signatures.
pub const SIGALG_MD5_WITH_RSA: &str = "MD5withRSA";

// ── DSA signature algorithms ─────────────────────────────────────────

pub const SIGALG_SHA1_WITH_DSA: &str = "SHA1withDSA";
pub const SIGALG_SHA256_WITH_DSA: &str = "SHA256withDSA";

// ── ECDSA signature algorithms ───────────────────────────────────────

pub const SIGALG_SHA1_WITH_ECDSA: &str = "SHA1withECDSA";
pub const SIGALG_SHA224_WITH_ECDSA: &str = "SHA224withECDSA";
pub const SIGALG_SHA256_WITH_ECDSA: &str = "SHA256withECDSA";
pub const SIGALG_SHA384_WITH_ECDSA: &str = "SHA384withECDSA";
pub const SIGALG_SHA512_WITH_ECDSA: &str = "SHA512withECDSA";
pub const SIGALG_SHA3_256_WITH_ECDSA: &str = "SHA3-256withECDSA";
pub const SIGALG_SHA3_384_WITH_ECDSA: &str = "SHA3-384withECDSA";
pub const SIGALG_SHA3_512_WITH_ECDSA: &str = "SHA3-512withECDSA";

// ── EdDSA, GOST and DSTU signature algorithms ────────────────────────

pub const SIGALG_ED25519: &str = "Ed25519";
pub const SIGALG_ED448: &str = "Ed448";
pub const SIGALG_GOST3411_WITH_ECGOST3410: &str = "GOST3411withECGOST3410";
pub const SIGALG_GOST3411_WITH_DSTU4145: &str = "GOST3411withDSTU4145";

// ── Digest algorithm OIDs ────────────────────────────────────────────

pub const OID_MD5: &str = "1.2.840.113549.2.5";
pub const OID_SHA1: &str = "1.3.14.3.2.26";
pub const OID_SHA224: &str = "2.16.840.1.101.3.4.2.4";
pub const OID_SHA256: &str = "2.16.840.1.101.3.4.2.1";
pub const OID_SHA384: &str = "2.16.840.1.101.3.4.2.2";
pub const OID_SHA512: &str = "2.16.840.1.101.3.4.2.3";
pub const OID_SHA3_256: &str = "2.16.840.1.101.3.4.2.8";
pub const OID_SHA3_384: &str = "2.16.840.1.101.3.4.2.9";
pub const OID_SHA3_512: &str = "2.16.840.1.101.3.4.2.10";
pub const OID_GOST3411: &str = "1.2.643.2.2.9";

// ── Public key algorithm OIDs ────────────────────────────────────────

pub const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
pub const OID_RSASSA_PSS: &str = "1.2.840.113549.1.1.10";
pub const OID_MGF1: &str = "1.2.840.113549.1.1.8";
pub const OID_DSA: &str = "1.2.840.10040.4.1";
pub const OID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";
pub const OID_ED25519: &str = "1.3.101.112";
pub const OID_ED448: &str = "1.3.101.113";
pub const OID_GOST3410_2001: &str = "1.2.643.2.2.19";
pub const OID_DSTU4145_LE: &str = "1.2.804.2.1.1.1.1.3.1.1";
pub const OID_DSTU4145_BE: &str = "1.2.804.2.1.1.1.1.3.1.1.1.1";

// ── Signature algorithm OIDs ─────────────────────────────────────────

pub const OID_MD5_WITH_RSA: &str = "1.2.840.113549.1.1.4";
pub const OID_SHA1_WITH_RSA: &str = "1.2.840.113549.1.1.5";
pub const OID_SHA256_WITH_RSA: &str = "1.2.840.113549.1.1.11";
pub const OID_SHA384_WITH_RSA: &str = "1.2.840.113549.1.1.12";
pub const OID_SHA512_WITH_RSA: &str = "1.2.840.113549.1.1.13";
pub const OID_SHA224_WITH_RSA: &str = "1.2.840.113549.1.1.14";
pub const OID_SHA3_256_WITH_RSA: &str = "2.16.840.1.101.3.4.3.14";
pub const OID_SHA3_384_WITH_RSA: &str = "2.16.840.1.101.3.4.3.15";
pub const OID_SHA3_512_WITH_RSA: &str = "2.16.840.1.101.3.4.3.16";

pub const OID_SHA1_WITH_DSA: &str = "1.2.840.10040.4.3";
pub const OID_SHA256_WITH_DSA: &str = "2.16.840.1.101.3.4.3.2";

pub const OID_SHA1_WITH_ECDSA: &str = "1.2.840.10045.4.1";
pub const OID_SHA224_WITH_ECDSA: &str = "1.2.840.10045.4.3.1";
pub const OID_SHA256_WITH_ECDSA: &str = "1.2.840.10045.4.3.2";
pub const OID_SHA384_WITH_ECDSA: &str = "1.2.840.10045.4.3.3";
pub const OID_SHA512_WITH_ECDSA: &str = "1.2.840.10045.4.3.4";
pub const OID_SHA3_256_WITH_ECDSA: &str = "2.16.840.1.101.3.4.3.10";
pub const OID_SHA3_384_WITH_ECDSA: &str = "2.16.840.1.101.3.4.3.11";
pub const OID_SHA3_512_WITH_ECDSA: &str = "2.16.840.1.101.3.4.3.12";

pub const OID_GOST3411_WITH_GOST3410_2001: &str = "1.2.643.2.2.3";

// ── Named curves validated against a point decoder ───────────────────

pub const OID_CURVE_P256: &str = "1.2.840.10045.3.1.7";
pub const OID_CURVE_P384: &str = "1.3.132.0.34";
pub const OID_CURVE_P521: &str = "1.3.132.0.35";
