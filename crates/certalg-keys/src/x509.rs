#![forbid(unsafe_code)]

//! Certificate signature algorithm names.
//!
//! Decoders report a certificate's signature algorithm in their own casing
//! (`SHA256WITHRSA`, `SHA256WithRSA`, ...). [`normalize`] maps those raw
//! names onto the catalog's canonical form.

use std::borrow::Cow;

use certalg_core::{algorithm, Error, Result};
use certalg_crypto::{Catalog, DigestKind};
use der::{Decode, Encode};
use spki::AlgorithmIdentifierOwned;
use x509_cert::Certificate;

/// A certificate that can report its signature algorithm.
pub trait CertificateSignature {
    /// Signature algorithm name as the decoding provider renders it.
    fn raw_signature_algorithm(&self) -> Cow<'_, str>;

    /// Canonical signature algorithm name.
    fn signature_algorithm_name(&self) -> String {
        normalize(&self.raw_signature_algorithm())
    }
}

impl CertificateSignature for Certificate {
    fn raw_signature_algorithm(&self) -> Cow<'_, str> {
        Cow::Owned(provider_name(&self.signature_algorithm))
    }
}

/// Map a raw provider signature algorithm name to its canonical form.
pub fn normalize(raw: &str) -> String {
    normalize_with(Catalog::builtin(), raw)
}

/// [`normalize`] against an explicit catalog.
///
/// Catalog names match case-insensitively, and dotted signature OIDs
/// resolve through the catalog too. The bare provider name `ECDSA` means
/// SHA1 with ECDSA. MD5 with RSA is recognised for display only. Anything
/// else is returned unchanged.
pub fn normalize_with(catalog: &Catalog, raw: &str) -> String {
    let raw = raw.trim();
    if let Some(spec) = catalog.lookup(raw).or_else(|| catalog.by_oid(raw)) {
        return spec.name.to_owned();
    }
    if raw.eq_ignore_ascii_case(algorithm::KEYALG_ECDSA) {
        return algorithm::SIGALG_SHA1_WITH_ECDSA.to_owned();
    }
    if raw.eq_ignore_ascii_case(algorithm::SIGALG_MD5_WITH_RSA) {
        return algorithm::SIGALG_MD5_WITH_RSA.to_owned();
    }
    tracing::debug!(raw, "signature algorithm not in catalog, keeping raw name");
    raw.to_owned()
}

/// Parse a DER-encoded X.509 certificate.
pub fn load_certificate_der(data: &[u8]) -> Result<Certificate> {
    Certificate::from_der(data)
        .map_err(|e| Error::Certificate(format!("failed to parse certificate: {e}")))
}

/// Parse a PEM-encoded X.509 certificate.
pub fn load_certificate_pem(pem_data: &[u8]) -> Result<Certificate> {
    let (label, der_bytes) = pem_rfc7468::decode_vec(pem_data.trim_ascii())
        .map_err(|e| Error::Certificate(format!("failed to decode certificate PEM: {e}")))?;
    if label != "CERTIFICATE" {
        return Err(Error::Certificate(format!(
            "expected CERTIFICATE PEM label, got: {label}"
        )));
    }
    load_certificate_der(&der_bytes)
}

/// Render a signature AlgorithmIdentifier the way a JCA-style provider
/// names it: upper-case `<DIGEST>WITH<KEY>`, EdDSA in its own casing, and
/// the dotted OID when the algorithm is unknown.
fn provider_name(alg: &AlgorithmIdentifierOwned) -> String {
    let oid = alg.oid.to_string();
    match oid.as_str() {
        algorithm::OID_MD5_WITH_RSA => "MD5WITHRSA".to_owned(),
        algorithm::OID_SHA224_WITH_RSA => "SHA224WITHRSA".to_owned(),
        algorithm::OID_RSASSA_PSS => pss_provider_name(alg),
        algorithm::OID_DSTU4145_LE => algorithm::SIGALG_GOST3411_WITH_DSTU4145.to_ascii_uppercase(),
        _ => match Catalog::builtin().by_oid(&oid) {
            Some(spec) if spec.digest == DigestKind::None => spec.name.to_owned(),
            Some(spec) => spec.name.to_ascii_uppercase(),
            None => oid,
        },
    }
}

/// RSASSA-PSS carries its hash in the parameters; absent parameters mean
/// SHA1.
fn pss_provider_name(alg: &AlgorithmIdentifierOwned) -> String {
    let digest = alg
        .parameters
        .as_ref()
        .and_then(|params| params.to_der().ok())
        .and_then(|der| {
            let params = pkcs1::RsaPssParams::from_der(&der).ok()?;
            DigestKind::from_name(&params.hash.oid.to_string())
        })
        .unwrap_or(DigestKind::Sha1);
    format!("{}WITHRSAANDMGF1", digest.name())
}
