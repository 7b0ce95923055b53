#![forbid(unsafe_code)]

//! Public key loading from SubjectPublicKeyInfo (DER or PEM) and from
//! certificates.
//!
//! Dispatches on the SPKI algorithm OID. Keys on curves the RustCrypto
//! crates implement are validated by decoding them; other named curves,
//! GOST, DSTU and Ed448 keys are taken as encoded.

use certalg_core::{algorithm, Error, Result};
use der::asn1::{ObjectIdentifier, UintRef};
use der::{Decode, Encode, SliceReader, Tagged};
use num_bigint_dig::BigUint;
use spki::{DecodePublicKey, SubjectPublicKeyInfoRef};

use crate::key::{DsaParams, PublicKey};

/// Largest RSA modulus accepted, in bits.
const RSA_MAX_SIZE: usize = 16384;

/// Ed448 public keys are 57 bytes.
const ED448_PUBLIC_KEY_LEN: usize = 57;

/// Load a public key from raw SubjectPublicKeyInfo DER bytes.
pub fn load_spki_der(spki_der: &[u8]) -> Result<PublicKey> {
    let spki = SubjectPublicKeyInfoRef::from_der(spki_der)
        .map_err(|e| Error::Key(format!("failed to parse SPKI: {e}")))?;
    let oid = spki.algorithm.oid.to_string();

    match oid.as_str() {
        algorithm::OID_RSA_ENCRYPTION | algorithm::OID_RSASSA_PSS => load_rsa(&spki),
        algorithm::OID_DSA => load_dsa(spki),
        algorithm::OID_EC_PUBLIC_KEY => load_ec(spki_der, &spki),
        algorithm::OID_GOST3410_2001 => Ok(load_ec_family(
            algorithm::KEYALG_ECGOST3410,
            &spki,
        )),
        algorithm::OID_DSTU4145_LE | algorithm::OID_DSTU4145_BE => Ok(load_ec_family(
            algorithm::KEYALG_DSTU4145,
            &spki,
        )),
        algorithm::OID_ED25519 => load_ed25519(spki_der),
        algorithm::OID_ED448 => load_ed448(&spki),
        _ => {
            tracing::debug!(%oid, "unrecognised public key algorithm");
            Ok(PublicKey::opaque(Some(&oid), subject_key_bytes(&spki)?.to_vec()))
        }
    }
}

/// Load a public key from a PEM-encoded SubjectPublicKeyInfo (`-----BEGIN PUBLIC KEY-----`).
pub fn load_spki_pem(pem_data: &[u8]) -> Result<PublicKey> {
    let (label, der_bytes) = pem_rfc7468::decode_vec(pem_data)
        .map_err(|e| Error::Key(format!("failed to decode SPKI PEM: {e}")))?;
    if label != "PUBLIC KEY" {
        return Err(Error::Key(format!(
            "expected PUBLIC KEY PEM label, got: {label}"
        )));
    }
    load_spki_der(&der_bytes)
}

/// Load the subject public key of an X.509 certificate.
pub fn load_certificate_key(cert: &x509_cert::Certificate) -> Result<PublicKey> {
    let spki_der = cert
        .tbs_certificate
        .subject_public_key_info
        .to_der()
        .map_err(|e| Error::Certificate(format!("failed to encode SPKI: {e}")))?;
    load_spki_der(&spki_der)
}

/// Load a public key from a file, auto-detecting PEM or DER and SPKI or
/// certificate.
pub fn load_key_file(path: &std::path::Path) -> Result<PublicKey> {
    let data = std::fs::read(path)?;
    if data.trim_ascii_start().starts_with(b"-----BEGIN") {
        let (label, der_bytes) = pem_rfc7468::decode_vec(data.trim_ascii())
            .map_err(|e| Error::Key(format!("{}: failed to decode PEM: {e}", path.display())))?;
        return match label {
            "PUBLIC KEY" => load_spki_der(&der_bytes),
            "CERTIFICATE" => load_certificate_key(&crate::x509::load_certificate_der(&der_bytes)?),
            _ => Err(Error::Key(format!("unsupported PEM label: {label}"))),
        };
    }

    if let Ok(key) = load_spki_der(&data) {
        return Ok(key);
    }
    let cert = crate::x509::load_certificate_der(&data).map_err(|_| {
        Error::Key(format!(
            "{}: neither a SubjectPublicKeyInfo nor a certificate",
            path.display()
        ))
    })?;
    load_certificate_key(&cert)
}

// ── Per-algorithm loaders ────────────────────────────────────────────

fn subject_key_bytes<'a>(spki: &SubjectPublicKeyInfoRef<'a>) -> Result<&'a [u8]> {
    spki.subject_public_key
        .as_bytes()
        .ok_or_else(|| Error::Key("public key BIT STRING has unused bits".into()))
}

/// RSA and RSASSA-PSS keys share the PKCS#1 `RSAPublicKey` encoding.
fn load_rsa(spki: &SubjectPublicKeyInfoRef<'_>) -> Result<PublicKey> {
    use rsa::traits::PublicKeyParts;

    let pkcs1_key = pkcs1::RsaPublicKey::from_der(subject_key_bytes(spki)?)
        .map_err(|e| Error::Key(format!("failed to parse RSA public key: {e}")))?;
    let n = BigUint::from_bytes_be(pkcs1_key.modulus.as_bytes());
    let e = BigUint::from_bytes_be(pkcs1_key.public_exponent.as_bytes());
    let pk = rsa::RsaPublicKey::new_with_max_size(n, e, RSA_MAX_SIZE)
        .map_err(|e| Error::Key(format!("invalid RSA public key: {e}")))?;
    Ok(PublicKey::rsa(pk.n().clone(), pk.e().clone()))
}

/// DSA keys may omit their parameters when they inherit them from the
/// issuer; only `y` is available then.
fn load_dsa(spki: SubjectPublicKeyInfoRef<'_>) -> Result<PublicKey> {
    if spki.algorithm.parameters.is_none() {
        let y = UintRef::from_der(subject_key_bytes(&spki)?)
            .map_err(|e| Error::Key(format!("failed to parse DSA public key: {e}")))?;
        return Ok(PublicKey::dsa(BigUint::from_bytes_be(y.as_bytes()), None));
    }

    let vk = dsa::VerifyingKey::try_from(spki)
        .map_err(|e| Error::Key(format!("failed to parse DSA public key: {e}")))?;
    let components = vk.components();
    let params = DsaParams {
        p: components.p().clone(),
        q: components.q().clone(),
        g: components.g().clone(),
    };
    Ok(PublicKey::dsa(vk.y().clone(), Some(params)))
}

fn load_ec(spki_der: &[u8], spki: &SubjectPublicKeyInfoRef<'_>) -> Result<PublicKey> {
    let curve = spki.algorithm.parameters_oid().ok().map(|oid| oid.to_string());
    let point = subject_key_bytes(spki)?;

    let checked = match curve.as_deref() {
        Some(algorithm::OID_CURVE_P256) => p256::PublicKey::from_public_key_der(spki_der).map(drop),
        Some(algorithm::OID_CURVE_P384) => p384::PublicKey::from_public_key_der(spki_der).map(drop),
        Some(algorithm::OID_CURVE_P521) => p521::PublicKey::from_public_key_der(spki_der).map(drop),
        _ => Ok(()),
    };
    checked.map_err(|e| Error::Key(format!("invalid EC public key: {e}")))?;

    Ok(PublicKey::ec(algorithm::KEYALG_EC, Some(point.to_vec()), curve))
}

/// GOST R 34.10-2001 and DSTU 4145 parameters are a SEQUENCE whose first
/// element is the named curve OID.
fn load_ec_family(name: &str, spki: &SubjectPublicKeyInfoRef<'_>) -> PublicKey {
    let curve = spki
        .algorithm
        .parameters
        .as_ref()
        .and_then(|params| {
            if params.tag() != der::Tag::Sequence {
                return None;
            }
            let mut reader = SliceReader::new(params.value()).ok()?;
            ObjectIdentifier::decode(&mut reader).ok()
        })
        .map(|oid| oid.to_string());
    let point = spki.subject_public_key.raw_bytes().to_vec();
    PublicKey::ec(name, Some(point), curve)
}

fn load_ed25519(spki_der: &[u8]) -> Result<PublicKey> {
    let vk = ed25519_dalek::VerifyingKey::from_public_key_der(spki_der)
        .map_err(|e| Error::Key(format!("failed to parse Ed25519 public key: {e}")))?;
    Ok(PublicKey::opaque(
        Some(algorithm::KEYALG_ED25519),
        vk.to_bytes().to_vec(),
    ))
}

fn load_ed448(spki: &SubjectPublicKeyInfoRef<'_>) -> Result<PublicKey> {
    let bytes = subject_key_bytes(spki)?;
    if bytes.len() != ED448_PUBLIC_KEY_LEN {
        return Err(Error::Key(format!(
            "Ed448 public key must be {ED448_PUBLIC_KEY_LEN} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(PublicKey::opaque(Some(algorithm::KEYALG_ED448), bytes.to_vec()))
}
