//! End-to-end: decode real keys, classify, check compatibility and read
//! certificate signature algorithms.

use std::time::Duration;

use certalg::keys::{loader, x509, CertificateSignature};
use certalg::{is_compatible, key_specification, Catalog, KeyAlgorithm};
use der::asn1::{BitString, ObjectIdentifier};
use der::{Decode, Encode};
use spki::{AlgorithmIdentifierOwned, EncodePublicKey, SubjectPublicKeyInfoOwned};
use x509_cert::certificate::{Certificate, TbsCertificate, Version};
use x509_cert::name::Name;
use x509_cert::serial_number::SerialNumber;
use x509_cert::time::Validity;

fn certificate(spki_der: &[u8], signature_oid: &str) -> Vec<u8> {
    let alg = AlgorithmIdentifierOwned {
        oid: ObjectIdentifier::new_unwrap(signature_oid),
        parameters: None,
    };
    let tbs = TbsCertificate {
        version: Version::V3,
        serial_number: SerialNumber::new(&[0x01]).unwrap(),
        signature: alg.clone(),
        issuer: Name::default(),
        validity: Validity::from_now(Duration::from_secs(3600)).unwrap(),
        subject: Name::default(),
        subject_public_key_info: SubjectPublicKeyInfoOwned::from_der(spki_der).unwrap(),
        issuer_unique_id: None,
        subject_unique_id: None,
        extensions: None,
    };
    Certificate {
        tbs_certificate: tbs,
        signature_algorithm: alg,
        signature: BitString::from_bytes(&[0u8; 64]).unwrap(),
    }
    .to_der()
    .unwrap()
}

#[test]
fn rsa_key_end_to_end() {
    let mut rng = rand::thread_rng();
    let private = rsa::RsaPrivateKey::new(&mut rng, 2048).unwrap();
    let spki = private.to_public_key().to_public_key_der().unwrap();

    let key = loader::load_spki_der(spki.as_bytes()).unwrap();
    assert_eq!(key.classify(), KeyAlgorithm::Rsa);
    assert_eq!(key_specification(&key).as_deref(), Some("2048"));
    assert!(is_compatible(&key, "SHA256withRSA"));
    assert!(is_compatible(&key, "SHA512WITHRSAANDMGF1"));
    assert!(!is_compatible(&key, "SHA256withECDSA"));

    let cert_der = certificate(spki.as_bytes(), "1.2.840.113549.1.1.11");
    let cert = x509::load_certificate_der(&cert_der).unwrap();
    assert_eq!(cert.raw_signature_algorithm(), "SHA256WITHRSA");
    assert_eq!(cert.signature_algorithm_name(), "SHA256withRSA");
    let subject = loader::load_certificate_key(&cert).unwrap();
    assert_eq!(subject, key);
}

#[test]
fn ec_key_end_to_end() {
    let secret = p256::SecretKey::from_slice(&[0x42; 32]).unwrap();
    let spki = secret.public_key().to_public_key_der().unwrap();

    let key = loader::load_spki_der(spki.as_bytes()).unwrap();
    assert_eq!(key.classify(), KeyAlgorithm::Ecdsa);
    for name in Catalog::builtin().signature_algorithms_for(KeyAlgorithm::Ecdsa) {
        assert!(is_compatible(&key, name), "{name}");
    }
    assert!(!is_compatible(&key, "SHA1withRSA"));
    assert!(!is_compatible(&key, "GOST3411withECGOST3410"));

    let cert_der = certificate(spki.as_bytes(), "2.16.840.1.101.3.4.3.10");
    let cert = x509::load_certificate_der(&cert_der).unwrap();
    assert_eq!(cert.signature_algorithm_name(), "SHA3-256withECDSA");
}

#[test]
fn ed25519_key_end_to_end() {
    let sk = ed25519_dalek::SigningKey::from_bytes(&[0x5a; 32]);
    let spki = sk.verifying_key().to_public_key_der().unwrap();

    let key = loader::load_spki_der(spki.as_bytes()).unwrap();
    assert_eq!(key.classify(), KeyAlgorithm::Ed25519);
    assert_eq!(key_specification(&key).as_deref(), Some("Ed25519"));
    assert!(is_compatible(&key, "Ed25519"));
    assert!(!is_compatible(&key, "Ed448"));
    assert!(!is_compatible(&key, "SHA1withRSA"));

    let cert_der = certificate(spki.as_bytes(), "1.3.101.112");
    let cert = x509::load_certificate_pem(
        pem_encode(&cert_der).as_bytes(),
    )
    .unwrap();
    assert_eq!(cert.raw_signature_algorithm(), "Ed25519");
    assert_eq!(cert.signature_algorithm_name(), "Ed25519");
}

#[test]
fn key_file_autodetects_certificates() {
    let secret = p256::SecretKey::from_slice(&[0x17; 32]).unwrap();
    let spki = secret.public_key().to_public_key_der().unwrap();
    let cert_der = certificate(spki.as_bytes(), "1.2.840.10045.4.3.2");

    let dir = std::env::temp_dir().join(format!("certalg-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let der_path = dir.join("cert.der");
    let pem_path = dir.join("cert.pem");
    std::fs::write(&der_path, &cert_der).unwrap();
    std::fs::write(&pem_path, pem_encode(&cert_der)).unwrap();

    for path in [&der_path, &pem_path] {
        let key = loader::load_key_file(path).unwrap();
        assert_eq!(key.classify(), KeyAlgorithm::Ecdsa);
    }
    std::fs::remove_dir_all(&dir).unwrap();
}

fn pem_encode(der: &[u8]) -> String {
    der::pem::encode_string("CERTIFICATE", der::pem::LineEnding::LF, der).unwrap()
}
