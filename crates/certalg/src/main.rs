#![forbid(unsafe_code)]

//! certalg CLI: inspect keys and certificates, check and compose signature
//! algorithm names, look up named curves.

use certalg_core::{AlgorithmConfig, Error};
use certalg_crypto::{AlgorithmRegistry, KeyAlgorithm};
use certalg_keys::compat::{compatible_signature_algorithms, is_compatible_with};
use certalg_keys::keyspec::key_specification_with;
use certalg_keys::{loader, x509, CertificateSignature};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "certalg",
    about = "certalg: certificate signature algorithm identity and compatibility",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Treat GOST R 34.10-2001 (CryptoPro) curves as enabled
    #[arg(long = "enable-gost", global = true)]
    enable_gost: bool,

    /// Treat DSTU 4145 curves as enabled
    #[arg(long = "enable-dstu", global = true)]
    enable_dstu: bool,

    /// Reject SHA1-based signature algorithms
    #[arg(long = "reject-sha1", global = true)]
    reject_sha1: bool,

    /// Reject legacy signature algorithms such as MD5withRSA
    #[arg(long = "reject-legacy", global = true)]
    reject_legacy: bool,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a public key and list the signature algorithms it supports
    Key {
        /// Public key or certificate (PEM or DER, auto-detected)
        file: PathBuf,
    },

    /// Show the signature algorithm of a certificate
    Cert {
        /// Certificate file (PEM or DER)
        file: PathBuf,
    },

    /// Check whether a signature algorithm can be used with a key
    Check {
        /// Public key or certificate (PEM or DER, auto-detected)
        file: PathBuf,

        /// Signature algorithm name, e.g. SHA256withECDSA
        algorithm: String,
    },

    /// Compose a signature algorithm name from a digest and a key algorithm
    Compose {
        /// Digest name or OID, e.g. SHA256 or 2.16.840.1.101.3.4.2.1
        digest: String,

        /// Key algorithm, e.g. RSA, EC, DSA, Ed25519
        key_algorithm: String,
    },

    /// Resolve the digest of a signature algorithm
    Digest {
        /// Signature algorithm name
        algorithm: String,
    },

    /// Show the aliases and OID of a named curve
    Curve {
        /// Curve name, alias or OID
        name: String,
    },

    /// List named curves grouped by source
    Curves {
        /// Include sources that are not enabled
        #[arg(long)]
        all: bool,
    },

    /// List the signature algorithm catalog
    Info,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AlgorithmConfig::new()
        .with_gost3410(cli.enable_gost)
        .with_dstu4145(cli.enable_dstu)
        .with_sha1(!cli.reject_sha1)
        .with_legacy(!cli.reject_legacy);
    let registry = AlgorithmRegistry::with_config(config);

    let result = match cli.command {
        Commands::Key { file } => cmd_key(&registry, file),
        Commands::Cert { file } => cmd_cert(file),
        Commands::Check { file, algorithm } => cmd_check(&registry, file, &algorithm),
        Commands::Compose {
            digest,
            key_algorithm,
        } => cmd_compose(&registry, &digest, &key_algorithm),
        Commands::Digest { algorithm } => cmd_digest(&registry, &algorithm),
        Commands::Curve { name } => cmd_curve(&registry, &name),
        Commands::Curves { all } => cmd_curves(&registry, all),
        Commands::Info => cmd_info(&registry),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "certalg=debug,certalg_crypto=debug,certalg_keys=debug"
    } else {
        "certalg=warn,certalg_crypto=warn,certalg_keys=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_key(registry: &AlgorithmRegistry<'_>, file: PathBuf) -> Result<(), Error> {
    let key = loader::load_key_file(&file)?;
    let key_algorithm = key.classify();
    println!("Key algorithm: {key_algorithm}");
    if key_algorithm == KeyAlgorithm::Unsupported {
        if let Some(name) = key.algorithm() {
            println!("Reported as: {name}");
        }
        return Ok(());
    }
    if let Some(spec) = key_specification_with(registry.curves, &key) {
        println!("Key specification: {spec}");
    }
    println!("Signature algorithms:");
    for name in compatible_signature_algorithms(registry, &key) {
        println!("  {name}");
    }
    Ok(())
}

fn cmd_cert(file: PathBuf) -> Result<(), Error> {
    let data = std::fs::read(&file)
        .map_err(|e| Error::Other(format!("{}: {e}", file.display())))?;
    let cert = if data.trim_ascii_start().starts_with(b"-----BEGIN") {
        x509::load_certificate_pem(&data)?
    } else {
        x509::load_certificate_der(&data)?
    };
    println!("Provider name: {}", cert.raw_signature_algorithm());
    println!("Signature algorithm: {}", cert.signature_algorithm_name());
    let key = loader::load_certificate_key(&cert)?;
    println!("Subject key algorithm: {}", key.classify());
    Ok(())
}

fn cmd_check(
    registry: &AlgorithmRegistry<'_>,
    file: PathBuf,
    algorithm: &str,
) -> Result<(), Error> {
    let key = loader::load_key_file(&file)?;
    if is_compatible_with(registry, &key, algorithm) {
        println!("compatible");
        Ok(())
    } else {
        println!("incompatible: {algorithm} cannot be used with a {} key", key.classify());
        process::exit(1);
    }
}

fn cmd_compose(
    registry: &AlgorithmRegistry<'_>,
    digest: &str,
    key_algorithm: &str,
) -> Result<(), Error> {
    println!(
        "{}",
        registry.catalog.compose_name_from_strings(digest, key_algorithm)
    );
    Ok(())
}

fn cmd_digest(registry: &AlgorithmRegistry<'_>, algorithm: &str) -> Result<(), Error> {
    let digest = registry
        .catalog
        .digest_for(algorithm)
        .ok_or_else(|| Error::UnsupportedDigest(algorithm.to_owned()))?;
    println!("Digest: {digest}");
    let hasher = registry.signature_digest(algorithm)?;
    println!("Output size: {} bytes", hasher.output_size());
    Ok(())
}

fn cmd_curve(registry: &AlgorithmRegistry<'_>, name: &str) -> Result<(), Error> {
    let entry = registry
        .curves
        .resolve(name)
        .ok_or_else(|| Error::Other(format!("unknown curve: {name}")))?;
    println!("Canonical name: {}", entry.canonical_name);
    println!("OID: {}", entry.oid);
    println!("Source: {}", entry.source);
    let aliases: Vec<String> = registry.curves.aliases_of(name).into_iter().collect();
    println!("Aliases: {}", aliases.join(", "));
    if !entry.source.is_enabled(&registry.config) {
        println!("(source not enabled)");
    }
    Ok(())
}

fn cmd_curves(registry: &AlgorithmRegistry<'_>, all: bool) -> Result<(), Error> {
    for (source, names) in registry.named_curves_map(all) {
        println!("{source}:");
        for name in names {
            println!("  {name}");
        }
    }
    Ok(())
}

fn cmd_info(registry: &AlgorithmRegistry<'_>) -> Result<(), Error> {
    println!("Signature algorithms by key algorithm:");
    for key_algorithm in KeyAlgorithm::ALL {
        let names = registry.signature_algorithms_for(key_algorithm);
        if names.is_empty() {
            continue;
        }
        println!("  {key_algorithm}: {}", names.join(", "));
    }
    Ok(())
}
