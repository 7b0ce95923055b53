#![forbid(unsafe_code)]

//! Registry bundling the catalog, the curve table and the configuration.

use std::collections::BTreeMap;

use certalg_core::{AlgorithmConfig, Result};

use crate::catalog::{Catalog, KeyAlgorithm};
use crate::curves::CurveTable;
use crate::digest::{DigestAlgorithm, DigestKind};

/// The tables and switches every resolution runs against.
///
/// [`AlgorithmRegistry::builtin`] uses the process-wide tables; tests and
/// embedders can pass their own through [`AlgorithmRegistry::new`].
#[derive(Debug, Clone)]
pub struct AlgorithmRegistry<'a> {
    pub catalog: &'a Catalog,
    pub curves: &'a CurveTable,
    pub config: AlgorithmConfig,
}

impl AlgorithmRegistry<'static> {
    /// Built-in tables with the default configuration.
    pub fn builtin() -> Self {
        Self::with_config(AlgorithmConfig::default())
    }

    /// Built-in tables with a caller-supplied configuration.
    pub fn with_config(config: AlgorithmConfig) -> Self {
        Self {
            catalog: Catalog::builtin(),
            curves: CurveTable::builtin(),
            config,
        }
    }
}

impl<'a> AlgorithmRegistry<'a> {
    pub fn new(catalog: &'a Catalog, curves: &'a CurveTable, config: AlgorithmConfig) -> Self {
        Self {
            catalog,
            curves,
            config,
        }
    }

    /// Look up a digest provider by digest name or OID.
    pub fn digest(&self, name_or_oid: &str) -> Result<Box<dyn DigestAlgorithm>> {
        match DigestKind::from_name(name_or_oid) {
            Some(kind) => kind.instantiate(),
            None => Err(certalg_core::Error::UnsupportedAlgorithm(format!(
                "digest algorithm: {name_or_oid}"
            ))),
        }
    }

    /// Digest provider for a signature algorithm name.
    pub fn signature_digest(&self, signature_algorithm: &str) -> Result<Box<dyn DigestAlgorithm>> {
        self.catalog.hash_for(signature_algorithm)
    }

    pub fn signature_algorithms_for(&self, key_algorithm: KeyAlgorithm) -> Vec<&'static str> {
        self.catalog.signature_algorithms_for(key_algorithm)
    }

    /// Curve names grouped by source under this registry's configuration.
    pub fn named_curves_map(&self, include_disabled: bool) -> BTreeMap<String, Vec<String>> {
        self.curves.named_curves_map(&self.config, include_disabled)
    }
}
