#![forbid(unsafe_code)]

//! Runtime configuration for algorithm resolution.

/// Switches that change which algorithms and curve sources count as usable.
///
/// The identity tables themselves never change; the configuration only
/// decides what is reported as enabled or accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmConfig {
    /// Treat the CryptoPro (GOST R 34.10-2001) curve source as enabled.
    pub gost3410_enabled: bool,
    /// Treat the DSTU 4145 curve source as enabled.
    pub dstu4145_enabled: bool,
    /// Accept SHA1-based signature algorithms as compatible with a key.
    pub accept_sha1: bool,
    /// Accept legacy signature algorithms kept out of the catalog, such as
    /// MD5 with RSA, as compatible with their key family.
    pub accept_legacy: bool,
}

impl AlgorithmConfig {
    /// Create the default configuration: GOST and DSTU disabled, SHA1 and
    /// legacy algorithms accepted.
    pub fn new() -> Self {
        Self {
            gost3410_enabled: false,
            dstu4145_enabled: false,
            accept_sha1: true,
            accept_legacy: true,
        }
    }

    pub fn with_gost3410(mut self, enabled: bool) -> Self {
        self.gost3410_enabled = enabled;
        self
    }

    pub fn with_dstu4145(mut self, enabled: bool) -> Self {
        self.dstu4145_enabled = enabled;
        self
    }

    pub fn with_sha1(mut self, accept: bool) -> Self {
        self.accept_sha1 = accept;
        self
    }

    pub fn with_legacy(mut self, accept: bool) -> Self {
        self.accept_legacy = accept;
        self
    }
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self::new()
    }
}
