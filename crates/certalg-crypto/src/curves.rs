#![forbid(unsafe_code)]

//! Named elliptic-curve resolver.
//!
//! Maps curve aliases, canonical names and OIDs onto one [`CurveEntry`].
//! Aliases are many-to-one into a canonical name; the OID is one-to-one
//! with it. Every lookup is case-insensitive and an unknown curve gives an
//! empty result rather than an error.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::OnceLock;

use certalg_core::AlgorithmConfig;

/// Standards body or provider a curve definition comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurveSource {
    X962,
    Sec,
    TeleTrust,
    Anssi,
    GmT,
    CryptoPro,
    Dstu4145,
}

impl CurveSource {
    pub fn name(self) -> &'static str {
        match self {
            CurveSource::X962 => "X9.62",
            CurveSource::Sec => "SEC",
            CurveSource::TeleTrust => "TeleTrusT",
            CurveSource::Anssi => "ANSSI",
            CurveSource::GmT => "GM/T",
            CurveSource::CryptoPro => "CryptoPro",
            CurveSource::Dstu4145 => "DSTU 4145",
        }
    }

    /// Whether curves from this source are usable under `config`.
    pub fn is_enabled(self, config: &AlgorithmConfig) -> bool {
        match self {
            CurveSource::CryptoPro => config.gost3410_enabled,
            CurveSource::Dstu4145 => config.dstu4145_enabled,
            _ => true,
        }
    }
}

impl fmt::Display for CurveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named curve and every name it is known by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveEntry {
    pub canonical_name: &'static str,
    pub aliases: &'static [&'static str],
    pub oid: &'static str,
    pub source: CurveSource,
}

const fn curve(
    canonical_name: &'static str,
    aliases: &'static [&'static str],
    oid: &'static str,
    source: CurveSource,
) -> CurveEntry {
    CurveEntry {
        canonical_name,
        aliases,
        oid,
        source,
    }
}

use CurveSource as S;

const BUILTIN: &[CurveEntry] = &[
    // ── X9.62 prime ──────────────────────────────────────────────────
    curve("prime192v1", &["secp192r1", "P-192"], "1.2.840.10045.3.1.1", S::X962),
    curve("prime192v2", &[], "1.2.840.10045.3.1.2", S::X962),
    curve("prime192v3", &[], "1.2.840.10045.3.1.3", S::X962),
    curve("prime239v1", &[], "1.2.840.10045.3.1.4", S::X962),
    curve("prime239v2", &[], "1.2.840.10045.3.1.5", S::X962),
    curve("prime239v3", &[], "1.2.840.10045.3.1.6", S::X962),
    curve("prime256v1", &["secp256r1", "P-256"], "1.2.840.10045.3.1.7", S::X962),
    // ── X9.62 characteristic two ─────────────────────────────────────
    curve("c2pnb163v1", &[], "1.2.840.10045.3.0.1", S::X962),
    curve("c2pnb163v2", &[], "1.2.840.10045.3.0.2", S::X962),
    curve("c2pnb163v3", &[], "1.2.840.10045.3.0.3", S::X962),
    curve("c2pnb176w1", &[], "1.2.840.10045.3.0.4", S::X962),
    curve("c2tnb191v1", &[], "1.2.840.10045.3.0.5", S::X962),
    curve("c2tnb191v2", &[], "1.2.840.10045.3.0.6", S::X962),
    curve("c2tnb191v3", &[], "1.2.840.10045.3.0.7", S::X962),
    curve("c2onb191v4", &[], "1.2.840.10045.3.0.8", S::X962),
    curve("c2onb191v5", &[], "1.2.840.10045.3.0.9", S::X962),
    curve("c2pnb208w1", &[], "1.2.840.10045.3.0.10", S::X962),
    curve("c2tnb239v1", &[], "1.2.840.10045.3.0.11", S::X962),
    curve("c2tnb239v2", &[], "1.2.840.10045.3.0.12", S::X962),
    curve("c2tnb239v3", &[], "1.2.840.10045.3.0.13", S::X962),
    curve("c2onb239v4", &[], "1.2.840.10045.3.0.14", S::X962),
    curve("c2onb239v5", &[], "1.2.840.10045.3.0.15", S::X962),
    curve("c2pnb272w1", &[], "1.2.840.10045.3.0.16", S::X962),
    curve("c2pnb304w1", &[], "1.2.840.10045.3.0.17", S::X962),
    curve("c2tnb359v1", &[], "1.2.840.10045.3.0.18", S::X962),
    curve("c2pnb368w1", &[], "1.2.840.10045.3.0.19", S::X962),
    curve("c2tnb431r1", &[], "1.2.840.10045.3.0.20", S::X962),
    // ── SEC 2 prime ──────────────────────────────────────────────────
    curve("secp112r1", &[], "1.3.132.0.6", S::Sec),
    curve("secp112r2", &[], "1.3.132.0.7", S::Sec),
    curve("secp128r1", &[], "1.3.132.0.28", S::Sec),
    curve("secp128r2", &[], "1.3.132.0.29", S::Sec),
    curve("secp160k1", &[], "1.3.132.0.9", S::Sec),
    curve("secp160r1", &[], "1.3.132.0.8", S::Sec),
    curve("secp160r2", &[], "1.3.132.0.30", S::Sec),
    curve("secp192k1", &[], "1.3.132.0.31", S::Sec),
    curve("secp224k1", &[], "1.3.132.0.32", S::Sec),
    curve("secp224r1", &["P-224"], "1.3.132.0.33", S::Sec),
    curve("secp256k1", &[], "1.3.132.0.10", S::Sec),
    curve("secp384r1", &["P-384"], "1.3.132.0.34", S::Sec),
    curve("secp521r1", &["P-521"], "1.3.132.0.35", S::Sec),
    // ── SEC 2 binary ─────────────────────────────────────────────────
    curve("sect113r1", &[], "1.3.132.0.4", S::Sec),
    curve("sect113r2", &[], "1.3.132.0.5", S::Sec),
    curve("sect131r1", &[], "1.3.132.0.22", S::Sec),
    curve("sect131r2", &[], "1.3.132.0.23", S::Sec),
    curve("sect163k1", &["K-163"], "1.3.132.0.1", S::Sec),
    curve("sect163r1", &[], "1.3.132.0.2", S::Sec),
    curve("sect163r2", &["B-163"], "1.3.132.0.15", S::Sec),
    curve("sect193r1", &[], "1.3.132.0.24", S::Sec),
    curve("sect193r2", &[], "1.3.132.0.25", S::Sec),
    curve("sect233k1", &["K-233"], "1.3.132.0.26", S::Sec),
    curve("sect233r1", &["B-233"], "1.3.132.0.27", S::Sec),
    curve("sect239k1", &[], "1.3.132.0.3", S::Sec),
    curve("sect283k1", &["K-283"], "1.3.132.0.16", S::Sec),
    curve("sect283r1", &["B-283"], "1.3.132.0.17", S::Sec),
    curve("sect409k1", &["K-409"], "1.3.132.0.36", S::Sec),
    curve("sect409r1", &["B-409"], "1.3.132.0.37", S::Sec),
    curve("sect571k1", &["K-571"], "1.3.132.0.38", S::Sec),
    curve("sect571r1", &["B-571"], "1.3.132.0.39", S::Sec),
    // ── Brainpool ────────────────────────────────────────────────────
    curve("brainpoolP160r1", &[], "1.3.36.3.3.2.8.1.1.1", S::TeleTrust),
    curve("brainpoolP160t1", &[], "1.3.36.3.3.2.8.1.1.2", S::TeleTrust),
    curve("brainpoolP192r1", &[], "1.3.36.3.3.2.8.1.1.3", S::TeleTrust),
    curve("brainpoolP192t1", &[], "1.3.36.3.3.2.8.1.1.4", S::TeleTrust),
    curve("brainpoolP224r1", &[], "1.3.36.3.3.2.8.1.1.5", S::TeleTrust),
    curve("brainpoolP224t1", &[], "1.3.36.3.3.2.8.1.1.6", S::TeleTrust),
    curve("brainpoolP256r1", &[], "1.3.36.3.3.2.8.1.1.7", S::TeleTrust),
    curve("brainpoolP256t1", &[], "1.3.36.3.3.2.8.1.1.8", S::TeleTrust),
    curve("brainpoolP320r1", &[], "1.3.36.3.3.2.8.1.1.9", S::TeleTrust),
    curve("brainpoolP320t1", &[], "1.3.36.3.3.2.8.1.1.10", S::TeleTrust),
    curve("brainpoolP384r1", &[], "1.3.36.3.3.2.8.1.1.11", S::TeleTrust),
    curve("brainpoolP384t1", &[], "1.3.36.3.3.2.8.1.1.12", S::TeleTrust),
    curve("brainpoolP512r1", &[], "1.3.36.3.3.2.8.1.1.13", S::TeleTrust),
    curve("brainpoolP512t1", &[], "1.3.36.3.3.2.8.1.1.14", S::TeleTrust),
    // ── ANSSI, GM/T ──────────────────────────────────────────────────
    curve("FRP256v1", &[], "1.2.250.1.223.101.256.1", S::Anssi),
    curve("sm2p256v1", &["SM2"], "1.2.156.10197.1.301", S::GmT),
    // ── GOST R 34.10-2001 (CryptoPro) ────────────────────────────────
    curve("GostR3410-2001-CryptoPro-A", &[], "1.2.643.2.2.35.1", S::CryptoPro),
    curve("GostR3410-2001-CryptoPro-B", &[], "1.2.643.2.2.35.2", S::CryptoPro),
    curve("GostR3410-2001-CryptoPro-C", &[], "1.2.643.2.2.35.3", S::CryptoPro),
    curve("GostR3410-2001-CryptoPro-XchA", &[], "1.2.643.2.2.36.0", S::CryptoPro),
    curve("GostR3410-2001-CryptoPro-XchB", &[], "1.2.643.2.2.36.1", S::CryptoPro),
    // ── DSTU 4145, named by the last two OID arcs ────────────────────
    curve("2.0", &[], "1.2.804.2.1.1.1.1.3.1.1.2.0", S::Dstu4145),
    curve("2.1", &[], "1.2.804.2.1.1.1.1.3.1.1.2.1", S::Dstu4145),
    curve("2.2", &[], "1.2.804.2.1.1.1.1.3.1.1.2.2", S::Dstu4145),
    curve("2.3", &[], "1.2.804.2.1.1.1.1.3.1.1.2.3", S::Dstu4145),
    curve("2.4", &[], "1.2.804.2.1.1.1.1.3.1.1.2.4", S::Dstu4145),
    curve("2.5", &[], "1.2.804.2.1.1.1.1.3.1.1.2.5", S::Dstu4145),
    curve("2.6", &[], "1.2.804.2.1.1.1.1.3.1.1.2.6", S::Dstu4145),
    curve("2.7", &[], "1.2.804.2.1.1.1.1.3.1.1.2.7", S::Dstu4145),
    curve("2.8", &[], "1.2.804.2.1.1.1.1.3.1.1.2.8", S::Dstu4145),
    curve("2.9", &[], "1.2.804.2.1.1.1.1.3.1.1.2.9", S::Dstu4145),
];

/// Immutable, indexed set of named curves.
#[derive(Debug)]
pub struct CurveTable {
    entries: Vec<CurveEntry>,
    index: HashMap<String, usize>,
}

impl CurveTable {
    /// Build a table over the given entries. Earlier entries win when a
    /// name, alias or OID repeats.
    pub fn new(entries: Vec<CurveEntry>) -> Self {
        let mut index = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            let keys = std::iter::once(entry.canonical_name)
                .chain(entry.aliases.iter().copied())
                .chain(std::iter::once(entry.oid));
            for key in keys {
                index.entry(key.to_ascii_lowercase()).or_insert(i);
            }
        }
        Self { entries, index }
    }

    /// The process-wide built-in table, built on first use.
    pub fn builtin() -> &'static CurveTable {
        static TABLE: OnceLock<CurveTable> = OnceLock::new();
        TABLE.get_or_init(|| CurveTable::new(BUILTIN.to_vec()))
    }

    pub fn entries(&self) -> &[CurveEntry] {
        &self.entries
    }

    /// Find the entry for a curve name, alias or dotted OID.
    pub fn resolve(&self, name_or_oid: &str) -> Option<&CurveEntry> {
        self.index
            .get(&name_or_oid.trim().to_ascii_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Every name a curve is known by, including `name_or_oid` itself as
    /// given. Empty when the curve is unknown.
    pub fn aliases_of(&self, name_or_oid: &str) -> BTreeSet<String> {
        let Some(entry) = self.resolve(name_or_oid) else {
            return BTreeSet::new();
        };
        std::iter::once(name_or_oid)
            .chain(std::iter::once(entry.canonical_name))
            .chain(entry.aliases.iter().copied())
            .map(str::to_owned)
            .collect()
    }

    /// Dotted OID for a curve name or alias.
    pub fn oid_of(&self, name: &str) -> Option<&'static str> {
        self.resolve(name).map(|e| e.oid)
    }

    /// Curve names grouped by source, in table order.
    ///
    /// Sources disabled under `config` are skipped unless
    /// `include_disabled` is set.
    pub fn named_curves_map(
        &self,
        config: &AlgorithmConfig,
        include_disabled: bool,
    ) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in &self.entries {
            if !include_disabled && !entry.source.is_enabled(config) {
                continue;
            }
            map.entry(entry.source.name().to_owned())
                .or_default()
                .push(entry.canonical_name.to_owned());
        }
        map
    }
}
