#![forbid(unsafe_code)]

/// Errors produced by certalg.
///
/// Only [`Error::UnsupportedDigest`] can come out of the identity and
/// compatibility lookups themselves. Unknown names, unsupported keys and
/// unresolvable curves degrade to defaults or empty results instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no digest algorithm defined for: {0}")]
    UnsupportedDigest(String),

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("key error: {0}")]
    Key(String),

    #[error("certificate error: {0}")]
    Certificate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::UnsupportedDigest("Ed25519".into());
        assert_eq!(err.to_string(), "no digest algorithm defined for: Ed25519");

        let err = Error::Key("truncated SPKI".into());
        assert_eq!(err.to_string(), "key error: truncated SPKI");
    }

    #[test]
    fn test_io_conversion() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing.pem"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(Error::Io(_))));
    }
}
