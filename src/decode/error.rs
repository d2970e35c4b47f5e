use thiserror::Error;

/// Errors produced while selecting a scoring version or decoding a short code.
///
/// Unrecognized metric/value combinations are deliberately not represented
/// here: they decode to in-band `Unknown value ...` entries instead of
/// aborting the whole operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The requested CVSS version is not one of the supported ones.
    #[error("unsupported CVSS version '{0}', expected '3.1' or '4.0'")]
    UnsupportedVersion(String),

    /// The short code does not start with the version's required prefix.
    #[error("input must start with '{expected}'")]
    MalformedInput { expected: &'static str },
}
