use std::fmt;

/// Errors raised while assembling a hash generator.
///
/// All of these surface at configuration time, before any generation runs;
/// generation itself is deterministic and infallible once a generator is
/// built against a well-formed molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashBuildError {
    /// No atom encoder was selected; a generator with nothing to encode
    /// cannot produce meaningful invariants.
    NoAtomEncoders,
}

impl fmt::Display for HashBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAtomEncoders => write!(f, "no atom encoders selected"),
        }
    }
}

impl std::error::Error for HashBuildError {}
