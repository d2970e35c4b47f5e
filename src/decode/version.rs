use super::DecodeError;
use super::taxonomy::{self, MetricDef};
use core::str::FromStr;
use strum::{Display, EnumIter};

/// The CVSS specification versions this tool can decode.
///
/// A version determines both the required short-code prefix and the metric
/// taxonomy used for lookups. Adding a version means adding a variant, its
/// prefix, and its table; the decoding logic itself is version-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum ScoringVersion {
    #[strum(serialize = "3.1")]
    V3_1,

    #[strum(serialize = "4.0")]
    V4_0,
}

impl ScoringVersion {
    /// The literal prefix every short code of this version must start with.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::V3_1 => "CVSS:3.1/",
            Self::V4_0 => "CVSS:4.0/",
        }
    }

    /// The metric table used to resolve this version's segments.
    pub const fn taxonomy(self) -> &'static [MetricDef] {
        match self {
            Self::V3_1 => taxonomy::CVSS_3_1,
            Self::V4_0 => taxonomy::CVSS_4_0,
        }
    }
}

impl FromStr for ScoringVersion {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3.1" => Ok(Self::V3_1),
            "4.0" => Ok(Self::V4_0),
            other => Err(DecodeError::UnsupportedVersion(other.to_string())),
        }
    }
}
