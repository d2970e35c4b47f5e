use super::{DecodeError, ScoringVersion, taxonomy};
use indexmap::IndexMap;

/// Ordered mapping from metric abbreviation to human-readable description,
/// preserving the order metrics appeared in the short code.
pub type DecodedVector = IndexMap<String, String>;

/// Decodes CVSS short codes for one scoring version.
///
/// The version is fixed at construction time and selects both the required
/// short-code prefix and the metric taxonomy used for lookups.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    version: ScoringVersion,
}

impl Decoder {
    pub const fn new(version: ScoringVersion) -> Self {
        Self { version }
    }

    pub const fn version(&self) -> ScoringVersion {
        self.version
    }

    /// Decode a short code into an ordered metric → description mapping.
    ///
    /// The input must start with the bound version's exact prefix (for
    /// example `CVSS:3.1/`). The remainder is split on `/` into segments:
    /// segments without a `:` are silently skipped, and each remaining
    /// segment is split on its first `:` into a metric abbreviation and a
    /// value code, both trimmed of surrounding whitespace. Pairs found in
    /// the taxonomy resolve to the stored description; anything else yields
    /// an in-band `Unknown value '<value>' for metric '<metric>'` entry
    /// rather than an error, so short codes with forward-incompatible
    /// metrics still decode fully.
    ///
    /// A metric appearing in several segments produces a single entry: the
    /// last occurrence's description wins, while the entry keeps the
    /// position of the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedInput`] if the input does not start
    /// with the version's prefix. No partial decoding is attempted.
    pub fn decode(&self, short_code: &str) -> Result<DecodedVector, DecodeError> {
        let rest = short_code.strip_prefix(self.version.prefix()).ok_or(DecodeError::MalformedInput {
            expected: self.version.prefix(),
        })?;

        let table = self.version.taxonomy();
        let mut details = DecodedVector::new();
        for segment in rest.split('/') {
            let Some((metric, value)) = segment.split_once(':') else {
                continue;
            };
            let metric = metric.trim();
            let value = value.trim();

            let description = taxonomy::lookup(table, metric, value).map_or_else(
                || format!("Unknown value '{value}' for metric '{metric}'"),
                ToString::to_string,
            );

            let _ = details.insert(metric.to_string(), description);
        }

        Ok(details)
    }
}
