//! Short-code decoding against the per-version CVSS metric taxonomies
//!
//! This module is the core of the tool. A [`Decoder`] is bound to one
//! [`ScoringVersion`] at construction time and turns a short code such as
//! `CVSS:3.1/AV:N/AC:L/...` into an ordered mapping from metric abbreviation
//! to human-readable description.
//!
//! # Implementation Model
//!
//! Each supported version carries a static two-level table (`taxonomy`):
//! metric abbreviation, then single-letter value code, then description.
//! Decoding validates the version's literal prefix, splits the remainder into
//! `metric:value` segments, and resolves each against the table. Segments
//! without a `:` are skipped rather than rejected, and unrecognized
//! metric/value pairs are reported in-band as `Unknown value ...` entries so
//! a short code with forward-incompatible metrics still decodes fully.
//!
//! Decoding is a pure function of the bound version and the input string:
//! the tables are `const`, there is no I/O, and nothing is shared or mutated
//! across calls.

mod decoder;
mod error;
mod taxonomy;
mod version;

pub use decoder::{DecodedVector, Decoder};
pub use error::DecodeError;
pub use taxonomy::MetricDef;
pub use version::ScoringVersion;
