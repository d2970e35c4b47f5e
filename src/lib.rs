//! Core library for cvss-explain
//!
//! This library consolidates all functionality for the cvss-explain tool, which
//! expands CVSS short codes (versions 3.1 and 4.0) into human-readable
//! descriptions of each scored metric.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`decode`]: Short-code decoding against the per-version metric taxonomies
//! - [`reports`]: Console report generation

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub mod decode;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
pub use crate::decode::{DecodeError, DecodedVector, Decoder, ScoringVersion};
