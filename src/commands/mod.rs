//! Command-line interface and orchestration for cvss-explain
//!
//! This module parses the command-line arguments and coordinates the decode
//! and report layers to explain a short code end to end.
//!
//! # Implementation Model
//!
//! The `run` function parses command-line arguments using clap and hands them
//! to the explain workflow, which:
//!
//! 1. Resolves the scoring version (from `--cvss-version` or an interactive menu)
//! 2. Obtains the short code (positional argument or interactive prompt)
//! 3. Decodes the short code with a version-bound [`crate::decode::Decoder`]
//! 4. Renders the decoded entries as a console report
//!
//! All interaction with the process environment (stdin, stdout, stderr,
//! process exit) goes through the [`Host`] trait so the full flow can run
//! against in-memory buffers in tests.

mod explain;
mod host;
mod run;

pub use explain::{ColorMode, ExplainArgs, LogLevel, process_explain};
pub use host::Host;
pub use run::run;
