//! A tool to explain CVSS vector strings, metric by metric.
//!
//! # Overview
//!
//! `cvss-explain` expands a CVSS short code (version 3.1 or 4.0) into a
//! human-readable breakdown of every scored metric and prints it as a
//! color-coded console report. It does not compute the numeric severity
//! score; it explains what each `metric:value` segment means.
//!
//! # Quick Start
//!
//! ```bash
//! cvss-explain --cvss-version 4.0 "CVSS:4.0/AV:N/AC:L/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:H/S:U"
//! ```
//!
//! Run it bare to be prompted for the version and the vector:
//!
//! ```bash
//! cvss-explain
//! ```

use cvss_explain::{Host, run};
use std::io::{BufRead, Write, stderr, stdin, stdout};

/// Default host that talks to the real process environment.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn input(&mut self) -> impl BufRead {
        stdin().lock()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args())
}
