//! The explain workflow: pick a version, obtain a short code, decode, report.

use super::Host;
use crate::Result;
use crate::decode::{Decoder, ScoringVersion};
use crate::reports::generate_console;
use clap::Args;
use clap::ValueEnum;
use log::debug;
use ohno::IntoAppError;
use std::io::Write;
use strum::IntoEnumIterator;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// CVSS specification version of the vector (3.1 or 4.0); prompted for interactively when omitted
    #[arg(long, value_name = "VERSION")]
    pub cvss_version: Option<ScoringVersion>,

    /// The vector to explain, e.g. CVSS:3.1/AV:N/AC:L/...; prompted for interactively when omitted
    #[arg(value_name = "VECTOR")]
    pub vector: Option<String>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Explain a CVSS short code on the console
///
/// Arguments not supplied on the command line are gathered interactively
/// through the host: a numbered version menu and a short-code prompt, the
/// same flow a user gets when running the tool bare. An invalid version
/// selection terminates the process with exit code 1.
///
/// # Errors
///
/// Returns an error if the short code cannot be decoded or input cannot be read
pub fn process_explain<H: Host>(host: &mut H, args: &ExplainArgs) -> Result<()> {
    init_logging(args.log_level);

    let version = if let Some(version) = args.cvss_version {
        version
    } else {
        match prompt_version(host)? {
            Some(version) => version,
            None => {
                let _ = writeln!(host.error(), "Invalid option selected.");
                host.exit(1);
                return Ok(());
            }
        }
    };
    debug!("explaining a CVSS {version} short code");

    let vector = match &args.vector {
        Some(vector) => vector.trim().to_string(),
        None => prompt_vector(host, version)?,
    };

    let details = Decoder::new(version)
        .decode(&vector)
        .into_app_err("decoding CVSS short code")?;
    debug!("decoded {} metric(s)", details.len());

    let use_colors = match args.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            use std::io::{IsTerminal, stdout};
            stdout().is_terminal()
        }
    };

    let mut report = String::new();
    generate_console(&details, use_colors, &mut report)?;
    let _ = write!(host.output(), "{report}");

    Ok(())
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

/// Show the numbered version menu and map the selection to a version.
///
/// Returns `Ok(None)` when the selection matches no menu entry.
fn prompt_version<H: Host>(host: &mut H) -> Result<Option<ScoringVersion>> {
    {
        let mut out = host.output();
        let _ = writeln!(out, "Select CVSS version:");
        for (index, version) in ScoringVersion::iter().enumerate() {
            let _ = writeln!(out, "{}. CVSS {version}", index + 1);
        }
        let _ = write!(out, "Enter option (1 or 2): ");
        let _ = out.flush();
    }

    let choice = read_line(host)?;
    Ok(match choice.trim() {
        "1" => Some(ScoringVersion::V3_1),
        "2" => Some(ScoringVersion::V4_0),
        _ => None,
    })
}

fn prompt_vector<H: Host>(host: &mut H, version: ScoringVersion) -> Result<String> {
    {
        let mut out = host.output();
        let _ = write!(out, "Enter CVSS {version} short code (starting with '{}'): ", version.prefix());
        let _ = out.flush();
    }

    Ok(read_line(host)?.trim().to_string())
}

fn read_line<H: Host>(host: &mut H) -> Result<String> {
    use std::io::BufRead;

    let mut line = String::new();
    let _ = host.input().read_line(&mut line).into_app_err("reading interactive input")?;
    Ok(line)
}
