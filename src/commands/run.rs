//! Command dispatch logic for cvss-explain

use super::Host;
use super::{ExplainArgs, process_explain};
use crate::Result;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "cvss-explain", version, author)]
#[command(about = "Explain CVSS vector strings, metric by metric")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    args: ExplainArgs,
}

/// Dispatch command-line arguments to the explain workflow
///
/// This function parses the command-line arguments and runs the explain
/// workflow. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if decoding fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    process_explain(host, &cli.args)
}
