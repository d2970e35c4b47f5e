use crate::Result;
use crate::decode::DecodedVector;
use core::fmt::Write;
use owo_colors::OwoColorize;

const BORDER: &str = "========================================";
const HEADER: &str = "        CVSS Details";

/// Marks entries the decoder could not resolve against the taxonomy.
const UNKNOWN_PREFIX: &str = "Unknown value";

/// Render a decoded short code as a bordered terminal report.
///
/// Each entry is printed as `metric: description` in input order. Entries
/// the decoder flagged as unknown are highlighted in red instead of yellow.
/// With `use_colors == false` the output contains no ANSI sequences.
pub fn generate<W: Write>(details: &DecodedVector, use_colors: bool, writer: &mut W) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", BORDER.blue().bold())?;
        writeln!(writer, "{}", HEADER.green().bold())?;
        writeln!(writer, "{}", BORDER.blue().bold())?;
    } else {
        writeln!(writer, "{BORDER}")?;
        writeln!(writer, "{HEADER}")?;
        writeln!(writer, "{BORDER}")?;
    }

    for (metric, description) in details {
        if use_colors {
            let colored_description = if description.starts_with(UNKNOWN_PREFIX) {
                description.red().bold().to_string()
            } else {
                description.yellow().bold().to_string()
            };
            writeln!(writer, "{}: {colored_description}", metric.cyan().bold())?;
        } else {
            writeln!(writer, "{metric}: {description}")?;
        }
    }

    if use_colors {
        writeln!(writer, "{}", BORDER.blue().bold())?;
    } else {
        writeln!(writer, "{BORDER}")?;
    }

    Ok(())
}
