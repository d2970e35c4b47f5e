//! Console report generation for decoded short codes
//!
//! The generator operates on the decoder's output mapping and renders it as a
//! bordered, optionally color-coded report. It writes into any `fmt::Write`
//! so callers decide where the text ends up (terminal, buffer, test capture).

mod console;

pub use console::generate as generate_console;
