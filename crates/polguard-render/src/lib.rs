//! Rendering utilities for report sinks (console text, CSV, Markdown).
//!
//! Every renderer is a pure function of the row set; writing the result is the caller's job.

#![forbid(unsafe_code)]

mod csv;
mod markdown;
mod text;

#[cfg(test)]
mod test_support;

pub use csv::{CSV_HEADER, VIOLATIONS_SEPARATOR, render_csv, split_violations};
pub use markdown::render_markdown;
pub use text::render_text;
