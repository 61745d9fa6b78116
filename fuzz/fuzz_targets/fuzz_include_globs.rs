//! Fuzz target for candidate-document include globs.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_include_globs
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct IncludeInput {
    /// Include patterns (e.g., "*.json", "prod-*.policy.json")
    patterns: Vec<String>,
    /// File names to match against
    file_names: Vec<String>,
}

fuzz_target!(|input: IncludeInput| {
    if input.patterns.len() > 20 || input.file_names.len() > 100 {
        return;
    }

    let patterns: Vec<String> = input
        .patterns
        .into_iter()
        .filter(|p| p.len() <= 256)
        .collect();

    let _ = polguard_repo::fuzz::include_matches(&patterns, &input.file_names);
});
