//! Fuzz target for JSON policy parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Raw bytes on purpose: documents on disk are not guaranteed to be UTF-8.
    let _ = polguard_repo::fuzz::parse_policy_bytes(data);
});
