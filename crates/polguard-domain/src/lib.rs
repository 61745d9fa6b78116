//! Pure policy evaluation (no IO).
//!
//! Input: a policy document parsed elsewhere.
//! Output: ordered findings + risk level.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod model;
pub mod policy;
pub mod report;
pub mod source;

pub mod checks;
mod engine;
mod risk;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{EvalError, evaluate};
pub use risk::classify;
