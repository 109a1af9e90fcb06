//! Shared test utilities used across smallworld crates.

pub mod proptest_profile;
pub mod tracing;
