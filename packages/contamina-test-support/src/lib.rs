//! Test helpers shared by the backend's integration tests.
//!
//! Kept free of backend types so error-contract assertions check the wire
//! shape rather than the Rust structs that produce it.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
