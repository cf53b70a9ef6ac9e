//! Test helpers shared across crates.
//!
//! This crate currently provides scopes that capture what the process-wide
//! reporter logs and turn termination into a catchable panic.

pub mod hooks;
