//! Test utilities for Gigboard services.
//!
//! Provides the seed fixture loader. Use from `[dev-dependencies]` only.

pub mod fixture;
