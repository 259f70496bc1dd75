//! Shared plumbing for Gigboard services: tracing, env config, request ids,
//! health probes and serde helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
