//! Core library for the `orderstorm` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, configuration parsing, venue setup, order execution, and
//! metrics aggregation. The primary user-facing interface is the
//! `orderstorm` command-line application; library APIs may evolve as the CLI
//! grows.
pub mod args;
pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod summary;
pub mod venue;
pub mod workload;
