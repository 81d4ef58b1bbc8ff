//! # Typesmith Bench
//!
//! Benchmarking utilities for Typesmith generation throughput.

pub mod listing;
