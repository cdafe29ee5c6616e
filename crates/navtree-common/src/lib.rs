//! Common utilities for navtree.
//!
//! This crate provides shared infrastructure used by all navtree components:
//! - **Warning System** - colored terminal output for recoverable anomalies

pub mod warning;
