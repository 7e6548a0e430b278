//! Common utilities for the Wombat markup library.
//!
//! This crate provides shared infrastructure used by the other components:
//! - **Warning System** - colored terminal output for recovered anomalies

pub mod warning;
