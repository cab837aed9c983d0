//! Backends module - File system operations
//!
//! Provides:
//! - scan: Extension-filtered file collection with walkdir

pub mod scan;
