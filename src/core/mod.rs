//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Data model (FileList, CombineSummary, AssetError)
//! - Layered run configuration
//! - Console progress and diagnostics
//! - Source file reading with lossy decoding
//! - Path utilities

pub mod config;
pub mod console;
pub mod file_reader;
pub mod model;
pub mod paths;
