//! Flows module - Operations combining multiple steps
//!
//! Provides:
//! - combine: Concatenate collected files into a single document

pub mod combine;
