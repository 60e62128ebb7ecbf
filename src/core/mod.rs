// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod params;

// Re-export public types for convenient access via `holoquant::core::TypeName`
pub use error::HoloError;
pub use params::PhysicalParams;

pub mod constants;
pub use constants::holo_constants::{DEFAULT_MASS, DEFAULT_SPACING, ENTROPY_EPSILON, HBAR_NATURAL}; // Re-export
