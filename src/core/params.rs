// src/core/params.rs

use super::constants::holo_constants::{DEFAULT_MASS, DEFAULT_SPACING, HBAR_NATURAL};
use super::error::HoloError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical parameters shared by the Bohmian velocity and quantum potential
/// calculations.
///
/// Defaults to natural units (`hbar = 1`, `mass = 1`) on a unit-spaced grid.
/// Missing fields fall back to those defaults when deserialized, so a config
/// file only needs to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalParams {
    /// Planck's-constant stand-in.
    pub hbar: f64,
    /// Particle mass.
    pub mass: f64,
    /// Distance between neighbouring grid samples, identical on every axis.
    pub spacing: f64,
}

impl Default for PhysicalParams {
    fn default() -> Self {
        Self {
            hbar: HBAR_NATURAL,
            mass: DEFAULT_MASS,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl PhysicalParams {
    /// Creates parameters in natural units.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets Planck's constant.
    pub fn with_hbar(mut self, hbar: f64) -> Self {
        self.hbar = hbar;
        self
    }

    /// Sets the particle mass.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Sets the grid spacing used by finite differences.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Checks that every parameter can be used as a divisor or scale factor.
    ///
    /// # Returns
    /// * `Ok(())` if `hbar` is finite, `mass` is finite and non-zero and
    ///   `spacing` is finite and strictly positive.
    /// * `Err(HoloError::InvalidParameter)` naming the first offending field.
    pub fn validate(&self) -> Result<(), HoloError> {
        validate_hbar(self.hbar)?;
        validate_mass(self.mass)?;
        validate_spacing(self.spacing)
    }
}

impl fmt::Display for PhysicalParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params(hbar={}, m={}, dx={})", self.hbar, self.mass, self.spacing)
    }
}

pub(crate) fn validate_hbar(hbar: f64) -> Result<(), HoloError> {
    if !hbar.is_finite() {
        return Err(HoloError::invalid_parameter("hbar", hbar, "must be finite"));
    }
    Ok(())
}

pub(crate) fn validate_mass(mass: f64) -> Result<(), HoloError> {
    if !mass.is_finite() || mass == 0.0 {
        return Err(HoloError::invalid_parameter("mass", mass, "must be finite and non-zero"));
    }
    Ok(())
}

pub(crate) fn validate_spacing(spacing: f64) -> Result<(), HoloError> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(HoloError::invalid_parameter("spacing", spacing, "must be finite and positive"));
    }
    Ok(())
}
