// src/projection/mod.rs

//! Holographic projections: maps from a spatial coordinate and a time to a
//! complex wave amplitude.
//!
//! The artifact functions only need the `HolographicProjection` seam. Any
//! closure `Fn(f64, f64) -> Complex<f64>` already implements it; the
//! `FourierProjection` type provides a ready-made plane-wave superposition.

use crate::core::HoloError;
use ndarray::{Array, ArrayBase, Data, Dimension};
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Produces a complex wave value at `(x, t)`.
pub trait HolographicProjection {
    /// Complex wave amplitude at position `x` and time `t`.
    fn project(&self, x: f64, t: f64) -> Complex<f64>;
}

impl<F> HolographicProjection for F
where
    F: Fn(f64, f64) -> Complex<f64>,
{
    fn project(&self, x: f64, t: f64) -> Complex<f64> {
        self(x, t)
    }
}

/// A single plane-wave component `a · exp(i(k·x − ω·t + φ))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourierMode {
    /// Real amplitude `a`.
    pub amplitude: f64,
    /// Spatial wavenumber `k`.
    pub wavenumber: f64,
    /// Angular frequency `ω`.
    pub frequency: f64,
    /// Phase offset `φ`.
    #[serde(default)]
    pub phase: f64,
}

impl FourierMode {
    /// Creates a mode from its amplitude, wavenumber, angular frequency and phase offset.
    pub fn new(amplitude: f64, wavenumber: f64, frequency: f64, phase: f64) -> Self {
        Self { amplitude, wavenumber, frequency, phase }
    }

    fn evaluate(&self, x: f64, t: f64) -> Complex<f64> {
        Complex::from_polar(self.amplitude, self.wavenumber * x - self.frequency * t + self.phase)
    }
}

/// Parameters of a `FourierProjection`: the list of superposed modes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Superposed plane-wave modes; at least one is required.
    pub modes: Vec<FourierMode>,
}

/// Superposition of plane waves, `ψ(x, t) = Σ_j a_j · exp(i(k_j·x − ω_j·t + φ_j))`.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierProjection {
    modes: Vec<FourierMode>,
}

impl FourierProjection {
    /// Builds a projection, rejecting modes with non-finite coefficients.
    pub fn new(params: ProjectionParams) -> Result<Self, HoloError> {
        if params.modes.is_empty() {
            return Err(HoloError::empty("a Fourier projection needs at least one mode"));
        }
        for mode in &params.modes {
            for (name, value) in [
                ("amplitude", mode.amplitude),
                ("wavenumber", mode.wavenumber),
                ("frequency", mode.frequency),
                ("phase", mode.phase),
            ] {
                if !value.is_finite() {
                    return Err(HoloError::invalid_parameter(name, value, "Fourier mode coefficients must be finite"));
                }
            }
        }
        log::debug!("Fourier projection with {} mode(s)", params.modes.len());
        Ok(Self { modes: params.modes })
    }

    /// The modes this projection superposes.
    pub fn modes(&self) -> &[FourierMode] {
        &self.modes
    }
}

impl HolographicProjection for FourierProjection {
    fn project(&self, x: f64, t: f64) -> Complex<f64> {
        self.modes.iter().map(|mode| mode.evaluate(x, t)).sum()
    }
}

impl fmt::Display for FourierProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourierProjection[")?;
        for (i, m) in self.modes.iter().enumerate() {
            write!(
                f,
                "{}{:.4}·e^i({:.4}x - {:.4}t + {:.4})",
                if i > 0 { ", " } else { "" },
                m.amplitude,
                m.wavenumber,
                m.frequency,
                m.phase
            )?;
        }
        write!(f, "]")
    }
}

/// Evaluates `projection` at every coordinate of `x` for a fixed time `t`.
pub fn project_field<S, D, P>(
    x: &ArrayBase<S, D>,
    t: f64,
    projection: &P,
) -> Result<Array<Complex<f64>, D>, HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
    P: HolographicProjection + ?Sized,
{
    if x.is_empty() {
        return Err(HoloError::empty("coordinate array has no points to project"));
    }
    if !t.is_finite() {
        return Err(HoloError::invalid_parameter("t", t, "time must be finite"));
    }
    Ok(x.mapv(|xi| projection.project(xi, t)))
}
