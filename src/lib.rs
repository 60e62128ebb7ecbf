// src/lib.rs

//! `holoquant` - Quantum artifacts from holographic phase fields
//!
//! This library derives speculative quantum quantities (quantum foam,
//! Bohmian velocity, macroscopic quantum potential, entanglement entropy,
//! decoherence) from phase fields using elementary array transforms:
//! Fourier transforms, finite-difference gradients, logarithms and noise.
//! Every function is stateless; fields are `ndarray` arrays of any shape.

pub mod core;
pub mod spectral;
pub mod calculus;
pub mod projection;
pub mod artifacts;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{HoloError, PhysicalParams};
pub use projection::{FourierMode, FourierProjection, HolographicProjection, ProjectionParams};
pub use artifacts::{
    compute_quantum_foam,
    wave_particle_duality,
    compute_bohmian_velocity,
    compute_bohmian_velocity_with,
    compute_mqp,
    compute_mqp_with,
    compute_entanglement_entropy,
    spectral_distribution,
    holographic_decoherence,
    holographic_decoherence_seeded,
};
pub use validation::{check_finite, check_normalization, check_same_shape, spectral_flatness};

// Example 1: Spectral artifacts of a single phase field
// A pure impulse has a perfectly flat spectrum, so its entropy is maximal
// and its foam intensity is uniform.
/// ```
/// use holoquant::{compute_entanglement_entropy, compute_quantum_foam, HoloError};
/// use ndarray::Array1;
///
/// fn main() -> Result<(), HoloError> {
///     let mut phase = Array1::<f64>::zeros(16);
///     phase[0] = 1.0;
///
///     let entropy = compute_entanglement_entropy(&phase)?;
///     assert!((entropy - 16f64.ln()).abs() < 1e-6);
///
///     let foam = compute_quantum_foam(&phase)?;
///     assert!(foam.iter().all(|v| (v - 1.0 / 256.0).abs() < 1e-12));
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Bohmian flow and quantum potential from a projected wave
// The density comes from a two-mode Fourier projection; the phase of a
// single plane wave gives a uniform velocity hbar*k/m.
/// ```
/// use holoquant::{
///     compute_bohmian_velocity, compute_mqp, wave_particle_duality, check_finite,
///     FourierMode, FourierProjection, ProjectionParams, HoloError,
/// };
/// use ndarray::Array1;
///
/// fn main() -> Result<(), HoloError> {
///     let projection = FourierProjection::new(ProjectionParams {
///         modes: vec![
///             FourierMode::new(1.0, 1.0, 0.5, 0.0),
///             FourierMode::new(0.5, 2.0, 1.0, 0.0),
///         ],
///     })?;
///     let x = Array1::linspace(0.0, 3.0, 31);
///     let density = wave_particle_duality(&x, 0.0, &projection)?;
///     // |1 + 0.5 e^{ix}| >= 0.5, so the density never vanishes
///     let q = compute_mqp(&density, None, None)?;
///     check_finite(&q)?;
///
///     let phase = x.mapv(|xi| 2.0 * xi);
///     let v = compute_bohmian_velocity(&phase, 4.0, None)?;
///     // Unit-spaced gradient of 2*x_i over samples 0.1 apart is 0.2
///     assert!(v[0].iter().all(|vi| (vi - 0.05).abs() < 1e-12));
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
