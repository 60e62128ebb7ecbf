// src/artifacts/mod.rs

//! Quantum artifacts extracted from holographic phase fields.
//!
//! Each function is a stateless transform of its inputs. Shape and parameter
//! problems are reported as `HoloError`; numeric blow-ups inside a valid call
//! (a zero density under the quantum potential, say) are left in the output
//! as IEEE infinities or NaN, exactly as the underlying arithmetic produces
//! them. Use `validation::check_finite` to screen results.

use crate::calculus::{gradient, laplacian};
use crate::core::constants::holo_constants::{DEFAULT_MASS, ENTROPY_EPSILON, HBAR_NATURAL};
use crate::core::{HoloError, PhysicalParams};
use crate::projection::{HolographicProjection, project_field};
use crate::spectral::{ifft, power_spectrum};
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Quantum foam intensity: `|ifft(phase_field)|²`.
///
/// # Arguments
/// * `phase_field` - Fourier phase representation of the projection (real or complex).
///
/// # Returns
/// * `Ok(intensity)` with the shape of `phase_field`.
/// * `Err(HoloError::EmptyField)` for empty input.
pub fn compute_quantum_foam<S, A, D>(phase_field: &ArrayBase<S, D>) -> Result<Array<f64, D>, HoloError>
where
    S: Data<Elem = A>,
    A: Copy + Into<Complex<f64>>,
    D: Dimension,
{
    let foam = ifft(phase_field)?.mapv(|c| c.norm_sqr());
    log::debug!("quantum foam over shape {:?}, total intensity {:.6e}", foam.shape(), foam.sum());
    Ok(foam)
}

/// Probability density of the projected wave, `|ψ(x, t)|²`, at every point of `x`.
///
/// # Arguments
/// * `x` - Spatial coordinates.
/// * `t` - Time coordinate.
/// * `projection` - The holographic projection producing `ψ`.
pub fn wave_particle_duality<S, D, P>(
    x: &ArrayBase<S, D>,
    t: f64,
    projection: &P,
) -> Result<Array<f64, D>, HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
    P: HolographicProjection + ?Sized,
{
    let density = project_field(x, t, projection)?.mapv(|psi| psi.norm_sqr());
    log::debug!("wave-particle density at t={} over {} point(s)", t, density.len());
    Ok(density)
}

/// Bohmian velocity field `v = (ħ / m) · ∇S` for a phase field `S` on a unit grid.
///
/// Returns one velocity component per axis of `phase_field`.
///
/// # Arguments
/// * `phase_field` - Phase `S` sampled on a uniform grid.
/// * `mass` - Particle mass (finite, non-zero).
/// * `hbar` - Optional Planck's constant, defaults to 1 (natural units).
pub fn compute_bohmian_velocity<S, D>(
    phase_field: &ArrayBase<S, D>,
    mass: f64,
    hbar: Option<f64>,
) -> Result<Vec<Array<f64, D>>, HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let params = PhysicalParams::new()
        .with_mass(mass)
        .with_hbar(hbar.unwrap_or(HBAR_NATURAL));
    compute_bohmian_velocity_with(phase_field, &params)
}

/// Bohmian velocity with explicit parameters, including grid spacing.
pub fn compute_bohmian_velocity_with<S, D>(
    phase_field: &ArrayBase<S, D>,
    params: &PhysicalParams,
) -> Result<Vec<Array<f64, D>>, HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    params.validate()?;
    let scale = params.hbar / params.mass;
    let mut components = gradient(phase_field, params.spacing)?;
    for component in components.iter_mut() {
        *component *= scale;
    }
    log::debug!("Bohmian velocity: {} component(s), {}", components.len(), params);
    Ok(components)
}

/// Macroscopic Quantum Potential `Q = -(ħ² / 2m) · (∇²ρ / ρ)`.
///
/// The Laplacian is the per-axis second difference summed over axes (see
/// `calculus::laplacian`). Points where `ρ == 0` yield ±∞ or NaN.
///
/// # Arguments
/// * `density_field` - Projected density `ρ` on a uniform grid.
/// * `hbar` - Optional Planck's constant, defaults to 1.
/// * `mass` - Optional particle mass, defaults to 1.
pub fn compute_mqp<S, D>(
    density_field: &ArrayBase<S, D>,
    hbar: Option<f64>,
    mass: Option<f64>,
) -> Result<Array<f64, D>, HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let params = PhysicalParams::new()
        .with_hbar(hbar.unwrap_or(HBAR_NATURAL))
        .with_mass(mass.unwrap_or(DEFAULT_MASS));
    compute_mqp_with(density_field, &params)
}

/// Quantum potential with explicit parameters, including grid spacing.
pub fn compute_mqp_with<S, D>(
    density_field: &ArrayBase<S, D>,
    params: &PhysicalParams,
) -> Result<Array<f64, D>, HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    params.validate()?;
    let lap = laplacian(density_field, params.spacing)?;
    let prefactor = -(params.hbar * params.hbar) / (2.0 * params.mass);
    let potential = Zip::from(&lap)
        .and(density_field)
        .map_collect(|&l, &rho| prefactor * (l / rho));

    let non_finite = potential.iter().filter(|q| !q.is_finite()).count();
    if non_finite > 0 {
        log::warn!("MQP produced {} non-finite value(s); density vanishes somewhere", non_finite);
    }
    log::debug!("MQP over shape {:?}, {}", potential.shape(), params);
    Ok(potential)
}

/// Normalised power spectrum `p = |fft(φ)|² / Σ|fft(φ)|²`, taken over every element.
///
/// `p` is invariant under scaling of `φ`, so the field is divided by its
/// largest magnitude first and very large fields do not overflow the squares.
///
/// # Returns
/// * `Err(HoloError::EmptyField)` for empty input.
/// * `Err(HoloError::DegenerateSpectrum)` if the field is identically zero or
///   contains NaN or infinite values.
pub fn spectral_distribution<S, A, D>(phase_field: &ArrayBase<S, D>) -> Result<Array<f64, D>, HoloError>
where
    S: Data<Elem = A>,
    A: Copy + Into<Complex<f64>>,
    D: Dimension,
{
    let field: Array<Complex<f64>, D> = phase_field.mapv(|v| v.into());
    let peak = field.iter().fold(0.0f64, |acc, c| {
        let magnitude = c.norm();
        if magnitude.is_nan() || acc.is_nan() { f64::NAN } else { acc.max(magnitude) }
    });
    if !field.is_empty() {
        if !peak.is_finite() {
            return Err(HoloError::DegenerateSpectrum {
                message: format!("field contains non-finite values (peak magnitude {})", peak),
            });
        }
        if peak == 0.0 {
            return Err(HoloError::DegenerateSpectrum {
                message: "field is identically zero, spectrum carries no power".to_string(),
            });
        }
    }

    let mut spectrum = power_spectrum(&field.mapv(|c| c / peak))?;
    let total = spectrum.sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(HoloError::DegenerateSpectrum {
            message: format!("total spectral power is {}, cannot normalise", total),
        });
    }
    spectrum /= total;
    Ok(spectrum)
}

/// Entanglement entropy as the Shannon entropy of the normalised power
/// spectrum: `-Σ p · ln(p + ε)` with `ε = 1e-10`.
pub fn compute_entanglement_entropy<S, A, D>(phase_field: &ArrayBase<S, D>) -> Result<f64, HoloError>
where
    S: Data<Elem = A>,
    A: Copy + Into<Complex<f64>>,
    D: Dimension,
{
    let p = spectral_distribution(phase_field)?;
    let entropy = -p.iter().map(|&pk| pk * (pk + ENTROPY_EPSILON).ln()).sum::<f64>();
    log::debug!("entanglement entropy {:.6} over {} spectral bin(s)", entropy, p.len());
    Ok(entropy)
}

/// Adds stochastic phase noise, `φ + N(0, 1) · rate`, drawing from `rng`.
///
/// A zero rate returns the field unchanged.
///
/// # Returns
/// * `Err(HoloError::InvalidParameter)` if `decoherence_rate` is negative or not finite.
pub fn holographic_decoherence<S, D, R>(
    phase_field: &ArrayBase<S, D>,
    decoherence_rate: f64,
    rng: &mut R,
) -> Result<Array<f64, D>, HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
    R: Rng + ?Sized,
{
    if !decoherence_rate.is_finite() || decoherence_rate < 0.0 {
        return Err(HoloError::invalid_parameter(
            "decoherence_rate",
            decoherence_rate,
            "must be finite and non-negative",
        ));
    }
    if decoherence_rate == 0.0 {
        return Ok(phase_field.to_owned());
    }
    let decohered = phase_field.mapv(|phi| {
        let z: f64 = StandardNormal.sample(&mut *rng);
        phi + z * decoherence_rate
    });
    log::debug!("decohered {} phase sample(s) at rate {}", decohered.len(), decoherence_rate);
    Ok(decohered)
}

/// `holographic_decoherence` with a deterministic generator seeded from `seed`.
pub fn holographic_decoherence_seeded<S, D>(
    phase_field: &ArrayBase<S, D>,
    decoherence_rate: f64,
    seed: u64,
) -> Result<Array<f64, D>, HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut rng = StdRng::seed_from_u64(seed);
    holographic_decoherence(phase_field, decoherence_rate, &mut rng)
}
