// src/validation/mod.rs

//! Provides functions to screen fields and distributions produced by the
//! artifact functions, which themselves let numeric failures through.

use crate::artifacts::compute_entanglement_entropy;
use crate::core::HoloError;
use ndarray::{ArrayBase, Data, Dimension, IntoDimension};
use num_complex::Complex;

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that every element of `field` is finite.
///
/// # Returns
/// * `Ok(())` if no NaN or infinity is present.
/// * `Err(HoloError::NonFinite)` with the index of the first offending element
///   in logical (row-major) order.
pub fn check_finite<S, D>(field: &ArrayBase<S, D>) -> Result<(), HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    match field.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some((idx, &value)) => Err(HoloError::NonFinite {
            index: idx.into_dimension().slice().to_vec(),
            value,
        }),
        None => Ok(()),
    }
}

/// Checks that a probability distribution sums to one.
///
/// # Arguments
/// * `distribution` - Non-negative weights, e.g. from `artifacts::spectral_distribution`.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(HoloError::Unnormalized)` otherwise.
pub fn check_normalization<S, D>(distribution: &ArrayBase<S, D>, tolerance: Option<f64>) -> Result<(), HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let sum = distribution.sum();
    if (sum - 1.0).abs() > effective_tolerance || !sum.is_finite() {
        Err(HoloError::Unnormalized { sum, tolerance: effective_tolerance })
    } else {
        Ok(())
    }
}

/// Checks that two fields share a shape, e.g. a density and the potential
/// derived from it before combining them elementwise.
pub fn check_same_shape<S1, S2, D1, D2>(left: &ArrayBase<S1, D1>, right: &ArrayBase<S2, D2>) -> Result<(), HoloError>
where
    S1: Data,
    S2: Data,
    D1: Dimension,
    D2: Dimension,
{
    if left.shape() != right.shape() {
        return Err(HoloError::ShapeMismatch {
            left: left.shape().to_vec(),
            right: right.shape().to_vec(),
        });
    }
    Ok(())
}

/// Entanglement entropy scaled by its maximum `ln(N)`.
///
/// Returns a score between 0.0 (all power in one bin) and 1.0 (flat spectrum).
/// A single-element field has no spread and scores 0.0.
pub fn spectral_flatness<S, A, D>(phase_field: &ArrayBase<S, D>) -> Result<f64, HoloError>
where
    S: Data<Elem = A>,
    A: Copy + Into<Complex<f64>>,
    D: Dimension,
{
    let entropy = compute_entanglement_entropy(phase_field)?;
    let n = phase_field.len();
    if n <= 1 {
        return Ok(0.0);
    }
    Ok((entropy / (n as f64).ln()).clamp(0.0, 1.0)) // Clamp for the ε offset in the log
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, arr1, arr2};

    #[test]
    fn test_check_finite_reports_first_index() {
        let field = arr2(&[[1.0, 2.0], [f64::INFINITY, f64::NAN]]);
        match check_finite(&field) {
            Err(HoloError::NonFinite { index, value }) => {
                assert_eq!(index, vec![1, 0]);
                assert!(value.is_infinite());
            }
            other => panic!("Expected NonFinite, got {:?}", other),
        }
        assert!(check_finite(&arr1(&[0.0, -3.5])).is_ok());
    }

    #[test]
    fn test_check_normalization() {
        assert!(check_normalization(&arr1(&[0.25, 0.25, 0.5]), None).is_ok());
        assert!(matches!(
            check_normalization(&arr1(&[0.3, 0.3]), None),
            Err(HoloError::Unnormalized { .. })
        ));
        assert!(check_normalization(&arr1(&[0.3, 0.3]), Some(0.5)).is_ok());
    }

    #[test]
    fn test_check_same_shape() {
        let a = Array2::<f64>::zeros((2, 3));
        let b = Array2::<f64>::zeros((3, 2));
        assert_eq!(
            check_same_shape(&a, &b),
            Err(HoloError::ShapeMismatch { left: vec![2, 3], right: vec![3, 2] })
        );
        assert!(check_same_shape(&a, &a.view()).is_ok());
    }

    #[test]
    fn test_flatness_bounds() -> Result<(), HoloError> {
        let mut impulse = Array1::<f64>::zeros(8);
        impulse[0] = 1.0;
        let flat = spectral_flatness(&impulse)?;
        assert!((flat - 1.0).abs() < 1e-6, "impulse flatness = {}", flat);

        let constant = Array1::from_elem(8, 1.0);
        let peaked = spectral_flatness(&constant)?;
        assert!(peaked < 1e-6, "constant flatness = {}", peaked);

        assert_eq!(spectral_flatness(&arr1(&[2.0]))?, 0.0);
        Ok(())
    }
}
