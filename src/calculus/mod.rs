// src/calculus/mod.rs

//! Finite-difference derivatives on uniformly sampled fields.
//!
//! Stencils match the conventional array-library `gradient`:
//! second-order central differences in the interior and first-order
//! one-sided differences at both edges, so the output has the same shape
//! as the input.

use crate::core::HoloError;
use crate::core::params::validate_spacing;
use ndarray::{Array, ArrayBase, Axis, Data, Dimension, Zip};

/// Derivative of `field` along a single axis.
///
/// # Arguments
/// * `field` - Samples on a uniform grid.
/// * `axis` - Axis to differentiate along.
/// * `spacing` - Distance between neighbouring samples (must be > 0).
///
/// # Returns
/// * `Ok(derivative)` with the same shape as `field`.
/// * `Err(HoloError::InvalidAxis)` if `axis` does not exist.
/// * `Err(HoloError::InsufficientSamples)` if the axis has fewer than 2 points.
pub fn gradient_along<S, D>(
    field: &ArrayBase<S, D>,
    axis: usize,
    spacing: f64,
) -> Result<Array<f64, D>, HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    validate_spacing(spacing)?;
    let ndim = field.ndim();
    if axis >= ndim {
        return Err(HoloError::InvalidAxis { axis, ndim });
    }
    let n = field.len_of(Axis(axis));
    if n < 2 {
        return Err(HoloError::InsufficientSamples { axis, len: n });
    }

    let mut out = Array::zeros(field.raw_dim());
    let two_h = 2.0 * spacing;
    Zip::from(out.lanes_mut(Axis(axis)))
        .and(field.lanes(Axis(axis)))
        .for_each(|mut dst, src| {
            dst[0] = (src[1] - src[0]) / spacing;
            dst[n - 1] = (src[n - 1] - src[n - 2]) / spacing;
            for i in 1..n - 1 {
                dst[i] = (src[i + 1] - src[i - 1]) / two_h;
            }
        });
    Ok(out)
}

/// Derivatives along every axis, in axis order.
///
/// A 1-D field yields a single-element `Vec`.
pub fn gradient<S, D>(field: &ArrayBase<S, D>, spacing: f64) -> Result<Vec<Array<f64, D>>, HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if field.ndim() == 0 {
        return Err(HoloError::empty("cannot differentiate a zero-dimensional field"));
    }
    (0..field.ndim())
        .map(|axis| gradient_along(field, axis, spacing))
        .collect()
}

/// Sum over axes of the gradient applied twice along the same axis.
///
/// On a 1-D field this is exactly `gradient(gradient(f))`. Near the edges the
/// repeated stencil widens, so values there are only first-order accurate.
pub fn laplacian<S, D>(field: &ArrayBase<S, D>, spacing: f64) -> Result<Array<f64, D>, HoloError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if field.ndim() == 0 {
        return Err(HoloError::empty("cannot differentiate a zero-dimensional field"));
    }
    let mut total = Array::zeros(field.raw_dim());
    for axis in 0..field.ndim() {
        let first = gradient_along(field, axis, spacing)?;
        let second = gradient_along(&first, axis, spacing)?;
        total += &second;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, arr1};

    const TEST_TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_gradient_matches_reference_stencil() -> Result<(), HoloError> {
        // f = [1, 2, 4, 7, 11]
        // edges: 2-1 = 1, 11-7 = 4; interior: (4-1)/2, (7-2)/2, (11-4)/2
        let field = arr1(&[1.0, 2.0, 4.0, 7.0, 11.0]);
        let grad = gradient_along(&field, 0, 1.0)?;
        let expected = [1.0, 1.5, 2.5, 3.5, 4.0];
        for (g, e) in grad.iter().zip(expected.iter()) {
            assert!((g - e).abs() < TEST_TOLERANCE, "got {}, expected {}", g, e);
        }
        Ok(())
    }

    #[test]
    fn test_gradient_scales_with_spacing() -> Result<(), HoloError> {
        let field = arr1(&[0.0, 1.0, 2.0, 3.0]);
        let grad = gradient_along(&field, 0, 0.5)?;
        assert!(grad.iter().all(|g| (g - 2.0).abs() < TEST_TOLERANCE));
        Ok(())
    }

    #[test]
    fn test_gradient_per_axis_on_plane() -> Result<(), HoloError> {
        // f(i, j) = 3i + 5j
        let field = Array2::from_shape_fn((4, 6), |(i, j)| 3.0 * i as f64 + 5.0 * j as f64);
        let grads = gradient(&field, 1.0)?;
        assert_eq!(grads.len(), 2);
        assert!(grads[0].iter().all(|g| (g - 3.0).abs() < TEST_TOLERANCE));
        assert!(grads[1].iter().all(|g| (g - 5.0).abs() < TEST_TOLERANCE));
        Ok(())
    }

    #[test]
    fn test_laplacian_of_quadratic_interior() -> Result<(), HoloError> {
        // f = x^2 -> f'' = 2 away from the two outermost points on each side
        let field = Array1::from_shape_fn(10, |i| (i as f64).powi(2));
        let lap = laplacian(&field, 1.0)?;
        for i in 2..8 {
            assert!((lap[i] - 2.0).abs() < TEST_TOLERANCE, "lap[{}] = {}", i, lap[i]);
        }
        Ok(())
    }

    #[test]
    fn test_single_sample_axis_is_rejected() {
        let field = arr1(&[1.0]);
        assert_eq!(
            gradient_along(&field, 0, 1.0),
            Err(HoloError::InsufficientSamples { axis: 0, len: 1 })
        );
    }

    #[test]
    fn test_out_of_range_axis_is_rejected() {
        let field = arr1(&[1.0, 2.0]);
        assert_eq!(
            gradient_along(&field, 1, 1.0),
            Err(HoloError::InvalidAxis { axis: 1, ndim: 1 })
        );
    }
}
