// src/spectral/mod.rs

//! Discrete Fourier transforms over phase fields.
//!
//! Every transform runs along the **last axis** of the input, so a 1-D field
//! is transformed as a whole and an N-d field is transformed row by row.
//! Lanes whose length is a power of two use an iterative radix-2
//! Cooley-Tukey pass; other lengths fall back to a direct O(N²) sum.
//!
//! Conventions:
//! * `fft` is unnormalised: `X_k = Σ_n x_n · e^{-2πikn/N}`
//! * `ifft` carries the `1/N` factor, so `ifft(fft(x)) == x`

use crate::core::HoloError;
use crate::core::constants::holo_constants::TAU;
use ndarray::{Array, ArrayBase, Axis, Data, Dimension};
use num_complex::Complex;
use num_traits::Zero;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// Forward DFT along the last axis.
///
/// Accepts real (`f64`) or complex (`Complex<f64>`) fields.
///
/// # Returns
/// * `Ok(spectrum)` with the same shape as `field`.
/// * `Err(HoloError::EmptyField)` for zero-dimensional or empty fields.
pub fn fft<S, A, D>(field: &ArrayBase<S, D>) -> Result<Array<Complex<f64>, D>, HoloError>
where
    S: Data<Elem = A>,
    A: Copy + Into<Complex<f64>>,
    D: Dimension,
{
    transform_last_axis(field, Direction::Forward)
}

/// Inverse DFT along the last axis, normalised by `1/N`.
pub fn ifft<S, A, D>(field: &ArrayBase<S, D>) -> Result<Array<Complex<f64>, D>, HoloError>
where
    S: Data<Elem = A>,
    A: Copy + Into<Complex<f64>>,
    D: Dimension,
{
    transform_last_axis(field, Direction::Inverse)
}

/// Squared modulus of the forward transform, `|fft(field)|²`.
pub fn power_spectrum<S, A, D>(field: &ArrayBase<S, D>) -> Result<Array<f64, D>, HoloError>
where
    S: Data<Elem = A>,
    A: Copy + Into<Complex<f64>>,
    D: Dimension,
{
    Ok(fft(field)?.mapv(|c| c.norm_sqr()))
}

fn transform_last_axis<S, A, D>(
    field: &ArrayBase<S, D>,
    direction: Direction,
) -> Result<Array<Complex<f64>, D>, HoloError>
where
    S: Data<Elem = A>,
    A: Copy + Into<Complex<f64>>,
    D: Dimension,
{
    let ndim = field.ndim();
    if ndim == 0 {
        return Err(HoloError::empty("cannot transform a zero-dimensional field"));
    }
    if field.is_empty() {
        return Err(HoloError::empty(format!("cannot transform a field of shape {:?}", field.shape())));
    }

    let axis = Axis(ndim - 1);
    let n = field.len_of(axis);
    let mut out: Array<Complex<f64>, D> = field.mapv(|v| v.into());
    let mut scratch = vec![Complex::zero(); n];

    log::trace!(
        "{:?} DFT over {} lane(s) of length {} ({})",
        direction,
        field.len() / n,
        n,
        if n.is_power_of_two() { "radix-2" } else { "direct" }
    );

    for mut lane in out.lanes_mut(axis) {
        // Lanes may be strided, so work on a contiguous copy.
        for (dst, src) in scratch.iter_mut().zip(lane.iter()) {
            *dst = *src;
        }
        transform_in_place(&mut scratch, direction);
        for (dst, src) in lane.iter_mut().zip(scratch.iter()) {
            *dst = *src;
        }
    }
    Ok(out)
}

/// Transforms a contiguous buffer in place, applying `1/N` for the inverse.
fn transform_in_place(buf: &mut [Complex<f64>], direction: Direction) {
    let n = buf.len();
    if n == 0 {
        return;
    }
    if n.is_power_of_two() {
        radix2(buf, direction.sign());
    } else {
        direct_dft(buf, direction.sign());
    }
    if direction == Direction::Inverse {
        let scale = 1.0 / n as f64;
        for c in buf.iter_mut() {
            *c = *c * scale;
        }
    }
}

/// Iterative radix-2 Cooley-Tukey. `buf.len()` must be a power of two.
fn radix2(buf: &mut [Complex<f64>], sign: f64) {
    let n = buf.len();
    if n <= 1 {
        return;
    }

    // Bit-reversal permutation
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            buf.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let step = sign * TAU / len as f64;
        for start in (0..n).step_by(len) {
            for k in 0..half {
                // Twiddle computed per k, not accumulated.
                let w = Complex::from_polar(1.0, step * k as f64);
                let u = buf[start + k];
                let v = buf[start + k + half] * w;
                buf[start + k] = u + v;
                buf[start + k + half] = u - v;
            }
        }
        len <<= 1;
    }
}

/// Direct evaluation of the DFT sum.
fn direct_dft(buf: &mut [Complex<f64>], sign: f64) {
    let n = buf.len();
    let input = buf.to_vec();
    for (k, out) in buf.iter_mut().enumerate() {
        *out = input
            .iter()
            .enumerate()
            .map(|(j, x)| {
                // Reduce k*j mod n first so the angle stays in [0, 2π).
                let angle = sign * TAU * ((k * j) % n) as f64 / n as f64;
                x * Complex::from_polar(1.0, angle)
            })
            .sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, arr1, arr2};

    const TEST_TOLERANCE: f64 = 1e-9;

    fn assert_complex_vec_approx_equal(
        actual: &[Complex<f64>],
        expected: &[Complex<f64>],
        tolerance: f64,
        context: &str,
    ) {
        assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
        for i in 0..actual.len() {
            let dist_sq = (actual[i] - expected[i]).norm_sqr();
            assert!(
                dist_sq < tolerance * tolerance,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, DistSq: {:.3e}, Context: {}",
                i, actual[i], expected[i], dist_sq, context
            );
        }
    }

    fn signal(n: usize) -> Vec<Complex<f64>> {
        (0..n)
            .map(|i| Complex::new((i as f64 * 0.7).sin() + 0.25 * i as f64, (i as f64 * 1.3).cos()))
            .collect()
    }

    #[test]
    fn test_impulse_has_flat_spectrum() -> Result<(), HoloError> {
        let field = arr1(&[1.0, 0.0, 0.0, 0.0]);
        let spectrum = fft(&field)?;
        let expected = vec![Complex::new(1.0, 0.0); 4];
        assert_complex_vec_approx_equal(spectrum.as_slice().unwrap(), &expected, TEST_TOLERANCE, "impulse");
        Ok(())
    }

    #[test]
    fn test_constant_concentrates_in_dc_bin() -> Result<(), HoloError> {
        let field = Array1::from_elem(8, 2.0);
        let spectrum = fft(&field)?;
        assert!((spectrum[0] - Complex::new(16.0, 0.0)).norm() < TEST_TOLERANCE);
        for bin in spectrum.iter().skip(1) {
            assert!(bin.norm() < TEST_TOLERANCE, "Non-DC bin should vanish, got {}", bin);
        }
        Ok(())
    }

    #[test]
    fn test_radix2_matches_direct_dft() {
        for n in [2usize, 4, 8, 16, 64] {
            let mut fast = signal(n);
            let mut slow = fast.clone();
            radix2(&mut fast, -1.0);
            direct_dft(&mut slow, -1.0);
            assert_complex_vec_approx_equal(&fast, &slow, 1e-8, &format!("n = {}", n));
        }
    }

    #[test]
    fn test_inverse_recovers_signal_for_odd_length() -> Result<(), HoloError> {
        let original = Array1::from_vec(signal(7));
        let recovered = ifft(&fft(&original)?)?;
        assert_complex_vec_approx_equal(
            recovered.as_slice().unwrap(),
            original.as_slice().unwrap(),
            TEST_TOLERANCE,
            "ifft(fft(x)) for N = 7",
        );
        Ok(())
    }

    #[test]
    fn test_transform_runs_along_last_axis() -> Result<(), HoloError> {
        // Each row is transformed independently.
        let field: Array2<f64> = arr2(&[[1.0, 0.0, 0.0, 0.0], [1.0, 1.0, 1.0, 1.0]]);
        let spectrum = fft(&field)?;
        assert_eq!(spectrum.shape(), &[2, 4]);
        for k in 0..4 {
            assert!((spectrum[[0, k]] - Complex::new(1.0, 0.0)).norm() < TEST_TOLERANCE);
        }
        assert!((spectrum[[1, 0]] - Complex::new(4.0, 0.0)).norm() < TEST_TOLERANCE);
        for k in 1..4 {
            assert!(spectrum[[1, k]].norm() < TEST_TOLERANCE);
        }
        Ok(())
    }

    #[test]
    fn test_transform_handles_strided_lanes() -> Result<(), HoloError> {
        let field: Array2<f64> = arr2(&[[1.0, 2.0], [0.0, 0.0], [0.0, 0.0]]);
        let transposed = field.t();
        // Rows of the transposed view are columns of `field` in memory.
        let spectrum = fft(&transposed)?;
        assert_eq!(spectrum.shape(), &[2, 3]);
        for k in 0..3 {
            assert!((spectrum[[0, k]] - Complex::new(1.0, 0.0)).norm() < TEST_TOLERANCE);
            assert!((spectrum[[1, k]] - Complex::new(2.0, 0.0)).norm() < TEST_TOLERANCE);
        }
        Ok(())
    }

    #[test]
    fn test_power_spectrum_of_single_mode() -> Result<(), HoloError> {
        let n = 8;
        let field = Array1::from_shape_fn(n, |j| Complex::from_polar(1.0, TAU * j as f64 / n as f64));
        let power = power_spectrum(&field)?;
        assert!((power[1] - 64.0).abs() < 1e-8);
        assert!((power.sum() - 64.0).abs() < 1e-8);
        Ok(())
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let field: Array1<f64> = Array1::zeros(0);
        assert!(matches!(fft(&field), Err(HoloError::EmptyField { .. })));
    }

    #[test]
    fn test_zero_dimensional_field_is_rejected() {
        let scalar = ndarray::arr0(1.0);
        assert!(matches!(fft(&scalar), Err(HoloError::EmptyField { .. })));
        assert!(matches!(ifft(&scalar), Err(HoloError::EmptyField { .. })));
    }
}
