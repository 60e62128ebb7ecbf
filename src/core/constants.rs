//! Physical and numerical constants shared by the artifact functions.

/// Constants used when callers do not override a parameter.
pub mod holo_constants {
    /// Reduced Planck constant in natural units.
    pub const HBAR_NATURAL: f64 = 1.0;
    /// Default particle mass for the quantum potential.
    pub const DEFAULT_MASS: f64 = 1.0;
    /// Sample spacing assumed by finite differences.
    pub const DEFAULT_SPACING: f64 = 1.0;
    /// Offset inside `ln(p + ε)` so empty spectral bins contribute zero entropy.
    pub const ENTROPY_EPSILON: f64 = 1e-10;
    /// Used for phase angles (`e^(iθ)`)
    pub const TAU: f64 = std::f64::consts::TAU;
}
