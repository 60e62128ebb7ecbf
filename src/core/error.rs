//! Error handling logic

use std::fmt;

/// Error types raised when a field or parameter cannot support the requested
/// transform. Numeric blow-ups inside a valid computation (division by a zero
/// density, for instance) are *not* errors; they surface as IEEE infinities or
/// NaN and can be detected afterwards with `validation::check_finite`.
#[derive(Debug, Clone, PartialEq)] // No Eq: some variants carry f64 context
pub enum HoloError {
    /// The field has no elements (or no axes) to transform.
    EmptyField {
        /// EmptyField failure message
        message: String,
    },

    /// An axis is too short for a finite-difference stencil.
    InsufficientSamples {
        /// Axis being differentiated
        axis: usize,
        /// Number of samples found along that axis
        len: usize,
    },

    /// A scalar parameter (mass, hbar, rate, spacing) is outside its domain.
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
        /// InvalidParameter failure message
        message: String,
    },

    /// The power spectrum carries no energy, so it cannot be normalised.
    DegenerateSpectrum {
        /// DegenerateSpectrum failure message
        message: String,
    },

    /// A field element is NaN or infinite.
    NonFinite {
        /// Multi-dimensional index of the first offending element
        index: Vec<usize>,
        /// The offending value
        value: f64,
    },

    /// Two fields that must agree in shape do not.
    ShapeMismatch {
        /// Shape of the left-hand field
        left: Vec<usize>,
        /// Shape of the right-hand field
        right: Vec<usize>,
    },

    /// Requested axis does not exist on the field.
    InvalidAxis {
        /// Requested axis
        axis: usize,
        /// Dimensionality of the field
        ndim: usize,
    },

    /// A probability distribution does not sum to one.
    Unnormalized {
        /// Observed sum
        sum: f64,
        /// Allowed deviation
        tolerance: f64,
    },
}

impl HoloError {
    pub(crate) fn empty(message: impl Into<String>) -> Self {
        HoloError::EmptyField { message: message.into() }
    }

    pub(crate) fn invalid_parameter(name: &'static str, value: f64, message: impl Into<String>) -> Self {
        HoloError::InvalidParameter { name, value, message: message.into() }
    }
}

impl fmt::Display for HoloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoloError::EmptyField { message } => write!(f, "Empty Field: {}", message),
            HoloError::InsufficientSamples { axis, len } => {
                write!(f, "Insufficient Samples: axis {} has {} point(s), need at least 2", axis, len)
            }
            HoloError::InvalidParameter { name, value, message } => {
                write!(f, "Invalid Parameter `{}` = {}: {}", name, value, message)
            }
            HoloError::DegenerateSpectrum { message } => write!(f, "Degenerate Spectrum: {}", message),
            HoloError::NonFinite { index, value } => {
                write!(f, "Non-finite Value: {} at index {:?}", value, index)
            }
            HoloError::ShapeMismatch { left, right } => {
                write!(f, "Shape Mismatch: {:?} vs {:?}", left, right)
            }
            HoloError::InvalidAxis { axis, ndim } => {
                write!(f, "Invalid Axis: {} for a {}-dimensional field", axis, ndim)
            }
            HoloError::Unnormalized { sum, tolerance } => {
                write!(f, "Unnormalized Distribution: Sum(p) = {} (Deviation > {})", sum, tolerance)
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for HoloError {}
