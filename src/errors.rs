//! Error types and validation functions for surrogate generation.
//!
//! The transform itself never fails on well-formed data; errors come from the
//! FFT layer (zero-length transforms), from opt-in input validation, or from
//! misuse of the lower-level spectral helpers.

use thiserror::Error;

/// Error types for surrogate generation.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SurrogateError {
    /// Insufficient data for the requested operation.
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData {
        /// Minimum required data points
        required: usize,
        /// Actual number of data points provided
        actual: usize,
    },

    /// Numerical computation error, e.g. non-finite input under strict validation.
    #[error("Numerical computation failed: {reason}")]
    NumericalError {
        /// Detailed reason for numerical failure
        reason: String,
    },

    /// FFT computation error.
    #[error("FFT computation failed: input size {size} not supported")]
    FftError {
        /// Input size that caused the FFT failure
        size: usize,
    },

    /// Number of supplied phases does not match the number of positive frequency bins.
    #[error("Phase count mismatch: spectrum of length {spectrum_len} needs {expected} phases, got {actual}")]
    PhaseCountMismatch {
        /// Length of the spectrum being randomized
        spectrum_len: usize,
        /// Number of positive frequency bins for that length
        expected: usize,
        /// Number of phases supplied
        actual: usize,
    },
}

/// Result type for surrogate operations.
pub type SurrogateResult<T> = Result<T, SurrogateError>;

/// Validates that data has sufficient length.
///
/// # Example
/// ```rust
/// use ebisuzaki_surrogate::errors::validate_data_length;
///
/// let data = vec![1.0, 2.0, 3.0];
/// assert!(validate_data_length(&data, 1).is_ok());
/// assert!(validate_data_length(&data, 5).is_err());
/// ```
pub fn validate_data_length(data: &[f64], min_required: usize) -> SurrogateResult<()> {
    if data.len() < min_required {
        Err(SurrogateError::InsufficientData {
            required: min_required,
            actual: data.len(),
        })
    } else {
        Ok(())
    }
}

/// Validates that all values in a slice are finite.
///
/// Returns on the first non-finite value, reporting its index.
///
/// # Example
/// ```rust
/// use ebisuzaki_surrogate::errors::validate_all_finite;
///
/// assert!(validate_all_finite(&[1.0, 2.0, 3.0], "series").is_ok());
/// assert!(validate_all_finite(&[1.0, f64::NAN, 3.0], "series").is_err());
/// ```
pub fn validate_all_finite(data: &[f64], name: &str) -> SurrogateResult<()> {
    if let Some((i, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        let value_desc = if value.is_nan() {
            "NaN"
        } else if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };

        return Err(SurrogateError::NumericalError {
            reason: format!(
                "{} contains non-finite value at index {}: {}",
                name, i, value_desc
            ),
        });
    }

    Ok(())
}
