//! Phase-randomized surrogate series (Ebisuzaki, 1997).
//!
//! A surrogate keeps the magnitude of every DFT coefficient of the input and
//! replaces its phase information, so it shares the power spectrum (and
//! therefore the autocorrelation and variance) of the original series while
//! its particular values are random. Correlating many surrogates against a
//! second series gives a null distribution for the correlation coefficient
//! that accounts for serial correlation (Ebisuzaki, W., 1997: *A Method to
//! Estimate the Statistical Significance of a Correlation When the Data Are
//! Serially Correlated*, J. Climate, 10, 2147–2153).
//!
//! ## Spectral layout
//!
//! For a series of length `n` the procedure randomizes the `nf = (n - 1) / 2`
//! strictly positive frequency bins `1..=nf`, then rebuilds bins
//! `n - nf..n` as their complex conjugates so the inverse transform is real:
//!
//! ```text
//! n = 8, nf = 3
//! bin:   0    1    2    3    4    5      6      7
//!        DC   θ1   θ2   θ3   Nyq  conj3  conj2  conj1
//! ```
//!
//! The DC bin and, for even `n`, the Nyquist bin `n / 2` keep their original
//! values. Both are real for real input and have no independent mirror, so
//! their phase cannot be rotated without breaking real-valuedness. Series
//! shorter than three points have no positive bins and come back unchanged.

use crate::config::SurrogateConfig;
use crate::errors::{validate_all_finite, validate_data_length, SurrogateError, SurrogateResult};
use crate::fft_ops::{forward_fft, inverse_fft};
use crate::secure_rng::{uniform_phases, with_thread_local_rng};
use num_complex::Complex64;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Imaginary residual above this fraction of the signal scale is logged.
const IMAGINARY_RESIDUAL_WARN_RATIO: f64 = 1e-9;

/// Surrogate series together with reconstruction diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurrogateOutput {
    /// Real part of the inverse transform; same length as the input
    pub series: Vec<f64>,
    /// Largest `|Im|` of the inverse transform, discarded from `series`
    pub max_imaginary_residual: f64,
    /// Number of positive frequency bins whose phase was randomized
    pub randomized_bins: usize,
}

/// Number of strictly positive frequency bins for a series of length `n`,
/// excluding DC and the Nyquist bin.
///
/// ```rust
/// use ebisuzaki_surrogate::positive_frequency_count;
///
/// assert_eq!(positive_frequency_count(8), 3);
/// assert_eq!(positive_frequency_count(9), 4);
/// assert_eq!(positive_frequency_count(2), 0);
/// ```
pub fn positive_frequency_count(n: usize) -> usize {
    n.saturating_sub(1) / 2
}

/// Rotate the positive-frequency bins of `spectrum` by `phases` and rebuild
/// the negative-frequency half by conjugate symmetry.
///
/// `phases[j - 1]` rotates bin `j`; bin `n - j` becomes the conjugate of the
/// rotated bin `j`. All other bins are copied unchanged. Returns a new vector.
pub fn randomize_phases(spectrum: &[Complex64], phases: &[f64]) -> SurrogateResult<Vec<Complex64>> {
    let n = spectrum.len();
    let nf = positive_frequency_count(n);
    if phases.len() != nf {
        return Err(SurrogateError::PhaseCountMismatch {
            spectrum_len: n,
            expected: nf,
            actual: phases.len(),
        });
    }

    let mut randomized = spectrum.to_vec();
    for (j, &theta) in (1..=nf).zip(phases) {
        let rotated = spectrum[j] * Complex64::from_polar(1.0, theta);
        randomized[j] = rotated;
        randomized[n - j] = rotated.conj();
    }
    Ok(randomized)
}

/// Whether `residual` is larger than round-off relative to the largest
/// absolute value of `series`. An all-zero series is compared absolutely.
fn imaginary_residual_exceeds_round_off(residual: f64, series: &[f64]) -> bool {
    let scale = series.iter().fold(0.0f64, |acc, x| acc.max(x.abs()));
    if scale > 0.0 {
        residual > IMAGINARY_RESIDUAL_WARN_RATIO * scale
    } else {
        residual > IMAGINARY_RESIDUAL_WARN_RATIO
    }
}

/// Generate a surrogate and report the discarded imaginary residual.
///
/// Draws exactly [`positive_frequency_count`]`(series.len())` values from `rng`.
///
/// # Errors
///
/// [`SurrogateError::InsufficientData`] for an empty series. Any non-empty
/// length is transformed.
pub fn generate_surrogate_with_diagnostics<R: Rng + ?Sized>(
    series: &[f64],
    rng: &mut R,
) -> SurrogateResult<SurrogateOutput> {
    validate_data_length(series, 1)?;

    let n = series.len();
    let nf = positive_frequency_count(n);

    let spectrum = forward_fft(series)?;
    let phases = uniform_phases(rng, nf);
    let randomized = randomize_phases(&spectrum, &phases)?;
    let reconstructed = inverse_fft(&randomized)?;

    let max_imaginary_residual = reconstructed
        .iter()
        .fold(0.0f64, |acc, c| acc.max(c.im.abs()));
    if imaginary_residual_exceeds_round_off(max_imaginary_residual, series) {
        log::warn!(
            "surrogate of length {} has imaginary residual {:e}",
            n,
            max_imaginary_residual
        );
    }

    log::debug!("generated surrogate: n = {}, randomized bins = {}", n, nf);

    Ok(SurrogateOutput {
        series: reconstructed.iter().map(|c| c.re).collect(),
        max_imaginary_residual,
        randomized_bins: nf,
    })
}

/// Generate a phase-randomized surrogate of `series` using `rng`.
///
/// The result has the same length and, within floating-point precision, the
/// same DFT magnitude at every bin as `series`. A fixed-seed generator gives a
/// reproducible surrogate.
///
/// # Example
///
/// ```rust
/// use ebisuzaki_surrogate::{generate_surrogate, SecureRng};
///
/// let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let mut rng = SecureRng::with_seed(42);
/// let surrogate = generate_surrogate(&series, &mut rng).unwrap();
/// assert_eq!(surrogate.len(), series.len());
/// ```
pub fn generate_surrogate<R: Rng + ?Sized>(series: &[f64], rng: &mut R) -> SurrogateResult<Vec<f64>> {
    generate_surrogate_with_diagnostics(series, rng).map(|output| output.series)
}

/// Generate a surrogate with the generator and validation described by `config`.
pub fn generate_surrogate_with_config(
    series: &[f64],
    config: &SurrogateConfig,
) -> SurrogateResult<Vec<f64>> {
    if config.validate_finite {
        validate_all_finite(series, "series")?;
    }
    let mut rng = config.build_rng();
    generate_surrogate(series, &mut rng)
}

/// Generate a surrogate using the calling thread's entropy-seeded generator.
///
/// Use [`generate_surrogate`] with a seeded generator when results must be
/// reproducible.
pub fn ebisuzaki(series: &[f64]) -> SurrogateResult<Vec<f64>> {
    with_thread_local_rng(|rng| generate_surrogate(series, rng))
}
