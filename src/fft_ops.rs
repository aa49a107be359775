//! FFT primitives for surrogate generation.
//!
//! Thin wrappers over `rustfft` that follow the usual numeric conventions:
//! the forward transform is unnormalized, the inverse transform is scaled by
//! `1/n`, and bins are ordered DC, ascending positive frequencies, then the
//! mirrored negative frequencies.
//!
//! Planning an FFT is far more expensive than running it, and surrogate tests
//! call the same sizes thousands of times, so plans are kept in a bounded,
//! process-wide LRU cache.

use crate::errors::{SurrogateError, SurrogateResult};
use lru::LruCache;
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::num::NonZeroUsize;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};

/// Cache key for FFT planners, distinguishing forward and inverse transforms
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct FftCacheKey {
    size: usize,
    is_forward: bool,
}

type FftPlanCache = LruCache<FftCacheKey, Arc<dyn Fft<f64>>>;

/// Maximum number of cached plans (forward and inverse counted separately)
const MAX_CACHE_ENTRIES: NonZeroUsize = match NonZeroUsize::new(256) {
    Some(n) => n,
    None => panic!("cache capacity must be non-zero"),
};

static FFT_CACHE: LazyLock<Mutex<FftPlanCache>> =
    LazyLock::new(|| Mutex::new(LruCache::new(MAX_CACHE_ENTRIES)));

/// Lock the plan cache, recovering the data if a previous holder panicked.
fn lock_cache() -> MutexGuard<'static, FftPlanCache> {
    match FFT_CACHE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Get cached FFT plan (forward or inverse) with LRU eviction.
fn get_cached_fft_plan(size: usize, is_forward: bool) -> SurrogateResult<Arc<dyn Fft<f64>>> {
    if size == 0 {
        return Err(SurrogateError::FftError { size });
    }

    let cache_key = FftCacheKey { size, is_forward };
    let mut cache = lock_cache();

    if let Some(cached_fft) = cache.get(&cache_key) {
        return Ok(Arc::clone(cached_fft));
    }

    log::trace!(
        "planning {} FFT of size {}",
        if is_forward { "forward" } else { "inverse" },
        size
    );

    let mut planner = FftPlanner::new();
    let new_fft = if is_forward {
        planner.plan_fft_forward(size)
    } else {
        planner.plan_fft_inverse(size)
    };

    cache.put(cache_key, Arc::clone(&new_fft));
    Ok(new_fft)
}

/// Get cached FFT plan for forward transform
pub fn get_cached_fft_forward(size: usize) -> SurrogateResult<Arc<dyn Fft<f64>>> {
    get_cached_fft_plan(size, true)
}

/// Get cached FFT plan for inverse transform
pub fn get_cached_fft_inverse(size: usize) -> SurrogateResult<Arc<dyn Fft<f64>>> {
    get_cached_fft_plan(size, false)
}

/// Clear the FFT cache to free memory
pub fn clear_fft_cache() {
    lock_cache().clear();
}

/// Get current FFT cache statistics
///
/// Returns (forward_plans, inverse_plans) counts for monitoring.
pub fn get_fft_cache_stats() -> (usize, usize) {
    let cache = lock_cache();
    cache
        .iter()
        .fold((0, 0), |(forward, inverse), (key, _)| {
            if key.is_forward {
                (forward + 1, inverse)
            } else {
                (forward, inverse + 1)
            }
        })
}

/// Forward DFT of a real series.
///
/// The result is unnormalized: `X[k] = Σ x[t]·exp(-2πi·k·t/n)`.
///
/// # Example
///
/// ```rust
/// use ebisuzaki_surrogate::fft_ops::forward_fft;
///
/// let spectrum = forward_fft(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(spectrum.len(), 4);
/// assert!((spectrum[0].re - 10.0).abs() < 1e-12);
/// ```
pub fn forward_fft(data: &[f64]) -> SurrogateResult<Vec<Complex64>> {
    let fft = get_cached_fft_forward(data.len())?;
    let mut buffer: Vec<Complex64> = data.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    fft.process(&mut buffer);
    Ok(buffer)
}

/// Inverse DFT, scaled by `1/n` so that `inverse_fft(forward_fft(x)) == x`.
///
/// The spectrum is copied; the caller's slice is never modified.
pub fn inverse_fft(spectrum: &[Complex64]) -> SurrogateResult<Vec<Complex64>> {
    let n = spectrum.len();
    let fft = get_cached_fft_inverse(n)?;
    let mut buffer = spectrum.to_vec();
    fft.process(&mut buffer);

    // rustfft does not normalize
    let scale = 1.0 / n as f64;
    for value in buffer.iter_mut() {
        *value *= scale;
    }
    Ok(buffer)
}

/// Absolute value of every coefficient.
pub fn magnitude_spectrum(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_fft_cache_functionality() {
        // Unique size to avoid interference from concurrently running tests
        let size = 1337;
        let fft1 = get_cached_fft_forward(size).unwrap();
        let fft2 = get_cached_fft_forward(size).unwrap();
        assert!(Arc::ptr_eq(&fft1, &fft2));

        let _fft_inv = get_cached_fft_inverse(size).unwrap();

        let (forward_count, inverse_count) = get_fft_cache_stats();
        assert!(forward_count >= 1);
        assert!(inverse_count >= 1);
    }

    #[test]
    fn test_fft_plan_rejects_zero_size() {
        assert!(matches!(
            get_cached_fft_forward(0),
            Err(SurrogateError::FftError { size: 0 })
        ));
        assert!(matches!(
            get_cached_fft_inverse(0),
            Err(SurrogateError::FftError { size: 0 })
        ));
        assert!(matches!(
            forward_fft(&[]),
            Err(SurrogateError::FftError { size: 0 })
        ));
    }

    #[test]
    fn test_forward_fft_sine_wave_peak() {
        let n = 64;
        let frequency = 8;
        let data: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * frequency as f64 * i as f64 / n as f64).sin())
            .collect();

        let magnitudes = magnitude_spectrum(&forward_fft(&data).unwrap());
        assert_eq!(magnitudes.len(), n);

        // Energy n/2 at the positive bin and its mirror, nothing elsewhere
        assert_approx_eq!(magnitudes[frequency], n as f64 / 2.0, 1e-9);
        assert_approx_eq!(magnitudes[n - frequency], n as f64 / 2.0, 1e-9);
        for (k, &m) in magnitudes.iter().enumerate() {
            if k != frequency && k != n - frequency {
                assert!(m < 1e-9, "unexpected energy {} at bin {}", m, k);
            }
        }
    }

    #[test]
    fn test_round_trip_recovers_input() {
        let data = vec![0.3, -1.2, 4.5, 2.2, -0.7, 1.1, 3.3];
        let spectrum = forward_fft(&data).unwrap();
        let recovered = inverse_fft(&spectrum).unwrap();

        for (original, value) in data.iter().zip(recovered.iter()) {
            assert_approx_eq!(value.re, *original, 1e-12);
            assert_approx_eq!(value.im, 0.0, 1e-12);
        }
    }

    #[test]
    fn test_inverse_fft_leaves_input_untouched() {
        let spectrum = vec![
            Complex64::new(4.0, 0.0),
            Complex64::new(1.0, -1.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 1.0),
        ];
        let copy = spectrum.clone();
        let _ = inverse_fft(&spectrum).unwrap();
        assert_eq!(spectrum, copy);
    }

    #[test]
    fn test_magnitude_spectrum() {
        let spectrum = vec![
            Complex64::new(3.0, 4.0),
            Complex64::new(0.0, -2.0),
            Complex64::new(-1.0, 0.0),
        ];
        assert_eq!(magnitude_spectrum(&spectrum), vec![5.0, 2.0, 1.0]);
    }
}
