//! FFT plan cache behaviour
//!
//! Kept in its own test binary: clearing the process-wide cache would race
//! with tests that compare cached plan instances.

use ebisuzaki_surrogate::{
    clear_fft_cache, generate_surrogate, get_cached_fft_forward, get_fft_cache_stats, SecureRng,
};
use std::sync::Arc;

#[test]
fn test_surrogates_reuse_and_clear_plans() {
    clear_fft_cache();
    assert_eq!(get_fft_cache_stats(), (0, 0));

    let series: Vec<f64> = (0..100).map(|i| (i as f64 * 0.3).cos()).collect();
    let mut rng = SecureRng::with_seed(1);
    for _ in 0..10 {
        generate_surrogate(&series, &mut rng).unwrap();
    }

    // One forward and one inverse plan, however many surrogates were drawn
    assert_eq!(get_fft_cache_stats(), (1, 1));

    let before = get_cached_fft_forward(100).unwrap();
    clear_fft_cache();
    assert_eq!(get_fft_cache_stats(), (0, 0));

    let after = get_cached_fft_forward(100).unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(get_fft_cache_stats(), (1, 0));
}
