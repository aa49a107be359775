//! # Surrogate Configuration
//!
//! Controls where phase randomness comes from and how strictly input is
//! checked before transforming it.

use crate::secure_rng::SecureRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`generate_surrogate_with_config`](crate::generate_surrogate_with_config).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurrogateConfig {
    /// Seed for the phase generator; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Reject NaN and infinite input instead of letting it propagate
    pub validate_finite: bool,
}

impl SurrogateConfig {
    /// Seeded configuration: every call yields the same surrogate for the same input.
    pub fn reproducible(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Entropy-seeded configuration that rejects non-finite input.
    pub fn strict() -> Self {
        Self {
            seed: None,
            validate_finite: true,
        }
    }

    /// Start a fluent builder from the default configuration.
    pub fn builder() -> SurrogateConfigBuilder {
        SurrogateConfigBuilder::new()
    }

    /// Build the phase generator described by this configuration.
    pub fn build_rng(&self) -> SecureRng {
        match self.seed {
            Some(seed) => SecureRng::with_seed(seed),
            None => SecureRng::new(),
        }
    }
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct SurrogateConfigBuilder {
    config: SurrogateConfig,
}

impl SurrogateConfigBuilder {
    /// Start building a new configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the phase generator seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Enable or disable finite-value validation.
    pub fn validate_finite(mut self, enable: bool) -> Self {
        self.config.validate_finite = enable;
        self
    }

    /// Finish building.
    pub fn build(self) -> SurrogateConfig {
        self.config
    }
}
