//! OGI Metrics Module
//! ===================
//!
//! Closed-form synthetic metrics for both learning strategies:
//! - **Coherence Index**: simulated self-consistency, higher is better
//! - **Drift**: simulated instability, lower is better (may be noisy-negative)
//!
//! Every function takes its noise from an injected [`Entropy`], so the same
//! seed always yields the same curve.

use ogi_env::Entropy;

// =============================================================================
// INDEPENDENT-DEVELOPMENT (OGI) COHERENCE
// =============================================================================

/// Coherence of an independent agent before it has run any cycle.
pub const INDEPENDENT_COHERENCE_BASE: f64 = 0.65;

/// Logarithmic growth coefficient of independent coherence.
pub const INDEPENDENT_COHERENCE_GROWTH: f64 = 0.02;

/// Standard deviation of the noise on independent coherence.
pub const INDEPENDENT_COHERENCE_NOISE: f64 = 0.02;

/// Lower clamp for independent coherence.
pub const INDEPENDENT_COHERENCE_MIN: f64 = 0.60;

/// Upper clamp for independent coherence.
pub const INDEPENDENT_COHERENCE_MAX: f64 = 0.95;

/// Pre-noise coherence of an independent agent after `cycle` cycles.
///
/// # Formula
/// ```text
/// C(0) = 0.65
/// C(c) = 0.65 + 0.02 * ln(c + 1)
/// ```
pub fn independent_coherence_base(cycle: u64) -> f64 {
    if cycle == 0 {
        return INDEPENDENT_COHERENCE_BASE;
    }
    INDEPENDENT_COHERENCE_BASE + INDEPENDENT_COHERENCE_GROWTH * ((cycle + 1) as f64).ln()
}

/// Noisy coherence of an independent agent, clamped to `[0.60, 0.95]`.
///
/// Cycle 0 returns the base exactly and consumes no randomness.
pub fn independent_coherence(cycle: u64, entropy: &mut dyn Entropy) -> f64 {
    if cycle == 0 {
        return INDEPENDENT_COHERENCE_BASE;
    }
    let noisy = independent_coherence_base(cycle) + entropy.gaussian(0.0, INDEPENDENT_COHERENCE_NOISE);
    noisy.clamp(INDEPENDENT_COHERENCE_MIN, INDEPENDENT_COHERENCE_MAX)
}

// =============================================================================
// INDEPENDENT-DEVELOPMENT (OGI) DRIFT
// =============================================================================

/// Drift of an independent agent at cycle 0.
pub const INDEPENDENT_DRIFT_BASE: f64 = 0.10;

/// Per-cycle decay of independent drift.
pub const INDEPENDENT_DRIFT_DECAY: f64 = 0.005;

/// Standard deviation of the noise on independent drift.
pub const INDEPENDENT_DRIFT_NOISE: f64 = 0.01;

/// Pre-noise drift of an independent agent, floored at zero.
///
/// # Formula
/// ```text
/// D(c) = max(0, 0.10 - 0.005 * c)
/// ```
pub fn independent_drift_base(cycle: u64) -> f64 {
    (INDEPENDENT_DRIFT_BASE - INDEPENDENT_DRIFT_DECAY * cycle as f64).max(0.0)
}

/// Noisy drift of an independent agent.
///
/// The zero floor applies before noise only: once the decaying base reaches
/// zero, noise can push the result slightly negative. That is left as is.
pub fn independent_drift(cycle: u64, entropy: &mut dyn Entropy) -> f64 {
    independent_drift_base(cycle) + entropy.gaussian(0.0, INDEPENDENT_DRIFT_NOISE)
}

// =============================================================================
// CONTINUOUSLY-SYNCHRONIZED (FEDERATED) METRICS
// =============================================================================

/// Mean coherence of a synchronized agent.
pub const SYNCHRONIZED_COHERENCE_MEAN: f64 = 0.55;

/// Standard deviation of synchronized coherence.
pub const SYNCHRONIZED_COHERENCE_STD: f64 = 0.03;

/// Lower clamp for synchronized coherence.
pub const SYNCHRONIZED_COHERENCE_MIN: f64 = 0.40;

/// Upper clamp for synchronized coherence.
pub const SYNCHRONIZED_COHERENCE_MAX: f64 = 0.70;

/// Mean drift of a synchronized agent.
pub const SYNCHRONIZED_DRIFT_MEAN: f64 = 0.25;

/// Standard deviation of synchronized drift.
pub const SYNCHRONIZED_DRIFT_STD: f64 = 0.05;

/// Synchronized coherence: `N(0.55, 0.03)` clamped to `[0.40, 0.70]`.
pub fn synchronized_coherence(entropy: &mut dyn Entropy) -> f64 {
    entropy
        .gaussian(SYNCHRONIZED_COHERENCE_MEAN, SYNCHRONIZED_COHERENCE_STD)
        .clamp(SYNCHRONIZED_COHERENCE_MIN, SYNCHRONIZED_COHERENCE_MAX)
}

/// Synchronized drift: `N(0.25, 0.05)`, unclamped.
pub fn synchronized_drift(entropy: &mut dyn Entropy) -> f64 {
    entropy.gaussian(SYNCHRONIZED_DRIFT_MEAN, SYNCHRONIZED_DRIFT_STD)
}

// =============================================================================
// AGGREGATION
// =============================================================================

/// Arithmetic mean; 0.0 for an empty input.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ogi_env::fakes::FixedEntropy;
    use ogi_env::SeededEntropy;
    use proptest::prelude::*;
    
    #[test]
    fn test_independent_base_at_zero() {
        assert_eq!(independent_coherence_base(0), 0.65);
        
        let mut entropy = FixedEntropy::new().with_z(3.0);
        assert_eq!(independent_coherence(0, &mut entropy), 0.65);
        // Cycle 0 consumes nothing
        assert_eq!(entropy.draws(), 0);
    }
    
    #[test]
    fn test_independent_base_grows_logarithmically() {
        assert_relative_eq!(independent_coherence_base(1), 0.65 + 0.02 * 2f64.ln());
        assert_relative_eq!(independent_coherence_base(19), 0.65 + 0.02 * 20f64.ln());
        assert!(independent_coherence_base(100) > independent_coherence_base(10));
    }
    
    #[test]
    fn test_independent_coherence_clamped() {
        let mut high = FixedEntropy::new().with_z(100.0);
        assert_eq!(independent_coherence(5, &mut high), INDEPENDENT_COHERENCE_MAX);
        
        let mut low = FixedEntropy::new().with_z(-100.0);
        assert_eq!(independent_coherence(5, &mut low), INDEPENDENT_COHERENCE_MIN);
    }
    
    #[test]
    fn test_drift_base_decays_to_zero() {
        assert_relative_eq!(independent_drift_base(0), 0.10);
        assert_relative_eq!(independent_drift_base(10), 0.05, epsilon = 1e-12);
        assert_eq!(independent_drift_base(20), 0.0);
        assert_eq!(independent_drift_base(500), 0.0);
    }
    
    #[test]
    fn test_drift_not_clamped_after_noise() {
        // Base is zero at cycle 40; -3 sigma noise goes negative
        let mut entropy = FixedEntropy::new().with_z(-3.0);
        let drift = independent_drift(40, &mut entropy);
        assert!(drift < 0.0);
        assert_relative_eq!(drift, -0.03, epsilon = 1e-12);
    }
    
    #[test]
    fn test_synchronized_metrics() {
        let mut mid = FixedEntropy::new();
        assert_relative_eq!(synchronized_coherence(&mut mid), 0.55);
        assert_relative_eq!(synchronized_drift(&mut mid), 0.25);
        
        let mut extreme = FixedEntropy::new().with_z(-50.0);
        assert_eq!(synchronized_coherence(&mut extreme), SYNCHRONIZED_COHERENCE_MIN);
        assert!(synchronized_drift(&mut extreme) < 0.0);
    }
    
    #[test]
    fn test_mean() {
        assert_eq!(mean(Vec::<f64>::new()), 0.0);
        assert_relative_eq!(mean(vec![0.5, 0.7, 0.9]), 0.7, epsilon = 1e-12);
    }
    
    proptest! {
        #[test]
        fn independent_coherence_in_range(seed in any::<u64>(), cycle in 1u64..100_000) {
            let mut entropy = SeededEntropy::new(seed);
            let c = independent_coherence(cycle, &mut entropy);
            prop_assert!((INDEPENDENT_COHERENCE_MIN..=INDEPENDENT_COHERENCE_MAX).contains(&c));
        }
        
        #[test]
        fn synchronized_coherence_in_range(seed in any::<u64>()) {
            let mut entropy = SeededEntropy::new(seed);
            for _ in 0..20 {
                let c = synchronized_coherence(&mut entropy);
                prop_assert!((SYNCHRONIZED_COHERENCE_MIN..=SYNCHRONIZED_COHERENCE_MAX).contains(&c));
            }
        }
    }
}
