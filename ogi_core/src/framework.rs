//! Reasoning frameworks an independent agent can strengthen.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Strength assigned to a framework the first time it is touched.
pub const DEFAULT_STRENGTH: f64 = 0.5;

/// Ceiling for any framework strength.
pub const MAX_STRENGTH: f64 = 0.95;

/// The fixed set of frameworks hypotheses can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    PatternRecognition,
    CausalInference,
    UncertaintyHandling,
}

impl Framework {
    /// All frameworks, in draw order.
    pub const ALL: [Framework; 3] = [
        Framework::PatternRecognition,
        Framework::CausalInference,
        Framework::UncertaintyHandling,
    ];
    
    /// Returns the framework name.
    pub fn name(&self) -> &'static str {
        match self {
            Framework::PatternRecognition => "pattern_recognition",
            Framework::CausalInference => "causal_inference",
            Framework::UncertaintyHandling => "uncertainty_handling",
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Framework strengths of one agent, ordered by framework.
pub type FrameworkMap = BTreeMap<Framework, f64>;

/// Clamps a strength to the `MAX_STRENGTH` ceiling.
pub fn cap_strength(value: f64) -> f64 {
    value.min(MAX_STRENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_names_serialize_as_snake_case() {
        let json = serde_json::to_string(&Framework::CausalInference).unwrap();
        assert_eq!(json, "\"causal_inference\"");
        assert_eq!(Framework::UncertaintyHandling.to_string(), "uncertainty_handling");
    }
    
    #[test]
    fn test_cap_strength() {
        assert_eq!(cap_strength(0.97), MAX_STRENGTH);
        assert_eq!(cap_strength(0.6), 0.6);
    }
}
