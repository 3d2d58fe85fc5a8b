//! Configuration for an ability-score generation run.

use std::path::Path;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::ability::AbilityScores;
use crate::dice::seeded_rng;
use crate::error::{MechError, MechResult};
use crate::generate::{GenerationParams, StrategyRegistry};

/// Which strategy to run, how to seed it, and what to pass it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Strategy name (default: "Standard").
    pub strategy: String,
    /// RNG seed for reproducible rolls. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Strategy-specific parameters.
    pub params: GenerationParams,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            strategy: "Standard".to_string(),
            seed: None,
            params: GenerationParams::new(),
        }
    }
}

impl GenerationConfig {
    /// Set the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the parameter set.
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> MechResult<Self> {
        serde_json::from_str(json).map_err(|e| MechError::InvalidConfig(e.to_string()))
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> MechResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            MechError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.display(),
            strategy = %config.strategy,
            "loaded generation config"
        );
        Ok(config)
    }

    /// A fresh RNG for this run.
    pub fn rng(&self) -> StdRng {
        seeded_rng(self.seed)
    }

    /// Run the configured strategy once with a fresh RNG.
    pub fn generate(&self, registry: &StrategyRegistry) -> MechResult<AbilityScores> {
        let mut rng = self.rng();
        registry.generate(&self.strategy, &self.params, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::registry;
    use std::io::Write;

    #[test]
    fn default_config() {
        let cfg = GenerationConfig::default();
        assert_eq!(cfg.strategy, "Standard");
        assert_eq!(cfg.seed, None);
        assert!(cfg.params.is_empty());
    }

    #[test]
    fn builder_methods() {
        let cfg = GenerationConfig::default()
            .with_strategy("Heroic")
            .with_seed(123)
            .with_params(GenerationParams::new().with("bias", 1));
        assert_eq!(cfg.strategy, "Heroic");
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.params.get_i64("bias"), Some(1));
    }

    #[test]
    fn json_fills_defaults() {
        let cfg = GenerationConfig::from_json(r#"{ "seed": 9 }"#).unwrap();
        assert_eq!(cfg.strategy, "Standard");
        assert_eq!(cfg.seed, Some(9));

        let cfg =
            GenerationConfig::from_json(r#"{ "strategy": "Classic", "params": { "bias": 2 } }"#)
                .unwrap();
        assert_eq!(cfg.strategy, "Classic");
        assert_eq!(cfg.params.get_i64("bias"), Some(2));
    }

    #[test]
    fn json_rejects_unknown_fields() {
        assert!(matches!(
            GenerationConfig::from_json(r#"{ "strat": "Classic" }"#),
            Err(MechError::InvalidConfig(_))
        ));
        assert!(GenerationConfig::from_json("not json").is_err());
    }

    #[test]
    fn seeded_runs_repeat() {
        let cfg = GenerationConfig::default().with_strategy("Classic").with_seed(42);
        assert_eq!(
            cfg.generate(registry()).unwrap(),
            cfg.generate(registry()).unwrap()
        );
    }

    #[test]
    fn unknown_strategy_in_config() {
        let cfg = GenerationConfig::default().with_strategy("Epic").with_seed(1);
        assert!(matches!(
            cfg.generate(registry()),
            Err(MechError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "strategy": "Heroic", "seed": 5 }}"#).unwrap();
        let cfg = GenerationConfig::load(file.path()).unwrap();
        assert_eq!(cfg.strategy, "Heroic");
        assert_eq!(cfg.seed, Some(5));
    }

    #[test]
    fn load_missing_file() {
        let err = GenerationConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
