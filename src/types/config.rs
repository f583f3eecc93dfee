use crate::error::MarketError;
use crate::types::scoring::Weights;
use serde::Deserialize;
use std::collections::HashMap;

const ALLOWED_WEIGHT_KEYS: [&str; 5] = ["income", "wealth", "home_value", "age", "home_ownership"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketConfig {
    pub weights: Option<HashMap<String, f64>>,
}

impl MarketConfig {
    pub fn default_weights() -> Weights {
        Weights::default()
    }

    /// Effective weights: configured values over the defaults, key by key.
    pub fn weights(&self) -> Weights {
        let defaults = Self::default_weights();
        match &self.weights {
            Some(weights) => Weights {
                income: *weights.get("income").unwrap_or(&defaults.income),
                wealth: *weights.get("wealth").unwrap_or(&defaults.wealth),
                home_value: *weights.get("home_value").unwrap_or(&defaults.home_value),
                age: *weights.get("age").unwrap_or(&defaults.age),
                home_ownership: *weights
                    .get("home_ownership")
                    .unwrap_or(&defaults.home_ownership),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), MarketError> {
        if let Some(weights) = &self.weights {
            let mut unknown = weights
                .keys()
                .filter(|key| !ALLOWED_WEIGHT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(MarketError::ConfigParse(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        // Weights are not required to sum to 1.
        for (name, weight) in self.weights().as_array() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(MarketError::ConfigParse(format!(
                    "weights.{name} must be a finite, non-negative number (found {weight})"
                )));
            }
        }

        Ok(())
    }
}
