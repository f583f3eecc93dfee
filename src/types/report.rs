use crate::numfmt::{decimal_string, general};
use crate::types::scoring::{Score, Weights};
use serde::ser::{Serialize, SerializeMap, Serializer};

const PERCENTAGE_PRECISION: usize = 4;

/// Summary of one batch of people. Numbers stay typed here; `entries`
/// produces the string-only view handed to consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub total_people: usize,
    pub average_income: f64,
    pub median_income: f64,
    pub average_wealth: f64,
    pub median_wealth: f64,
    pub average_home_value: f64,
    pub median_home_value: f64,
    pub average_age: f64,
    pub median_age: f64,
    pub homeownership_percentage: f64,
    pub normalized_income: Score,
    pub normalized_wealth: Score,
    pub normalized_home_value: Score,
    pub normalized_age: Score,
    pub weights: Weights,
    pub competitors: String,
    pub score: Score,
}

impl Report {
    /// Ordered key/value pairs. The homeownership percentage keeps the
    /// trailing line separator consumers already expect.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Total Number of People",
                decimal_string(self.total_people as f64),
            ),
            ("Average Income", decimal_string(self.average_income)),
            ("Median Income", decimal_string(self.median_income)),
            ("Average Wealth", decimal_string(self.average_wealth)),
            ("Median Wealth", decimal_string(self.median_wealth)),
            ("Average Home Value", decimal_string(self.average_home_value)),
            ("Median Home Value", decimal_string(self.median_home_value)),
            ("Average Age", decimal_string(self.average_age)),
            ("Median Age", decimal_string(self.median_age)),
            (
                "Homeownership Percentage",
                format!(
                    "{}\n",
                    general(self.homeownership_percentage, PERCENTAGE_PRECISION)
                ),
            ),
            (
                "Normalized Income Score",
                decimal_string(self.normalized_income),
            ),
            (
                "Normalized Wealth Score",
                decimal_string(self.normalized_wealth),
            ),
            (
                "Normalized Home Value Score",
                decimal_string(self.normalized_home_value),
            ),
            ("Normalized Age Score", decimal_string(self.normalized_age)),
            ("Income weight", decimal_string(self.weights.income)),
            ("Wealth Weight", decimal_string(self.weights.wealth)),
            ("Home Value Weight", decimal_string(self.weights.home_value)),
            ("Age Weight", decimal_string(self.weights.age)),
            (
                "Homeownership Weight",
                decimal_string(self.weights.home_ownership),
            ),
            ("Competitors", self.competitors.clone()),
            ("Sample Score", decimal_string(self.score)),
        ]
    }
}

#[cfg(test)]
impl Report {
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
