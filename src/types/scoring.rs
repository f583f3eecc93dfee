pub type Score = f64;

/// Coefficients of the composite fit score. They are applied verbatim and
/// do not have to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub income: f64,
    pub wealth: f64,
    pub home_value: f64,
    pub age: f64,
    pub home_ownership: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            income: 0.21,
            wealth: 0.15,
            home_value: 0.24,
            age: 0.12,
            home_ownership: 0.27,
        }
    }
}

impl Weights {
    pub fn as_array(&self) -> [(&'static str, f64); 5] {
        [
            ("income", self.income),
            ("wealth", self.wealth),
            ("home_value", self.home_value),
            ("age", self.age),
            ("home_ownership", self.home_ownership),
        ]
    }
}

/// Normalized medians plus the raw own/rent average that feed the score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub own_rent_average: Score,
    pub income: Score,
    pub wealth: Score,
    pub home_value: Score,
    pub age: Score,
}
