use crate::types::scoring::{Score, ScoreInputs, Weights};

/// Weighted sum of the normalized medians and the raw own/rent average.
/// Not clamped: the weights need not sum to 1.
pub fn composite_score(inputs: &ScoreInputs, weights: &Weights) -> Score {
    inputs.own_rent_average * weights.home_ownership
        + inputs.income * weights.income
        + inputs.wealth * weights.wealth
        + inputs.home_value * weights.home_value
        + inputs.age * weights.age
}
