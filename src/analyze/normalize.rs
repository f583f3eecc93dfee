const INCOME_K: f64 = 0.00002;
const WEALTH_K: f64 = 0.00003;
const HOME_VALUE_K: f64 = 0.00001;
const AGE_K: f64 = 0.06;
const AGE_PENALTY_THRESHOLD: f64 = 60.0;
const AGE_PENALTY: f64 = 0.2;

// The k constants were tuned by hand so each curve plateaus near the top of
// its attribute's realistic range (income ~500k, wealth and home value ~15M,
// age ~80).

pub fn normalize_income(median: f64) -> f64 {
    (INCOME_K * median).tanh()
}

pub fn normalize_wealth(median: f64) -> f64 {
    (WEALTH_K * median).tanh()
}

pub fn normalize_home_value(median: f64) -> f64 {
    (HOME_VALUE_K * median).tanh()
}

/// Ages above 60 lose a fifth of their score.
pub fn normalize_age(median: f64) -> f64 {
    let score = (AGE_K * median).tanh();
    if median > AGE_PENALTY_THRESHOLD {
        score - AGE_PENALTY * score
    } else {
        score
    }
}
