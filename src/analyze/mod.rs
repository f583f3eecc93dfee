pub mod competitors;
pub mod distribution;
pub mod normalize;
pub mod score;
pub mod stats;

use crate::types::person::Person;
use crate::types::report::Report;
use crate::types::scoring::{ScoreInputs, Weights};
use competitors::{collect_competitors, format_competitors};
use normalize::{normalize_age, normalize_home_value, normalize_income, normalize_wealth};
use stats::{average, median};
use tracing::{debug, info};

/// Builds the report for one batch of people. An empty batch produces no
/// report at all; people with every field absent still produce one, with
/// zeroed statistics.
pub fn generate_report(people: &[Person], weights: &Weights) -> Option<Report> {
    if people.is_empty() {
        info!("no people supplied, skipping report");
        return None;
    }

    let distributions = distribution::collect(people).ranked();

    let own_rent_average = average(&distributions.own_rent);
    let median_income = median(&distributions.income);
    let median_wealth = median(&distributions.wealth);
    let median_home_value = median(&distributions.home_value);
    let median_age = median(&distributions.age);

    let inputs = ScoreInputs {
        own_rent_average,
        income: normalize_income(median_income),
        wealth: normalize_wealth(median_wealth),
        home_value: normalize_home_value(median_home_value),
        age: normalize_age(median_age),
    };
    let score = score::composite_score(&inputs, weights);
    let competitors = collect_competitors(people);
    debug!(
        score,
        competitors = competitors.len(),
        "scored people batch"
    );

    Some(Report {
        total_people: people.len(),
        average_income: average(&distributions.income),
        median_income,
        average_wealth: average(&distributions.wealth),
        median_wealth,
        average_home_value: average(&distributions.home_value),
        median_home_value,
        average_age: average(&distributions.age),
        median_age,
        homeownership_percentage: own_rent_average * 100.0,
        normalized_income: inputs.income,
        normalized_wealth: inputs.wealth,
        normalized_home_value: inputs.home_value,
        normalized_age: inputs.age,
        weights: *weights,
        competitors: format_competitors(&competitors),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_person() -> Person {
        Person {
            income: Some(75_000),
            wealth: Some(250_000),
            home_value: Some(400_000),
            age: Some(45),
            own_rent: Some(1),
            competitors: Some(vec!["Acme".to_string()]),
        }
    }

    #[test]
    fn empty_people_produce_no_report() {
        assert!(generate_report(&[], &Weights::default()).is_none());
    }

    #[test]
    fn all_absent_people_still_produce_zeroed_report() {
        let people = vec![Person::default(), Person::default(), Person::default()];
        let report = generate_report(&people, &Weights::default()).expect("report expected");

        assert_eq!(report.total_people, 3);
        assert_eq!(report.get("Total Number of People").as_deref(), Some("3.0"));
        assert_eq!(report.get("Average Income").as_deref(), Some("0.0"));
        assert_eq!(report.get("Median Income").as_deref(), Some("0.0"));
        assert_eq!(report.get("Median Age").as_deref(), Some("0.0"));
        assert_eq!(
            report.get("Homeownership Percentage").as_deref(),
            Some("0.000\n")
        );
        assert_eq!(report.get("Sample Score").as_deref(), Some("0.0"));
        assert_eq!(
            report.get("Competitors").as_deref(),
            Some("No competitors found")
        );
    }

    #[test]
    fn single_person_score_matches_weighted_sum() {
        let people = vec![full_person()];
        let weights = Weights::default();
        let report = generate_report(&people, &weights).expect("report expected");

        let expected = 1.0 * 0.27
            + (0.00002_f64 * 75_000.0).tanh() * 0.21
            + (0.00003_f64 * 250_000.0).tanh() * 0.15
            + (0.00001_f64 * 400_000.0).tanh() * 0.24
            + (0.06_f64 * 45.0).tanh() * 0.12;
        assert_eq!(report.score, expected);
        assert_eq!(report.median_income, 75_000.0);
        assert_eq!(report.homeownership_percentage, 100.0);
        assert_eq!(
            report.get("Homeownership Percentage").as_deref(),
            Some("100.0\n")
        );
    }

    #[test]
    fn competitors_and_income_from_two_people() {
        let people = vec![
            Person {
                income: Some(500),
                competitors: Some(vec!["A".to_string(), "B".to_string()]),
                ..Person::default()
            },
            Person {
                income: Some(1500),
                competitors: Some(vec!["B".to_string(), "C".to_string()]),
                ..Person::default()
            },
        ];
        let report = generate_report(&people, &Weights::default()).expect("report expected");

        assert_eq!(report.get("Competitors").as_deref(), Some("A, B, C"));
        assert_eq!(report.get("Average Income").as_deref(), Some("1000.0"));
        assert_eq!(report.get("Median Income").as_deref(), Some("1500.0"));
    }

    #[test]
    fn homeownership_percentage_uses_own_rent_average() {
        let people = vec![
            Person {
                own_rent: Some(1),
                ..Person::default()
            },
            Person {
                own_rent: Some(1),
                ..Person::default()
            },
            Person {
                own_rent: Some(0),
                ..Person::default()
            },
        ];
        let report = generate_report(&people, &Weights::default()).expect("report expected");
        assert_eq!(
            report.get("Homeownership Percentage").as_deref(),
            Some("66.67\n")
        );
    }

    #[test]
    fn custom_weights_are_echoed_and_applied() {
        let weights = Weights {
            income: 0.5,
            wealth: 0.0,
            home_value: 0.0,
            age: 0.0,
            home_ownership: 0.5,
        };
        let report = generate_report(&[full_person()], &weights).expect("report expected");
        assert_eq!(report.get("Income weight").as_deref(), Some("0.5"));
        assert_eq!(report.get("Wealth Weight").as_deref(), Some("0.0"));
        let expected = 0.5 + (0.00002_f64 * 75_000.0).tanh() * 0.5;
        assert!((report.score - expected).abs() < 1e-12);
    }

    #[test]
    fn averages_accumulate_over_ascending_samples() {
        let incomes = [
            75_000, 35_000, 125_000, 42_500, 87_500, 15_000, 62_500, 33_333, 99_999, 10_001,
        ];
        let ages = [71, 23, 45, 38, 62, 29, 55, 40, 33, 67];
        let people: Vec<Person> = incomes
            .iter()
            .zip(ages.iter())
            .map(|(&income, &age)| Person {
                income: Some(income),
                age: Some(age),
                ..Person::default()
            })
            .collect();
        let before = people.clone();

        let report = generate_report(&people, &Weights::default()).expect("report expected");
        assert_eq!(
            report.get("Average Income").as_deref(),
            Some("58583.299999999996")
        );
        assert_eq!(report.get("Median Income").as_deref(), Some("62500.0"));
        assert_eq!(
            report.get("Average Age").as_deref(),
            Some("46.30000000000001")
        );
        assert_eq!(report.get("Median Age").as_deref(), Some("45.0"));
        assert_eq!(people, before);
    }

    #[test]
    fn own_rent_average_keeps_input_order() {
        let own_rent = [1, 0, 0, 1, 1, 0, 1];
        let people: Vec<Person> = own_rent
            .iter()
            .map(|&code| Person {
                own_rent: Some(code),
                ..Person::default()
            })
            .collect();

        let report = generate_report(&people, &Weights::default()).expect("report expected");
        assert_eq!(
            report.homeownership_percentage,
            stats::average(&own_rent) * 100.0
        );
    }

    #[test]
    fn report_does_not_reorder_caller_people() {
        let people = vec![
            Person {
                age: Some(70),
                ..Person::default()
            },
            Person {
                age: Some(20),
                ..Person::default()
            },
        ];
        let before = people.clone();
        let report = generate_report(&people, &Weights::default()).expect("report expected");
        assert_eq!(people, before);
        assert_eq!(report.median_age, 70.0);
        assert!((report.normalized_age - 0.8 * (0.06_f64 * 70.0).tanh()).abs() < 1e-12);
    }
}
