use crate::types::person::Person;
use tracing::debug;

/// Per-attribute samples gathered from one pass over the people, in input
/// order, with absent values skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distributions {
    pub income: Vec<i32>,
    pub wealth: Vec<i32>,
    pub home_value: Vec<i32>,
    pub age: Vec<i16>,
    pub own_rent: Vec<i16>,
}

impl Distributions {
    /// Copy with the income, wealth, home value and age samples in ascending
    /// order. Those statistics are all taken over the sorted samples, so
    /// their running means accumulate in that order too. Own/rent keeps
    /// input order.
    pub fn ranked(&self) -> Distributions {
        fn sorted<T: Copy + Ord>(samples: &[T]) -> Vec<T> {
            let mut sorted = samples.to_vec();
            sorted.sort_unstable();
            sorted
        }

        Distributions {
            income: sorted(&self.income),
            wealth: sorted(&self.wealth),
            home_value: sorted(&self.home_value),
            age: sorted(&self.age),
            own_rent: self.own_rent.clone(),
        }
    }
}

pub fn collect(people: &[Person]) -> Distributions {
    let mut distributions = Distributions::default();
    for person in people {
        if let Some(income) = person.income {
            distributions.income.push(income);
        }
        if let Some(wealth) = person.wealth {
            distributions.wealth.push(wealth);
        }
        if let Some(home_value) = person.home_value {
            distributions.home_value.push(home_value);
        }
        if let Some(age) = person.age {
            distributions.age.push(age);
        }
        if let Some(own_rent) = person.own_rent {
            distributions.own_rent.push(own_rent);
        }
    }

    debug!(
        people = people.len(),
        income = distributions.income.len(),
        wealth = distributions.wealth.len(),
        home_value = distributions.home_value.len(),
        age = distributions.age.len(),
        own_rent = distributions.own_rent.len(),
        "collected distributions"
    );
    distributions
}
