use crate::types::person::Person;

pub const NO_COMPETITORS: &str = "No competitors found";

/// Competitor names in first-seen order. Matching is exact and
/// case-sensitive.
pub fn collect_competitors(people: &[Person]) -> Vec<String> {
    let mut competitors: Vec<String> = Vec::new();
    for names in people.iter().filter_map(|person| person.competitors.as_ref()) {
        for name in names {
            if !competitors.contains(name) {
                competitors.push(name.clone());
            }
        }
    }
    competitors
}

pub fn format_competitors(competitors: &[String]) -> String {
    if competitors.is_empty() {
        return NO_COMPETITORS.to_string();
    }
    competitors.join(", ")
}
