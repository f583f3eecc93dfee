use crate::types::report::Report;
use chrono::Utc;

const PERCENTAGE_KEY: &str = "Homeownership Percentage";

/// Escapes a value for a single table cell.
fn cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

pub fn to_markdown(report: &Report) -> String {
    let mut output = String::new();
    output.push_str("# Market Report\n\n");
    output.push_str(&format!("Generated: {}\n\n", Utc::now().to_rfc3339()));
    output.push_str("| Field | Value |\n");
    output.push_str("| --- | --- |\n");
    for (key, value) in report.entries() {
        // The percentage value carries a trailing line separator.
        let value = if key == PERCENTAGE_KEY {
            value.trim_end_matches('\n')
        } else {
            value.as_str()
        };
        output.push_str(&format!("| {} | {} |\n", key, cell(value)));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::generate_report;
    use crate::types::person::Person;
    use crate::types::scoring::Weights;

    #[test]
    fn markdown_report_contains_table_rows() {
        let people = vec![Person {
            own_rent: Some(1),
            competitors: Some(vec!["Acme".to_string()]),
            ..Person::default()
        }];
        let report = generate_report(&people, &Weights::default()).expect("report expected");

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Market Report"));
        assert!(rendered.contains("| Homeownership Percentage | 100.0 |"));
        assert!(rendered.contains("| Competitors | Acme |"));
        assert!(rendered.contains("| Income weight | 0.21 |"));
    }

    #[test]
    fn competitor_cells_are_escaped_and_keep_whitespace() {
        let people = vec![Person {
            competitors: Some(vec![
                "Pipe|Co".to_string(),
                "Two\nLines".to_string(),
                "Spaced ".to_string(),
            ]),
            ..Person::default()
        }];
        let report = generate_report(&people, &Weights::default()).expect("report expected");

        let rendered = to_markdown(&report);
        assert!(rendered.contains("| Competitors | Pipe\\|Co, Two<br>Lines, Spaced  |"));
        assert_eq!(rendered.matches("| Competitors |").count(), 1);
    }
}
