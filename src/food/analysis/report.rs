use crate::food::analysis::nutrition::{Nutrient, NutrientSummary};

pub const CSV_HEADER_LINE: &str = "CSV (copy it and paste to Excel): ";

#[derive(Debug, Clone, PartialEq)]
pub struct NutrientReport {
    pub human_text: String,
    pub data_line: String,
}

impl NutrientReport {
    /// Full chat reply: the labeled lines followed by the CSV line.
    pub fn to_message(&self) -> String {
        format!("{}\n\n{}\n{}", self.human_text, CSV_HEADER_LINE, self.data_line)
    }
}

/// Integral values keep one decimal (`104.0`), everything else prints its
/// shortest round-trip form (`0.6`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(value) => format_number(value),
        None => String::new(),
    }
}

pub fn format_human_text(summary: &NutrientSummary) -> String {
    let mut lines = Vec::with_capacity(Nutrient::ALL.len() + 2);
    lines.push(format!("Food: {}", summary.food_name));
    lines.push(format!("Mass: {}", format_number(summary.portion_mass_grams)));
    for nutrient in Nutrient::ALL {
        lines.push(format!("{}: {}", nutrient.label(), format_optional(summary.get(nutrient))));
    }
    lines.join("\n")
}

/// Strings are quoted but not escaped, so a name containing `"` or `,`
/// yields a line a strict CSV reader will split differently.
pub fn format_data_line(summary: &NutrientSummary) -> String {
    let mut fields = Vec::with_capacity(Nutrient::ALL.len() + 3);
    fields.push(format!("\"{}\"", summary.food_name));
    fields.push(format_number(summary.portion_mass_grams));
    fields.push(format!("\"{}\"", summary.source_label));
    fields.extend(Nutrient::ALL.iter().map(|&nutrient| format_optional(summary.get(nutrient))));
    fields.join(",")
}

pub fn format_report(summary: &NutrientSummary) -> NutrientReport {
    NutrientReport {
        human_text: format_human_text(summary),
        data_line: format_data_line(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::api::models::{AbridgedFoodItem, AbridgedFoodNutrient};

    fn summary(description: &str, mass: f64, nutrients: &[(&str, f64)]) -> NutrientSummary {
        let item = AbridgedFoodItem {
            description: description.to_string(),
            food_nutrients: nutrients
                .iter()
                .map(|(number, amount)| AbridgedFoodNutrient {
                    number: number.to_string(),
                    amount: *amount,
                })
                .collect(),
        };
        NutrientSummary::from_food_item(&item, mass)
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(104.0), "104.0");
        assert_eq!(format_number(200.0), "200.0");
        assert_eq!(format_number(0.6), "0.6");
        assert_eq!(format_number(0.119), "0.119");
        assert_eq!(format_number(-3.0), "-3.0");
    }

    #[test]
    fn test_human_text_blanks_absent_values() {
        let report = format_report(&summary(" Apple ", 200.0, &[("208", 52.0), ("203", 0.3)]));
        let lines: Vec<&str> = report.human_text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Food: Apple",
                "Mass: 200.0",
                "Energy, kcal: 104.0",
                "Protein, g: 0.6",
                "Carbohydrates, g: ",
                "Sugar, g: ",
                "Fats, g: ",
                "Saturated fat, g: ",
                "Cholesterol, mg: ",
                "Vitamin C, mg: ",
                "Fe, mg: ",
                "Ca, mg: ",
            ]
        );
        assert!(!report.human_text.contains("None"));
    }

    #[test]
    fn test_data_line_with_absent_values() {
        let report = format_report(&summary("Apple", 200.0, &[("208", 52.0), ("203", 0.3)]));
        assert_eq!(report.data_line, "\"Apple\",200.0,\"US Food Central\",104.0,0.6,,,,,,,,");
        assert_eq!(report.data_line.split(',').count(), 13);
    }

    #[test]
    fn test_data_line_with_all_values() {
        let report = format_report(&summary(
            "Oats",
            50.0,
            &[
                ("208", 389.0),
                ("203", 16.9),
                ("205", 66.3),
                ("269", 1.0),
                ("204", 6.9),
                ("606", 1.2),
                ("601", 0.0),
                ("401", 0.0),
                ("303", 4.72),
                ("301", 54.0),
            ],
        ));

        let fields: Vec<&str> = report.data_line.split(',').collect();
        assert_eq!(fields.len(), 13);
        assert_eq!(fields[0], "\"Oats\"");
        assert_eq!(fields[1], "50.0");
        assert_eq!(fields[2], "\"US Food Central\"");
        assert_eq!(&fields[3..], &["194.5", "8.45", "33.15", "0.5", "3.45", "0.6", "0.0", "0.0", "2.36", "27.0"]);
        for numeric in &fields[3..] {
            assert!(!numeric.contains('"'));
            assert!(numeric.parse::<f64>().is_ok());
        }
    }

    #[test]
    fn test_data_line_does_not_escape_names() {
        let report = format_report(&summary("Cheese, \"cheddar\"", 30.0, &[]));
        assert!(report.data_line.starts_with("\"Cheese, \"cheddar\"\",30.0,"));
    }

    #[test]
    fn test_message_ends_with_csv() {
        let report = format_report(&summary("Apple", 100.0, &[("208", 52.0)]));
        let message = report.to_message();
        assert!(message.starts_with("Food: Apple\nMass: 100.0\n"));
        assert!(message.ends_with(&format!("\n\nCSV (copy it and paste to Excel): \n{}", report.data_line)));
    }
}
