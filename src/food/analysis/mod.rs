pub mod nutrition;
pub mod report;

pub use nutrition::{calculate_food_nutrients, Nutrient, NutrientSummary};
pub use report::{format_report, NutrientReport};
