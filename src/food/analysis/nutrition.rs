use crate::food::api::models::AbridgedFoodItem;
use crate::food::api::usda::UsdaClient;
use crate::food::error::FoodError;
use lazy_static::lazy_static;
use std::collections::HashMap;

pub const SOURCE_LABEL: &str = "US Food Central";

const NUTRIENT_COUNT: usize = 10;

/// Nutrients tracked in a summary, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Energy,
    Protein,
    Carbohydrates,
    Sugar,
    Fats,
    SaturatedFat,
    Cholesterol,
    VitaminC,
    Fe,
    Ca,
}

impl Nutrient {
    pub const ALL: [Nutrient; NUTRIENT_COUNT] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Carbohydrates,
        Nutrient::Sugar,
        Nutrient::Fats,
        Nutrient::SaturatedFat,
        Nutrient::Cholesterol,
        Nutrient::VitaminC,
        Nutrient::Fe,
        Nutrient::Ca,
    ];

    /// Human label including the unit, as shown in the chat reply.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Energy => "Energy, kcal",
            Nutrient::Protein => "Protein, g",
            Nutrient::Carbohydrates => "Carbohydrates, g",
            Nutrient::Sugar => "Sugar, g",
            Nutrient::Fats => "Fats, g",
            Nutrient::SaturatedFat => "Saturated fat, g",
            Nutrient::Cholesterol => "Cholesterol, mg",
            Nutrient::VitaminC => "Vitamin C, mg",
            Nutrient::Fe => "Fe, mg",
            Nutrient::Ca => "Ca, mg",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

// FoodData Central nutrient numbers. 208 and 957 are both energy (kcal);
// whichever comes later in a record wins.
const NUTRIENT_CODES: &[(&str, Nutrient)] = &[
    ("208", Nutrient::Energy),
    ("957", Nutrient::Energy),
    ("203", Nutrient::Protein),
    ("205", Nutrient::Carbohydrates),
    ("269", Nutrient::Sugar),
    ("204", Nutrient::Fats),
    ("606", Nutrient::SaturatedFat),
    ("601", Nutrient::Cholesterol),
    ("401", Nutrient::VitaminC),
    ("303", Nutrient::Fe),
    ("301", Nutrient::Ca),
];

lazy_static! {
    static ref NUTRIENT_CODE_MAP: HashMap<&'static str, Nutrient> =
        NUTRIENT_CODES.iter().copied().collect();
}

pub fn nutrient_for_code(code: &str) -> Option<Nutrient> {
    NUTRIENT_CODE_MAP.get(code).copied()
}

/// Round to 3 decimal places. Goes through the exact decimal expansion of
/// `value`, so `1.2345` (stored as 1.23449999...) rounds down to `1.234`.
pub fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}

/// Nutrients of one food scaled to one portion. Values are rounded once,
/// when the summary is built, and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientSummary {
    pub food_name: String,
    pub portion_mass_grams: f64,
    pub source_label: &'static str,
    values: [Option<f64>; NUTRIENT_COUNT],
}

impl NutrientSummary {
    pub fn from_food_item(item: &AbridgedFoodItem, portion_mass_grams: f64) -> Self {
        let multiplier = portion_mass_grams / 100.0;

        let mut raw = [None; NUTRIENT_COUNT];
        for food_nutrient in &item.food_nutrients {
            if let Some(nutrient) = nutrient_for_code(&food_nutrient.number) {
                raw[nutrient.index()] = Some(food_nutrient.amount * multiplier);
            }
        }

        Self {
            food_name: item.description.trim().to_string(),
            portion_mass_grams,
            source_label: SOURCE_LABEL,
            values: raw.map(|value| value.map(round3)),
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.values[nutrient.index()]
    }

    /// Present nutrients in report order.
    pub fn present(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL
            .iter()
            .filter_map(move |&nutrient| self.get(nutrient).map(|value| (nutrient, value)))
    }
}

/// Fetch the record for `fdc_id` and scale it to `portion_mass_grams`.
pub async fn calculate_food_nutrients(
    client: &UsdaClient,
    fdc_id: &str,
    portion_mass_grams: f64,
) -> Result<NutrientSummary, FoodError> {
    let food_item = client.fetch_abridged(fdc_id).await?;
    log::debug!(
        "Resolved FDC ID {} to '{}' with {} nutrient entries",
        fdc_id,
        food_item.description.trim(),
        food_item.food_nutrients.len()
    );
    Ok(NutrientSummary::from_food_item(&food_item, portion_mass_grams))
}
