use serde::Deserialize;

/// Food record as returned by `GET /food/{fdcId}?format=abridged`. Fields the
/// bot does not use (`fdcId`, `dataType`, nutrient names and units) are
/// skipped when parsing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbridgedFoodItem {
    pub description: String,
    pub food_nutrients: Vec<AbridgedFoodNutrient>,
}

/// One nutrient entry; `amount` is per 100 g of food.
#[derive(Debug, Clone, Deserialize)]
pub struct AbridgedFoodNutrient {
    pub number: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_abridged_record() {
        let raw = json!({
            "fdcId": 167725,
            "description": "Apples, raw, with skin ",
            "dataType": "SR Legacy",
            "publicationDate": "4/1/2019",
            "foodNutrients": [
                { "number": "208", "name": "Energy", "amount": 52.0, "unitName": "KCAL" },
                { "number": "203", "name": "Protein", "amount": 0.26, "unitName": "G" }
            ]
        });

        let item: AbridgedFoodItem = serde_json::from_value(raw).unwrap();
        assert_eq!(item.description, "Apples, raw, with skin ");
        assert_eq!(item.food_nutrients.len(), 2);
        assert_eq!(item.food_nutrients[0].number, "208");
        assert_eq!(item.food_nutrients[1].amount, 0.26);
    }

    #[test]
    fn test_rejects_record_without_nutrients() {
        let raw = json!({ "description": "Apple" });
        assert!(serde_json::from_value::<AbridgedFoodItem>(raw).is_err());
    }
}
