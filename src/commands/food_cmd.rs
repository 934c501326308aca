use crate::food::analysis::nutrition::calculate_food_nutrients;
use crate::food::analysis::report::format_report;
use crate::food::api::usda::UsdaClient;
use crate::food::error::FoodError;

/// A well-formed `fdc_id grams` request.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodQuery {
    pub fdc_id: String,
    pub mass: f64,
}

/// Split free text into an FDC ID and a portion mass. Only the shape is
/// checked; whether the ID exists is up to FoodData Central.
///
/// The mass must parse as an `f64` and be finite: `NaN` and `inf` parse but
/// are rejected, since no report could be built from them. Zero and negative
/// masses pass.
pub fn parse_food_query(input: &str) -> Result<FoodQuery, FoodError> {
    let mut tokens = input.split_whitespace();
    let (fdc_id, mass) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(fdc_id), Some(mass), None) => (fdc_id, mass),
        _ => return Err(FoodError::MalformedInput),
    };

    let mass: f64 = mass.parse().map_err(|_| FoodError::MalformedInput)?;
    if !mass.is_finite() {
        return Err(FoodError::MalformedInput);
    }

    Ok(FoodQuery {
        fdc_id: fdc_id.to_string(),
        mass,
    })
}

pub async fn handle_command(
    input: &str,
    usda_client: &UsdaClient,
    maintainer_contact: &str,
) -> String {
    match lookup(input, usda_client).await {
        Ok(message) => message,
        Err(e) => {
            log::warn!("Nutrient lookup for '{}' failed: {}", input, e);
            e.reply_text(maintainer_contact)
        }
    }
}

async fn lookup(input: &str, usda_client: &UsdaClient) -> Result<String, FoodError> {
    let query = parse_food_query(input)?;
    let summary = calculate_food_nutrients(usda_client, &query.fdc_id, query.mass).await?;
    log::info!(
        "Calculated nutrients for FDC ID {} ({} g): {}",
        query.fdc_id,
        query.mass,
        summary.food_name
    );
    Ok(format_report(&summary).to_message())
}
