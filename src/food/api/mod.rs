pub mod models;
pub mod usda;

// Re-export common types
pub use models::{AbridgedFoodItem, AbridgedFoodNutrient};
pub use usda::UsdaClient;
