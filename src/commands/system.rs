pub const USAGE_MESSAGE: &str = "Hi! This bot will help you to calculate nutrients for food from \
FoodData Central system. To use it, simply send a message containing FDC ID of the food and the \
mass of the portion in grams. These two values must be separated by space, for example: \
`167725 200`";

/// Returns the usage text for `start` and `help`, `None` for anything else.
pub fn handle_command(command: &str) -> Option<&'static str> {
    match command.to_lowercase().as_str() {
        "start" | "help" => Some(USAGE_MESSAGE),
        _ => None,
    }
}
