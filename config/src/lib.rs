pub mod environment;
pub mod secrets;

/// true for the two literal values the idler accepts as "on"
pub fn is_truthy(val: &str) -> bool {
    val == "1" || val == "true"
}
