use super::VariableMap;

/// Join every leftover token into `targets`.
pub fn parse_coverage(tokens: &[String]) -> VariableMap {
    let mut variables = VariableMap::new();
    if !tokens.is_empty() {
        variables.insert("targets".to_string(), tokens.join(" "));
    }
    variables
}
