use crate::config::AliasRule;

use super::VariableMap;

/// Expand platform aliases in the leftover tokens into `platforms`.
///
/// The tokens are joined with spaces, then every `(rule, alias)` pair is
/// applied in declaration order, replacing only the first occurrence of the
/// alias text. Each replacement sees the output of the previous one, so
/// overlapping aliases (`tizen`, `tizen-nacl`) interact by position.
pub fn parse_package(tokens: &[String], alias_rules: &[AliasRule]) -> VariableMap {
    let mut variables = VariableMap::new();
    if tokens.is_empty() {
        return variables;
    }

    let platforms = alias_rules
        .iter()
        .flat_map(|rule| {
            let expansion = rule.platforms.join(" ");
            rule.aliases
                .iter()
                .map(move |alias| (alias.as_str(), expansion.clone()))
        })
        .fold(tokens.join(" "), |acc, (alias, expansion)| {
            acc.replacen(alias, &expansion, 1)
        });

    variables.insert("platforms".to_string(), platforms);
    variables
}
