use super::VariableMap;

const PRESET_FLAG: &str = "--preset";

/// Split leftover tokens into `generateArgs` and `presets`.
///
/// Everything from the first `--preset` onward is dropped from
/// `generateArgs`, including tokens after the preset value.
pub fn parse_rebuild(tokens: &[String]) -> VariableMap {
    let mut variables = VariableMap::new();

    let (args, preset) = match tokens.iter().position(|token| token == PRESET_FLAG) {
        Some(index) => {
            let value = tokens.get(index + 1).cloned().unwrap_or_default();
            (&tokens[..index], Some(value))
        }
        None => (tokens, None),
    };

    if !args.is_empty() {
        variables.insert("generateArgs".to_string(), args.join(" "));
    }
    if let Some(preset) = preset {
        variables.insert("presets".to_string(), preset);
    }
    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tokens(input: &str) -> Vec<String> {
        input.split_whitespace().map(String::from).collect()
    }

    #[rstest]
    #[case::args_and_preset(
        "-d YI_TEST=1 --preset test_preset",
        &[("generateArgs", "-d YI_TEST=1"), ("presets", "test_preset")],
    )]
    #[case::args_only("-d A=1 -d B=2", &[("generateArgs", "-d A=1 -d B=2")])]
    #[case::preset_only("--preset prb_default", &[("presets", "prb_default")])]
    #[case::preset_without_value("-d A=1 --preset", &[("generateArgs", "-d A=1"), ("presets", "")])]
    #[case::tokens_after_preset_are_dropped(
        "-d A=1 --preset p -d B=2",
        &[("generateArgs", "-d A=1"), ("presets", "p")],
    )]
    #[case::first_preset_wins(
        "--preset a --preset b",
        &[("presets", "a")],
    )]
    #[case::empty("", &[])]
    fn parses_rebuild_tokens(#[case] input: &str, #[case] expected: &[(&str, &str)]) {
        let variables = parse_rebuild(&tokens(input));
        let actual: Vec<(&str, &str)> = variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(actual, expected);
    }
}
