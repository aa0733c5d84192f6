/// Character that introduces a slash command.
pub const TRIGGER: char = '/';

const SEPARATORS: [char; 3] = ['\r', '\n', ' '];

/// Split a comment body into command tokens.
///
/// The body is trimmed and split on runs of CR, LF and space. One leading
/// [`TRIGGER`] is stripped from the first token only. A body that consists of
/// nothing but the trigger yields no tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens: Vec<String> = input
        .trim()
        .split(SEPARATORS)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect();

    if let Some(first) = tokens.first_mut()
        && first.starts_with(TRIGGER)
    {
        first.remove(0);
    }

    if matches!(tokens.as_slice(), [only] if only.is_empty()) {
        tokens.clear();
    }

    tokens
}
