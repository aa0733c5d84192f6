use std::fmt;

use super::tokenizer::TRIGGER;

/// A comment that did not resolve to any leaf command.
///
/// The `Display` output is the message shown back to the commenter:
///
/// ```text
/// Unknown command `/order sirloin` - try one of `/order [pizza, nachos]`
/// Incomplete command `/order` - try one of `/order [pizza, nachos]`
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedCommand {
    /// Tokens walked through the grammar, up to and including the first unmatched one.
    pub consumed: Vec<String>,
    /// Names of the commands that were valid at the point the walk stopped.
    pub options: Vec<String>,
    pub last_token_unmatched: bool,
}

impl UnresolvedCommand {
    /// `Unknown` when the walk stopped on a token that matched nothing.
    pub fn is_unknown(&self) -> bool {
        self.last_token_unmatched
    }

    /// Consumed tokens with the trigger restored on the first one.
    fn restored_path(&self) -> Vec<String> {
        self.consumed
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if i == 0 {
                    format!("{TRIGGER}{token}")
                } else {
                    token.clone()
                }
            })
            .collect()
    }

    /// The suggestion lists top-level commands when the failure is at the first token.
    fn options_group(&self) -> String {
        let at_root = self.consumed.is_empty() || (self.is_unknown() && self.consumed.len() == 1);
        let options: Vec<String> = self
            .options
            .iter()
            .map(|name| {
                if at_root {
                    format!("{TRIGGER}{name}")
                } else {
                    name.clone()
                }
            })
            .collect();
        format!("[{}]", options.join(", "))
    }
}

impl fmt::Display for UnresolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.restored_path();
        let failed = if path.is_empty() {
            TRIGGER.to_string()
        } else {
            path.join(" ")
        };

        let (prefix, mut suggestion) = if self.is_unknown() {
            ("Unknown", path[..path.len().saturating_sub(1)].to_vec())
        } else {
            ("Incomplete", path)
        };
        suggestion.push(self.options_group());

        write!(
            f,
            "{prefix} command `{failed}` - try one of `{}`",
            suggestion.join(" ")
        )
    }
}

impl std::error::Error for UnresolvedCommand {}
