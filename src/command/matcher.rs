//! Walks command tokens through a [`Grammar`].
//!
//! The walk starts at the root command set. A group descends into its
//! children; a leaf collects its result and leaves the current set in place,
//! so sibling leaves can follow (`/order pizza nachos`). The first token
//! that matches nothing ends the walk and it and everything after it become
//! leftovers for the variable extractors.

use serde_json::Value;

use crate::config::{AliasRule, CommandNode, Grammar, NodeKind};
use crate::variables::ExtractorKind;

use super::UnresolvedCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome<'g> {
    Resolved(ResolvedCommand<'g>),
    Unresolved(UnresolvedCommand),
}

/// At least one leaf matched.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCommand<'g> {
    /// First token of the comment, regardless of how deep the walk went.
    pub top_command: String,
    /// Result payloads in match order.
    pub results: Vec<&'g Value>,
    /// Alias rules of the first matched leaf.
    pub package_aliases: &'g [AliasRule],
    pub leftovers: Vec<String>,
    /// Extractor of the first matched leaf.
    pub extractor: Option<ExtractorKind>,
}

/// Match `tokens` against `grammar`. Pure; the grammar is only borrowed.
pub fn match_command<'g>(tokens: &[String], grammar: &'g Grammar) -> MatchOutcome<'g> {
    let mut commands: &'g [CommandNode] = &grammar.commands;
    let mut consumed: Vec<String> = Vec::new();
    let mut results: Vec<&'g Value> = Vec::new();
    let mut package_aliases: &'g [AliasRule] = &[];
    let mut extractor: Option<ExtractorKind> = None;
    let mut unmatched_at: Option<usize> = None;

    for (index, token) in tokens.iter().enumerate() {
        consumed.push(token.clone());

        let Some(command) = commands.iter().find(|command| command.matches(token)) else {
            unmatched_at = Some(index);
            break;
        };

        match &command.kind {
            NodeKind::Leaf(leaf) => {
                if results.is_empty() {
                    package_aliases = leaf.package_aliases.as_slice();
                    extractor = leaf.extractor;
                }
                results.push(&leaf.result);
            }
            NodeKind::Group(children) => commands = children,
        }
    }

    if results.is_empty() {
        return MatchOutcome::Unresolved(UnresolvedCommand {
            consumed,
            options: commands.iter().map(|command| command.name.clone()).collect(),
            last_token_unmatched: unmatched_at.is_some(),
        });
    }

    let leftovers = unmatched_at
        .map(|index| tokens[index..].to_vec())
        .unwrap_or_default();

    MatchOutcome::Resolved(ResolvedCommand {
        top_command: tokens[0].clone(),
        results,
        package_aliases,
        leftovers,
        extractor,
    })
}
