//! Turns a comment body and a grammar document into a terminal [`Outcome`].
//!
//! Grammar and command problems never escape as errors here; they become a
//! [`Failure`] whose message is shown to the commenter.

use indexmap::IndexMap;
use serde_json::Value;

use crate::command::{MatchOutcome, UnresolvedCommand, match_command, tokenize};
use crate::config::{Grammar, ValidationError};
use crate::variables::VariableMap;

/// Result payload values grouped by payload key, in match order.
pub type ResultMap = IndexMap<String, Vec<Value>>;

/// Sentiment tag reported alongside the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Positive,
    Negative,
}

impl Reaction {
    /// Reaction name understood by the comment host.
    pub fn as_str(self) -> &'static str {
        match self {
            Reaction::Positive => "rocket",
            Reaction::Negative => "confused",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Success {
    pub results: ResultMap,
    pub variables: VariableMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Success),
    Failure(Failure),
}

impl Outcome {
    pub fn reaction(&self) -> Reaction {
        match self {
            Outcome::Success(_) => Reaction::Positive,
            Outcome::Failure(_) => Reaction::Negative,
        }
    }
}

/// Errors that are reported back to the commenter as a [`Failure`].
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Unresolved(#[from] UnresolvedCommand),
}

/// Resolve `comment` against the grammar `document`.
pub fn dispatch(comment: &str, document: &Value) -> Outcome {
    match resolve(comment, document) {
        Ok(success) => {
            tracing::info!(
                results = ?success.results,
                variables = ?success.variables,
                "command resolved"
            );
            Outcome::Success(success)
        }
        Err(error) => {
            tracing::info!(%error, "command failed");
            Outcome::Failure(Failure {
                message: error.to_string(),
            })
        }
    }
}

fn resolve(comment: &str, document: &Value) -> Result<Success, DispatchError> {
    let grammar = Grammar::from_document(document)?;

    let tokens = tokenize(comment);
    tracing::debug!(?tokens, "parsing comment");

    let resolved = match match_command(&tokens, &grammar) {
        MatchOutcome::Resolved(resolved) => resolved,
        MatchOutcome::Unresolved(unresolved) => return Err(unresolved.into()),
    };
    tracing::debug!(
        command = %resolved.top_command,
        extractor = ?resolved.extractor,
        leftovers = ?resolved.leftovers,
        "matched command"
    );

    let variables = resolved
        .extractor
        .map(|extractor| extractor.extract(&resolved.leftovers, resolved.package_aliases))
        .unwrap_or_default();

    Ok(Success {
        results: group_results(&resolved.results),
        variables,
    })
}

/// Group every key of every mapping payload, preserving match order.
///
/// Payloads that are not mappings have no key to group under and are skipped.
pub fn group_results(results: &[&Value]) -> ResultMap {
    let mut grouped = ResultMap::new();
    for result in results {
        let Some(fields) = result.as_object() else {
            tracing::warn!(%result, "skipping result payload that is not a mapping");
            continue;
        };
        for (key, value) in fields {
            grouped.entry(key.clone()).or_default().push(value.clone());
        }
    }
    grouped
}
