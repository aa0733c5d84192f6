pub mod github_output;
pub mod memory;

use crate::config::{GrammarLocation, GrammarSource, load_grammar};
use crate::dispatch::{Outcome, dispatch};

/// Prefix the comment host renders as a quote block.
const MESSAGE_PREFIX: &str = "> ";

/// Receives the named outputs of one invocation.
pub trait OutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), anyhow::Error>;
}

/// Write `result`, `variables`, `message` (failures only) and `reaction` to `sink`.
///
/// Failures report `{}` for both `result` and `variables`.
pub fn emit(outcome: &Outcome, sink: &mut dyn OutputSink) -> Result<(), anyhow::Error> {
    match outcome {
        Outcome::Success(success) => {
            sink.set_output("result", &serde_json::to_string(&success.results)?)?;
            sink.set_output("variables", &serde_json::to_string(&success.variables)?)?;
        }
        Outcome::Failure(failure) => {
            sink.set_output("result", "{}")?;
            sink.set_output("variables", "{}")?;
            sink.set_output("message", &format!("{MESSAGE_PREFIX}{}", failure.message))?;
        }
    }
    sink.set_output("reaction", outcome.reaction().as_str())
}

/// Run one invocation end to end.
///
/// 1. Fetch and parse the grammar from `source`
/// 2. Resolve `comment` against it
/// 3. Emit the outcome to `sink`
///
/// Fetch, parse and sink errors are returned; everything about the grammar's
/// structure or the comment itself ends up in the emitted outcome.
pub fn run(
    source: &dyn GrammarSource,
    location: &GrammarLocation,
    comment: &str,
    sink: &mut dyn OutputSink,
) -> Result<Outcome, anyhow::Error> {
    let document = load_grammar(source, location)?;
    let outcome = dispatch(comment, &document);
    emit(&outcome, sink)?;
    Ok(outcome)
}
