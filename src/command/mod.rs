mod error;
pub mod matcher;
pub mod tokenizer;

pub use error::*;
pub use matcher::{MatchOutcome, ResolvedCommand, match_command};
pub use tokenizer::tokenize;
