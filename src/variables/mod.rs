//! Per-command extraction of structured variables from leftover tokens.
//!
//! Each extractor is a total function: tokens that carry nothing relevant
//! produce an empty (or partial) [`VariableMap`], never an error.

mod coverage;
mod package;
mod rebuild;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::config::AliasRule;

pub use coverage::parse_coverage;
pub use package::parse_package;
pub use rebuild::parse_rebuild;

/// Extractor output. Insertion order is preserved in the serialized form.
pub type VariableMap = IndexMap<String, String>;

/// Named variable extraction strategy a grammar node can declare via `variables:`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    Rebuild,
    Coverage,
    Package,
}

impl ExtractorKind {
    /// Extractor implied by a top-level command name when the grammar declares none.
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "rebuild" => Some(Self::Rebuild),
            "coverage" => Some(Self::Coverage),
            "package" => Some(Self::Package),
            _ => None,
        }
    }

    /// Run this extractor over the leftover tokens of a resolved command.
    ///
    /// `alias_rules` is only consulted by [`ExtractorKind::Package`].
    pub fn extract(self, leftovers: &[String], alias_rules: &[AliasRule]) -> VariableMap {
        match self {
            Self::Rebuild => parse_rebuild(leftovers),
            Self::Coverage => parse_coverage(leftovers),
            Self::Package => parse_package(leftovers, alias_rules),
        }
    }
}
