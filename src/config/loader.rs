use std::path::PathBuf;

use serde_json::Value;

use super::git_client::{GitClient, ProcessGitClient};
use super::{ConfigError, FetchError};

/// Default location of the grammar inside a repository.
pub const DEFAULT_GRAMMAR_PATH: &str = ".github/slash-commands.yaml";

/// Where to read the grammar document from.
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarLocation {
    pub path: String,
    /// Git revision to read `path` at. `None` reads the working tree.
    pub git_ref: Option<String>,
}

impl Default for GrammarLocation {
    fn default() -> Self {
        Self {
            path: DEFAULT_GRAMMAR_PATH.to_string(),
            git_ref: None,
        }
    }
}

/// Retrieves the raw grammar document text.
pub trait GrammarSource {
    fn fetch(&self, location: &GrammarLocation) -> Result<String, ConfigError>;
}

/// Reads the grammar from a local git repository.
pub struct GitGrammarSource<G: GitClient = ProcessGitClient> {
    repo_dir: PathBuf,
    git: G,
}

impl GitGrammarSource {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self::with_git_client(repo_dir, ProcessGitClient)
    }
}

impl<G: GitClient> GitGrammarSource<G> {
    pub fn with_git_client(repo_dir: impl Into<PathBuf>, git: G) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            git,
        }
    }

    fn read_working_tree(&self, path: &str) -> Result<String, ConfigError> {
        let file = self.repo_dir.join(path);
        if !file.is_file() {
            return Err(FetchError::NotFound(file).into());
        }
        Ok(std::fs::read_to_string(file)?)
    }
}

impl<G: GitClient> GrammarSource for GitGrammarSource<G> {
    fn fetch(&self, location: &GrammarLocation) -> Result<String, ConfigError> {
        match &location.git_ref {
            Some(git_ref) => Ok(self.git.show_file(&self.repo_dir, git_ref, &location.path)?),
            None => self.read_working_tree(&location.path),
        }
    }
}

/// Fetch the grammar document and parse it into a generic document tree.
///
/// Structure is not checked here; see [`crate::config::validate`].
pub fn load_grammar(
    source: &dyn GrammarSource,
    location: &GrammarLocation,
) -> Result<Value, ConfigError> {
    tracing::info!(path = %location.path, git_ref = ?location.git_ref, "loading command grammar");
    let text = source.fetch(location)?;
    parse_grammar(&text)
}

/// Parse a YAML string into a generic document tree.
pub fn parse_grammar(yaml: &str) -> Result<Value, ConfigError> {
    let document: Value = serde_saphyr::from_str(yaml)?;
    Ok(document)
}
