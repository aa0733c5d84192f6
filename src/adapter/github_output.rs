use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use super::OutputSink;

/// Environment variable naming the file that step outputs are appended to.
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

const DELIMITER_BASE: &str = "ghadelimiter";

/// Appends outputs to a GitHub Actions output file.
///
/// Every value is written in the multi-line form
/// `name<<DELIM\nvalue\nDELIM\n`, with a delimiter that does not occur in
/// the value.
pub struct GithubOutputSink {
    path: PathBuf,
}

impl GithubOutputSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build from the `GITHUB_OUTPUT` environment variable.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let path = std::env::var(GITHUB_OUTPUT_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| anyhow::anyhow!("{GITHUB_OUTPUT_ENV} is not set"))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Pick a delimiter line that cannot terminate `value` early.
fn delimiter_for(value: &str) -> String {
    let mut delimiter = DELIMITER_BASE.to_string();
    let mut suffix = 0u32;
    while value.lines().any(|line| line == delimiter) {
        suffix += 1;
        delimiter = format!("{DELIMITER_BASE}_{suffix}");
    }
    delimiter
}

fn format_record(name: &str, value: &str) -> String {
    let delimiter = delimiter_for(value);
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

impl OutputSink for GithubOutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), anyhow::Error> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        file.write_all(format_record(name, value).as_bytes())
            .with_context(|| format!("failed to write output '{name}'"))?;
        Ok(())
    }
}
