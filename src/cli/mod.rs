mod route;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{DEFAULT_GRAMMAR_PATH, GrammarLocation};

pub use route::{GITHUB_EVENT_PATH_ENV, route_comment};

#[derive(Parser)]
#[command(name = "slashcmd")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum Commands {
    /// Resolve a slash command comment against the command grammar
    Parse(ParseArgs),
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct ParseArgs {
    /// Comment body to parse (skips the event payload and stdin)
    #[arg(long)]
    pub comment: Option<String>,

    /// Path of the grammar file inside the repository
    #[arg(long, env = "INPUT_CONFIGURATION-PATH", default_value = DEFAULT_GRAMMAR_PATH)]
    pub config_path: String,

    /// Git ref to read the grammar file at (working tree when omitted)
    #[arg(long, env = "INPUT_CONFIGURATION-REF")]
    pub config_ref: Option<String>,

    /// Repository directory the grammar is read from
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    pub repo: PathBuf,

    /// Where to write the outputs
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Append to the file named by GITHUB_OUTPUT
    Github,
    /// Print one JSON object to stdout
    Json,
}

impl ParseArgs {
    pub fn location(&self) -> GrammarLocation {
        GrammarLocation {
            path: self.config_path.clone(),
            git_ref: self.config_ref.clone().filter(|r| !r.is_empty()),
        }
    }
}
