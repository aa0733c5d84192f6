use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use slashcmd::adapter;
use slashcmd::adapter::github_output::GithubOutputSink;
use slashcmd::adapter::memory::MemorySink;
use slashcmd::cli::{Cli, Commands, GITHUB_EVENT_PATH_ENV, OutputFormat, ParseArgs, route_comment};
use slashcmd::config::GitGrammarSource;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "SLASHCMD_LOG";

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse(args) => run_parse(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("slashcmd: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Both resolved and rejected comments exit successfully; only fetch and
/// output failures are errors.
fn run_parse(args: &ParseArgs) -> Result<(), anyhow::Error> {
    let event_path = std::env::var_os(GITHUB_EVENT_PATH_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);
    let comment = route_comment(args, event_path.as_deref(), std::io::stdin().lock())?;

    let source = GitGrammarSource::new(&args.repo);
    let location = args.location();

    match args.format {
        OutputFormat::Github => {
            let mut sink = GithubOutputSink::from_env()?;
            tracing::debug!(path = %sink.path().display(), "writing step outputs");
            adapter::run(&source, &location, &comment, &mut sink)?;
        }
        OutputFormat::Json => {
            let mut sink = MemorySink::new();
            adapter::run(&source, &location, &comment, &mut sink)?;
            println!("{}", sink.to_json()?);
        }
    }

    Ok(())
}
