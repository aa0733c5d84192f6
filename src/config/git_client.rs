use std::path::Path;
use std::process::Command;

use super::FetchError;

/// Abstraction for git command execution.
///
/// Enables testing with `MockGitClient` while `ProcessGitClient` runs real git processes.
pub trait GitClient {
    /// Run `git show <git_ref>:<path>` in `repo_dir` and return the file contents.
    fn show_file(&self, repo_dir: &Path, git_ref: &str, path: &str) -> Result<String, FetchError>;
}

/// Real git client that spawns `git` subprocesses.
///
/// Removes `GIT_DIR` and `GIT_INDEX_FILE` from the child environment so that
/// `repo_dir` decides which repository is read.
pub struct ProcessGitClient;

impl ProcessGitClient {
    fn git_command(working_dir: &Path) -> Command {
        let mut cmd = Command::new("git");
        cmd.current_dir(working_dir);
        cmd.env_remove("GIT_DIR");
        cmd.env_remove("GIT_INDEX_FILE");
        cmd
    }
}

impl GitClient for ProcessGitClient {
    fn show_file(&self, repo_dir: &Path, git_ref: &str, path: &str) -> Result<String, FetchError> {
        // A leading `-` would be parsed as an option by git.
        if git_ref.is_empty() || git_ref.starts_with('-') {
            return Err(FetchError::InvalidReference(git_ref.to_string()));
        }

        let object = format!("{git_ref}:{path}");
        let mut cmd = Self::git_command(repo_dir);
        cmd.args(["show", "--no-color", &object, "--"]);

        let output = cmd.output().map_err(|e| FetchError::GitShow {
            reference: object.clone(),
            message: format!("failed to execute git: {e}"),
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(FetchError::GitShow {
                reference: object,
                message: stderr.trim().to_string(),
            })
        }
    }
}
