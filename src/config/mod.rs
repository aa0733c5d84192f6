mod error;
pub(crate) mod git_client;
mod loader;
mod model;

pub use error::*;
pub use git_client::{GitClient, ProcessGitClient};
pub use loader::*;
pub use model::*;
