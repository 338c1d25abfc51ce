//! CLI support for stepwalker
//!
//! Provides the interactive session and the guide helpers behind the
//! `stepwalker` binary, so other tools can embed them.

mod command;
mod help;
mod session;

pub use command::Command;
pub use help::{get_help_content, get_welcome_content};
pub use session::{Session, SessionEnd, SessionOptions};

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::guide::{Guide, GuideError};

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Guide loading or validation error
    #[error("Guide error: {0}")]
    Guide(#[from] GuideError),
    /// Terminal IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Load the guide at `path`, or the built-in guide when no path is given
pub fn load_guide(path: Option<&Path>) -> Result<Guide, CliError> {
    match path {
        Some(path) => Ok(Guide::load(path)?),
        None => Ok(Guide::builtin()),
    }
}

/// Validate a guide file and return its step count
pub fn check_guide(path: &Path) -> Result<usize, CliError> {
    let guide = Guide::load(path)?;
    Ok(guide.len())
}
