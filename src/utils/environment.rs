use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the directory the generator resolves its inputs and output against
pub fn get_working_dir() -> Result<PathBuf> {
    env::current_dir().context("Failed to determine current working directory")
}
