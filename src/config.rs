//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for the Coursebook preview generator.
#[derive(Debug, Clone, Parser)]
#[command(name = "coursebook", version, about, long_about = None)]
pub struct Config {
    /// Guide directory containing toc.json and assignments.json
    #[arg(default_value = ".guide")]
    pub guide: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Course title shown on the outline page
    #[arg(long)]
    pub title: Option<String>,

    /// Workspace root that notebook links resolve against
    #[arg(long)]
    pub workspace: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the guide directory does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.guide.exists() {
            bail!("Guide directory does not exist: {}", self.guide.display());
        }

        Ok(())
    }

    /// Returns the course title from configuration or the default.
    pub fn course_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| String::from("Course Guide"))
    }

    /// Returns the workspace root notebook links resolve against,
    /// defaulting to the current directory.
    pub fn workspace_root(&self) -> PathBuf {
        self.workspace
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
