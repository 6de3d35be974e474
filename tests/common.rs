//! Shared test utilities for integration tests.
//!
//! Provides helpers for building temporary guide directories with the
//! documents and Markdown files the outline and renderer read.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Two categories with two and one steps, mirroring a realistic course TOC.
pub const SAMPLE_TOC: &str = r#"{
    "categories": [
        {
            "title": "Intro",
            "description": "Getting started",
            "steps": [
                {
                    "title": "Step 1",
                    "description": "Environment setup",
                    "file": "practicals/setup.md",
                    "notebook": "notebooks/setup.ipynb"
                },
                {
                    "title": "Step 2",
                    "description": "First model",
                    "file": "practicals/model.md"
                }
            ]
        },
        {
            "title": "Pipelines",
            "description": "Data plumbing",
            "steps": [
                {
                    "title": "Step 3",
                    "description": "Feature stores",
                    "file": "practicals/features.md"
                }
            ]
        }
    ]
}"#;

/// Two assignments, one with a linked notebook.
pub const SAMPLE_ASSIGNMENTS: &str = r#"{
    "assignments": [
        {"title": "A1", "description": "Do X", "notebook": null},
        {"title": "A2", "description": "Do Y", "notebook": "homework/a2.ipynb"}
    ]
}"#;

/// Creates a temporary guide directory with sample documents and the
/// Markdown files they reference.
///
/// # Errors
///
/// Returns error if directory creation or file writes fail.
pub fn create_guide_dir() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let root = dir.path();

    write_file(root, "toc.json", SAMPLE_TOC)?;
    write_file(root, "assignments.json", SAMPLE_ASSIGNMENTS)?;
    write_file(root, "practicals/setup.md", "# Setup\n\nInstall things.")?;
    write_file(root, "practicals/model.md", "# First Model\n\nTrain it.")?;
    write_file(root, "practicals/features.md", "# Features\n\nStore them.")?;

    Ok(dir)
}

/// Writes a file into the guide directory, creating parent directories as
/// needed.
///
/// # Errors
///
/// Returns error if directory creation or the file write fails.
pub fn write_file(guide_root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = guide_root.join(path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
