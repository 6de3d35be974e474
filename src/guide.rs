//! Guide source documents and section payloads.
//!
//! A guide directory holds two externally-authored JSON documents: `toc.json`
//! (categories of practical steps) and `assignments.json` (a flat assignment
//! list), plus the Markdown files the steps reference. Documents are loaded
//! freshly on every request so external edits are picked up on the next
//! outline expansion.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Table of contents file name inside a guide directory.
pub const TOC_FILE: &str = "toc.json";

/// Assignment list file name inside a guide directory.
pub const ASSIGNMENTS_FILE: &str = "assignments.json";

/// Table of contents for the practicals branch of a guide.
#[derive(Debug, Clone, Deserialize)]
pub struct TocDocument {
    pub categories: Vec<Category>,
}

/// A titled group of practical steps. Order in the document is meaningful.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub title: String,
    pub description: String,
    pub steps: Vec<Step>,
}

/// A practical step whose content lives in an external Markdown file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
    /// Markdown content path, relative to the guide directory.
    pub file: PathBuf,
    /// Optional linked resource path, relative to the workspace root.
    #[serde(default)]
    pub notebook: Option<String>,
}

/// Assignment list for a guide.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentsDocument {
    pub assignments: Vec<Assignment>,
}

/// A course item whose content is its inline description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Assignment {
    pub title: String,
    pub description: String,
    /// Optional linked resource path, relative to the workspace root.
    #[serde(default)]
    pub notebook: Option<String>,
}

impl TocDocument {
    /// Loads `toc.json` from the guide directory.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file is missing, unreadable, or not valid
    /// JSON for this document shape.
    pub fn load(guide_root: impl AsRef<Path>) -> Result<Self, LoadError> {
        load_document(guide_root.as_ref().join(TOC_FILE))
    }
}

impl AssignmentsDocument {
    /// Loads `assignments.json` from the guide directory.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file is missing, unreadable, or not valid
    /// JSON for this document shape.
    pub fn load(guide_root: impl AsRef<Path>) -> Result<Self, LoadError> {
        load_document(guide_root.as_ref().join(ASSIGNMENTS_FILE))
    }
}

fn load_document<T: DeserializeOwned>(path: PathBuf) -> Result<T, LoadError> {
    let source = fs::read_to_string(&path).map_err(|source| LoadError::Read {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&source).map_err(|source| LoadError::Parse { path, source })
}

/// Content to render for a selected section.
///
/// Exactly one variant applies to any payload; the distinction is resolved
/// once when the outline is built, not re-derived per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource<'a> {
    /// Markdown file path, relative to the guide directory.
    File(&'a Path),
    /// Inline description text, rendered verbatim as a paragraph.
    Inline(&'a str),
}

/// The payload attached to a selectable outline leaf.
///
/// Read-only after load; selecting a node re-renders the content pane from
/// this value rather than mutating any prior render.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionPayload {
    Practical(Step),
    Assignment(Assignment),
}

impl SectionPayload {
    pub fn title(&self) -> &str {
        match self {
            SectionPayload::Practical(step) => &step.title,
            SectionPayload::Assignment(assignment) => &assignment.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            SectionPayload::Practical(step) => &step.description,
            SectionPayload::Assignment(assignment) => &assignment.description,
        }
    }

    /// Linked resource path carried by the payload, if any.
    pub fn notebook(&self) -> Option<&str> {
        match self {
            SectionPayload::Practical(step) => step.notebook.as_deref(),
            SectionPayload::Assignment(assignment) => assignment.notebook.as_deref(),
        }
    }

    /// The single content source for this payload.
    pub fn content(&self) -> ContentSource<'_> {
        match self {
            SectionPayload::Practical(step) => ContentSource::File(&step.file),
            SectionPayload::Assignment(assignment) => ContentSource::Inline(&assignment.description),
        }
    }
}
