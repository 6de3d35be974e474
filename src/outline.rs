//! Navigation outline built from the guide source documents.
//!
//! The outline is a flat ordered node list, not a true tree: under the
//! practicals group, each category header is immediately followed by its step
//! leaves as siblings. This keeps the visual hierarchy achievable with two
//! list levels and avoids a second host round-trip per category, at the cost
//! of real nesting. Category group ids therefore have no further children.

use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::guide::{AssignmentsDocument, SectionPayload, TocDocument};

/// Group id of the practicals root node.
pub const PRACTICALS_GROUP: &str = "practicals";

/// Group id of the assignments root node.
pub const ASSIGNMENTS_GROUP: &str = "assignments";

const PRACTICALS_LABEL: &str = "Module Practicals";
const ASSIGNMENTS_LABEL: &str = "Assignments";

/// One entry in the navigation outline.
///
/// Group headers are expandable and carry no payload; leaves are not
/// expandable and carry the payload to render when selected. `group_id`
/// names the group a node belongs to (`practicals`, `assignments`, or a
/// category title for the steps under it).
#[derive(Debug, Clone, PartialEq)]
pub struct NavNode {
    pub label: String,
    pub description: String,
    pub expandable: bool,
    pub group_id: String,
    pub payload: Option<SectionPayload>,
}

impl NavNode {
    fn group(label: &str, description: &str, group_id: &str) -> Self {
        Self {
            label: label.to_string(),
            description: description.to_string(),
            expandable: true,
            group_id: group_id.to_string(),
            payload: None,
        }
    }

    fn leaf(label: &str, description: &str, group_id: &str, payload: SectionPayload) -> Self {
        Self {
            label: label.to_string(),
            description: description.to_string(),
            expandable: false,
            group_id: group_id.to_string(),
            payload: Some(payload),
        }
    }
}

/// Builds the navigation outline for a guide directory, on demand.
///
/// Holds no document state: every `children` call re-reads the source
/// documents, so edits to `toc.json` or `assignments.json` show up on the
/// next expansion without a reload step.
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    guide_root: PathBuf,
}

impl OutlineBuilder {
    pub fn new(guide_root: impl Into<PathBuf>) -> Self {
        Self {
            guide_root: guide_root.into(),
        }
    }

    /// The guide directory this builder reads from.
    pub fn guide_root(&self) -> &Path {
        &self.guide_root
    }

    /// Returns the two fixed root group headers, practicals before
    /// assignments. Performs no I/O.
    pub fn root_nodes(&self) -> Vec<NavNode> {
        vec![
            NavNode::group(
                PRACTICALS_LABEL,
                "A list of all course practicals",
                PRACTICALS_GROUP,
            ),
            NavNode::group(
                ASSIGNMENTS_LABEL,
                "A list of all assignments",
                ASSIGNMENTS_GROUP,
            ),
        ]
    }

    /// Returns the child nodes of a group, in source-document order.
    ///
    /// For `practicals`, each category header is followed by its step leaves
    /// as siblings. For `assignments`, one leaf per assignment. Any other
    /// group id (category titles included) has no children.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the backing document is missing or
    /// malformed; no partial list is produced.
    pub fn children(&self, group_id: &str) -> Result<Vec<NavNode>, LoadError> {
        match group_id {
            PRACTICALS_GROUP => self.practical_nodes(),
            ASSIGNMENTS_GROUP => self.assignment_nodes(),
            _ => Ok(Vec::new()),
        }
    }

    fn practical_nodes(&self) -> Result<Vec<NavNode>, LoadError> {
        let toc = TocDocument::load(&self.guide_root)?;

        let mut nodes = Vec::new();
        for category in toc.categories {
            nodes.push(NavNode::group(
                &category.title,
                &category.description,
                &category.title,
            ));

            for step in category.steps {
                let label = step.title.clone();
                let description = step.description.clone();
                nodes.push(NavNode::leaf(
                    &label,
                    &description,
                    &category.title,
                    SectionPayload::Practical(step),
                ));
            }
        }

        Ok(nodes)
    }

    fn assignment_nodes(&self) -> Result<Vec<NavNode>, LoadError> {
        let doc = AssignmentsDocument::load(&self.guide_root)?;

        let nodes = doc
            .assignments
            .into_iter()
            .map(|assignment| {
                let label = assignment.title.clone();
                let description = assignment.description.clone();
                NavNode::leaf(
                    &label,
                    &description,
                    ASSIGNMENTS_GROUP,
                    SectionPayload::Assignment(assignment),
                )
            })
            .collect();

        Ok(nodes)
    }
}
