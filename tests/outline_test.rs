//! Integration tests for outline construction.
//!
//! Exercises the navigation properties of the outline: fixed roots, flat
//! category/step ordering, assignment leaves, and load-failure surfacing.

mod common;

use anyhow::Result;
use coursebook::{
    ASSIGNMENTS_GROUP, LoadError, OutlineBuilder, PRACTICALS_GROUP, SectionPayload,
};

#[test]
fn test_root_nodes_are_practicals_then_assignments() -> Result<()> {
    // Arrange
    let guide = common::create_guide_dir()?;
    let builder = OutlineBuilder::new(guide.path());

    // Act
    let roots = builder.root_nodes();

    // Assert
    assert_eq!(roots.len(), 2, "Exactly two root groups");
    assert_eq!(roots[0].group_id, PRACTICALS_GROUP);
    assert_eq!(roots[1].group_id, ASSIGNMENTS_GROUP);
    assert!(
        roots.iter().all(|node| node.expandable),
        "Both roots expand into children"
    );

    Ok(())
}

#[test]
fn test_practicals_preserve_source_order() -> Result<()> {
    // Arrange
    let guide = common::create_guide_dir()?;
    let builder = OutlineBuilder::new(guide.path());

    // Act
    let nodes = builder.children(PRACTICALS_GROUP)?;

    // Assert: category₁, its steps, category₂, its steps.
    let labels: Vec<&str> = nodes.iter().map(|node| node.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Intro", "Step 1", "Step 2", "Pipelines", "Step 3"],
        "Order must mirror the source document exactly"
    );

    let expandable: Vec<bool> = nodes.iter().map(|node| node.expandable).collect();
    assert_eq!(
        expandable,
        vec![true, false, false, true, false],
        "Category headers expand; step leaves do not"
    );

    Ok(())
}

#[test]
fn test_step_leaves_carry_practical_payloads() -> Result<()> {
    // Arrange
    let guide = common::create_guide_dir()?;
    let builder = OutlineBuilder::new(guide.path());

    // Act
    let nodes = builder.children(PRACTICALS_GROUP)?;

    // Assert
    match &nodes[1].payload {
        Some(SectionPayload::Practical(step)) => {
            assert_eq!(step.title, "Step 1");
            assert_eq!(step.file.to_str(), Some("practicals/setup.md"));
            assert_eq!(step.notebook.as_deref(), Some("notebooks/setup.ipynb"));
        }
        other => panic!("Expected practical payload, got {:?}", other),
    }
    assert!(
        nodes[0].payload.is_none(),
        "Category headers carry no payload"
    );

    Ok(())
}

#[test]
fn test_assignments_one_nonexpandable_leaf_per_entry() -> Result<()> {
    // Arrange
    let guide = common::create_guide_dir()?;
    let builder = OutlineBuilder::new(guide.path());

    // Act
    let nodes = builder.children(ASSIGNMENTS_GROUP)?;

    // Assert
    assert_eq!(nodes.len(), 2, "One leaf per assignment");
    assert_eq!(nodes[0].label, "A1");
    assert_eq!(nodes[1].label, "A2");
    assert!(
        nodes.iter().all(|node| !node.expandable),
        "Assignment leaves never expand"
    );
    assert!(
        nodes
            .iter()
            .all(|node| matches!(node.payload, Some(SectionPayload::Assignment(_)))),
        "Every leaf carries an assignment payload"
    );

    Ok(())
}

#[test]
fn test_category_title_group_has_no_children() -> Result<()> {
    // Arrange: the outline flattens categories and steps into one sibling
    // list, so a category id never resolves to further children.
    let guide = common::create_guide_dir()?;
    let builder = OutlineBuilder::new(guide.path());

    // Act
    let nodes = builder.children("Intro")?;

    // Assert
    assert!(nodes.is_empty(), "Flattened categories have no children");

    Ok(())
}

#[test]
fn test_missing_document_fails_loudly() -> Result<()> {
    // Arrange: an empty directory, no toc.json at all.
    let guide = tempfile::TempDir::new()?;
    let builder = OutlineBuilder::new(guide.path());

    // Act
    let result = builder.children(PRACTICALS_GROUP);

    // Assert
    assert!(
        matches!(result, Err(LoadError::Read { .. })),
        "A missing document must surface, never a partial tree"
    );

    Ok(())
}

#[test]
fn test_malformed_document_fails_loudly() -> Result<()> {
    // Arrange
    let guide = tempfile::TempDir::new()?;
    common::write_file(guide.path(), "assignments.json", "{\"assignments\": [{]}")?;

    // Act
    let result = OutlineBuilder::new(guide.path()).children(ASSIGNMENTS_GROUP);

    // Assert
    assert!(
        matches!(result, Err(LoadError::Parse { .. })),
        "Malformed JSON must surface as a parse error"
    );

    Ok(())
}

#[test]
fn test_single_category_example_scenario() -> Result<()> {
    // Arrange: the one-category, one-step document shape from the guide docs.
    let guide = tempfile::TempDir::new()?;
    common::write_file(
        guide.path(),
        "toc.json",
        r#"{"categories":[{"title":"Intro","description":"d","steps":[
            {"title":"Step 1","description":"s1","file":"guide/1.md","notebook":"nb1.ipynb"}
        ]}]}"#,
    )?;
    let builder = OutlineBuilder::new(guide.path());

    // Act
    let nodes = builder.children(PRACTICALS_GROUP)?;

    // Assert
    assert_eq!(nodes.len(), 2, "Category header plus one step leaf");
    assert_eq!(nodes[0].label, "Intro");
    assert!(nodes[0].expandable);
    assert_eq!(nodes[1].label, "Step 1");
    assert!(!nodes[1].expandable);

    Ok(())
}
