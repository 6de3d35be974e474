//! Course guide outline and section rendering for editor hosts.

mod assets;
mod config;
pub mod error;
mod guide;
mod markdown;
pub mod nonce;
pub mod outline;
pub mod pages;
mod pane;
mod path;

pub use assets::write_css_assets;
pub use config::Config;
pub use error::{LoadError, ResourceOpenError};
pub use guide::{
    ASSIGNMENTS_FILE, Assignment, AssignmentsDocument, Category, ContentSource, SectionPayload,
    Step, TOC_FILE, TocDocument,
};
pub use markdown::ContentRenderer;
pub use outline::{ASSIGNMENTS_GROUP, NavNode, OutlineBuilder, PRACTICALS_GROUP};
pub use pane::{
    ContentPane, PaneHost, PaneMessage, ResourceOpener, SectionRenderer, SystemOpener,
};
pub use path::resolve_in_workspace;
