//! Content pane ownership and the host message relay.
//!
//! The host environment owns the actual pane widget; this module owns its
//! lifecycle. A [`SectionRenderer`] holds at most one pane handle at a time:
//! `show` creates the pane on first use and reuses it afterwards, `dispose`
//! releases it so a later `show` starts fresh. Dropping a [`ContentPane`]
//! handle releases the underlying host resource, so the pane is released on
//! every exit path including renderer drop.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LoadError, ResourceOpenError};
use crate::guide::{ContentSource, SectionPayload};
use crate::markdown::ContentRenderer;
use crate::nonce;
use crate::pages::section::{SectionPageData, inline_fragment, section_page};
use crate::path::resolve_in_workspace;

/// A live content pane handle provided by the host.
///
/// Dropping the handle must release the host resource.
pub trait ContentPane {
    /// Brings the pane to the foreground.
    fn reveal(&mut self);

    /// Replaces the pane title.
    fn set_title(&mut self, title: &str);

    /// Replaces the pane document.
    fn set_html(&mut self, html: &str);

    /// Whether the pane is still open on the host side. A pane the user has
    /// closed reports false; content for it is discarded rather than applied.
    fn is_alive(&self) -> bool;
}

/// Host surface for creating panes and reporting warnings to the user.
pub trait PaneHost {
    type Pane: ContentPane;

    /// Creates a fresh pane with the given title.
    fn create_pane(&mut self, title: &str) -> Self::Pane;

    /// Shows a non-fatal warning to the user.
    fn show_warning(&mut self, message: &str);
}

/// Opens a resolved resource path in an appropriate external viewer.
pub trait ResourceOpener {
    /// # Errors
    ///
    /// Returns `ResourceOpenError` when the resource cannot be opened; the
    /// caller reports it as a warning and carries on.
    fn open(&mut self, path: &Path) -> Result<(), ResourceOpenError>;
}

/// Production opener backed by the platform launcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl ResourceOpener for SystemOpener {
    fn open(&mut self, path: &Path) -> Result<(), ResourceOpenError> {
        open::that(path).map_err(|source| ResourceOpenError::Launch {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Message posted by a rendered document's script layer.
///
/// The command set is closed; anything else is ignored by contract so newer
/// documents can post commands older engines do not know yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PaneMessage {
    /// Request to open the linked resource carried by the action control.
    OpenResource { resource: String },
}

impl PaneMessage {
    /// Parses a raw host message.
    ///
    /// Returns `None` for unknown commands and malformed payloads alike;
    /// both are a silent no-op, not an error.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Owns the single content pane and renders selected sections into it.
pub struct SectionRenderer<H: PaneHost, O: ResourceOpener> {
    host: H,
    opener: O,
    pane: Option<H::Pane>,
    guide_root: PathBuf,
    workspace_root: PathBuf,
    renderer: ContentRenderer,
}

impl<H: PaneHost> SectionRenderer<H, SystemOpener> {
    /// Creates a renderer using the platform launcher as resource opener.
    pub fn with_system_opener(
        host: H,
        guide_root: impl Into<PathBuf>,
        workspace_root: impl Into<PathBuf>,
    ) -> Self {
        Self::new(host, SystemOpener, guide_root, workspace_root)
    }
}

impl<H: PaneHost, O: ResourceOpener> SectionRenderer<H, O> {
    pub fn new(
        host: H,
        opener: O,
        guide_root: impl Into<PathBuf>,
        workspace_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host,
            opener,
            pane: None,
            guide_root: guide_root.into(),
            workspace_root: workspace_root.into(),
            renderer: ContentRenderer::new(),
        }
    }

    /// Renders `payload` into the content pane, creating the pane on first
    /// use and reusing it afterwards.
    ///
    /// Content is resolved before the pane is touched, so a failed load
    /// leaves the previous document in place. Every call renders the full
    /// document from scratch under a fresh nonce; nothing is patched.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when a practical's Markdown file cannot be read.
    /// The caller surfaces it to the user; pane state is unchanged.
    pub fn show(&mut self, payload: &SectionPayload) -> Result<(), LoadError> {
        let body_html = match payload.content() {
            ContentSource::File(relative) => {
                self.renderer.render_file(self.guide_root.join(relative))?
            }
            ContentSource::Inline(description) => inline_fragment(description),
        };

        let nonce = nonce::generate();
        let document = section_page(SectionPageData {
            title: payload.title(),
            action: payload.notebook(),
            body_html: &body_html,
            nonce: &nonce,
        })
        .into_string();

        let title = format!("Guide: {}", payload.title());

        match self.pane.as_mut() {
            Some(pane) if pane.is_alive() => {
                pane.reveal();
                pane.set_title(&title);
                pane.set_html(&document);
            }
            _ => {
                let mut pane = self.host.create_pane(&title);
                pane.set_html(&document);
                self.pane = Some(pane);
            }
        }

        Ok(())
    }

    /// Handles a raw message posted by the rendered document.
    ///
    /// The only handled command is "open resource": its path is resolved
    /// against the workspace root and forwarded to the opener. Failures are
    /// reported through the host as a warning and never tear down the pane.
    /// Unknown commands are ignored.
    pub fn handle_message(&mut self, raw: &str) {
        match PaneMessage::parse(raw) {
            Some(PaneMessage::OpenResource { resource }) => self.open_resource(&resource),
            None => {}
        }
    }

    fn open_resource(&mut self, resource: &str) {
        let result = resolve_in_workspace(&self.workspace_root, resource)
            .and_then(|path| self.opener.open(&path));

        if let Err(err) = result {
            self.host.show_warning(&err.to_string());
        }
    }

    /// Releases the pane and clears the singleton reference; a subsequent
    /// `show` creates a fresh pane.
    pub fn dispose(&mut self) {
        self.pane = None;
    }

    /// Whether a pane currently exists and is still open on the host side.
    pub fn has_live_pane(&self) -> bool {
        self.pane.as_ref().is_some_and(|pane| pane.is_alive())
    }
}
