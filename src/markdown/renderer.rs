//! Markdown rendering with GitHub Flavored Markdown support.

use std::fs;
use std::path::Path;

use comrak::plugins::syntect::SyntectAdapter;
use comrak::{Options, Plugins, markdown_to_html_with_plugins};

use crate::error::LoadError;

/// Renders guide Markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Provides GFM extensions including tables, strikethrough, autolinks, task
/// lists, footnotes, and description lists, with smart punctuation. Fenced
/// code blocks are syntax highlighted through comrak's syntect adapter,
/// emitting CSS classes so the host theme controls the palette. Raw HTML in
/// guide content stays escaped; only markup generated here reaches the pane.
pub struct ContentRenderer {
    options: Options<'static>,
    adapter: SyntectAdapter,
}

impl ContentRenderer {
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        options.parse.smart = true;

        // No theme: emit CSS classes instead of inline colors.
        let adapter = SyntectAdapter::new(None);

        Self { options, adapter }
    }

    /// Renders Markdown content to an HTML fragment.
    pub fn render(&self, content: &str) -> String {
        let mut plugins = Plugins::default();
        plugins.render.codefence_syntax_highlighter = Some(&self.adapter);

        markdown_to_html_with_plugins(content, &self.options, &plugins)
    }

    /// Reads and renders the Markdown file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Read` if the file is missing or unreadable.
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.render(&content))
    }
}

impl Default for ContentRenderer {
    fn default() -> Self {
        Self::new()
    }
}
