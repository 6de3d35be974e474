//! Markdown to HTML conversion for section content.

mod renderer;

pub use renderer::ContentRenderer;
