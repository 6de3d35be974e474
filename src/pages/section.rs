//! Themed section document composition.
//!
//! A section document is the complete HTML page shown in the host content
//! pane: title, heading, optional action control, separator, rendered body,
//! and the script relaying the action back to the host. Styling goes through
//! the host's theme variables so the pane matches the editor theme without
//! hardcoded colors.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline stylesheet over the host theme variables.
const THEME_STYLE: &str = include_str!("../../assets/section.css");

/// Script layer posting the action control's data back to the host.
///
/// `acquireHostApi` is injected by the pane host; the posted message shape is
/// the wire form of `PaneMessage`.
const PANE_SCRIPT: &str = r#"
const host = acquireHostApi();
const button = document.querySelector('.open-resource-btn');
if (button) {
    button.addEventListener('click', () => {
        host.postMessage({
            command: 'openResource',
            resource: button.getAttribute('data-resource'),
        });
    });
}
"#;

/// Data container for section document generation.
pub struct SectionPageData<'a> {
    /// Section title, used as document title and heading.
    pub title: &'a str,
    /// Linked resource path carried by the action control, if any.
    pub action: Option<&'a str>,
    /// Pre-rendered HTML body.
    pub body_html: &'a str,
    /// Per-render script nonce; must be fresh for every call.
    pub nonce: &'a str,
}

/// Generates the complete themed document for one section.
///
/// The document carries a Content-Security-Policy permitting only inline
/// style and scripts tagged with `data.nonce`; the single script block uses
/// that nonce. When `data.action` is set the body contains exactly one
/// action control whose `data-resource` attribute carries the value,
/// otherwise no control is emitted.
pub fn section_page(data: SectionPageData<'_>) -> Markup {
    let csp = format!(
        "default-src 'none'; style-src 'unsafe-inline'; script-src 'nonce-{}';",
        data.nonce
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta http-equiv="Content-Security-Policy" content=(csp);
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (data.title) }
                style { (PreEscaped(THEME_STYLE)) }
            }
            body {
                h1 { (data.title) }
                @if let Some(resource) = data.action {
                    button class="open-resource-btn" data-resource=(resource) {
                        "Open Notebook/Practical"
                    }
                }
                hr;
                (PreEscaped(data.body_html))
                script nonce=(data.nonce) { (PreEscaped(PANE_SCRIPT)) }
            }
        }
    }
}

/// Wraps inline description text as a minimal HTML fragment.
///
/// Used for payloads without a Markdown file; the text is escaped, never
/// interpreted as markup.
pub fn inline_fragment(description: &str) -> String {
    html! { p { (description) } }.into_string()
}
