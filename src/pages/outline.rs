//! Outline index page for the static preview.

use maud::{DOCTYPE, Markup, html};

use crate::outline::NavNode;

/// One root group and its (already flattened) child nodes.
pub struct OutlineGroupData<'a> {
    pub label: &'a str,
    pub nodes: &'a [NavNode],
}

/// Generates the preview index page listing every section of the guide.
///
/// Category headers render as plain list headers; leaves link to their
/// generated section document under `sections/`.
pub fn outline_page(course: &str, groups: &[OutlineGroupData<'_>]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (course) }
                link rel="stylesheet" href="assets/outline.css";
            }
            body {
                div class="container" {
                    h1 { (course) }
                    @for group in groups {
                        section class="outline-group" {
                            h2 { (group.label) }
                            @if group.nodes.is_empty() {
                                p class="empty-state" { "Nothing here yet" }
                            } @else {
                                ul class="outline-list" {
                                    @for node in group.nodes {
                                        @if node.expandable {
                                            li class="outline-category" {
                                                span class="category-title" { (node.label) }
                                                span class="node-description" { (node.description) }
                                            }
                                        } @else {
                                            li class="outline-leaf" {
                                                a href=(format!("sections/{}", section_file_name(&node.label))) {
                                                    (node.label)
                                                }
                                                span class="node-description" { (node.description) }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// File name for a section document derived from its title.
///
/// Lowercases, maps non-alphanumeric runs to single dashes, trims dangling
/// dashes. Titles that collapse to nothing become "section".
pub fn section_file_name(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        return String::from("section.html");
    }

    format!("{}.html", slug)
}
