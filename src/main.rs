use anyhow::{Context, Result};
use coursebook::pages::outline::{OutlineGroupData, outline_page, section_file_name};
use coursebook::pages::section::{SectionPageData, inline_fragment, section_page};
use coursebook::{Config, ContentSource, OutlineBuilder, nonce, resolve_in_workspace};
use std::fs;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let builder = OutlineBuilder::new(&config.guide);

    // Load every group up front so a broken document fails the whole run
    // instead of leaving a partial preview behind.
    let roots = builder.root_nodes();
    let mut groups = Vec::new();
    for root in &roots {
        let nodes = builder
            .children(&root.group_id)
            .with_context(|| format!("Failed to load the {} outline", root.label))?;
        groups.push((root.label.clone(), nodes));
    }

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    coursebook::write_css_assets(&assets_dir)?;

    let sections_dir = config.output.join("sections");
    fs::create_dir_all(&sections_dir).context("Failed to create sections directory")?;

    let renderer = coursebook::ContentRenderer::new();
    let workspace_root = config.workspace_root();

    println!("Generating section pages...");

    let mut generated = 0;
    let mut skipped = 0;
    for node in groups.iter().flat_map(|(_, nodes)| nodes) {
        let Some(payload) = &node.payload else {
            continue;
        };

        if let Some(notebook) = payload.notebook()
            && let Err(err) = resolve_in_workspace(&workspace_root, notebook)
        {
            eprintln!("Warning: '{}' links an unusable notebook: {}", payload.title(), err);
        }

        let body_html = match payload.content() {
            ContentSource::File(relative) => {
                match renderer.render_file(config.guide.join(relative)) {
                    Ok(html) => html,
                    Err(err) => {
                        eprintln!("Warning: skipping '{}': {}", payload.title(), err);
                        skipped += 1;
                        continue;
                    }
                }
            }
            ContentSource::Inline(description) => inline_fragment(description),
        };

        let nonce = nonce::generate();
        let document = section_page(SectionPageData {
            title: payload.title(),
            action: payload.notebook(),
            body_html: &body_html,
            nonce: &nonce,
        });

        let section_path = sections_dir.join(section_file_name(payload.title()));
        fs::write(&section_path, document.into_string())
            .with_context(|| format!("Failed to write section page {}", section_path.display()))?;

        generated += 1;
    }

    println!("Generated {} section pages ({} skipped)", generated, skipped);

    let group_data: Vec<OutlineGroupData<'_>> = groups
        .iter()
        .map(|(label, nodes)| OutlineGroupData {
            label: label.as_str(),
            nodes: nodes.as_slice(),
        })
        .collect();

    let index = outline_page(&config.course_title(), &group_data);

    let index_path = config.output.join("index.html");
    fs::write(&index_path, index.into_string())
        .with_context(|| format!("Failed to write outline page to {}", index_path.display()))?;

    println!("Generated: {}", index_path.display());

    Ok(())
}
