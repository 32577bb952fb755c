//! Section template assembly.
//!
//! The template body is an ordered list of fragment generators. Each one
//! looks at the section context and either contributes text or nothing.

use crate::slugify;
use crate::strategy::{ScriptStrategy, StylesheetStrategy};

/// Everything the fragments need to render one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContext {
    pub slug: String,
    pub display_name: String,
    pub stylesheet: StylesheetStrategy,
    pub script: ScriptStrategy,
}

impl SectionContext {
    pub fn new(slug: &str, stylesheet: StylesheetStrategy, script: ScriptStrategy) -> Self {
        Self {
            slug: slug.to_string(),
            display_name: slugify::display_name(slug),
            stylesheet,
            script,
        }
    }

    pub fn stylesheet_file(&self) -> String {
        stylesheet_file_name(&self.slug)
    }

    pub fn script_file(&self) -> String {
        script_file_name(&self.slug)
    }

    pub fn template_file(&self) -> String {
        template_file_name(&self.slug)
    }
}

pub fn template_file_name(slug: &str) -> String {
    format!("{}.liquid", slug)
}

pub fn stylesheet_file_name(slug: &str) -> String {
    format!("{}-stylesheet.css", slug)
}

pub fn script_file_name(slug: &str) -> String {
    format!("{}-javascript.js", slug)
}

/// Liquid expression resolving an asset file to its served URL.
pub fn asset_url(file: &str) -> String {
    format!("{{{{ '{}' | asset_url }}}}", file)
}

pub type Fragment = fn(&SectionContext) -> Option<String>;

/// Fixed fragment order: stylesheet tag, container, script tag, schema.
pub const SECTION_FRAGMENTS: &[Fragment] =
    &[stylesheet_tag, container_block, script_tag, schema_block];

pub fn render(ctx: &SectionContext) -> String {
    SECTION_FRAGMENTS
        .iter()
        .filter_map(|fragment| fragment(ctx))
        .collect()
}

pub fn stylesheet_tag(ctx: &SectionContext) -> Option<String> {
    let href = asset_url(&ctx.stylesheet_file());
    match ctx.stylesheet {
        StylesheetStrategy::Lazy => Some(format!(
            r#"<link rel="stylesheet" href="{}" media="print" onload="this.media='all'">"#,
            href
        )),
        StylesheetStrategy::Preload => Some(format!(
            r#"<link rel="preload" href="{}" as="style" onload="this.rel='stylesheet'">"#,
            href
        )),
        StylesheetStrategy::RenderBlocking => {
            Some(format!(r#"<link rel="stylesheet" href="{}">"#, href))
        }
        StylesheetStrategy::Skip => None,
    }
}

pub fn container_block(ctx: &SectionContext) -> Option<String> {
    Some(format!("\n\n<div class=\"{}\">\n\n</div>\n\n", ctx.slug))
}

pub fn script_tag(ctx: &SectionContext) -> Option<String> {
    if !ctx.script.creates_asset() {
        return None;
    }

    let src = asset_url(&ctx.script_file());
    let tag = match ctx.script.attribute() {
        Some(attr) => format!(r#"<script src="{}" {}></script>"#, src, attr),
        None => format!(r#"<script src="{}"></script>"#, src),
    };

    Some(format!("\n{}\n", tag))
}

pub fn schema_block(ctx: &SectionContext) -> Option<String> {
    let name = json_string(&ctx.slug);
    let class = json_string(&format!("{}-parent", ctx.slug));
    let preset = json_string(&ctx.display_name);

    Some(format!(
        "\n{{% schema %}}\n{{\n\t\"name\": {name},\n\t\"class\": {class},\n\t\"settings\": [],\n\t\"presets\": [\n\t\t{{\n\t\t\t\"name\": {preset}\n\t\t}}\n\t]\n}}\n{{% endschema %}}\n"
    ))
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
