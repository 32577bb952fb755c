use clap::Args;

use quickstruct::slugify;
use quickstruct::strategy::{ScriptStrategy, StylesheetStrategy};
use quickstruct::template::{self, SectionContext};
use quickstruct::Error;

use super::section::parse_strategies;

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Section name
    #[arg(long)]
    pub name: String,

    /// Stylesheet loading: lazy, preload, render-blocking or skip (default: skip)
    #[arg(long, value_name = "STRATEGY")]
    pub css: Option<String>,

    /// Script loading: defer, async, render-blocking or skip (default: skip)
    #[arg(long, value_name = "STRATEGY")]
    pub js: Option<String>,
}

/// Render the section template as raw text without touching the filesystem.
pub fn run_raw(args: PreviewArgs) -> quickstruct::Result<(String, i32)> {
    if let Some(problem) = slugify::validate_name_length(&args.name) {
        return Err(Error::validation_invalid_name(args.name, problem));
    }

    let (stylesheet, script) = parse_strategies(args.css.as_deref(), args.js.as_deref())?;
    let slug = slugify::normalize(&args.name);
    let ctx = SectionContext::new(
        &slug,
        StylesheetStrategy::or_skip(stylesheet),
        ScriptStrategy::or_skip(script),
    );

    Ok((template::render(&ctx), 0))
}
