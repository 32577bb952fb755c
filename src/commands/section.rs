use clap::Args;

use quickstruct::prompt::PromptEngine;
use quickstruct::scaffold::{self, ScaffoldOptions, ScaffoldOutcome};
use quickstruct::settings::{Settings, SettingsOverrides};
use quickstruct::strategy::{ScriptStrategy, StylesheetStrategy};
use quickstruct::utils::validation;
use quickstruct::CliHost;

use super::CmdResult;

#[derive(Args, Debug)]
pub struct SectionArgs {
    /// Section name (skips the name prompt, max 25 characters)
    #[arg(long)]
    pub name: Option<String>,

    /// Stylesheet loading: lazy, preload, render-blocking or skip
    #[arg(long, value_name = "STRATEGY")]
    pub css: Option<String>,

    /// Script loading: defer, async, render-blocking or skip
    #[arg(long, value_name = "STRATEGY")]
    pub js: Option<String>,

    /// Workspace folder (repeatable; the first existing one is used)
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<String>,

    /// Ask before replacing files that already exist
    #[arg(long)]
    pub confirm_overwrite: bool,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Command used to open created files (defaults to $QUICKSTRUCT_EDITOR, $VISUAL, $EDITOR)
    #[arg(long, value_name = "CMD")]
    pub editor: Option<String>,

    /// Do not pause on completion notifications
    #[arg(long)]
    pub no_wait: bool,
}

pub(crate) fn stylesheet_values() -> Vec<&'static str> {
    StylesheetStrategy::ALL.iter().map(|s| s.option().value).collect()
}

pub(crate) fn script_values() -> Vec<&'static str> {
    ScriptStrategy::ALL.iter().map(|s| s.option().value).collect()
}

pub(crate) fn parse_strategies(
    css: Option<&str>,
    js: Option<&str>,
) -> quickstruct::Result<(Option<StylesheetStrategy>, Option<ScriptStrategy>)> {
    let stylesheet =
        validation::parse_optional(css, "css", StylesheetStrategy::parse, &stylesheet_values())?;
    let script = validation::parse_optional(js, "js", ScriptStrategy::parse, &script_values())?;
    Ok((stylesheet, script))
}

pub fn run_json(args: SectionArgs) -> CmdResult<ScaffoldOutcome> {
    let (stylesheet, script) = parse_strategies(args.css.as_deref(), args.js.as_deref())?;

    let settings = Settings::from_env(SettingsOverrides {
        roots: args.roots,
        confirm_overwrite: args.confirm_overwrite,
        dry_run: args.dry_run,
        editor: args.editor,
        no_wait: args.no_wait,
    });

    let options = ScaffoldOptions {
        name: args.name,
        stylesheet,
        script,
        confirm_overwrite: settings.confirm_overwrite,
        dry_run: settings.dry_run,
    };

    let editor = if settings.dry_run {
        None
    } else {
        settings.editor
    };
    let mut host = CliHost::new(PromptEngine::stdio(), settings.roots, editor, settings.wait);

    let outcome = scaffold::run(&mut host, &options)?;
    if let ScaffoldOutcome::Cancelled { .. } = outcome {
        crate::tty::status("Section creation cancelled, nothing was written");
    }

    Ok((outcome, 0))
}
