//! The create-section workflow.
//!
//! One linear pass: resolve the workspace, collect the name, pick the two
//! load strategies, build the write plan, apply it, then open each file
//! and show its notification. Dismissing any prompt ends the run before
//! anything is written.

use serde::Serialize;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::host::Host;
use crate::plan::{WritePlan, WrittenFile};
use crate::prompt::{ConfirmListPrompt, SelectOption, SelectPrompt, TextPrompt};
use crate::slugify;
use crate::strategy::{
    ChoiceOption, ScriptStrategy, StylesheetStrategy, SCRIPT_PLACEHOLDER, STYLESHEET_PLACEHOLDER,
};
use crate::template::SectionContext;

pub const NAME_PROMPT: &str = "Enter the name of the new section file (max 25 characters)";
pub const NAME_PLACEHOLDER: &str = "Section name";

/// Answers supplied up front. Anything left `None` is asked through the host.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    pub name: Option<String>,
    pub stylesheet: Option<StylesheetStrategy>,
    pub script: Option<ScriptStrategy>,
    pub confirm_overwrite: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    NameDismissed,
    OverwriteDeclined,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldReport {
    pub slug: String,
    pub display_name: String,
    pub root: String,
    pub stylesheet: StylesheetStrategy,
    pub script: ScriptStrategy,
    pub files: Vec<WrittenFile>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScaffoldOutcome {
    Created(ScaffoldReport),
    /// Dry run: the files that would have been written.
    Planned(ScaffoldReport),
    Cancelled { reason: CancelReason },
}

pub fn run<H: Host>(host: &mut H, options: &ScaffoldOptions) -> Result<ScaffoldOutcome> {
    let root = first_workspace_root(host)?;

    let name = match &options.name {
        Some(name) => name.clone(),
        None => match host.prompt_text(&name_prompt())? {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Ok(ScaffoldOutcome::Cancelled {
                    reason: CancelReason::NameDismissed,
                })
            }
        },
    };

    if let Some(problem) = slugify::validate_name_length(&name) {
        return Err(Error::validation_invalid_name(name, problem));
    }

    let slug = slugify::normalize(&name);
    slugify::validate_slug(&slug)?;

    let stylesheet = match options.stylesheet {
        Some(choice) => choice,
        None => {
            let picked = host.prompt_choice(&select_prompt(
                STYLESHEET_PLACEHOLDER,
                StylesheetStrategy::options(),
            ))?;
            StylesheetStrategy::or_skip(picked.and_then(StylesheetStrategy::from_index))
        }
    };

    let script = match options.script {
        Some(choice) => choice,
        None => {
            let picked = host.prompt_choice(&select_prompt(
                SCRIPT_PLACEHOLDER,
                ScriptStrategy::options(),
            ))?;
            ScriptStrategy::or_skip(picked.and_then(ScriptStrategy::from_index))
        }
    };

    let ctx = SectionContext::new(&slug, stylesheet, script);
    let plan = WritePlan::for_section(&root, &ctx);

    if options.confirm_overwrite && !options.dry_run {
        let existing: Vec<String> = plan
            .existing()
            .iter()
            .map(|w| w.path.display().to_string())
            .collect();

        if !existing.is_empty() {
            let confirmed = host.confirm(&ConfirmListPrompt {
                header: "These files already exist and will be replaced:".to_string(),
                items: existing,
                confirm_question: "Overwrite them?".to_string(),
                default: false,
            })?;
            if !confirmed {
                return Ok(ScaffoldOutcome::Cancelled {
                    reason: CancelReason::OverwriteDeclined,
                });
            }
        }
    }

    let report = |files: Vec<WrittenFile>| ScaffoldReport {
        slug: ctx.slug.clone(),
        display_name: ctx.display_name.clone(),
        root: root.display().to_string(),
        stylesheet,
        script,
        files,
    };

    if options.dry_run {
        return Ok(ScaffoldOutcome::Planned(report(plan.preview())));
    }

    let written = plan.apply()?;
    show_feedback(host, &ctx.slug, &written);

    Ok(ScaffoldOutcome::Created(report(written)))
}

fn first_workspace_root<H: Host>(host: &H) -> Result<PathBuf> {
    host.workspace_roots()
        .into_iter()
        .next()
        .ok_or_else(Error::workspace_not_open)
}

fn name_prompt() -> TextPrompt {
    TextPrompt {
        question: NAME_PROMPT.to_string(),
        placeholder: Some(NAME_PLACEHOLDER.to_string()),
        validate: slugify::validate_name_length,
    }
}

fn select_prompt(question: &str, options: Vec<ChoiceOption>) -> SelectPrompt {
    SelectPrompt {
        question: question.to_string(),
        options: options
            .into_iter()
            .map(|o| SelectOption {
                label: o.label.to_string(),
                description: Some(o.description.to_string()),
            })
            .collect(),
    }
}

/// Open each written file and hold its notification. Open failures are logged only.
fn show_feedback<H: Host>(host: &mut H, slug: &str, written: &[WrittenFile]) {
    for file in written {
        let path = PathBuf::from(&file.path);
        if let Err(err) = host.open_file(&path) {
            log_status!("editor", "Could not open {}: {}", file.path, err);
        }
        host.notify_progress(&file.kind.notification(slug), file.kind.display_duration());
    }
}
