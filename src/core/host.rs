//! The editor-facing port used by the scaffold workflow.
//!
//! `Host` is the narrow surface the workflow needs from whatever drives
//! it: prompts, opening files, progress notifications and the list of
//! workspace roots. `CliHost` implements it for a terminal session.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::error::Result;
use crate::prompt::{ConfirmListPrompt, PromptEngine, SelectPrompt, TextPrompt};
use crate::utils::command;

pub trait Host {
    /// Ask for free text. Only input accepted by `prompt.validate` is returned.
    /// `None` means the prompt was dismissed.
    fn prompt_text(&mut self, prompt: &TextPrompt) -> Result<Option<String>>;

    /// Ask for one option. `None` means the picker was dismissed.
    fn prompt_choice(&mut self, prompt: &SelectPrompt) -> Result<Option<usize>>;

    /// Ask a yes/no question about a list of items.
    fn confirm(&mut self, prompt: &ConfirmListPrompt) -> Result<bool>;

    /// Show a file to the user in a persistent (non-preview) editor tab.
    fn open_file(&mut self, path: &Path) -> Result<()>;

    /// Transient notification that stays up for `duration`.
    fn notify_progress(&mut self, title: &str, duration: Duration);

    /// Workspace folders in priority order. Empty when nothing is open.
    fn workspace_roots(&self) -> Vec<PathBuf>;
}

/// Terminal host: prompts on stderr, opens files with an editor command.
pub struct CliHost<R, W> {
    prompts: PromptEngine<R, W>,
    roots: Vec<PathBuf>,
    editor: Option<String>,
    wait: bool,
}

impl<R: BufRead, W: Write> CliHost<R, W> {
    pub fn new(
        prompts: PromptEngine<R, W>,
        roots: Vec<PathBuf>,
        editor: Option<String>,
        wait: bool,
    ) -> Self {
        Self {
            prompts,
            roots,
            editor,
            wait,
        }
    }
}

impl<R: BufRead, W: Write> Host for CliHost<R, W> {
    fn prompt_text(&mut self, prompt: &TextPrompt) -> Result<Option<String>> {
        self.prompts.text(prompt)
    }

    fn prompt_choice(&mut self, prompt: &SelectPrompt) -> Result<Option<usize>> {
        self.prompts.select(prompt)
    }

    fn confirm(&mut self, prompt: &ConfirmListPrompt) -> Result<bool> {
        self.prompts.confirm_list(prompt)
    }

    fn open_file(&mut self, path: &Path) -> Result<()> {
        match &self.editor {
            Some(editor) => command::run_with_path(
                editor,
                path,
                &format!("open {}", path.display()),
            ),
            None => {
                log_status!("editor", "No editor configured, not opening {}", path.display());
                Ok(())
            }
        }
    }

    fn notify_progress(&mut self, title: &str, duration: Duration) {
        if self.prompts.message(&format!("\u{2713} {}", title)).is_err() {
            log_status!("notify", "{}", title);
        }
        if self.wait {
            thread::sleep(duration);
        }
    }

    fn workspace_roots(&self) -> Vec<PathBuf> {
        self.roots.clone()
    }
}
