mod types;

pub use types::*;

use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::{Error, Result};

/// Line-based interactive prompts over a reader/writer pair.
///
/// Prompts are written to the writer (stderr for the CLI) so stdout stays
/// reserved for the JSON response. A dismissed prompt (EOF or a blank
/// answer) is `Ok(None)`.
pub struct PromptEngine<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl PromptEngine<io::StdinLock<'static>, io::Stderr> {
    /// Engine on stdin/stderr with automatic TTY detection.
    pub fn stdio() -> Self {
        let interactive = io::stdin().is_terminal() && io::stderr().is_terminal();
        Self::new(io::stdin().lock(), io::stderr(), interactive)
    }
}

impl<R: BufRead, W: Write> PromptEngine<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    /// Ask for free text. Non-interactive sessions cannot answer and get an error.
    pub fn text(&mut self, prompt: &TextPrompt) -> Result<Option<String>> {
        if !self.interactive {
            return Err(Error::validation_invalid_argument(
                "tty",
                "Section name prompt requires an interactive terminal",
                None,
                None,
            )
            .with_hint("Pass --name <NAME> when running without a terminal"));
        }

        loop {
            match &prompt.placeholder {
                Some(placeholder) => self.write(&format!("{} [{}]: ", prompt.question, placeholder))?,
                None => self.write(&format!("{}: ", prompt.question))?,
            }

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(None);
            }

            match (prompt.validate)(&line) {
                Some(message) => self.write(&format!("  {}\n", message))?,
                None => return Ok(Some(line)),
            }
        }
    }

    /// Pick one option by number. Non-interactive sessions dismiss the picker.
    pub fn select(&mut self, prompt: &SelectPrompt) -> Result<Option<usize>> {
        if !self.interactive || prompt.options.is_empty() {
            return Ok(None);
        }

        self.write(&format!("{}\n", prompt.question))?;
        for (i, opt) in prompt.options.iter().enumerate() {
            match &opt.description {
                Some(desc) => self.write(&format!("  [{}] {}  \u{2022}  {}\n", i + 1, opt.label, desc))?,
                None => self.write(&format!("  [{}] {}\n", i + 1, opt.label))?,
            }
        }

        loop {
            self.write(&format!(
                "Enter choice (1-{}, blank to dismiss): ",
                prompt.options.len()
            ))?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }

            match trimmed.parse::<usize>() {
                Ok(n) if n >= 1 && n <= prompt.options.len() => return Ok(Some(n - 1)),
                _ => self.write(&format!("  '{}' is not a valid choice\n", trimmed))?,
            }
        }
    }

    /// Show items and ask a yes/no question. Returns the default when non-interactive.
    pub fn confirm_list(&mut self, prompt: &ConfirmListPrompt) -> Result<bool> {
        if !self.interactive {
            return Ok(prompt.default);
        }

        self.write(&format!("{}\n", prompt.header))?;
        for item in &prompt.items {
            self.write(&format!("  \u{2022} {}\n", item))?;
        }

        let suffix = if prompt.default { "[Y/n]" } else { "[y/N]" };
        self.write(&format!("{} {}: ", prompt.confirm_question, suffix))?;

        let Some(line) = self.read_line()? else {
            return Ok(prompt.default);
        };
        let answer = line.trim().to_lowercase();
        if answer.is_empty() {
            return Ok(prompt.default);
        }

        Ok(answer.starts_with('y'))
    }

    /// Display a message (only in interactive mode).
    pub fn message(&mut self, msg: &str) -> Result<()> {
        if self.interactive {
            self.write(&format!("{}\n", msg))?;
        }
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| Error::internal_io(e.to_string(), Some("write prompt".to_string())))
    }

    /// Read one line without its line terminator. `None` on EOF.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::internal_io(e.to_string(), Some("read input".to_string())))?;

        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
