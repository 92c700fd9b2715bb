//! Terminal prompter backed by `dialoguer`.

use console::Term;
use dialoguer::Input;

use gostart_core::{
    application::{ApplicationError, ports::Prompter},
    error::{GoStartError, GoStartResult},
};

/// Prompter with line editing for interactive terminals.
///
/// Questions and feedback are drawn on standard output, next to the rest of
/// the init output. An empty answer is allowed so the wizard can substitute
/// its default.
#[derive(Debug)]
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, message: &str) -> GoStartResult<Option<String>> {
        // dialoguer appends its own ": " separator.
        let prompt = message.trim_end().trim_end_matches(':');
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map(Some)
            .map_err(|e| prompt_error(e.to_string()))
    }

    fn say(&mut self, line: &str) -> GoStartResult<()> {
        self.term
            .write_line(line)
            .map_err(|e| prompt_error(e.to_string()))
    }
}

fn prompt_error(reason: String) -> GoStartError {
    ApplicationError::PromptFailed { reason }.into()
}
