//! User input and interaction handling.
//!
//! Every prompt returns `Ok(None)` when the user aborts it, so callers decide
//! explicitly what a cancellation means.

use crate::error::{Error, Result};
use dialoguer::{Input, MultiSelect, Select};
use std::io;

/// Inline validation for free-text prompts. An `Err` keeps the prompt open
/// and shows the message.
pub type TextValidator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Trait for interactive prompt backends.
pub trait Prompter {
    /// Asks for free text, re-prompting until `validate` accepts the value.
    fn text(&self, prompt: &str, validate: TextValidator<'_>) -> Result<Option<String>>;

    /// Single choice, returns the selected index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>>;

    /// Multiple choice, returns the selected indices in item order.
    fn multi_select(
        &self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Option<Vec<usize>>>;
}

/// Terminal prompts backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

/// An interrupted terminal read is the user backing out, anything else is a real failure.
fn cancelled_or_error<T>(err: dialoguer::Error) -> Result<Option<T>> {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        e => Err(Error::PromptError(e.to_string())),
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, validate: TextValidator<'_>) -> Result<Option<String>> {
        let result = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| validate(input.as_str()))
            .interact_text();

        match result {
            Ok(input) => Ok(Some(input)),
            Err(e) => cancelled_or_error(e),
        }
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .or_else(cancelled_or_error)
    }

    fn multi_select(
        &self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Option<Vec<usize>>> {
        MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact_opt()
            .or_else(cancelled_or_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_is_cancel() {
        let err = dialoguer::Error::IO(io::Error::from(io::ErrorKind::Interrupted));
        let result: Result<Option<usize>> = cancelled_or_error(err);
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_other_io_error_is_prompt_error() {
        let err = dialoguer::Error::IO(io::Error::new(
            io::ErrorKind::NotConnected,
            "not a terminal",
        ));
        let result: Result<Option<usize>> = cancelled_or_error(err);
        match result {
            Err(Error::PromptError(message)) => assert!(message.contains("not a terminal")),
            other => panic!("Expected PromptError, got {other:?}"),
        }
    }
}
