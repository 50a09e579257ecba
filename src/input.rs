//! Component name resolution.
//! Names come either from the command line or from an interactive prompt;
//! both paths go through the same validation rule.

use crate::error::{Error, Result};
use crate::prompt::Prompter;
use log::debug;
use std::collections::HashSet;
use std::path::Path;

/// Splits the raw input into name tokens on any run of whitespace
/// (spaces, tabs, newlines), dropping leading and trailing whitespace.
pub fn format_input(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Validates raw component name input against the output directory.
///
/// # Returns
/// * `Result<Vec<String>>` - Ordered, distinct component names
///
/// # Errors
/// * `Error::EmptyInput` if the trimmed input is empty
/// * `Error::DuplicateName` if a name appears more than once
/// * `Error::NameCollision` if a name already exists under `output_dir`
pub fn validate_input<P: AsRef<Path>>(input: &str, output_dir: P) -> Result<Vec<String>> {
    let names = format_input(input);
    if names.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut seen = HashSet::new();
    if !names.iter().all(|name| seen.insert(name.as_str())) {
        return Err(Error::DuplicateName);
    }

    let output_dir = output_dir.as_ref();
    if let Some(name) = names.iter().find(|name| output_dir.join(name).exists()) {
        return Err(Error::NameCollision { name: name.clone() });
    }

    Ok(names)
}

/// Resolves the list of components to generate.
///
/// Names passed on the command line are validated as one space-joined string;
/// when none were passed the user is asked for them.
///
/// # Errors
/// * Any validation error for command-line names
/// * `Error::Cancelled` if the prompt was aborted
pub fn resolve_components<P: AsRef<Path>>(
    prompter: &dyn Prompter,
    names: &[String],
    output_dir: P,
) -> Result<Vec<String>> {
    let output_dir = output_dir.as_ref();

    let components = if names.is_empty() {
        let validate = |input: &str| {
            validate_input(input, output_dir).map(|_| ()).map_err(|e| e.to_string())
        };
        let input = prompter
            .text("Enter component name(s):", &validate)?
            .ok_or(Error::Cancelled)?;
        validate_input(&input, output_dir)?
    } else {
        validate_input(&names.join(" "), output_dir)?
    };

    debug!("Resolved components: {components:?}");
    Ok(components)
}
