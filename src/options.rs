//! Interactive collection of the language, stylesheet and file set.

use crate::error::{Error, Result};
use crate::extension::{Extension, Language, Stylesheet};
use crate::prompt::Prompter;
use log::debug;

/// Everything the user picked for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub language: Language,
    pub stylesheet: Stylesheet,
    pub files: Vec<Extension>,
}

impl Selection {
    /// Whether a stylesheet file is among the files to generate.
    pub fn stylesheet_selected(&self) -> bool {
        self.files.iter().any(Extension::is_stylesheet)
    }

    /// The stylesheet component templates should import, if any.
    pub fn stylesheet_tag(&self) -> Option<Stylesheet> {
        self.stylesheet_selected().then_some(self.stylesheet)
    }
}

/// The three file kinds offered for a language and stylesheet, in prompt order.
pub fn file_choices(language: Language, stylesheet: Stylesheet) -> [Extension; 3] {
    [
        language.extension(),
        stylesheet.extension(),
        language.test_extension(),
    ]
}

pub fn choose_language(prompter: &dyn Prompter) -> Result<Language> {
    let items: Vec<String> = Language::ALL.iter().map(|l| l.title().to_string()).collect();
    let index = prompter
        .select("Select language", &items, 1)?
        .ok_or(Error::Cancelled)?;
    Language::ALL
        .get(index)
        .copied()
        .ok_or_else(|| Error::PromptError(format!("invalid language index {index}")))
}

pub fn choose_stylesheet(prompter: &dyn Prompter) -> Result<Stylesheet> {
    let items: Vec<String> = Stylesheet::ALL.iter().map(|s| s.to_string()).collect();
    let index = prompter
        .select("Select stylesheet language", &items, 1)?
        .ok_or(Error::Cancelled)?;
    Stylesheet::ALL
        .get(index)
        .copied()
        .ok_or_else(|| Error::PromptError(format!("invalid stylesheet index {index}")))
}

pub fn choose_files_to_generate(
    prompter: &dyn Prompter,
    language: Language,
    stylesheet: Stylesheet,
) -> Result<Vec<Extension>> {
    let choices = file_choices(language, stylesheet);
    let items = vec![
        format!("Component file (.{})", choices[0]),
        format!("Stylesheet (.{})", choices[1]),
        format!("Tests (.{})", choices[2]),
    ];
    let indices = prompter
        .multi_select("Which files would you like to generate?", &items, &[true; 3])?
        .ok_or(Error::Cancelled)?;

    Ok(indices.into_iter().filter_map(|i| choices.get(i).copied()).collect())
}

/// Runs the option prompts in order. A language or stylesheet given up front
/// skips its prompt.
pub fn collect_options(
    prompter: &dyn Prompter,
    language: Option<Language>,
    stylesheet: Option<Stylesheet>,
) -> Result<Selection> {
    let language = match language {
        Some(language) => {
            debug!("Language preset to {}", language.extension());
            language
        }
        None => choose_language(prompter)?,
    };
    let stylesheet = match stylesheet {
        Some(stylesheet) => {
            debug!("Stylesheet preset to {stylesheet}");
            stylesheet
        }
        None => choose_stylesheet(prompter)?,
    };
    let files = choose_files_to_generate(prompter, language, stylesheet)?;

    let selection = Selection {
        language,
        stylesheet,
        files,
    };
    debug!("Selected options: {selection:?}");
    Ok(selection)
}
