//! Command-line interface implementation for compgen.
//! Provides argument parsing and help text formatting using clap.

use crate::extension::{Language, Stylesheet};
use crate::generator::GenerationOptions;
use clap::Parser;
use std::path::PathBuf;

/// Default directory components are generated into.
pub const DEFAULT_OUTPUT_DIR: &str = "components";

/// Command-line arguments structure for compgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "compgen: UI component scaffolding tool", long_about = None)]
pub struct Args {
    /// Names of the components to generate. Asked for interactively when omitted
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// Directory the components are generated into
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub path: PathBuf,

    /// Fill generated files with boilerplate instead of creating them empty
    #[arg(short, long)]
    pub template: bool,

    /// Generate functional components instead of class components
    #[arg(short, long)]
    pub functional: bool,

    /// Component language, skips the language prompt
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Stylesheet language, skips the stylesheet prompt
    #[arg(short, long, value_enum)]
    pub stylesheet: Option<Stylesheet>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            output_root: self.path.clone(),
            render_templates: self.template,
            functional: self.functional,
        }
    }
}

/// Parses command line arguments, exiting with clap's error handling on failure.
pub fn get_args() -> Args {
    Args::parse()
}
