//! compgen scaffolds boilerplate source files for UI components.
//! It resolves component names, asks which language, stylesheet and files to
//! emit, and writes one directory per component.

/// Command-line interface module for the compgen application
pub mod cli;

/// Error types and handling for the compgen application
pub mod error;

/// Supported file kinds, languages and stylesheets
pub mod extension;

/// Per-component file planning and exclusive writes
pub mod generator;

/// Component name validation and resolution
pub mod input;

/// Logger setup
pub mod logger;

/// Language, stylesheet and file set selection
pub mod options;

/// User input and interaction handling
pub mod prompt;

/// Summary of generated files
pub mod report;

/// Template rendering engine
pub mod renderer;

/// Component source templates
pub mod template;
