//! Per-component file planning and writing.
//!
//! Components are generated one after another. The files of a single
//! component are written concurrently and never overwrite anything that is
//! already on disk.

use crate::error::{Error, Result};
use crate::extension::Extension;
use crate::options::Selection;
use crate::renderer::TemplateRenderer;
use crate::template::render_file;
use log::{debug, trace};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;

/// Caller-supplied generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Directory that holds one subdirectory per component
    pub output_root: PathBuf,
    /// Whether files get template bodies or are created empty
    pub render_templates: bool,
    /// Functional rather than class-style components
    pub functional: bool,
}

/// A single file to be written for a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    pub directory: PathBuf,
    pub component: String,
    pub extension: Extension,
    pub content: String,
}

impl FilePlan {
    pub fn target(&self) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.component, self.extension))
    }
}

/// Plans every selected file for one component, rendering its content.
pub fn plan_component(
    renderer: &dyn TemplateRenderer,
    options: &GenerationOptions,
    selection: &Selection,
    component: &str,
) -> Result<Vec<FilePlan>> {
    let directory = options.output_root.join(component);
    let stylesheet = selection.stylesheet_tag();

    selection
        .files
        .iter()
        .map(|&extension| -> Result<FilePlan> {
            let content = if options.render_templates {
                render_file(renderer, component, extension, options.functional, stylesheet)?
            } else {
                String::new()
            };
            Ok(FilePlan {
                directory: directory.clone(),
                component: component.to_string(),
                extension,
                content,
            })
        })
        .collect()
}

/// Creates `path` and writes `content`, failing if the path already exists.
pub fn write_file_exclusive(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => Error::FileAlreadyExists {
                path: path.to_path_buf(),
            },
            _ => Error::WriteError {
                path: path.to_path_buf(),
                source,
            },
        })?;

    file.write_all(content.as_bytes())
        .map_err(|source| Error::WriteError {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes all plans concurrently and waits for every one of them.
///
/// A failing write does not stop its siblings; the first error in plan order
/// is returned once all writes have finished. Nothing is rolled back.
pub fn write_plans(plans: &[FilePlan]) -> Result<Vec<PathBuf>> {
    let results: Vec<Result<PathBuf>> = thread::scope(|scope| {
        let handles: Vec<_> = plans
            .iter()
            .map(|plan| {
                scope.spawn(move || {
                    let target = plan.target();
                    trace!("Writing file: {}", target.display());
                    write_file_exclusive(&target, &plan.content).map(|_| target)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .collect()
    });

    results.into_iter().collect()
}

/// Generates the files of a single component inside `output_root/component`.
pub fn generate_component(
    renderer: &dyn TemplateRenderer,
    options: &GenerationOptions,
    selection: &Selection,
    component: &str,
) -> Result<Vec<PathBuf>> {
    let out_dir = options.output_root.join(component);
    debug!("Creating component directory: {}", out_dir.display());
    fs::create_dir_all(&out_dir).map_err(|source| Error::WriteError {
        path: out_dir.clone(),
        source,
    })?;

    let plans = plan_component(renderer, options, selection, component)?;
    write_plans(&plans)
}

/// Generates every component in order, stopping at the first failure.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - All written files, in component then selection order
pub fn generate(
    renderer: &dyn TemplateRenderer,
    options: &GenerationOptions,
    selection: &Selection,
    components: &[String],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for component in components {
        let files = generate_component(renderer, options, selection, component)?;
        debug!("Generated {} file(s) for {component}", files.len());
        written.extend(files);
    }
    Ok(written)
}
