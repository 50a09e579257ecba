//! Final summary printed after a successful run.

use console::{style, Emoji};
use std::path::{Path, PathBuf};

static INFO: Emoji<'_, '_> = Emoji("ℹ ", "i ");
static SUCCESS: Emoji<'_, '_> = Emoji("✔ ", "√ ");

/// One `- <path>` line per written file, relative to the output root.
pub fn summary_lines<P: AsRef<Path>>(output_root: P, written: &[PathBuf]) -> Vec<String> {
    let output_root = output_root.as_ref();
    written
        .iter()
        .map(|file| {
            let relative = file.strip_prefix(output_root).unwrap_or(file);
            format!("- {}", relative.display())
        })
        .collect()
}

pub fn print_summary<P: AsRef<Path>>(output_root: P, written: &[PathBuf]) {
    println!();
    println!(
        "{}{}",
        style(&INFO).blue(),
        style("The following files have been generated:").bold()
    );
    for line in summary_lines(output_root, written) {
        println!("{line}");
    }
    println!();
    println!("{}{}", style(&SUCCESS).green(), style("Done").bold());
}
