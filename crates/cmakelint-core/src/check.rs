use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::Checker;
use crate::diagnostic::Diagnostic;
use crate::directive::{apply_lint_pragmas, check_lint_pragma};
use crate::fs::is_cmake_file;
use crate::lints::*;
use crate::package::is_find_module;
use crate::settings::Settings;
use crate::source::SourceLines;

/// What happened to one of the paths passed to [check].
#[derive(Debug)]
pub enum FileOutcome {
    /// Not a CMake file, nothing was checked.
    Ignored,
    Checked(Vec<Diagnostic>),
}

/// Check every path in order. A file that cannot be read produces an error
/// for that path only; the remaining files are still checked.
pub fn check(paths: &[PathBuf], settings: &Settings) -> Vec<(PathBuf, Result<FileOutcome>)> {
    paths
        .iter()
        .map(|path| {
            let outcome = if is_cmake_file(path) {
                check_path(path, settings).map(FileOutcome::Checked)
            } else {
                tracing::debug!("Skipping {}", path.display());
                Ok(FileOutcome::Ignored)
            };
            (path.clone(), outcome)
        })
        .collect()
}

pub fn check_path(path: &Path, settings: &Settings) -> Result<Vec<Diagnostic>> {
    tracing::debug!("Checking {}", path.display());
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let contents = String::from_utf8_lossy(&bytes);

    Ok(check_contents(&contents, path, settings))
}

// Takes the content of a file and returns its (possibly empty) findings, in
// the order in which they were found.
pub fn check_contents(contents: &str, path: &Path, settings: &Settings) -> Vec<Diagnostic> {
    let source = SourceLines::new(contents);
    let mut checker = Checker::new(path, settings);

    apply_lint_pragmas(&mut checker, &source);

    file_name(&mut checker);
    carriage_return(&mut checker, &source);

    let in_find_module = is_find_module(path);

    for line in source.line_numbers() {
        check_lint_pragma(&mut checker, &source, line);
        line_length(&mut checker, &source, line);
        command_case(&mut checker, &source, line);
        indentation(&mut checker, &source, line);
        command_spaces(&mut checker, &source, line);
        tabs(&mut checker, &source, line);
        trailing_whitespace(&mut checker, &source, line);
        repeated_logic(&mut checker, &source, line);
        if in_find_module {
            find_package(&mut checker, &source, line);
        }
    }

    package_consistency(&mut checker);

    checker.diagnostics
}
