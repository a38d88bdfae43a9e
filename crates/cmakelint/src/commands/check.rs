use cmakelint_core::config::{ArgsConfig, RcOptions, build_config};
use cmakelint_core::discovery::resolve_config;
use cmakelint_core::{Category, Diagnostic, FileOutcome};

use anyhow::{Result, bail};
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};

use crate::args::Args;
use crate::output_format::{ConciseEmitter, Emitter, JsonEmitter, OutputFormat};
use crate::status::ExitStatus;

const DEFAULT_FILENAME: &str = "CMakeLists.txt";

pub fn check(args: Args) -> Result<ExitStatus> {
    if args.filter.as_deref() == Some("") {
        print_categories();
        return Ok(ExitStatus::Success);
    }

    let cwd = env::current_dir()?;

    let rc = resolve_config(args.config.as_deref(), &cwd)
        .map(|path| RcOptions::from_file(&path))
        .transpose()?;

    let args_config = ArgsConfig {
        filter: args.filter.clone(),
        spaces: args.spaces,
        line_length: args.linelength,
        quiet: args.quiet,
    };
    let settings = build_config(&args_config, rc.as_ref())?;

    let paths = files_to_check(&args.files, &cwd)?;
    let file_results = cmakelint_core::check(&paths, &settings);

    let mut stdout = std::io::stdout();
    let mut all_diagnostics: Vec<Diagnostic> = Vec::new();
    let mut n_errors = 0usize;

    for (path, result) in file_results {
        match result {
            Ok(FileOutcome::Ignored) => {
                if args.output_format == OutputFormat::Json {
                    tracing::info!("Ignoring file: {}", path.display());
                } else {
                    println!("Ignoring file: {}", path.display());
                }
            }
            Ok(FileOutcome::Checked(diagnostics)) => {
                // Text findings are printed as soon as a file is done so that
                // they stay grouped with the "Ignoring file" notes.
                if args.output_format == OutputFormat::Concise {
                    ConciseEmitter.emit(&mut stdout, &diagnostics)?;
                }
                all_diagnostics.extend(diagnostics);
            }
            Err(err) => {
                eprintln!("{}: {}", "Error".red().bold(), err);
                n_errors += 1;
            }
        }
    }

    if args.output_format == OutputFormat::Json {
        JsonEmitter.emit(&mut stdout, &all_diagnostics)?;
    }

    let total = all_diagnostics.len();
    if total > 0 || !settings.quiet {
        eprintln!("Total Errors: {total}");
    }

    if total > 0 || n_errors > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// The paths given on the command line, or `CMakeLists.txt` in the working
/// directory when there are none.
fn files_to_check(files: &[String], cwd: &Path) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files.iter().map(PathBuf::from).collect());
    }
    if cwd.join(DEFAULT_FILENAME).is_file() {
        return Ok(vec![PathBuf::from(DEFAULT_FILENAME)]);
    }
    bail!("No files were specified!")
}

fn print_categories() {
    for category in Category::ALL {
        eprintln!("  {category}");
    }
}
