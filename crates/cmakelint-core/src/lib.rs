//! Core of cmakelint, a style checker for CMake files.
//!
//! Files are read line by line, comments and quoted strings are stripped, and
//! a fixed set of checks runs over every line. See [check::check_contents]
//! for the order in which they run.

pub mod category;
pub mod check;
pub mod checker;
pub mod config;
pub mod diagnostic;
pub mod directive;
pub mod discovery;
pub mod filter;
pub mod fs;
pub mod lexer;
pub(crate) mod lints;
pub mod package;
pub mod settings;
pub mod source;


pub use category::Category;
pub use check::{FileOutcome, check, check_contents, check_path};
pub use diagnostic::Diagnostic;
pub use settings::Settings;
