use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::category::Category;

/// A single finding. `line` is 1-based; line 0 is used for findings about
/// the file as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub filename: PathBuf,
    pub line: usize,
    pub category: Category,
    pub message: String,
}

impl Diagnostic {
    pub fn new(filename: PathBuf, line: usize, category: Category, message: String) -> Self {
        Self { filename, line, category, message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}]",
            self.filename.display(),
            self.line,
            self.message,
            self.category
        )
    }
}
