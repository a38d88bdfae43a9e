use std::path::Path;

use crate::category::Category;
use crate::diagnostic::Diagnostic;
use crate::filter::FilterSet;
use crate::package::PackageState;
use crate::settings::Settings;

/// Casing of the commands seen so far in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCase {
    Upper,
    Lower,
}

// The object that collects diagnostics while a file is checked. One per
// analyzed file, so nothing in here can leak into the next file.
#[derive(Debug)]
pub struct Checker<'a> {
    pub diagnostics: Vec<Diagnostic>,
    pub filename: &'a Path,
    pub settings: &'a Settings,
    // The configured filters plus those added by `# lint_cmake: ` pragmas in
    // this file.
    pub filters: FilterSet,
    // Fixed by the first command of the file that isn't mixed case.
    pub command_case: Option<CommandCase>,
    pub package: PackageState,
}

impl<'a> Checker<'a> {
    pub fn new(filename: &'a Path, settings: &'a Settings) -> Self {
        Self {
            diagnostics: vec![],
            filename,
            settings,
            filters: settings.filters.clone(),
            command_case: None,
            package: PackageState::default(),
        }
    }

    pub fn report(&mut self, line: usize, category: Category, message: impl Into<String>) {
        if !self.filters.should_report(category) {
            return;
        }
        self.diagnostics.push(Diagnostic::new(
            self.filename.to_path_buf(),
            line,
            category,
            message.into(),
        ));
    }
}
