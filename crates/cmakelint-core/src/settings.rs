use crate::filter::FilterSet;

pub const DEFAULT_SPACES: usize = 2;
pub const DEFAULT_LINE_LENGTH: usize = 80;

/// Resolved configuration used while checking files. It is built once before
/// any file is checked and is never mutated afterwards: in-file pragmas work
/// on a per-file copy of `filters`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub filters: FilterSet,
    /// Indentation must be a multiple of this many spaces.
    pub spaces: usize,
    pub line_length: usize,
    /// Don't print the summary when no findings were reported.
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            filters: FilterSet::new(),
            spaces: DEFAULT_SPACES,
            line_length: DEFAULT_LINE_LENGTH,
            quiet: false,
        }
    }
}
