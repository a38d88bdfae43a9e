//! In-file filter pragmas.
//!
//! A raw line starting with `# lint_cmake: ` carries a filter list, for
//! instance `# lint_cmake: -whitespace/tabs,+linelength`. The filters apply
//! to the file they appear in and nowhere else.

use crate::category::Category;
use crate::checker::Checker;
use crate::filter::{Filter, FilterError, split_filter_list};
use crate::source::SourceLines;

pub const PRAGMA_PREFIX: &str = "# lint_cmake: ";

/// Parse a pragma line. Returns `None` if the line is not a pragma, otherwise
/// one result per filter of the list.
pub fn parse_lint_pragma(line: &str) -> Option<Vec<Result<Filter, FilterError>>> {
    let list = line.strip_prefix(PRAGMA_PREFIX)?;
    Some(split_filter_list(list).map(str::parse::<Filter>).collect())
}

/// Add the valid filters of every pragma in the file to the checker. This
/// runs before any check so that pragmas cover the whole file, including the
/// findings reported at line 0.
pub fn apply_lint_pragmas(checker: &mut Checker, source: &SourceLines) {
    for line in source.line_numbers() {
        if let Some(entries) = parse_lint_pragma(source.raw(line)) {
            checker.filters.extend(entries.into_iter().flatten());
        }
    }
}

/// Report the invalid entries of a pragma on `line`.
pub fn check_lint_pragma(checker: &mut Checker, source: &SourceLines, line: usize) {
    let Some(entries) = parse_lint_pragma(source.raw(line)) else {
        return;
    };
    for err in entries.into_iter().filter_map(Result::err) {
        checker.report(line, Category::Syntax, err.to_string());
    }
}
