use crate::category::Category;
use crate::checker::Checker;
use crate::source::SourceLines;

/// ## What it does
///
/// Checks for whitespace at the end of a line.
pub fn trailing_whitespace(checker: &mut Checker, source: &SourceLines, line: usize) {
    if source.raw(line).chars().last().is_some_and(char::is_whitespace) {
        checker.report(line, Category::WhitespaceEol, "Line ends in whitespace");
    }
}
