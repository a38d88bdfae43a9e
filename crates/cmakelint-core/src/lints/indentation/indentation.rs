use crate::category::Category;
use crate::checker::Checker;
use crate::lexer::leading_spaces;
use crate::source::SourceLines;

/// ## What it does
///
/// Checks that the number of spaces a line starts with is a multiple of the
/// configured indentation width (2 by default, see `--spaces`).
///
/// ## Example
///
/// ```cmake
/// if(WIN32)
///    add_definitions(-DWIN32)
/// endif()
/// ```
///
/// Use instead:
///
/// ```cmake
/// if(WIN32)
///   add_definitions(-DWIN32)
/// endif()
/// ```
pub fn indentation(checker: &mut Checker, source: &SourceLines, line: usize) {
    let spaces = checker.settings.spaces;
    let remainder = leading_spaces(source.raw(line)).checked_rem(spaces);
    if remainder.is_some_and(|r| r != 0) {
        checker.report(
            line,
            Category::WhitespaceIndent,
            format!("Weird indentation; use {spaces} spaces"),
        );
    }
}
