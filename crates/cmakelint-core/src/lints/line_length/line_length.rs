use crate::category::Category;
use crate::checker::Checker;
use crate::source::SourceLines;

/// ## What it does
///
/// Checks for lines longer than the configured maximum (80 characters by
/// default, see `--linelength`).
///
/// ## Why is this bad?
///
/// Long lines are hard to read in side-by-side diffs and narrow terminals.
pub fn line_length(checker: &mut Checker, source: &SourceLines, line: usize) {
    let max = checker.settings.line_length;
    if source.raw(line).chars().count() > max {
        checker.report(
            line,
            Category::LineLength,
            format!("Lines should be <= {max} characters long"),
        );
    }
}
