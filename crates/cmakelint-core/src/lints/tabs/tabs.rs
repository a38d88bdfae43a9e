use crate::category::Category;
use crate::checker::Checker;
use crate::source::SourceLines;

/// ## What it does
///
/// Checks for tab characters anywhere in a line.
///
/// ## Why is this bad?
///
/// Tabs render with a different width depending on the editor, which breaks
/// the indentation rules.
pub fn tabs(checker: &mut Checker, source: &SourceLines, line: usize) {
    if source.raw(line).contains('\t') {
        checker.report(line, Category::WhitespaceTabs, "Tab found; please use spaces");
    }
}
