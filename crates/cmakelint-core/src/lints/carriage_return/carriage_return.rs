use crate::category::Category;
use crate::checker::Checker;
use crate::source::SourceLines;

/// ## What it does
///
/// Checks for `\r\n` (or stray `\r`) line endings. This doesn't depend on
/// the platform cmakelint runs on. Reported once per file, at line 0.
pub fn carriage_return(checker: &mut Checker, source: &SourceLines) {
    if source.has_carriage_return() {
        checker.report(
            0,
            Category::WhitespaceNewline,
            "Unexpected carriage return found; better to use only \\n",
        );
    }
}
