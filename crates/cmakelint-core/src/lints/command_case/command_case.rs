use crate::category::Category;
use crate::checker::{Checker, CommandCase};
use crate::lexer::parse_command;
use crate::source::SourceLines;

/// ## What it does
///
/// Checks that command names are written either all in lowercase or all in
/// uppercase, and that a file sticks to one of the two. The first command of
/// the file decides which one.
///
/// ## Example
///
/// ```cmake
/// project(demo)
/// ADD_LIBRARY(demo demo.cpp)
/// Target_Link_Libraries(demo m)
/// ```
///
/// Use instead:
///
/// ```cmake
/// project(demo)
/// add_library(demo demo.cpp)
/// target_link_libraries(demo m)
/// ```
pub fn command_case(checker: &mut Checker, source: &SourceLines, line: usize) {
    let Some(command) = parse_command(source.cleansed(line)) else {
        return;
    };

    let Some(case) = case_of(command.name) else {
        checker.report(line, Category::ReadabilityWonkycase, "Do not use mixed case commands");
        return;
    };

    match checker.command_case {
        None => checker.command_case = Some(case),
        Some(seen) if seen != case => {
            checker.report(
                line,
                Category::ReadabilityMixedcase,
                "Do not mix upper and lower case commands",
            );
        }
        Some(_) => {}
    }
}

// `None` for mixed case. Names without any letter count as uppercase.
fn case_of(name: &str) -> Option<CommandCase> {
    if name == name.to_uppercase() {
        Some(CommandCase::Upper)
    } else if name == name.to_lowercase() {
        Some(CommandCase::Lower)
    } else {
        None
    }
}
