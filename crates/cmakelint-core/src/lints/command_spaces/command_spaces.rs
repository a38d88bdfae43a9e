use crate::category::Category;
use crate::checker::Checker;
use crate::lexer::{ParenBalance, TokenKind, leading_spaces, parse_command};
use crate::source::SourceLines;

/// ## What it does
///
/// Checks the whitespace around the parentheses of a command:
///
/// - there must be no whitespace between the command name and `(`,
/// - the whitespace right after `(` must match the whitespace right before
///   the matching `)`, also when the arguments span several lines. On a
///   continuation line, the indentation of the line is not counted.
///
/// A command whose closing parenthesis can't be found is reported as a
/// syntax error.
///
/// ## Example
///
/// ```cmake
/// set (X 1)
/// add_library( demo demo.cpp)
/// ```
///
/// Use instead:
///
/// ```cmake
/// set(X 1)
/// add_library(demo demo.cpp)
/// ```
pub fn command_spaces(checker: &mut Checker, source: &SourceLines, line: usize) {
    let Some(command) = parse_command(source.cleansed(line)) else {
        return;
    };

    if !command.gap.is_empty() {
        checker.report(
            line,
            Category::WhitespaceExtra,
            format!("Extra spaces between '{}' and its ()", command.name),
        );
    }

    let spaces_after_open = command
        .arguments
        .chars()
        .take_while(|c| c.is_whitespace())
        .count();

    let mut balance = ParenBalance::new();
    let mut current_line = line;
    let mut whitespace_before = "";
    let mut end = None;

    for (i, token) in source.tokens_from(line, command.arguments) {
        if i != current_line {
            current_line = i;
            whitespace_before = "";
        }
        if balance.step(&token) {
            end = Some((i, whitespace_before));
            break;
        }
        whitespace_before = match token.kind {
            TokenKind::Whitespace => token.text,
            _ => "",
        };
    }

    let Some((end_line, whitespace_before)) = end else {
        checker.report(line, Category::Syntax, "Unable to find the end of this command");
        return;
    };

    let mut spaces_before_end = whitespace_before.chars().count();
    if end_line != line {
        let indent = leading_spaces(source.cleansed(end_line));
        if spaces_before_end >= indent {
            spaces_before_end -= indent;
        }
    }

    if spaces_after_open != spaces_before_end {
        checker.report(
            line,
            Category::WhitespaceMismatch,
            "Mismatching spaces inside () after command",
        );
    }
}
