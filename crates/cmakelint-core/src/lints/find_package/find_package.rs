use crate::category::Category;
use crate::checker::Checker;
use crate::lexer::{CommandCall, ParenBalance, TokenKind, parse_command};
use crate::package::{expected_package_name, is_find_module};
use crate::source::SourceLines;

/// ## What it does
///
/// In a Find module (`Find<Package>.cmake`), records the use of the
/// standard-args helper and checks that `find_package_handle_standard_args()`
/// is given the uppercase package name as first argument.
///
/// ## Example
///
/// In `FindFOO.cmake`:
///
/// ```cmake
/// include(FindPackageHandleStandardArgs)
/// find_package_handle_standard_args(Foo DEFAULT_MSG FOO_LIBRARY)
/// ```
///
/// Use instead:
///
/// ```cmake
/// include(FindPackageHandleStandardArgs)
/// find_package_handle_standard_args(FOO DEFAULT_MSG FOO_LIBRARY)
/// ```
pub fn find_package(checker: &mut Checker, source: &SourceLines, line: usize) {
    let Some(command) = parse_command(source.cleansed(line)) else {
        return;
    };

    match command.name.to_lowercase().as_str() {
        "include" => {
            if let Some(module) = first_argument(source, line, &command) {
                checker.package.include(module);
            }
        }
        "find_package_handle_standard_args" => {
            let argument = first_argument(source, line, &command).unwrap_or_default();
            let expected = expected_package_name(checker.filename).unwrap_or_default();
            checker.package.use_stdargs();
            if argument != expected {
                checker.report(
                    line,
                    Category::PackageStdargs,
                    format!(
                        "Weird variable passed to std args, should be {expected} not {argument}"
                    ),
                );
            }
        }
        _ => {}
    }
}

/// ## What it does
///
/// Once a Find module has been fully read, checks that it both included
/// `FindPackageHandleStandardArgs` and called
/// `find_package_handle_standard_args()`. Findings are reported at line 0.
///
/// The package state of the checker is reset afterwards.
pub fn package_consistency(checker: &mut Checker) {
    let state = std::mem::take(&mut checker.package);
    if !is_find_module(checker.filename) {
        return;
    }
    for message in state.missing() {
        checker.report(0, Category::PackageConsistency, message);
    }
}

// The first word inside the parentheses of `command` that isn't the command
// name itself. The arguments may continue on the following lines.
fn first_argument<'a>(
    source: &'a SourceLines,
    line: usize,
    command: &CommandCall<'a>,
) -> Option<&'a str> {
    let mut balance = ParenBalance::new();
    source
        .tokens_from(line, command.arguments)
        .take_while(|(_, token)| !balance.step(token))
        .map(|(_, token)| token)
        .find(|token| token.kind == TokenKind::Identifier && token.text != command.name)
        .map(|token| token.text)
}
