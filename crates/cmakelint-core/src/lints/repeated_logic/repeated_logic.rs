use crate::category::Category;
use crate::checker::Checker;
use crate::lexer::{ParenBalance, TokenKind, parse_command};
use crate::source::SourceLines;

const LOGIC_COMMANDS: [&str; 6] = [
    "else",
    "endforeach",
    "endfunction",
    "endif",
    "endmacro",
    "endwhile",
];

/// ## What it does
///
/// Checks for block-closing commands (`else()`, `endif()`, `endforeach()`,
/// `endfunction()`, `endmacro()`, `endwhile()`) that repeat the expression
/// of the command that opened the block.
///
/// ## Why is this bad?
///
/// Repeating the condition is optional in CMake. It has to be kept in sync
/// with the opening command and is mostly noise.
///
/// ## Example
///
/// ```cmake
/// if(WIN32)
///   add_definitions(-DWIN32)
/// endif(WIN32)
/// ```
///
/// Use instead:
///
/// ```cmake
/// if(WIN32)
///   add_definitions(-DWIN32)
/// endif()
/// ```
pub fn repeated_logic(checker: &mut Checker, source: &SourceLines, line: usize) {
    let Some(command) = parse_command(source.cleansed(line)) else {
        return;
    };

    let keyword = command.name.to_lowercase();
    if !LOGIC_COMMANDS.contains(&keyword.as_str()) {
        return;
    }

    let mut balance = ParenBalance::new();
    let has_expression = source
        .tokens_from(line, command.arguments)
        .take_while(|(_, token)| !balance.step(token))
        .any(|(_, token)| token.kind != TokenKind::Whitespace);

    if has_expression {
        checker.report(
            line,
            Category::ReadabilityLogic,
            format!(
                "Expression repeated inside {keyword}; better to use only {}()",
                command.name
            ),
        );
    }
}
