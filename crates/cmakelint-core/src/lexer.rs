//! A small lexer for cleansed CMake lines.
//!
//! It only knows about the handful of token kinds the checks need: words,
//! whitespace runs, parentheses and quotes. Everything else is a single-char
//! `Other` token.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Whitespace,
    OpenParen,
    CloseParen,
    Quote,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    rest: &'a str,
}

impl<'a> Lexer<'a> {
    /// The text that has not been tokenized yet.
    pub fn remainder(&self) -> &'a str {
        self.rest
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;

        let (kind, len) = if is_word_char(first) {
            (TokenKind::Identifier, run_length(self.rest, is_word_char))
        } else if first.is_whitespace() {
            (TokenKind::Whitespace, run_length(self.rest, char::is_whitespace))
        } else {
            let kind = match first {
                '(' => TokenKind::OpenParen,
                ')' => TokenKind::CloseParen,
                '"' => TokenKind::Quote,
                _ => TokenKind::Other,
            };
            (kind, first.len_utf8())
        };

        let (text, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(Token { kind, text })
    }
}

pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer { rest: source }
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn run_length(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.find(|c: char| !pred(c)).unwrap_or(text.len())
}

/// Number of space characters at the start of `line`. Tabs don't count.
pub fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

/// The start of a command invocation: `name (arguments...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandCall<'a> {
    pub name: &'a str,
    /// Whitespace between the name and the opening parenthesis.
    pub gap: &'a str,
    /// Everything after the opening parenthesis on this line.
    pub arguments: &'a str,
}

/// Recognize a line that starts a command invocation, i.e. optional
/// indentation, a word, optional whitespace and `(`.
pub fn parse_command(line: &str) -> Option<CommandCall<'_>> {
    let mut lexer = tokenize(line);

    let mut token = lexer.next()?;
    if token.kind == TokenKind::Whitespace {
        token = lexer.next()?;
    }
    if token.kind != TokenKind::Identifier {
        return None;
    }
    let name = token.text;

    let mut token = lexer.next()?;
    let mut gap = "";
    if token.kind == TokenKind::Whitespace {
        gap = token.text;
        token = lexer.next()?;
    }
    if token.kind != TokenKind::OpenParen {
        return None;
    }

    Some(CommandCall { name, gap, arguments: lexer.remainder() })
}

/// Paren depth of a command invocation, starting just after its opening
/// parenthesis.
#[derive(Debug, Clone, Copy)]
pub struct ParenBalance {
    depth: usize,
}

impl ParenBalance {
    pub fn new() -> Self {
        Self { depth: 1 }
    }

    /// Account for `token`. Returns `true` when it is the parenthesis that
    /// closes the invocation.
    pub fn step(&mut self, token: &Token) -> bool {
        match token.kind {
            TokenKind::OpenParen => self.depth += 1,
            TokenKind::CloseParen => {
                self.depth = self.depth.saturating_sub(1);
                return self.depth == 0;
            }
            _ => {}
        }
        false
    }
}

impl Default for ParenBalance {
    fn default() -> Self {
        Self::new()
    }
}
