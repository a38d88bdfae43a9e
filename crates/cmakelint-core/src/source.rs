use crate::lexer::{Token, tokenize};

const FIRST_LINE_MARKER: &str = "# Lines start at 1";
const LAST_LINE_MARKER: &str = "# Lines end here";

/// Remove comments and the content of quoted strings from `line`.
///
/// `in_quote` says whether a quoted string opened on a previous line is still
/// open at the start of this one. The returned flag is the same state at the
/// end of this line.
///
/// The quote characters themselves are kept, so `set(X "a # b")` becomes
/// `set(X "")`. A quote preceded by an unescaped backslash (`\"`) never
/// opens or closes a string, while `\\"` does.
pub fn clean_comments(line: &str, in_quote: bool) -> (String, bool) {
    if !line.contains(['#', '"']) {
        if in_quote {
            return (String::new(), in_quote);
        }
        return (line.to_string(), in_quote);
    }

    let mut in_quote = in_quote;
    let mut cleansed = String::with_capacity(line.len());
    let mut escaped = false;

    for c in line.chars() {
        match c {
            '"' if !escaped => {
                in_quote = !in_quote;
                cleansed.push(c);
            }
            '#' if !in_quote => break,
            _ if !in_quote => cleansed.push(c),
            _ => {}
        }
        escaped = c == '\\' && !escaped;
    }

    cleansed.truncate(cleansed.trim_end().len());
    (cleansed, in_quote)
}

/// The raw and cleansed lines of one file.
///
/// Index 0 and the last index hold synthetic marker lines so that real lines
/// are addressed by their 1-based line number.
#[derive(Debug, Clone)]
pub struct SourceLines {
    raw: Vec<String>,
    cleansed: Vec<String>,
    has_carriage_return: bool,
}

impl SourceLines {
    pub fn new(contents: &str) -> Self {
        let mut raw = vec![FIRST_LINE_MARKER.to_string()];
        let mut has_carriage_return = false;

        for line in contents.split_inclusive('\n') {
            let line = line.strip_suffix('\n').unwrap_or(line);
            let stripped = line.trim_end_matches('\r');
            if stripped.len() != line.len() {
                has_carriage_return = true;
            }
            raw.push(stripped.to_string());
        }
        raw.push(LAST_LINE_MARKER.to_string());

        let mut in_quote = false;
        let cleansed = raw
            .iter()
            .map(|line| {
                let (cleansed, quote) = clean_comments(line, in_quote);
                in_quote = quote;
                cleansed
            })
            .collect();

        Self { raw, cleansed, has_carriage_return }
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the file has no real lines.
    pub fn is_empty(&self) -> bool {
        self.raw.len() <= 2
    }

    /// Numbers of the real lines of the file, without the markers.
    pub fn line_numbers(&self) -> std::ops::Range<usize> {
        1..self.raw.len() - 1
    }

    pub fn raw(&self, line: usize) -> &str {
        &self.raw[line]
    }

    pub fn cleansed(&self, line: usize) -> &str {
        &self.cleansed[line]
    }

    /// Whether any line ended with `\r` before it was stripped.
    pub fn has_carriage_return(&self) -> bool {
        self.has_carriage_return
    }

    /// Tokens of `rest` (a suffix of the cleansed line `line`) followed by the
    /// tokens of every following cleansed line, each tagged with its line
    /// number.
    pub fn tokens_from<'a>(
        &'a self,
        line: usize,
        rest: &'a str,
    ) -> impl Iterator<Item = (usize, Token<'a>)> + 'a {
        std::iter::once((line, rest))
            .chain((line + 1..self.len()).map(move |i| (i, self.cleansed(i))))
            .flat_map(|(i, text)| tokenize(text).map(move |token| (i, token)))
    }
}
