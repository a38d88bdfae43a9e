use serde::{Serialize, Serializer};
use std::fmt;

/// The closed set of finding categories. Names are the strings users see in
/// the output and match against with filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    ConventionFilename,
    LineLength,
    PackageConsistency,
    PackageStdargs,
    ReadabilityLogic,
    ReadabilityMixedcase,
    ReadabilityWonkycase,
    Syntax,
    WhitespaceEol,
    WhitespaceExtra,
    WhitespaceIndent,
    WhitespaceMismatch,
    WhitespaceNewline,
    WhitespaceTabs,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::ConventionFilename,
        Category::LineLength,
        Category::PackageConsistency,
        Category::PackageStdargs,
        Category::ReadabilityLogic,
        Category::ReadabilityMixedcase,
        Category::ReadabilityWonkycase,
        Category::Syntax,
        Category::WhitespaceEol,
        Category::WhitespaceExtra,
        Category::WhitespaceIndent,
        Category::WhitespaceMismatch,
        Category::WhitespaceNewline,
        Category::WhitespaceTabs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::ConventionFilename => "convention/filename",
            Category::LineLength => "linelength",
            Category::PackageConsistency => "package/consistency",
            Category::PackageStdargs => "package/stdargs",
            Category::ReadabilityLogic => "readability/logic",
            Category::ReadabilityMixedcase => "readability/mixedcase",
            Category::ReadabilityWonkycase => "readability/wonkycase",
            Category::Syntax => "syntax",
            Category::WhitespaceEol => "whitespace/eol",
            Category::WhitespaceExtra => "whitespace/extra",
            Category::WhitespaceIndent => "whitespace/indent",
            Category::WhitespaceMismatch => "whitespace/mismatch",
            Category::WhitespaceNewline => "whitespace/newline",
            Category::WhitespaceTabs => "whitespace/tabs",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Whether any category name starts with `prefix`. This is what makes a
    /// filter valid.
    pub fn is_known_prefix(prefix: &str) -> bool {
        Self::ALL.iter().any(|c| c.name().starts_with(prefix))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
