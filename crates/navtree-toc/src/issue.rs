use core::fmt;

use serde::Serialize;
use strum_macros::Display;

/// What kind of input the builder had to skip over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// An anchor with a title but no `href`. The entry is dropped.
    MissingHref,
    /// A `</ul>` with no open level to close. Ignored.
    UnbalancedClose,
    /// Levels still open when the input ended.
    UnclosedList,
}

/// A recoverable problem found while building a table of contents.
///
/// Issues never change the tree that is built; they only explain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocIssue {
    /// The kind of problem
    pub kind: IssueKind,
    /// 1-based input line, when the strategy works line by line
    pub line: Option<usize>,
    /// Human-readable description
    pub message: String,
}

impl fmt::Display for TocIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {line}: ")?;
        }
        write!(f, "{} [{}]", self.message, self.kind)
    }
}
