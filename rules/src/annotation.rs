use std::fmt;

use kwlint_descriptor::SourceSpan;
use serde::Serialize;

/// Where an annotation points: a whole file, or a span inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file_name: String,
    pub span:      Option<SourceSpan>,
}

impl Location {
    pub fn file(file_name: &str) -> Self {
        Location { file_name: file_name.to_owned(), span: None }
    }

    /// Falls back to a file-level location when `span` is `None`.
    pub fn new(file_name: &str, span: Option<SourceSpan>) -> Self {
        Location { file_name: file_name.to_owned(), span }
    }
}

/// A single finding handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub rule_id:  &'static str,
    pub message:  String,
    pub location: Location,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "{}:{}", self.file_name, span),
            None       => write!(f, "{}", self.file_name),
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.location, self.message, self.rule_id)
    }
}
