use serde::{Deserialize, Serialize};

use crate::span::SourceSpan;

/// Separator between the components of a package name.
pub const PACKAGE_SEPARATOR: char = '.';

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorSet {
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Path of the file, as reported back in annotation locations.
    pub name:         String,
    #[serde(default)]
    pub package:      Option<String>,
    /// Span of the `package` statement, when the host resolved one.
    #[serde(default)]
    pub package_span: Option<SourceSpan>,
    #[serde(default)]
    pub messages:     Vec<MessageDescriptor>,
    /// Set for files that were only reached through imports.
    #[serde(default)]
    pub is_import:    bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    pub name:            String,
    #[serde(default)]
    pub fields:          Vec<FieldDescriptor>,
    #[serde(default)]
    pub nested_messages: Vec<MessageDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub span: Option<SourceSpan>,
}

impl FieldDescriptor {
    pub fn new(name: &str, span: SourceSpan) -> Self {
        FieldDescriptor { name: name.to_owned(), span: Some(span) }
    }
}

impl FileDescriptor {
    /// Splits the declared package on `.`, in declaration order.
    ///
    /// Yields nothing when the file declares no package. Empty components are
    /// passed through as-is; package syntax is the host's concern.
    pub fn package_components(&self) -> impl Iterator<Item = &str> {
        self.package
            .as_deref()
            .into_iter()
            .flat_map(|package| package.split(PACKAGE_SEPARATOR))
    }

    /// Every field of every message in the file, nested messages included.
    pub fn all_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.messages.iter().flat_map(|message| message.all_fields())
    }
}

impl MessageDescriptor {
    /// Depth-first walk: a message's own fields come before those of its
    /// nested messages.
    pub fn all_fields(&self) -> Box<dyn Iterator<Item = &FieldDescriptor> + '_> {
        Box::new(
            self.fields
                .iter()
                .chain(self.nested_messages.iter().flat_map(|nested| nested.all_fields())),
        )
    }
}
