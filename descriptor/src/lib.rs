//! Descriptor model for already-parsed schema files.
//!
//! The rules never see schema source text. A host parses its schema files and
//! hands over one [`FileDescriptor`] per file, carrying the declared package,
//! the messages and their fields, and the source spans needed to anchor
//! annotations.
//!
//! ```
//! use kwlint_descriptor::*;
//!
//! let file = FileDescriptor {
//!     name:         "acme/private/v1/user.proto".to_owned(),
//!     package:      Some("acme.private.v1".to_owned()),
//!     package_span: Some(SourceSpan::new(3, 1, 3, 25)),
//!     messages:     vec![MessageDescriptor {
//!         name:            "User".to_owned(),
//!         fields:          vec![FieldDescriptor::new("id", SourceSpan::new(6, 3, 6, 17))],
//!         nested_messages: vec![],
//!     }],
//!     is_import:    false,
//! };
//!
//! assert_eq!(file.package_components().collect::<Vec<_>>(), ["acme", "private", "v1"]);
//! assert_eq!(file.all_fields().count(), 1);
//! ```

pub mod span;
pub mod types;

pub use span::*;
pub use types::*;
