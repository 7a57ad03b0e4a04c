//! kwlint-rules
//!
//! This crate implements:
//!  1) The keyword registry (`keywords`): reserved words per target language,
//!  2) The `enabled_languages` option resolver (`options`),
//!  3) The package and field reserved-keyword rules (`rules`),
//!  4) Rule metadata (`catalog`) and a batch driver over many files (`check`),
//!  5) Error types (`LintError`) and the `AnnotationSink` trait.

pub mod error;
pub mod utils;
pub mod keywords;
pub mod options;
pub mod annotation;
pub mod traits;
pub mod rules;
pub mod catalog;
pub mod check;

pub use annotation::{Annotation, Location};
pub use check::{run_check, CheckRequest};
pub use error::LintError;
pub use keywords::{registry, Language, Registry};
pub use options::{resolve_enabled_languages, CheckOptions, EnabledLanguages};
pub use rules::{
    check_field_no_language_reserved_keywords,
    check_package_no_language_reserved_keywords,
    FIELD_RULE_ID,
    PACKAGE_RULE_ID,
};
pub use traits::AnnotationSink;
