//! kwlint
//!
//! Entry point for hosts that want to run the reserved keyword checks.
//!
//! - Descriptor model (re-exported from `kwlint-descriptor`)
//! - Rules, options, annotations and errors (re-exported from `kwlint-rules`)
//! - Helpers for loading descriptor sets from JSON and rendering annotations

use std::{fs, path::Path};

use serde::Serialize;
use tracing::debug;

pub use kwlint_descriptor::{DescriptorSet, FieldDescriptor, FileDescriptor, MessageDescriptor, SourceSpan};
pub use kwlint_rules::{
    registry, run_check, Annotation, AnnotationSink, CheckOptions, CheckRequest, LintError,
    Location, FIELD_RULE_ID, PACKAGE_RULE_ID,
};

/// Parse a JSON descriptor set.
pub fn parse_descriptor_set(json: &str) -> Result<DescriptorSet, LintError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON descriptor set from disk.
pub fn read_descriptor_set(path: &Path) -> Result<DescriptorSet, LintError> {
    let text = fs::read_to_string(path)?;
    let set = parse_descriptor_set(&text)?;
    debug!(path = %path.display(), files = set.files.len(), "loaded descriptor set");
    Ok(set)
}

/// Read `CheckOptions` from a JSON object such as `{"enabled_languages": ["go"]}`.
pub fn read_options(path: &Path) -> Result<CheckOptions, LintError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Run a check over a JSON descriptor set.
pub fn check_descriptor_set_json(json: &str, request: &CheckRequest) -> Result<Vec<Annotation>, LintError> {
    let set = parse_descriptor_set(json)?;
    run_check(request, &set.files)
}

#[derive(Serialize)]
struct Report<'a> {
    annotations: &'a [Annotation],
}

/// Render annotations as a pretty-printed JSON report.
pub fn annotations_to_json(annotations: &[Annotation]) -> Result<String, LintError> {
    Ok(serde_json::to_string_pretty(&Report { annotations })?)
}

pub mod rules {
    pub use kwlint_rules::catalog::{default_rules, find_rule, RuleDef, RuleKind, RuleTarget, RULES};
    pub use kwlint_rules::rules::*;
}

pub mod keywords {
    pub use kwlint_rules::keywords::{registry, Language, Registry};
}

pub mod error {
    pub use kwlint_rules::error::LintError;
}
