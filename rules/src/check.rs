use kwlint_descriptor::FileDescriptor;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    annotation::Annotation,
    catalog::{select_rules, RuleTarget},
    error::LintError,
    keywords::registry,
    options::CheckOptions,
    rules::{
        check_field_no_language_reserved_keywords_with,
        check_package_no_language_reserved_keywords_with,
    },
};

/// One check run over a set of files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub options:  CheckOptions,
    /// Rules to run. Empty means every default rule.
    #[serde(default)]
    pub rule_ids: Vec<String>,
}

/// Runs the selected rules over `files` and collects their annotations.
///
/// The enabled languages are resolved once for the whole run, so an invalid
/// `enabled_languages` entry fails before any file is looked at. Files marked
/// `is_import` are skipped. Annotations come out in file order; within a file
/// the package rule's come before the field rule's.
#[tracing::instrument(skip_all, fields(file_count = files.len()))]
pub fn run_check(request: &CheckRequest, files: &[FileDescriptor]) -> Result<Vec<Annotation>, LintError> {
    let enabled = request.options.resolve(registry())?;
    let rules = select_rules(&request.rule_ids)?;
    debug!(
        languages = enabled.len(),
        rules = rules.len(),
        "resolved check request"
    );

    let mut annotations: Vec<Annotation> = Vec::new();
    for file in files.iter().filter(|file| !file.is_import) {
        for rule in &rules {
            match rule.target {
                RuleTarget::File => {
                    check_package_no_language_reserved_keywords_with(&mut annotations, &enabled, file);
                }
                RuleTarget::Field => {
                    for field in file.all_fields() {
                        check_field_no_language_reserved_keywords_with(
                            &mut annotations,
                            &enabled,
                            &file.name,
                            field,
                        );
                    }
                }
            }
        }
    }

    debug!(annotation_count = annotations.len(), "check finished");
    Ok(annotations)
}
