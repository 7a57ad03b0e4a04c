use kwlint_descriptor::{FieldDescriptor, FileDescriptor};
use tracing::debug;

use crate::{
    annotation::{Annotation, Location},
    error::LintError,
    keywords::registry,
    options::{CheckOptions, EnabledLanguages},
    traits::AnnotationSink,
    utils::quote,
};

pub const PACKAGE_RULE_ID: &str = "PLUGIN_PACKAGE_NO_LANGUAGE_RESERVED_KEYWORDS";
pub const FIELD_RULE_ID: &str = "PLUGIN_FIELD_NO_LANGUAGE_RESERVED_KEYWORDS";

/// Flags every component of the file's package that is a reserved keyword of
/// an enabled language. Files without a package are skipped.
#[tracing::instrument(skip_all, fields(file = %file.name))]
pub fn check_package_no_language_reserved_keywords<S: AnnotationSink + ?Sized>(
    sink: &mut S,
    options: &CheckOptions,
    file: &FileDescriptor,
) -> Result<(), LintError> {
    let enabled = options.resolve(registry())?;
    check_package_no_language_reserved_keywords_with(sink, &enabled, file);
    Ok(())
}

/// Same as [`check_package_no_language_reserved_keywords`], with the enabled
/// languages already resolved.
///
/// Emits one annotation per (component, language) match, components in
/// declaration order and languages in registry order.
pub fn check_package_no_language_reserved_keywords_with<S: AnnotationSink + ?Sized>(
    sink: &mut S,
    enabled: &EnabledLanguages<'_>,
    file: &FileDescriptor,
) {
    let Some(package) = file.package.as_deref() else {
        return;
    };

    for component in file.package_components() {
        for language in enabled.iter() {
            if !language.is_reserved(component) {
                continue;
            }
            debug!(package, component, language = language.name(), "package component is reserved");
            sink.add_annotation(Annotation {
                rule_id:  PACKAGE_RULE_ID,
                message:  format!(
                    "Package name {} should not use {} reserved keyword {}.",
                    quote(package),
                    language.name(),
                    quote(component),
                ),
                location: Location::new(&file.name, file.package_span),
            });
        }
    }
}

/// Flags a field whose whole name is a reserved keyword of an enabled
/// language. The name is not split.
#[tracing::instrument(skip_all, fields(file = file_name, field = %field.name))]
pub fn check_field_no_language_reserved_keywords<S: AnnotationSink + ?Sized>(
    sink: &mut S,
    options: &CheckOptions,
    file_name: &str,
    field: &FieldDescriptor,
) -> Result<(), LintError> {
    let enabled = options.resolve(registry())?;
    check_field_no_language_reserved_keywords_with(sink, &enabled, file_name, field);
    Ok(())
}

pub fn check_field_no_language_reserved_keywords_with<S: AnnotationSink + ?Sized>(
    sink: &mut S,
    enabled: &EnabledLanguages<'_>,
    file_name: &str,
    field: &FieldDescriptor,
) {
    for language in enabled.iter() {
        if !language.is_reserved(&field.name) {
            continue;
        }
        debug!(field = %field.name, language = language.name(), "field name is reserved");
        sink.add_annotation(Annotation {
            rule_id:  FIELD_RULE_ID,
            message:  format!(
                "Field name {} should not use {} reserved keyword {}.",
                quote(&field.name),
                language.name(),
                quote(&field.name),
            ),
            location: Location::new(file_name, field.span),
        });
    }
}
