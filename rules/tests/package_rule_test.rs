#![cfg(test)]

use kwlint_descriptor::{FileDescriptor, SourceSpan};
use kwlint_rules::{
    check_package_no_language_reserved_keywords, registry, Annotation, CheckOptions, LintError,
    Location, PACKAGE_RULE_ID,
};

fn file(package: Option<&str>) -> FileDescriptor {
    FileDescriptor {
        name:         "acme/v1/user.proto".to_owned(),
        package:      package.map(str::to_owned),
        package_span: package.map(|p| SourceSpan::new(1, 1, 1, 10 + p.len())),
        ..Default::default()
    }
}

fn check(options: &CheckOptions, file: &FileDescriptor) -> Result<Vec<Annotation>, LintError> {
    let mut annotations: Vec<Annotation> = Vec::new();
    check_package_no_language_reserved_keywords(&mut annotations, options, file)?;
    Ok(annotations)
}

#[test]
fn test_private_package_java() {
    let file = file(Some("private.v1"));
    let annotations = check(&CheckOptions::with_languages(&["java"]), &file).unwrap();

    assert_eq!(
        annotations,
        vec![Annotation {
            rule_id:  PACKAGE_RULE_ID,
            message:  r#"Package name "private.v1" should not use Java reserved keyword "private"."#.to_owned(),
            location: Location::new("acme/v1/user.proto", Some(SourceSpan::new(1, 1, 1, 20))),
        }]
    );
}

#[test]
fn test_switch_package_only_c_enabled() {
    let file = file(Some("switch.v1"));
    let annotations = check(&CheckOptions::with_languages(&["c"]), &file).unwrap();

    assert_eq!(annotations.len(), 1);
    assert_eq!(
        annotations[0].message,
        r#"Package name "switch.v1" should not use C reserved keyword "switch"."#
    );
}

#[test]
fn test_switch_package_all_languages() {
    let file = file(Some("switch.v1"));
    let annotations = check(&CheckOptions::default(), &file).unwrap();

    let expected: Vec<&str> = registry()
        .languages()
        .iter()
        .filter(|language| language.is_reserved("switch"))
        .map(|language| language.name())
        .collect();
    assert!(expected.len() > 1);
    assert_eq!(annotations.len(), expected.len());
    for (annotation, name) in annotations.iter().zip(&expected) {
        assert!(annotation.message.contains(&format!("use {name} reserved keyword \"switch\"")));
    }
}

#[test]
fn test_no_package_declared() {
    let file = file(None);
    assert!(check(&CheckOptions::default(), &file).unwrap().is_empty());
    assert!(check(&CheckOptions::with_languages(&["go"]), &file).unwrap().is_empty());
}

#[test]
fn test_clean_package() {
    let file = file(Some("acme.billing.v1"));
    assert!(check(&CheckOptions::default(), &file).unwrap().is_empty());
}

#[test]
fn test_multiple_components_in_declaration_order() {
    let file = file(Some("acme.package.import.v1"));
    let annotations = check(&CheckOptions::with_languages(&["go"]), &file).unwrap();
    let messages: Vec<&str> = annotations.iter().map(|a| a.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            r#"Package name "acme.package.import.v1" should not use Go reserved keyword "package"."#,
            r#"Package name "acme.package.import.v1" should not use Go reserved keyword "import"."#,
        ]
    );
}

#[test]
fn test_missing_package_span_falls_back_to_file() {
    let file = FileDescriptor {
        name:    "bare.proto".to_owned(),
        package: Some("goto".to_owned()),
        ..Default::default()
    };
    let annotations = check(&CheckOptions::with_languages(&["go"]), &file).unwrap();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].location, Location::file("bare.proto"));
}

#[test]
fn test_invalid_language_fails_even_without_package() {
    let err = check(&CheckOptions::with_languages(&["klingon"]), &file(None)).unwrap_err();
    assert!(matches!(err, LintError::InvalidLanguage { ref given, .. } if given == "klingon"));
}

#[test]
fn test_every_keyword_of_every_language() {
    let registry = registry();
    for language in registry.languages() {
        let only = CheckOptions::with_languages(&[language.key()]);
        let others: Vec<&str> = registry.keys().filter(|key| *key != language.key()).collect();
        let excluded = CheckOptions::with_languages(&others);
        let needle = format!("use {} reserved keyword", language.name());

        for keyword in language.keywords() {
            for package in [keyword.to_string(), format!("acme.{keyword}.v1")] {
                let annotations = check(&only, &file(Some(package.as_str()))).unwrap();
                assert_eq!(annotations.len(), 1, "{} / {package}", language.name());
                assert_eq!(
                    annotations[0].message,
                    format!(
                        "Package name {:?} should not use {} reserved keyword {:?}.",
                        package,
                        language.name(),
                        keyword
                    )
                );

                let annotations = check(&excluded, &file(Some(package.as_str()))).unwrap();
                assert!(
                    annotations.iter().all(|a| !a.message.contains(&needle)),
                    "{} / {package} reported while disabled",
                    language.name()
                );
            }
        }
    }
}
