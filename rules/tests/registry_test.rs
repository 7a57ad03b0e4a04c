#![cfg(test)]

use std::collections::HashSet;

use kwlint_rules::keywords::{registry, Registry, LANGUAGES};

#[test]
fn test_registry_keys_are_unique_and_lower_case() {
    let registry = registry();
    let keys: Vec<&str> = registry.keys().collect();
    let unique: HashSet<&str> = keys.iter().copied().collect();
    assert_eq!(keys.len(), unique.len());
    assert_eq!(registry.len(), LANGUAGES.len());

    for language in registry.languages() {
        assert_eq!(language.key(), language.name().to_lowercase());
        assert!(!language.keywords().is_empty(), "{} has no keywords", language.name());
    }
}

#[test]
fn test_registry_order_and_keys() {
    let keys: Vec<&str> = registry().keys().collect();
    assert_eq!(
        keys,
        vec![
            "c", "c#", "c++", "dart", "go", "java", "javascript", "kotlin", "php", "python", "ruby",
            "rust", "swift", "typescript",
        ]
    );
}

#[test]
fn test_registry_lookup() {
    let registry = registry();

    let cpp = registry.get("c++").expect("c++ should be registered");
    assert_eq!(cpp.name(), "C++");
    assert!(cpp.is_reserved("co_await"));

    let csharp = registry.get("c#").expect("c# should be registered");
    assert_eq!(csharp.name(), "C#");

    // Lookup is by key, not display name.
    assert!(registry.get("Java").is_none());
    assert!(registry.get("cobol").is_none());
}

#[test]
fn test_matching_is_case_sensitive() {
    let registry = registry();
    let python = registry.get("python").unwrap();
    assert!(python.is_reserved("None"));
    assert!(!python.is_reserved("none"));
    assert!(python.is_reserved("True"));
    assert!(!python.is_reserved("true"));

    let java = registry.get("java").unwrap();
    assert!(java.is_reserved("class"));
    assert!(!java.is_reserved("Class"));
    assert!(!java.is_reserved("CLASS"));
}

#[test]
fn test_soft_and_reserved_keywords_are_listed() {
    let registry = registry();

    let python = registry.get("python").unwrap();
    for soft in ["match", "case", "type", "_"] {
        assert!(python.is_reserved(soft), "python should reserve {soft:?}");
    }

    let rust = registry.get("rust").unwrap();
    for reserved in ["abstract", "become", "box", "final", "gen", "priv", "typeof", "yield", "union"] {
        assert!(rust.is_reserved(reserved), "rust should reserve {reserved:?}");
    }

    let java = registry.get("java").unwrap();
    for contextual in ["record", "sealed", "var", "yield", "_"] {
        assert!(java.is_reserved(contextual), "java should reserve {contextual:?}");
    }

    let typescript = registry.get("typescript").unwrap();
    for contextual in ["assert", "asserts", "intrinsic", "satisfies", "using", "accessor"] {
        assert!(typescript.is_reserved(contextual), "typescript should reserve {contextual:?}");
    }

    let cpp = registry.get("c++").unwrap();
    for special in ["contract_assert", "pre", "post", "final", "override", "import", "module"] {
        assert!(cpp.is_reserved(special), "c++ should reserve {special:?}");
    }

    let go = registry.get("go").unwrap();
    assert_eq!(go.keywords().len(), 25);
}

#[test]
fn test_custom_registry() {
    const WIDGET: &[&str] = &["gadget"];
    let registry = Registry::new(&[("Widget", WIDGET)]);
    assert_eq!(registry.len(), 1);
    assert!(registry.contains_key("widget"));
    assert!(registry.get("widget").unwrap().is_reserved("gadget"));
}
