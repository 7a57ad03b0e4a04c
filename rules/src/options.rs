use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::LintError,
    keywords::{Language, Registry},
};

/// Option key overriding the set of checked languages. Absent or empty means
/// every registered language is checked.
pub const ENABLED_LANGUAGES_OPTION_KEY: &str = "enabled_languages";

/// Options shared by every rule in this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOptions {
    #[serde(default)]
    pub enabled_languages: Vec<String>,
}

impl CheckOptions {
    pub fn with_languages<S: AsRef<str>>(languages: &[S]) -> Self {
        CheckOptions {
            enabled_languages: languages.iter().map(|l| l.as_ref().to_owned()).collect(),
        }
    }

    pub fn resolve<'r>(&self, registry: &'r Registry) -> Result<EnabledLanguages<'r>, LintError> {
        resolve_enabled_languages(registry, &self.enabled_languages)
    }
}

/// The languages a single check actually looks at, in registry order.
#[derive(Debug, Clone)]
pub struct EnabledLanguages<'r> {
    languages: Vec<&'r Language>,
}

impl<'r> EnabledLanguages<'r> {
    pub fn iter(&self) -> impl Iterator<Item = &'r Language> + '_ {
        self.languages.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.languages.iter().map(|language| language.key())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.languages.iter().any(|language| language.key() == key)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Turns the caller's `enabled_languages` value into the set of languages to
/// check.
///
/// Entries are lower-cased before lookup. The first entry that names no
/// registered language fails the whole call; the error carries the entry as
/// given and every valid key.
pub fn resolve_enabled_languages<'r, S: AsRef<str>>(
    registry: &'r Registry,
    requested: &[S],
) -> Result<EnabledLanguages<'r>, LintError> {
    if requested.is_empty() {
        return Ok(EnabledLanguages { languages: registry.languages().iter().collect() });
    }

    let mut keys = HashSet::with_capacity(requested.len());
    for given in requested {
        let given = given.as_ref();
        let key = given.to_lowercase();
        if !registry.contains_key(&key) {
            return Err(LintError::InvalidLanguage {
                given: given.to_owned(),
                valid: registry.keys().collect::<Vec<_>>().join(", "),
            });
        }
        keys.insert(key);
    }

    let languages = registry
        .languages()
        .iter()
        .filter(|language| keys.contains(language.key()))
        .collect();
    Ok(EnabledLanguages { languages })
}
