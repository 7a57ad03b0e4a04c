use serde::Serialize;

use crate::{
    error::LintError,
    rules::{FIELD_RULE_ID, PACKAGE_RULE_ID},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleKind {
    Lint,
}

/// What a rule is invoked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleTarget {
    /// Once per file not reached only through imports.
    File,
    /// Once per field of such a file.
    Field,
}

/// Metadata a host needs to list, configure, and dispatch a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDef {
    pub id:      &'static str,
    pub purpose: &'static str,
    /// Whether the rule runs when the caller selects no rules explicitly.
    pub default: bool,
    pub kind:    RuleKind,
    pub target:  RuleTarget,
}

pub static RULES: [RuleDef; 2] = [
    RuleDef {
        id:      PACKAGE_RULE_ID,
        purpose: "Checks that all package names have no components that are language-reserved keywords.",
        default: true,
        kind:    RuleKind::Lint,
        target:  RuleTarget::File,
    },
    RuleDef {
        id:      FIELD_RULE_ID,
        purpose: "Checks that no field name is a language-reserved keyword.",
        default: true,
        kind:    RuleKind::Lint,
        target:  RuleTarget::Field,
    },
];

pub fn find_rule(id: &str) -> Option<&'static RuleDef> {
    RULES.iter().find(|rule| rule.id == id)
}

pub fn default_rules() -> impl Iterator<Item = &'static RuleDef> {
    RULES.iter().filter(|rule| rule.default)
}

/// Returns `Err(LintError::InvalidRule(_))` unless ids are unique and upper
/// snake case and every purpose is non-empty.
pub fn validate_rules(rules: &[RuleDef]) -> Result<(), LintError> {
    for (index, rule) in rules.iter().enumerate() {
        if rule.id.is_empty()
            || !rule.id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(LintError::InvalidRule(format!("Rule id \"{}\" must be upper snake case", rule.id)));
        }
        if rule.purpose.trim().is_empty() {
            return Err(LintError::InvalidRule(format!("Rule \"{}\" has no purpose", rule.id)));
        }
        if rules[..index].iter().any(|earlier| earlier.id == rule.id) {
            return Err(LintError::InvalidRule(format!("Rule \"{}\" is defined twice", rule.id)));
        }
    }
    Ok(())
}

/// Resolves explicitly requested rule ids, or the default rules when none are
/// requested. Duplicate ids are collapsed; catalog order is kept.
pub fn select_rules<S: AsRef<str>>(rule_ids: &[S]) -> Result<Vec<&'static RuleDef>, LintError> {
    if rule_ids.is_empty() {
        return Ok(default_rules().collect());
    }
    for id in rule_ids {
        if find_rule(id.as_ref()).is_none() {
            return Err(LintError::UnknownRule(id.as_ref().to_owned()));
        }
    }
    Ok(RULES
        .iter()
        .filter(|rule| rule_ids.iter().any(|id| id.as_ref() == rule.id))
        .collect())
}
