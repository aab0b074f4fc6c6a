//! Ordered member rules.
//!
//! Each rule pairs a pattern with a naming function. Rules are tried in order
//! and the first match names the declaration, so a declaration produces at
//! most one symbol. Adding a shape means adding a rule, not a branch.

use crate::config::ScanConfig;
use crate::error::{ExtractError, Result};
use crate::types::RuleKind;
use once_cell::sync::Lazy;
use regex::Regex;

static FALLBACK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\s*(\w+)\s*\)").unwrap());

pub struct MemberRule {
    pub kind: RuleKind,
    pattern: Regex,
    name: fn(&str) -> String,
}

impl MemberRule {
    pub fn new(kind: RuleKind, pattern: Regex, name: fn(&str) -> String) -> Self {
        Self {
            kind,
            pattern,
            name,
        }
    }

    /// Symbol name for `decl`, if this rule matches it
    pub fn apply(&self, decl: &str) -> Option<String> {
        let cap = self.pattern.captures(decl)?;
        let ident = cap.get(1)?.as_str();
        Some((self.name)(ident))
    }
}

fn release_name(ident: &str) -> String {
    format!("Release{}", ident)
}

fn plain_name(ident: &str) -> String {
    ident.to_string()
}

pub struct RuleSet {
    rules: Vec<MemberRule>,
}

impl RuleSet {
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let mut rules = Vec::new();

        let release_macro = config.release_macro.trim();
        if !release_macro.is_empty() {
            let pattern = compile(
                "release macro",
                &format!(r"\b{}\s*\(\s*(\w+)\s*\)", regex::escape(release_macro)),
            )?;
            rules.push(MemberRule::new(
                RuleKind::ReleaseMacro,
                pattern,
                release_name,
            ));
        }

        if let Some(status_macro) = config.status_macro() {
            let pattern = compile(
                "status macro",
                &format!(r"\b{}\s*\(\s*(\w+)\s*[,)]", regex::escape(status_macro)),
            )?;
            rules.push(MemberRule::new(RuleKind::StatusMacro, pattern, plain_name));
        }

        let pattern = compile(
            "call marker",
            &format!(
                r"\(\s*{}\s*\*\s*(\w+)\s*\)",
                regex::escape(config.call_marker.trim())
            ),
        )?;
        rules.push(MemberRule::new(RuleKind::CallMarker, pattern, plain_name));

        rules.push(MemberRule::new(
            RuleKind::Fallback,
            FALLBACK_PATTERN.clone(),
            plain_name,
        ));

        Ok(Self { rules })
    }

    /// First matching rule wins; later rules never see the declaration.
    pub fn extract(&self, decl: &str) -> Option<(String, RuleKind)> {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(decl).map(|name| (name, rule.kind)))
    }

    pub fn kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.kind).collect()
    }
}

fn compile(rule: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ExtractError::InvalidPattern { rule, source })
}
