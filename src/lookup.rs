//! Ordinal lookups over an extracted symbol sequence.

use crate::types::{IndexedSymbol, RuleKind, TargetLookup};
use serde::Serialize;
use std::collections::HashMap;

/// Symbols of one struct in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    symbols: Vec<IndexedSymbol>,
}

/// A symbol with its immediate neighbours, for manual verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<'a> {
    pub previous: Option<&'a IndexedSymbol>,
    pub current: &'a IndexedSymbol,
    pub next: Option<&'a IndexedSymbol>,
}

impl FromIterator<(String, RuleKind)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (String, RuleKind)>>(iter: I) -> Self {
        let symbols = iter
            .into_iter()
            .enumerate()
            .map(|(index, (name, rule))| IndexedSymbol::new(index, name, rule))
            .collect();
        Self { symbols }
    }
}

impl SymbolTable {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[IndexedSymbol] {
        &self.symbols
    }

    pub fn get(&self, index: usize) -> Option<&IndexedSymbol> {
        self.symbols.get(index)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|s| s.name.as_str())
    }

    /// Ordinal of the first symbol called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s.name == name)
    }

    /// Look up each target, keeping the caller's order
    pub fn lookup(&self, targets: &[String]) -> Vec<TargetLookup> {
        targets
            .iter()
            .map(|name| TargetLookup {
                name: name.clone(),
                index: self.index_of(name),
            })
            .collect()
    }

    pub fn neighbors(&self, index: usize) -> Option<Neighbors<'_>> {
        let current = self.symbols.get(index)?;
        let previous = index.checked_sub(1).and_then(|i| self.symbols.get(i));
        let next = self.symbols.get(index + 1);
        Some(Neighbors {
            previous,
            current,
            next,
        })
    }

    /// Symbols from `start` to `end` inclusive, clamped to the table
    pub fn window(&self, start: usize, end: usize) -> &[IndexedSymbol] {
        if start >= self.symbols.len() || start > end {
            return &[];
        }
        let end = end.min(self.symbols.len() - 1);
        &self.symbols[start..=end]
    }

    pub fn head(&self, count: usize) -> &[IndexedSymbol] {
        &self.symbols[..count.min(self.symbols.len())]
    }

    /// Case-insensitive substring matches, excluding an exact hit
    pub fn similar(&self, name: &str) -> Vec<&IndexedSymbol> {
        let needle = name.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.symbols
            .iter()
            .filter(|s| s.name != name && s.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Names declared more than once, in order of first appearance
    pub fn duplicates(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for name in self.names() {
            *counts.entry(name).or_default() += 1;
        }
        let mut seen = Vec::new();
        for name in self.names() {
            if counts.get(name).copied().unwrap_or(0) > 1 && !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    /// How many symbols each rule produced, in rule order
    pub fn rule_counts(&self) -> Vec<(RuleKind, usize)> {
        let order = [
            RuleKind::ReleaseMacro,
            RuleKind::StatusMacro,
            RuleKind::CallMarker,
            RuleKind::Fallback,
        ];
        order
            .into_iter()
            .map(|kind| (kind, self.symbols.iter().filter(|s| s.rule == kind).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
