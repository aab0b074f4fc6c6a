use serde::Serialize;

/// Which member rule produced a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// `MACRO(X)` shorthand, named `ReleaseX`
    ReleaseMacro,
    /// `MACRO(X, ...)` status-returning shorthand
    StatusMacro,
    /// `Ret (MARKER * X)(...)`
    CallMarker,
    /// Any `* X )`
    Fallback,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::ReleaseMacro => "release_macro",
            RuleKind::StatusMacro => "status_macro",
            RuleKind::CallMarker => "call_marker",
            RuleKind::Fallback => "fallback",
        }
    }
}

/// One struct member at its ordinal position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedSymbol {
    pub index: usize,
    pub name: String,
    pub rule: RuleKind,
}

impl IndexedSymbol {
    pub fn new(index: usize, name: String, rule: RuleKind) -> Self {
        Self { index, name, rule }
    }
}

/// Result of looking up one requested name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetLookup {
    pub name: String,
    pub index: Option<usize>,
}

impl TargetLookup {
    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }
}

/// Inclusive ordinal range for the debug window, written `START..END`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl std::str::FromStr for IndexRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| format!("expected START..END, got '{}'", s))?;
        let end = end.strip_prefix('=').unwrap_or(end);
        let start: usize = start
            .trim()
            .parse()
            .map_err(|_| format!("invalid range start '{}'", start))?;
        let end: usize = end
            .trim()
            .parse()
            .map_err(|_| format!("invalid range end '{}'", end))?;
        if start > end {
            return Err(format!("range start {} is after end {}", start, end));
        }
        Ok(Self { start, end })
    }
}
