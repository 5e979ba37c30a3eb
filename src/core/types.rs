use serde::{Deserialize, Serialize};

/// How gaps at the ends of the target are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlignMode {
    /// Both sequences are consumed end to end (Needleman-Wunsch)
    #[default]
    Global,
    /// The query is located inside the target; leading and trailing target
    /// symbols are free (HW)
    Infix,
}

impl std::fmt::Display for AlignMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Infix => write!(f, "infix"),
        }
    }
}

/// How much of the alignment the engine has to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum AlignTask {
    /// Edit distance and end location only
    Distance,
    /// Edit distance, end location and start location
    Locations,
    /// Everything, including the edit-operation path
    #[default]
    Path,
}

/// One alignment column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOp {
    /// Query and target symbols are equal (directly or through an equality rule)
    Match,
    /// Query symbol with no target counterpart
    Insert,
    /// Target symbol with no query counterpart
    Delete,
    /// Query and target symbols differ
    Mismatch,
}

impl EditOp {
    /// Every operation except INSERT consumes one target symbol.
    #[must_use]
    pub fn consumes_target(self) -> bool {
        !matches!(self, Self::Insert)
    }

    /// Every operation except DELETE consumes one query symbol.
    #[must_use]
    pub fn consumes_query(self) -> bool {
        !matches!(self, Self::Delete)
    }

    /// Extended CIGAR symbol
    #[must_use]
    pub fn cigar_symbol(self) -> char {
        match self {
            Self::Match => '=',
            Self::Insert => 'I',
            Self::Delete => 'D',
            Self::Mismatch => 'X',
        }
    }
}

/// Declares two symbol codes equal during alignment scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EqualityRule {
    pub first: u8,
    pub second: u8,
}

impl EqualityRule {
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Rules are symmetric
    #[must_use]
    pub fn covers(&self, a: u8, b: u8) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

/// Ambiguity codes folded onto a canonical symbol
pub const AMBIGUITY_RULES: [EqualityRule; 4] = [
    EqualityRule::new(b'B', b'N'),
    EqualityRule::new(b'Z', b'Q'),
    EqualityRule::new(b'x', b'A'),
    EqualityRule::new(b'X', b'A'),
];

/// Immutable set of additional equalities passed into every alignment call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EqualityRules {
    rules: Vec<EqualityRule>,
}

impl EqualityRules {
    /// Plain byte equality only
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// The ambiguity-code folding rules (B=N, Z=Q, x=A, X=A)
    #[must_use]
    pub fn ambiguity() -> Self {
        Self::new(AMBIGUITY_RULES.to_vec())
    }

    #[must_use]
    pub fn new(rules: Vec<EqualityRule>) -> Self {
        Self { rules }
    }

    /// Are `a` and `b` equal under byte identity or any rule?
    #[must_use]
    pub fn equal(&self, a: u8, b: u8) -> bool {
        a == b || self.rules.iter().any(|rule| rule.covers(a, b))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EqualityRule> {
        self.rules.iter()
    }
}
