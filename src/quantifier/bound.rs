use std::fmt;

/// Which part of the match sequence a selection returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index {
    /// A single node at this 0-based position.
    At(usize),
    /// The whole match sequence.
    All,
}

/// Inclusive upper bound on the number of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    At(usize),
    Unbounded,
}

impl Limit {
    /// Returns `true` if `count` does not exceed the limit.
    #[must_use]
    pub const fn admits(self, count: usize) -> bool {
        match self {
            Limit::At(max) => count <= max,
            Limit::Unbounded => true,
        }
    }
}

impl From<Option<usize>> for Limit {
    fn from(max: Option<usize>) -> Self {
        max.map_or(Limit::Unbounded, Limit::At)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::At(max) => write!(f, "{max}"),
            Limit::Unbounded => f.write_str("infinity"),
        }
    }
}

/// Normalized cardinality requirements for a selection.
///
/// `min <= max` is not checked; a bound with `min > max` rejects every count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub index: Index,
    pub min: usize,
    pub max: Limit,
}

impl Bound {
    /// Exactly one match, returned as a single node.
    pub const EXACTLY_ONE: Bound = Bound {
        index: Index::At(0),
        min: 1,
        max: Limit::At(1),
    };

    /// At most one match, returned as a single node or as absent.
    pub const OPTIONAL_ONE: Bound = Bound {
        index: Index::At(0),
        min: 0,
        max: Limit::At(1),
    };

    /// Returns `true` if `count` matches fall within `[min, max]`.
    #[must_use]
    pub const fn permits(&self, count: usize) -> bool {
        count >= self.min && self.max.admits(count)
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self::EXACTLY_ONE
    }
}
