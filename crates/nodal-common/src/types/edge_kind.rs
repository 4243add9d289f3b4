//! Weighted/unweighted edge classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of edges a graph accepts, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Edges carry a finite real weight.
    Weighted,
    /// Edges carry no weight.
    Unweighted,
}

impl EdgeKind {
    /// Returns the kind matching a graph's `weighted` flag.
    #[must_use]
    pub const fn from_weighted(weighted: bool) -> Self {
        if weighted {
            Self::Weighted
        } else {
            Self::Unweighted
        }
    }

    /// Returns true for [`EdgeKind::Weighted`].
    #[must_use]
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Weighted)
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weighted => write!(f, "weighted"),
            Self::Unweighted => write!(f, "unweighted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_weighted() {
        assert_eq!(EdgeKind::from_weighted(true), EdgeKind::Weighted);
        assert_eq!(EdgeKind::from_weighted(false), EdgeKind::Unweighted);
        assert!(EdgeKind::Weighted.is_weighted());
        assert!(!EdgeKind::Unweighted.is_weighted());
    }

    #[test]
    fn test_display() {
        assert_eq!(EdgeKind::Weighted.to_string(), "weighted");
        assert_eq!(EdgeKind::Unweighted.to_string(), "unweighted");
    }
}
