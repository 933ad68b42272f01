//
//  types.rs
//  socialgraph
//
//  Created by hak (tharun)
//

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Influence score per user, as returned by
/// [`FollowGraph::compute_influence_scores`](super::FollowGraph::compute_influence_scores).
pub type InfluenceScores = HashMap<String, usize>;

/// An unordered pair of users who follow each other.
///
/// Members are stored lexicographically, so `MutualPair::new("b", "a")`
/// and `MutualPair::new("a", "b")` compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MutualPair {
    first: String,
    second: String,
}

impl MutualPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// The lexicographically smaller member.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The lexicographically larger member.
    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn contains(&self, user: &str) -> bool {
        self.first == user || self.second == user
    }
}

impl fmt::Display for MutualPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

/// State of the influence score cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No scores stored; the next read recomputes.
    Empty,
    /// Scores cover every known user and match the current graph.
    Populated,
}

/// Summary counts for a follow graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub users: usize,
    pub follows: usize,
    pub mutual_pairs: usize,
}
