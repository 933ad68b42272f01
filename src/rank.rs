//! Ranking over influence scores.
//!
//! Works on a score mapping only; the graph and its cache are never touched.
//! Ties are broken by user name so a ranking is reproducible.

use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::InfluenceScores;

/// A user together with its influence score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedUser {
    pub user: String,
    pub score: usize,
}

impl RankedUser {
    pub fn new(user: impl Into<String>, score: usize) -> Self {
        Self {
            user: user.into(),
            score,
        }
    }
}

/// The `n` highest-scoring users, best first.
pub fn top_n(scores: &InfluenceScores, n: usize) -> Vec<RankedUser> {
    if n == 0 || scores.is_empty() {
        return Vec::new();
    }

    // Min-heap of the best `n` seen so far; the root is the weakest entry.
    let mut heap = BinaryHeap::with_capacity(n + 1);
    for (user, &score) in scores {
        heap.push(Reverse((score, Reverse(user.as_str()))));
        if heap.len() > n {
            heap.pop();
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse((score, Reverse(user)))| RankedUser::new(user, score))
        .collect()
}

/// Every user scoring at least `min_score`, best first.
pub fn at_least(scores: &InfluenceScores, min_score: usize) -> Vec<RankedUser> {
    let mut ranked: Vec<RankedUser> = scores
        .iter()
        .filter(|(_, score)| **score >= min_score)
        .map(|(user, &score)| RankedUser::new(user.as_str(), score))
        .collect();
    ranked.sort_by(by_rank);
    ranked
}

/// Every user, best first.
pub fn ranked(scores: &InfluenceScores) -> Vec<RankedUser> {
    at_least(scores, 0)
}

fn by_rank(a: &RankedUser, b: &RankedUser) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.user.cmp(&b.user))
}
