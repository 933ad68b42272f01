//
//  influence.rs
//  socialgraph
//
//  Created by hak (tharun)
//

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info};

use super::engine::FollowGraph;
use super::types::*;

impl FollowGraph {
    /// Influence score for every known user.
    ///
    /// A user's score is its direct follower count plus the number of
    /// distinct second-degree followers: followers of its followers,
    /// excluding the user itself and anyone already counted as direct.
    ///
    /// With `use_cache` set, a populated cache is returned as-is. Otherwise
    /// (or on a cache miss) scores are recomputed from scratch and stored
    /// as the new cache. The result is always an owned copy.
    pub fn compute_influence_scores(&mut self, use_cache: bool) -> InfluenceScores {
        if use_cache {
            if let Some(cached) = &self.score_cache {
                debug!(users = cached.len(), "influence cache hit");
                return cached.clone();
            }
        }

        let started = Instant::now();
        let scores: InfluenceScores = self
            .graph
            .node_indices()
            .map(|idx| (self.graph[idx].clone(), self.influence_of(idx)))
            .collect();

        info!(
            users = scores.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "influence scores recomputed"
        );

        self.score_cache = Some(scores.clone());
        scores
    }

    /// Cached influence scores, recomputing only on a miss.
    pub fn influence_scores(&mut self) -> InfluenceScores {
        self.compute_influence_scores(true)
    }

    pub fn cache_state(&self) -> CacheState {
        match self.score_cache {
            Some(_) => CacheState::Populated,
            None => CacheState::Empty,
        }
    }

    fn influence_of(&self, subject: NodeIndex) -> usize {
        let direct: HashSet<NodeIndex> = self
            .graph
            .neighbors_directed(subject, Direction::Incoming)
            .collect();

        let second_degree: HashSet<NodeIndex> = direct
            .iter()
            .flat_map(|&follower| self.graph.neighbors_directed(follower, Direction::Incoming))
            .filter(|n| *n != subject && !direct.contains(n))
            .collect();

        direct.len() + second_degree.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(edges: &[(&str, &str)]) -> FollowGraph {
        let mut graph = FollowGraph::new();
        for (follower, followee) in edges {
            graph.add_follow(follower, followee).unwrap();
        }
        graph
    }

    fn triangle() -> FollowGraph {
        build(&[("B", "A"), ("C", "A"), ("C", "B"), ("A", "C")])
    }

    #[test]
    fn test_empty_graph_scores() {
        let mut graph = FollowGraph::new();
        assert!(graph.influence_scores().is_empty());
    }

    #[test]
    fn test_triangle_scores() {
        let mut graph = triangle();
        let scores = graph.influence_scores();

        // A: B and C follow directly; C's only follower is A itself.
        assert_eq!(scores["A"], 2);
        // B: C directly, A via C.
        assert_eq!(scores["B"], 2);
        // C: A directly, B via A (C itself excluded).
        assert_eq!(scores["C"], 2);
        assert_eq!(scores.len(), 3);
    }

    #[test]
    fn test_second_degree_stops_at_two_hops() {
        // D -> C -> B -> A
        let mut graph = build(&[("B", "A"), ("C", "B"), ("D", "C")]);
        let scores = graph.influence_scores();

        assert_eq!(scores["A"], 2);
        assert_eq!(scores["B"], 2);
        assert_eq!(scores["C"], 1);
        assert_eq!(scores["D"], 0);
    }

    #[test]
    fn test_second_degree_counted_once() {
        // X follows both of T's followers.
        let mut graph = build(&[("F1", "T"), ("F2", "T"), ("X", "F1"), ("X", "F2")]);
        let scores = graph.influence_scores();
        assert_eq!(scores["T"], 3);
    }

    #[test]
    fn test_direct_follower_not_double_counted() {
        // F2 follows T directly and also follows F1.
        let mut graph = build(&[("F1", "T"), ("F2", "T"), ("F2", "F1")]);
        let scores = graph.influence_scores();
        assert_eq!(scores["T"], 2);
        assert_eq!(scores["F1"], 1);
    }

    #[test]
    fn test_isolated_user_scores_zero() {
        let mut graph = triangle();
        graph.add_user("loner");
        assert_eq!(graph.influence_scores()["loner"], 0);
    }

    #[test]
    fn test_cache_hit_skips_recompute() {
        let mut graph = triangle();
        assert_eq!(graph.cache_state(), CacheState::Empty);

        let first = graph.influence_scores();
        assert_eq!(graph.cache_state(), CacheState::Populated);

        let second = graph.influence_scores();
        assert_eq!(first, second);
        assert_eq!(graph.cache_state(), CacheState::Populated);
    }

    #[test]
    fn test_returned_scores_are_copies() {
        let mut graph = triangle();
        let mut scores = graph.influence_scores();
        scores.insert("A".to_string(), 99);
        scores.remove("B");

        let again = graph.influence_scores();
        assert_eq!(again["A"], 2);
        assert_eq!(again["B"], 2);
    }

    #[test]
    fn test_forced_recompute_refreshes_cache() {
        let mut graph = triangle();
        graph.invalidate_cache();

        let forced = graph.compute_influence_scores(false);
        assert_eq!(graph.cache_state(), CacheState::Populated);
        assert_eq!(graph.influence_scores(), forced);
    }

    #[test]
    fn test_new_follower_raises_score_by_one() {
        let mut graph = triangle();
        let before = graph.influence_scores();

        graph.add_follow("D", "B").unwrap();
        let after = graph.influence_scores();

        assert_eq!(after["B"], before["B"] + 1);
        assert_eq!(after["D"], 0);
    }

    #[test]
    fn test_cached_matches_forced_after_every_mutation() {
        let mut graph = triangle();
        let _ = graph.influence_scores();

        let steps: [fn(&mut FollowGraph); 6] = [
            |g| g.add_user("E"),
            |g| g.add_follow("E", "A").unwrap(),
            |g| g.add_follow("D", "E").unwrap(),
            |g| g.remove_follow("C", "A"),
            |g| g.remove_user("B"),
            |g| g.add_follow("A", "D").unwrap(),
        ];

        for step in steps {
            step(&mut graph);
            assert_eq!(graph.cache_state(), CacheState::Empty);
            let cached = graph.compute_influence_scores(true);
            let forced = graph.compute_influence_scores(false);
            assert_eq!(cached, forced);
            assert_eq!(cached.len(), graph.all_users().len());
        }
    }
}
