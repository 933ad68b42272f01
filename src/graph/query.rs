//
//  query.rs
//  socialgraph
//
//  Created by hak (tharun)
//

use petgraph::Direction;
use std::collections::HashSet;

use super::engine::FollowGraph;
use super::types::*;

impl FollowGraph {
    /// Users who follow `user`. Empty if `user` is unknown.
    pub fn followers(&self, user: &str) -> HashSet<String> {
        self.neighbor_names(user, Direction::Incoming)
    }

    /// Users `user` follows. Empty if `user` is unknown.
    pub fn followees(&self, user: &str) -> HashSet<String> {
        self.neighbor_names(user, Direction::Outgoing)
    }

    /// Every known user. Order is arbitrary but fixed until the next mutation.
    pub fn all_users(&self) -> Vec<String> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].clone())
            .collect()
    }

    pub fn contains_user(&self, user: &str) -> bool {
        self.user_index.contains_key(user)
    }

    /// Whether `follower` currently follows `followee`.
    pub fn follows(&self, follower: &str, followee: &str) -> bool {
        match (self.user_idx(follower), self.user_idx(followee)) {
            (Some(from), Some(to)) => self.graph.find_edge(from, to).is_some(),
            _ => false,
        }
    }

    /// Pairs of users who follow each other, each pair reported once.
    pub fn mutual_follows(&self) -> HashSet<MutualPair> {
        self.graph
            .edge_indices()
            .filter_map(|edge| self.graph.edge_endpoints(edge))
            .filter(|&(from, to)| from < to && self.graph.find_edge(to, from).is_some())
            .map(|(from, to)| MutualPair::new(self.graph[from].as_str(), self.graph[to].as_str()))
            .collect()
    }

    /// Get graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            users: self.graph.node_count(),
            follows: self.graph.edge_count(),
            mutual_pairs: self.mutual_follows().len(),
        }
    }

    fn neighbor_names(&self, user: &str, direction: Direction) -> HashSet<String> {
        match self.user_idx(user) {
            Some(idx) => self
                .graph
                .neighbors_directed(idx, direction)
                .map(|n| self.graph[n].clone())
                .collect(),
            None => HashSet::new(),
        }
    }
}
