//
//  engine.rs
//  socialgraph
//
//  Created by hak (tharun)
//

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::collections::HashMap;
use tracing::debug;

use super::types::*;
use crate::error::{FollowGraphError, Result};

/// The follow graph — users as nodes, `follower -> followee` edges, and a
/// lazily filled influence score cache.
///
/// Every mutator invalidates the cache itself; callers never see a score
/// mapping computed against an older graph.
#[derive(Debug, Clone)]
pub struct FollowGraph {
    /// Directed follow edges. Stable indices survive user removal.
    pub(crate) graph: StableDiGraph<String, ()>,
    /// Index: user name -> node index. Keys are exactly the known users.
    pub(crate) user_index: HashMap<String, NodeIndex>,
    /// Scores for every known user, or `None` when invalidated.
    pub(crate) score_cache: Option<InfluenceScores>,
}

impl FollowGraph {
    /// Create a new empty follow graph.
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            user_index: HashMap::new(),
            score_cache: None,
        }
    }

    // ─── User Operations ────────────────────────────────────────

    /// Add a user with no followees. Adding a known user is a no-op.
    pub fn add_user(&mut self, user: &str) {
        self.ensure_user(user);
    }

    // ─── Follow Operations ──────────────────────────────────────

    /// Record that `follower` follows `followee`, creating either user if needed.
    ///
    /// Fails with [`FollowGraphError::InvalidOperation`] on a self-follow,
    /// in which case nothing is changed. Re-adding an existing follow is a no-op.
    pub fn add_follow(&mut self, follower: &str, followee: &str) -> Result<()> {
        if follower == followee {
            return Err(FollowGraphError::InvalidOperation(format!(
                "user '{follower}' cannot follow themselves"
            )));
        }

        let from = self.ensure_user(follower);
        let to = self.ensure_user(followee);
        if self.graph.find_edge(from, to).is_none() {
            self.graph.add_edge(from, to, ());
            debug!(follower, followee, "follow added");
            self.invalidate_cache();
        }
        Ok(())
    }

    // ─── Internal Helpers ───────────────────────────────────────

    /// Look up a user's node, inserting it first if unknown.
    pub(crate) fn ensure_user(&mut self, user: &str) -> NodeIndex {
        if let Some(&idx) = self.user_index.get(user) {
            return idx;
        }
        let idx = self.graph.add_node(user.to_string());
        self.user_index.insert(user.to_string(), idx);
        debug!(user, "user added");
        self.invalidate_cache();
        idx
    }

    pub(crate) fn user_idx(&self, user: &str) -> Option<NodeIndex> {
        self.user_index.get(user).copied()
    }
}

impl Default for FollowGraph {
    fn default() -> Self {
        Self::new()
    }
}
