//
//  mutation.rs
//  socialgraph
//
//  Created by hak (tharun)
//

use tracing::debug;

use super::engine::FollowGraph;

impl FollowGraph {
    /// Remove a user, its own follows, and every follow pointing at it.
    /// Unknown users are ignored.
    pub fn remove_user(&mut self, user: &str) {
        if let Some(idx) = self.user_index.remove(user) {
            let edges = self.graph.neighbors_undirected(idx).count();
            self.graph.remove_node(idx);
            debug!(user, edges, "user removed");
            self.invalidate_cache();
        }
    }

    /// Remove the follow `follower -> followee` if it exists.
    pub fn remove_follow(&mut self, follower: &str, followee: &str) {
        let edge = self
            .user_idx(follower)
            .zip(self.user_idx(followee))
            .and_then(|(from, to)| self.graph.find_edge(from, to));

        if let Some(edge) = edge {
            self.graph.remove_edge(edge);
            debug!(follower, followee, "follow removed");
            self.invalidate_cache();
        }
    }

    /// Drop cached influence scores; the next read recomputes them.
    pub fn invalidate_cache(&mut self) {
        if self.score_cache.take().is_some() {
            debug!("influence cache invalidated");
        }
    }
}
