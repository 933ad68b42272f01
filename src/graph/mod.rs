//! Follow graph module — the core of socialgraph.
//!
//! Provides the graph data model, mutations, derived queries
//! and the cached influence score computation.

pub mod engine;
pub mod influence;
pub mod mutation;
pub mod query;
pub mod types;

pub use engine::FollowGraph;
pub use types::{CacheState, GraphStats, InfluenceScores, MutualPair};
