//! # socialgraph
//!
//! Directed follow graph with cached influence scoring.
//!
//! A user's influence is the number of its direct followers plus the number
//! of distinct users who follow one of those followers (excluding the user
//! itself and anyone already counted as a direct follower).
//!
//! ## Key Features
//!
//! - **Self-healing edges**: following an unknown user creates it
//! - **Lenient queries**: unknown users yield empty results, never errors
//! - **Cached scores**: recomputed from scratch only after a mutation
//! - **Deterministic ranking**: top-N and threshold views with stable tie-breaks
//!
//! ## Quick Start
//!
//! ```rust
//! use socialgraph::{rank, FollowGraph};
//!
//! let mut graph = FollowGraph::new();
//! graph.add_follow("bob", "alice").unwrap();
//! graph.add_follow("carol", "bob").unwrap();
//!
//! let scores = graph.influence_scores();
//! assert_eq!(scores["alice"], 2);
//!
//! let top = rank::top_n(&scores, 1);
//! assert_eq!(top[0].user, "alice");
//!
//! assert!(graph.add_follow("bob", "bob").is_err());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

// Re-exports for convenience
pub use config::SocialConfig;
pub use error::{FollowGraphError, Result};
pub use graph::{CacheState, FollowGraph, GraphStats, InfluenceScores, MutualPair};
pub use rank::RankedUser;
