//! Demonstration walk-through over a small follow network.

use anyhow::Result;
use std::io::Write;
use tracing::info;

use super::{build_graph, report};
use crate::config::{FollowSeed, SocialConfig};
use crate::graph::FollowGraph;
use crate::rank;

/// Built-in demo network as (follower, followee). Alice -> Eve closes a cycle.
const DEMO_FOLLOWS: &[(&str, &str)] = &[
    ("Bob", "Alice"),
    ("Charlie", "Alice"),
    ("Dave", "Bob"),
    ("Eve", "Charlie"),
    ("Alice", "Eve"),
    ("Frank", "Dave"),
    ("Alice", "Frank"),
];

fn demo_follows(config: &SocialConfig) -> Vec<FollowSeed> {
    if !config.follows.is_empty() {
        return config.follows.clone();
    }
    DEMO_FOLLOWS
        .iter()
        .map(|(follower, followee)| FollowSeed {
            follower: follower.to_string(),
            followee: followee.to_string(),
        })
        .collect()
}

/// Build the demo network, analyse it, then add a follow from `focus` to
/// the first of its followers it does not yet follow and show the effect.
pub fn run(config: &SocialConfig, focus: &str, out: &mut impl Write) -> Result<()> {
    let follows = demo_follows(config);
    info!(follows = follows.len(), "building demo network");
    let mut graph = build_graph(&follows)?;

    writeln!(out, "=== Social Network Analysis ===")?;

    writeln!(out)?;
    writeln!(out, "--- Graph Statistics ---")?;
    let stats = graph.stats();
    writeln!(out, "Total users: {}", stats.users)?;
    writeln!(out, "Total follows: {}", stats.follows)?;
    writeln!(out, "{focus}'s followers: {}", report::user_list(graph.followers(focus)))?;
    writeln!(out, "{focus} follows: {}", report::user_list(graph.followees(focus)))?;
    write_mutuals(&graph, out)?;

    writeln!(out)?;
    writeln!(out, "--- Influence Analysis ---")?;
    let scores = graph.influence_scores();
    report::scores(&scores, config.ranking.top_n, config.ranking.min_score, out)?;

    let mut followers: Vec<String> = graph.followers(focus).into_iter().collect();
    followers.sort();
    let Some(target) = followers.into_iter().find(|f| !graph.follows(focus, f)) else {
        return Ok(());
    };

    writeln!(out)?;
    writeln!(out, "--- Graph Modification ---")?;
    writeln!(out, "Adding mutual follow between {focus} and {target}...")?;
    graph.add_follow(focus, &target)?;
    write_mutuals(&graph, out)?;

    writeln!(out, "Updated scores:")?;
    for entry in rank::ranked(&graph.influence_scores()) {
        writeln!(out, "  {}: {}", entry.user, entry.score)?;
    }
    Ok(())
}

fn write_mutuals(graph: &FollowGraph, out: &mut impl Write) -> Result<()> {
    let pairs = report::sorted_pairs(graph.mutual_follows());
    let listed: Vec<String> = pairs.iter().map(|p| p.to_string()).collect();
    if listed.is_empty() {
        writeln!(out, "Mutual follows: -")?;
    } else {
        writeln!(out, "Mutual follows: {}", listed.join(", "))?;
    }
    Ok(())
}
