//! Text and JSON rendering of graph analysis results.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

use crate::graph::{FollowGraph, InfluenceScores, MutualPair};
use crate::rank::{self, RankedUser};

/// JSON shape of the `scores` command.
#[derive(Serialize)]
struct ScoresReport {
    top: Vec<RankedUser>,
    min_score: usize,
    at_least: Vec<RankedUser>,
}

/// Print every score, then the top-N and threshold rankings.
pub fn scores(
    scores: &InfluenceScores,
    top: usize,
    min_score: usize,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "All influence scores:")?;
    for entry in rank::ranked(scores) {
        writeln!(out, "  {}: {}", entry.user, entry.score)?;
    }

    writeln!(out)?;
    writeln!(out, "Top {top} influential users:")?;
    for (i, entry) in rank::top_n(scores, top).iter().enumerate() {
        writeln!(out, "  {}. {} (score: {})", i + 1, entry.user, entry.score)?;
    }

    writeln!(out)?;
    writeln!(out, "Users with influence >= {min_score}:")?;
    let kept = rank::at_least(scores, min_score);
    if kept.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for entry in kept {
        writeln!(out, "  - {} ({})", entry.user, entry.score)?;
    }
    Ok(())
}

pub fn scores_json(
    scores: &InfluenceScores,
    top: usize,
    min_score: usize,
    out: &mut impl Write,
) -> Result<()> {
    let report = ScoresReport {
        top: rank::top_n(scores, top),
        min_score,
        at_least: rank::at_least(scores, min_score),
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

/// Print each mutual pair on its own line.
pub fn mutuals(graph: &FollowGraph, out: &mut impl Write) -> Result<()> {
    let pairs = sorted_pairs(graph.mutual_follows());
    if pairs.is_empty() {
        writeln!(out, "No mutual follows.")?;
        return Ok(());
    }
    writeln!(out, "Mutual follows ({}):", pairs.len())?;
    for pair in pairs {
        writeln!(out, "  {pair}")?;
    }
    Ok(())
}

/// Comma-separated, sorted user list; `-` when empty.
pub(crate) fn user_list(users: HashSet<String>) -> String {
    let mut users: Vec<String> = users.into_iter().collect();
    if users.is_empty() {
        return "-".to_string();
    }
    users.sort();
    users.join(", ")
}

pub(crate) fn sorted_pairs(pairs: HashSet<MutualPair>) -> Vec<MutualPair> {
    let mut pairs: Vec<MutualPair> = pairs.into_iter().collect();
    pairs.sort();
    pairs
}
