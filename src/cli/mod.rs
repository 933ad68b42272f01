//! CLI module for socialgraph.
//!
//! Commands:
//! - demo: walk through the demonstration network
//! - scores: rank users of an ad-hoc graph
//! - mutuals: list mutual follows of an ad-hoc graph

pub mod demo;
pub mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

use crate::config::{FollowSeed, SocialConfig, CONFIG_FILE};
use crate::graph::FollowGraph;

#[derive(Parser)]
#[command(name = "socialgraph")]
#[command(about = "socialgraph - follow graph influence analysis", long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the demonstration network and print its analysis
    Demo {
        /// User whose followers and followees are shown
        #[arg(long, default_value = "Alice")]
        focus: String,
    },

    /// Rank users by influence
    Scores {
        /// Follow edge as follower:followee (repeatable)
        #[arg(short, long = "follow", required = true)]
        follows: Vec<FollowSeed>,

        /// Max entries in the top ranking (default: from config)
        #[arg(short, long)]
        top: Option<usize>,

        /// Minimum score for the threshold ranking (default: from config)
        #[arg(short, long)]
        min_score: Option<usize>,

        /// Print rankings as JSON
        #[arg(long)]
        json: bool,
    },

    /// List pairs of users who follow each other
    Mutuals {
        /// Follow edge as follower:followee (repeatable)
        #[arg(short, long = "follow", required = true)]
        follows: Vec<FollowSeed>,
    },
}

impl FromStr for FollowSeed {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (follower, followee) = s
            .split_once(':')
            .ok_or_else(|| format!("expected follower:followee, got '{s}'"))?;
        let (follower, followee) = (follower.trim(), followee.trim());
        if follower.is_empty() || followee.is_empty() {
            return Err(format!("empty user name in '{s}'"));
        }
        Ok(FollowSeed {
            follower: follower.to_string(),
            followee: followee.to_string(),
        })
    }
}

/// Build a graph from a list of follow edges.
pub fn build_graph(follows: &[FollowSeed]) -> crate::Result<FollowGraph> {
    let mut graph = FollowGraph::new();
    for seed in follows {
        graph.add_follow(&seed.follower, &seed.followee)?;
    }
    debug!(follows = follows.len(), "graph built");
    Ok(graph)
}

/// Execute a parsed command line, writing results to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = SocialConfig::load(&cli.config)?;

    match cli.command {
        Commands::Demo { focus } => demo::run(&config, &focus, out),

        Commands::Scores {
            follows,
            top,
            min_score,
            json,
        } => {
            let mut graph = build_graph(&follows)?;
            let scores = graph.influence_scores();
            let top = top.unwrap_or(config.ranking.top_n);
            let min_score = min_score.unwrap_or(config.ranking.min_score);
            if json {
                report::scores_json(&scores, top, min_score, out)
            } else {
                report::scores(&scores, top, min_score, out)
            }
        }

        Commands::Mutuals { follows } => {
            let graph = build_graph(&follows)?;
            report::mutuals(&graph, out)
        }
    }
}
