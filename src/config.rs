//
//  config.rs
//  socialgraph
//
//  Created by hak (tharun)
//

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "socialgraph.toml";

/// Top-level socialgraph configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialConfig {
    #[serde(default)]
    pub ranking: RankingConfig,
    /// Seed follows for the demo network. Empty means the built-in network.
    #[serde(default)]
    pub follows: Vec<FollowSeed>,
}

/// Ranking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Entries shown by the top-N ranking.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Minimum score for the threshold ranking.
    #[serde(default = "default_min_score")]
    pub min_score: usize,
}

/// One `follower -> followee` edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowSeed {
    pub follower: String,
    pub followee: String,
}

fn default_top_n() -> usize {
    3
}

fn default_min_score() -> usize {
    2
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            min_score: default_min_score(),
        }
    }
}

impl SocialConfig {
    /// Load config from a TOML file. A missing file yields the defaults;
    /// an unreadable or malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("invalid config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("cannot read {}", path.display())),
        }
    }
}
