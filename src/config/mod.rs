pub mod parser;

use serde::{Deserialize, Serialize};

/// One watched repository, as described in the config file. Field names on
/// the wire keep the historical `config.json` schema.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RepoConfig {
    /// Local working copy path.
    pub src: String,

    #[serde(rename = "repoURL")]
    pub repo_url: String,

    #[serde(rename = "trackBranch")]
    pub track_branch: String,

    #[serde(rename = "project-name")]
    pub project_name: String,

    /// Bypass change detection and always build.
    #[serde(default, rename = "forceUpdate")]
    pub force_update: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct WatchConfig {
    pub repos: Vec<RepoConfig>,
}
