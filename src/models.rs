use std::fmt;

use serde::{Deserialize, Serialize};

/// Repository id as it arrives on the wire. GitHub sends numbers, hand-written
/// fixtures often use strings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RepoId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoId::Number(id) => write!(f, "{id}"),
            RepoId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub avatar_url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: RepoId,
    pub name: String,              // e.g., "laravel"
    pub owner: Owner,
    pub html_url: String,          // Link to repo
    pub updated_at: String,        // Shown verbatim, never parsed
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResponse {
    pub total_count: u64,          // Total number of matching repositories
    pub items: Vec<Repository>,    // Repositories on the requested page
}

/// Body GitHub returns alongside a non-2xx status.
#[derive(Deserialize, Debug, Clone)]
pub struct ErrorBody {
    pub message: String,
}
