use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A repository as returned by `users/{user}/repos`.
/// Fields the enrichment does not read are kept in `extra` and re-emitted untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawRepository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub private: bool,
    pub fork: bool,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    /// Null for repositories that were created but never pushed to.
    pub pushed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub html_url: String,
    pub owner: RepositoryOwner,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawRepository {
    /// Timestamp used when the latest commit cannot be looked up.
    pub fn fallback_timestamp(&self) -> DateTime<Utc> {
        self.pushed_at.unwrap_or(self.updated_at)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepositoryOwner {
    pub login: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An entry of `repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCommit {
    #[serde(default)]
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl RawCommit {
    pub fn author_date(&self) -> Option<DateTime<Utc>> {
        self.commit.author.as_ref().and_then(|a| a.date)
    }
}

/// Display category of a project, chosen by `projects::classify`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Unity,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    Frontend,
    #[serde(rename = "Raspberry Pi")]
    RaspberryPi,
    Mobile,
    Backend,
    Other,
}

impl ProjectType {
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Unity => "Unity",
            ProjectType::MachineLearning => "Machine Learning",
            ProjectType::Frontend => "Frontend",
            ProjectType::RaspberryPi => "Raspberry Pi",
            ProjectType::Mobile => "Mobile",
            ProjectType::Backend => "Backend",
            ProjectType::Other => "Other",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Browser-facing project record: the upstream fields plus the derived ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedRepository {
    #[serde(flatten)]
    pub repo: RawRepository,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(rename = "techStack")]
    pub tech_stack: Vec<String>,
    pub last_commit_date: DateTime<Utc>,
}

/// Query options for the repository listing. Also used as the query string
/// of `GET /api/v1/projects`, so every field falls back to its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetchOptions {
    pub per_page: u32,
    pub sort: String,
    pub direction: String,
    #[serde(rename = "type")]
    pub owner_type: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            per_page: 20,
            sort: "updated".to_string(),
            direction: "desc".to_string(),
            owner_type: "owner".to_string(),
        }
    }
}

impl FetchOptions {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("per_page", self.per_page.to_string()),
            ("sort", self.sort.clone()),
            ("direction", self.direction.clone()),
            ("type", self.owner_type.clone()),
        ]
    }
}
