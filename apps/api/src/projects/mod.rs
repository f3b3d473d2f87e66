// Project listing: classification and tech-stack derivation for GitHub
// repositories, plus the route serving the enriched list.
// Everything here except the handlers is pure.

pub mod classify;
pub mod handlers;
pub mod tech_stack;

use chrono::{DateTime, Utc};

use crate::models::repository::{EnrichedRepository, RawRepository};

pub use classify::classify;
pub use tech_stack::tech_stack;

/// Attaches the derived fields to a repository that already passed filtering.
pub fn enrich(repo: RawRepository, last_commit_date: DateTime<Utc>) -> EnrichedRepository {
    EnrichedRepository {
        project_type: classify(&repo),
        tech_stack: tech_stack(&repo),
        last_commit_date,
        repo,
    }
}
