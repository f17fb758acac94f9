use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Response shape for a ranked-matches request.
///
/// This is what the caller serializes back to a client; the engine itself
/// never sends it anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub matches: Vec<MatchResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
