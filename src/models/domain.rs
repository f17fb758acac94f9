use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Canonical set of skill tokens.
///
/// Tokens are lowercase, trimmed and deduplicated. Iteration order is not
/// meaningful; consumers that need a stable order must sort explicitly,
/// which is what [`intersection_sorted`](SkillSet::intersection_sorted)
/// does for match rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(HashSet<String>);

impl SkillSet {
    /// Build a set from already-canonical tokens.
    ///
    /// No canonicalization is applied here; raw user text goes through
    /// `core::normalizer::normalize` instead.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// Tokens present in both sets, rendered as a lexicographically sorted
    /// sequence for deterministic display.
    pub fn intersection_sorted(&self, other: &SkillSet) -> Vec<String> {
        let mut shared: Vec<String> = self.0.intersection(&other.0).cloned().collect();
        shared.sort();
        shared
    }
}

/// User skill profile as consumed by the matching engine.
///
/// The skill fields carry the raw comma-separated text exactly as the user
/// entered it; canonicalization happens at ranking time. The engine never
/// mutates a profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillProfile {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "skillsOffered", default)]
    pub skills_offered: String,
    #[serde(rename = "skillsWanted", default)]
    pub skills_wanted: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A single ranked match against one candidate.
///
/// Freshly allocated per ranking call and never persisted; it references
/// the candidate by id only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "offerMatch")]
    pub offer_match: Vec<String>,
    #[serde(rename = "wantMatch")]
    pub want_match: Vec<String>,
    pub score: u32,
}
