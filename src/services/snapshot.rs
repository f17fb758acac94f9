use std::path::Path;

use thiserror::Error;
use validator::Validate;

use crate::models::SkillProfile;

/// Errors that can occur when loading a profile snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

/// Read-only snapshot of user skill profiles.
///
/// This is the user-repository collaborator the ranking engine consumes:
/// the full candidate population is fetched once, and a single ranking
/// call sees one consistent snapshot. The store never changes after
/// construction.
pub struct SnapshotStore {
    profiles: Vec<SkillProfile>,
}

impl SnapshotStore {
    /// Wrap an already-fetched set of profiles.
    pub fn from_profiles(profiles: Vec<SkillProfile>) -> Self {
        Self { profiles }
    }

    /// Load a snapshot from a JSON file containing an array of profiles.
    ///
    /// Records that fail validation are skipped with a warning rather than
    /// failing the whole load; an unreadable or undecodable file is an
    /// error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let records: Vec<SkillProfile> = serde_json::from_str(&raw)?;

        let total = records.len();
        let profiles: Vec<SkillProfile> = records
            .into_iter()
            .filter(|profile| match profile.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Skipping invalid profile record: {}", e);
                    false
                }
            })
            .collect();

        if profiles.len() < total {
            tracing::warn!(
                "Dropped {} of {} profile records while loading snapshot",
                total - profiles.len(),
                total
            );
        }

        tracing::debug!("Loaded {} profiles from snapshot", profiles.len());

        Ok(Self { profiles })
    }

    /// Fetch a single profile by user id.
    pub fn get(&self, user_id: &str) -> Option<&SkillProfile> {
        self.profiles.iter().find(|p| p.user_id == user_id)
    }

    /// Fetch a profile by user id, erroring when absent.
    pub fn require(&self, user_id: &str) -> Result<&SkillProfile, SnapshotError> {
        self.get(user_id).ok_or_else(|| {
            SnapshotError::NotFound(format!("profile not found for user {}", user_id))
        })
    }

    /// The full candidate snapshot.
    ///
    /// The ranker applies its own self-match guard, so handing back every
    /// profile including the querying user is fine.
    pub fn profiles(&self) -> &[SkillProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn profile(id: &str) -> SkillProfile {
        SkillProfile {
            user_id: id.to_string(),
            name: format!("User {}", id),
            location: String::new(),
            bio: String::new(),
            skills_offered: "guitar".to_string(),
            skills_wanted: "spanish".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_get_and_require() {
        let store = SnapshotStore::from_profiles(vec![profile("a"), profile("b")]);

        assert_eq!(store.len(), 2);
        assert!(store.get("a").is_some());
        assert!(store.get("missing").is_none());
        assert!(store.require("b").is_ok());
        assert!(matches!(
            store.require("missing"),
            Err(SnapshotError::NotFound(_))
        ));
    }

    #[test]
    fn test_from_path_skips_invalid_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"userId": "a", "name": "Ada", "skillsOffered": "rust", "skillsWanted": "go"}},
                {{"userId": "", "name": "Nameless"}}
            ]"#
        )
        .unwrap();

        let store = SnapshotStore::from_path(file.path()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.profiles()[0].user_id, "a");
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SnapshotStore::from_path("definitely/not/here.json");
        assert!(matches!(result, Err(SnapshotError::Io(_))));
    }

    #[test]
    fn test_from_path_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let result = SnapshotStore::from_path(file.path());
        assert!(matches!(result, Err(SnapshotError::Json(_))));
    }
}
