// Integration tests for SkillSwap Algo

use std::io::Write;

use skillswap_algo::core::matcher::rank_profiles;
use skillswap_algo::models::{MatchesResponse, SkillProfile};
use skillswap_algo::services::SnapshotStore;

fn create_profile(id: &str, offered: &str, wanted: &str) -> SkillProfile {
    SkillProfile {
        user_id: id.to_string(),
        name: format!("User {}", id),
        location: String::new(),
        bio: String::new(),
        skills_offered: offered.to_string(),
        skills_wanted: wanted.to_string(),
        created_at: None,
    }
}

#[test]
fn test_end_to_end_ranking_from_snapshot() {
    let store = SnapshotStore::from_profiles(vec![
        create_profile("me", "guitar, pottery", "spanish, cooking"),
        create_profile("full", "spanish, cooking", "guitar, pottery"), // score 4
        create_profile("partial", "spanish", "welding"),               // score 1
        create_profile("none", "welding", "carpentry"),                // dropped
    ]);

    let me = store.get("me").unwrap();
    let report = rank_profiles(me, store.profiles());

    assert_eq!(report.total_candidates, 4);
    assert_eq!(report.matches.len(), 2);

    assert_eq!(report.matches[0].user_id, "full");
    assert_eq!(report.matches[0].score, 4);
    assert_eq!(report.matches[0].offer_match, vec!["cooking", "spanish"]);
    assert_eq!(report.matches[0].want_match, vec!["guitar", "pottery"]);

    assert_eq!(report.matches[1].user_id, "partial");
    assert_eq!(report.matches[1].score, 1);

    // Sorted by score
    for i in 1..report.matches.len() {
        assert!(report.matches[i - 1].score >= report.matches[i].score);
    }
}

#[test]
fn test_ranking_from_json_snapshot_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"userId": "ada", "name": "Ada", "skillsOffered": "Rust, SQL", "skillsWanted": "Sourdough"}},
            {{"userId": "brie", "name": "Brie", "skillsOffered": "sourdough", "skillsWanted": "rust"}},
            {{"userId": "cato", "name": "Cato", "skillsOffered": "juggling"}}
        ]"#
    )
    .unwrap();

    let store = SnapshotStore::from_path(file.path()).unwrap();
    assert_eq!(store.len(), 3);

    // Missing skillsWanted deserializes as empty raw text.
    assert_eq!(store.get("cato").unwrap().skills_wanted, "");

    let ada = store.get("ada").unwrap();
    let report = rank_profiles(ada, store.profiles());

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].user_id, "brie");
    assert_eq!(report.matches[0].score, 2);
    assert_eq!(report.matches[0].offer_match, vec!["sourdough"]);
    assert_eq!(report.matches[0].want_match, vec!["rust"]);
}

#[test]
fn test_response_wire_shape() {
    let store = SnapshotStore::from_profiles(vec![
        create_profile("me", "guitar", "spanish"),
        create_profile("other", "spanish", "guitar"),
    ]);

    let me = store.get("me").unwrap();
    let report = rank_profiles(me, store.profiles());

    let response = MatchesResponse {
        user_id: "me".to_string(),
        matches: report.matches,
        total_candidates: report.total_candidates,
        generated_at: chrono::Utc::now(),
    };

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["userId"], "me");
    assert_eq!(json["totalCandidates"], 2);
    assert!(json["generatedAt"].is_string());

    let first = &json["matches"][0];
    assert_eq!(first["userId"], "other");
    assert_eq!(first["score"], 2);
    assert_eq!(first["offerMatch"][0], "spanish");
    assert_eq!(first["wantMatch"][0], "guitar");
}

#[test]
fn test_rank_is_pure_over_its_inputs() {
    let store = SnapshotStore::from_profiles(vec![
        create_profile("me", "guitar", "spanish"),
        create_profile("other", "spanish", "guitar"),
    ]);

    let me = store.get("me").unwrap();

    let first = rank_profiles(me, store.profiles());
    let second = rank_profiles(me, store.profiles());

    assert_eq!(first.matches.len(), second.matches.len());
    for (a, b) in first.matches.iter().zip(second.matches.iter()) {
        assert_eq!(a.user_id, b.user_id);
        assert_eq!(a.score, b.score);
        assert_eq!(a.offer_match, b.offer_match);
        assert_eq!(a.want_match, b.want_match);
    }
}
