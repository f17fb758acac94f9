use crate::core::normalizer::normalize;
use crate::core::scoring::score_overlap;
use crate::models::{MatchResult, SkillProfile, SkillSet};

/// Result of one ranking pass
#[derive(Debug)]
pub struct RankReport {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Rank candidates against the querying user's canonical skill sets.
///
/// Candidates whose id equals `exclude_id` are skipped, so the querying
/// user never matches themselves even when the repository hands back the
/// full population. Each candidate's raw skill text is normalized here,
/// per ranking call. Zero-score candidates are dropped entirely; there are
/// no placeholder entries.
///
/// Results are ordered by score descending, with ties broken by candidate
/// `user_id` ascending so output is reproducible regardless of input order.
///
/// Pure over its inputs: no storage access, no mutation, safe to call
/// concurrently.
pub fn rank(
    self_offered: &SkillSet,
    self_wanted: &SkillSet,
    candidates: &[SkillProfile],
    exclude_id: &str,
) -> RankReport {
    let total_candidates = candidates.len();

    let mut matches: Vec<MatchResult> = candidates
        .iter()
        .filter(|candidate| candidate.user_id != exclude_id)
        .filter_map(|candidate| {
            let offered = normalize(&candidate.skills_offered);
            let wanted = normalize(&candidate.skills_wanted);

            let breakdown = score_overlap(self_offered, self_wanted, &offered, &wanted);

            if breakdown.score > 0 {
                Some(MatchResult {
                    user_id: candidate.user_id.clone(),
                    offer_match: breakdown.offer_match,
                    want_match: breakdown.want_match,
                    score: breakdown.score,
                })
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    RankReport {
        matches,
        total_candidates,
    }
}

/// Find matches for one profile against a candidate snapshot.
///
/// Normalizes the querying profile's own raw skill text and delegates to
/// [`rank`] with the profile's id excluded.
pub fn rank_profiles(profile: &SkillProfile, candidates: &[SkillProfile]) -> RankReport {
    let self_offered = normalize(&profile.skills_offered);
    let self_wanted = normalize(&profile.skills_wanted);

    rank(&self_offered, &self_wanted, candidates, &profile.user_id)
}
