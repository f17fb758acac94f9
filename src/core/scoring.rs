use crate::models::SkillSet;

/// Two-way skill overlap between one candidate and the querying user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchBreakdown {
    /// Skills the candidate offers that the querying user wants, sorted
    /// lexicographically.
    pub offer_match: Vec<String>,
    /// Skills the candidate wants that the querying user offers, sorted
    /// lexicographically.
    pub want_match: Vec<String>,
    /// Total overlap count: offer matches plus want matches.
    pub score: u32,
}

/// Score a single candidate against the querying user's skill sets.
///
/// The score is the number of skills the candidate offers that the user
/// wants, plus the number of skills the candidate wants that the user
/// offers. A disjoint pair scores zero with empty overlap sequences.
pub fn score_overlap(
    self_offered: &SkillSet,
    self_wanted: &SkillSet,
    candidate_offered: &SkillSet,
    candidate_wanted: &SkillSet,
) -> MatchBreakdown {
    let offer_match = candidate_offered.intersection_sorted(self_wanted);
    let want_match = candidate_wanted.intersection_sorted(self_offered);
    let score = (offer_match.len() + want_match.len()) as u32;

    MatchBreakdown {
        offer_match,
        want_match,
        score,
    }
}
