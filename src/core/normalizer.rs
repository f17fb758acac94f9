use crate::models::SkillSet;

/// Parse a raw comma-separated skill list into a canonical [`SkillSet`].
///
/// Each comma-separated piece is trimmed and lowercased; pieces that trim
/// to nothing are discarded and duplicates collapse silently. Total over
/// all inputs: empty or garbage text degrades to an empty set.
///
/// # Examples
/// ```
/// use skillswap_algo::core::normalizer::normalize;
///
/// let skills = normalize("Python, COOKING , python");
/// assert_eq!(skills.len(), 2);
/// assert!(skills.contains("python"));
/// assert!(skills.contains("cooking"));
/// ```
pub fn normalize(raw: &str) -> SkillSet {
    SkillSet::from_tokens(
        raw.split(',')
            .map(|piece| piece.trim().to_lowercase())
            .filter(|token| !token.is_empty()),
    )
}
