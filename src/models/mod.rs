// Model exports
pub mod domain;
pub mod responses;

pub use domain::{MatchResult, SkillProfile, SkillSet};
pub use responses::MatchesResponse;
