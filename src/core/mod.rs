// Core algorithm exports
pub mod matcher;
pub mod normalizer;
pub mod scoring;

pub use matcher::{rank, rank_profiles, RankReport};
pub use normalizer::normalize;
pub use scoring::{score_overlap, MatchBreakdown};
