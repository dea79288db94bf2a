pub mod song;
pub mod match_result;

pub use song::Song;
pub use match_result::{MatchKind, MatchResult, ScoredSong};
