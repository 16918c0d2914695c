use thiserror::Error;

/// Fatal configuration problems detected before the first tick runs.
///
/// Everything that can go wrong after kick-off is recovered silently
/// (fallback tokens, position clamping), so the error surface of the
/// engine is construction only.
#[derive(Debug, Error)]
pub enum MatchEngineError {
    #[error("team {team_id} supplied {available} eligible players, {required} required")]
    NotEnoughPlayers {
        team_id: u32,
        available: usize,
        required: usize,
    },
    #[error("unknown formation key: {0}")]
    UnknownFormation(String),
}
