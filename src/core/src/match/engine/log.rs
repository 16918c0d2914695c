use crate::r#match::engine::grid::GridPosition;
use crate::r#match::engine::resolve::MatchEventKind;
use crate::r#match::engine::situation::MatchSituation;
use crate::r#match::engine::statistics::StatTag;
use crate::r#match::engine::token::Token;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogEntryType {
    /// Restart from the centre spot, including the pre-match entry.
    KickOff,
    /// An ordinary resolved tick.
    Action,
    /// A tick that produced a notable event (goal, save, foul, ...).
    Event,
}

/// One tick of the match log. The log is the engine's complete audit
/// trail: the state the tick was played from, the token that decided
/// it, and the bag assembled for the NEXT draw.
#[derive(Debug, Clone, Serialize)]
pub struct MatchLogEntry {
    /// Match clock in seconds at the moment the entry was written.
    pub time: u64,
    pub entry_type: LogEntryType,
    pub situation: MatchSituation,
    /// Ball cell after this tick's displacement was applied.
    pub ball: GridPosition,
    /// Side the resolved action belonged to; for the pre-match entry,
    /// the side taking the opening kickoff.
    pub team_id: u32,
    /// Side in possession after this tick resolved.
    pub possession_team_id: u32,
    /// `None` only for the pre-match kickoff entry.
    pub drawn_token: Option<Token>,
    /// Set when this tick handed the ball to the other side. Possession
    /// may differ between consecutive entries only across a turnover, a
    /// goal, or a kickoff.
    pub turnover: bool,
    pub is_goal: bool,
    pub event: Option<MatchEventKind>,
    pub narrative: String,
    /// Counters this tick incremented, already applied to the tracker.
    pub stat_tags: Vec<StatTag>,
    /// Candidate tokens assembled for the draw that follows this entry.
    pub next_bag: Vec<Token>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::token::TokenKind;

    #[test]
    fn test_entry_serializes() {
        let entry = MatchLogEntry {
            time: 120,
            entry_type: LogEntryType::Action,
            situation: MatchSituation::Normal,
            ball: GridPosition::new(3, 2),
            team_id: 1,
            possession_team_id: 1,
            drawn_token: Some(Token::system(1, TokenKind::ShortPass, 1, 9.0, 8)),
            turnover: false,
            is_goal: false,
            event: None,
            narrative: String::from("A short pass keeps the move alive"),
            stat_tags: vec![StatTag::PassAttempted, StatTag::PassCompleted],
            next_bag: vec![Token::system(1, TokenKind::ShortPass, 1, 9.0, 8)],
        };

        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"time\":120"));
        assert!(json.contains("ShortPass"));
    }
}
