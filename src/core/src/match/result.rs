use crate::r#match::engine::engine::Score;
use crate::r#match::engine::log::MatchLogEntry;
use crate::r#match::engine::statistics::StatSummary;
use serde::Serialize;

/// Everything a finished match produces: the final score, the tick log
/// and the accumulated statistics. The club layer reads this to update
/// tables and season records.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub score: Score,
    pub final_time: u64,
    pub log: Vec<MatchLogEntry>,
    pub statistics: StatSummary,
}

impl MatchReport {
    pub fn home_score(&self) -> u8 {
        self.score.home.goals
    }

    pub fn away_score(&self) -> u8 {
        self.score.away.goals
    }

    pub fn winner_team_id(&self) -> Option<u32> {
        match self.score.home.goals.cmp(&self.score.away.goals) {
            std::cmp::Ordering::Greater => Some(self.home_team_id),
            std::cmp::Ordering::Less => Some(self.away_team_id),
            std::cmp::Ordering::Equal => None,
        }
    }
}
