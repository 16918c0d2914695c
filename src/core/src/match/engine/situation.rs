use crate::r#match::engine::token::{Token, TokenKind};
use serde::Serialize;

/// Non-open-play match states. Each one swaps the zone-driven bag for a
/// fixed outcome-frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchSituation {
    Normal,
    Corner,
    Penalty,
    FreeKick,
    GoalKick,
    ThrowIn,
    KickOff,
    ReboundZone,
    VarZone,
}

/// Table row: kind, repeat count (the likelihood weight), quality,
/// nominal duration, and whether the outcome belongs to the defending
/// side.
type SituationEntry = (TokenKind, usize, f32, u32, bool);

pub struct SituationGenerator;

impl SituationGenerator {
    /// Builds the fixed-distribution bag for a set piece. The zone
    /// catalog is not consulted; repeated entries encode the outcome
    /// frequencies exactly like zone base tokens do.
    pub fn build_bag(
        situation: MatchSituation,
        possession_team_id: u32,
        opponent_team_id: u32,
    ) -> Vec<Token> {
        let entries: &[SituationEntry] = match situation {
            // Kickoffs bias toward the safe back pass with a small
            // chance of an immediate long ball or turnover.
            MatchSituation::KickOff => &[
                (TokenKind::KickoffBack, 8, 10.0, 5, false),
                (TokenKind::KickoffLong, 2, 8.0, 6, false),
                (TokenKind::KickoffLoss, 1, 4.0, 6, false),
            ],
            // Mostly cleared, some played short, rare direct goal.
            MatchSituation::Corner => &[
                (TokenKind::CornerCleared, 6, 9.0, 10, true),
                (TokenKind::CornerShort, 3, 8.0, 9, false),
                (TokenKind::CornerGoal, 1, 12.0, 8, false),
            ],
            // Mostly scored, some saved, rare miss.
            MatchSituation::Penalty => &[
                (TokenKind::PenaltyScored, 15, 14.0, 12, false),
                (TokenKind::PenaltySaved, 4, 10.0, 12, false),
                (TokenKind::PenaltyMissed, 1, 6.0, 12, false),
            ],
            // Mostly safe restarts, rare distribution error.
            MatchSituation::GoalKick => &[
                (TokenKind::GoalKickShort, 6, 9.0, 10, false),
                (TokenKind::GoalKickLong, 3, 8.0, 13, false),
                (TokenKind::GoalKickError, 1, 4.0, 10, false),
            ],
            MatchSituation::ThrowIn => &[
                (TokenKind::ThrowInShort, 6, 9.0, 8, false),
                (TokenKind::ThrowInLong, 3, 7.5, 10, false),
                (TokenKind::ThrowInLoss, 1, 4.0, 8, false),
            ],
            MatchSituation::FreeKick => &[
                (TokenKind::FreeKickShort, 5, 9.0, 9, false),
                (TokenKind::FreeKickCross, 3, 8.0, 12, false),
                (TokenKind::FreeKickShot, 2, 9.0, 10, false),
            ],
            // Loose ball in the box after a parried shot.
            MatchSituation::ReboundZone => &[
                (TokenKind::ReboundShot, 4, 10.0, 5, false),
                (TokenKind::ReboundClear, 6, 9.0, 7, true),
            ],
            // Review of a challenge in the box: spot kick or play on.
            MatchSituation::VarZone => &[
                (TokenKind::VarPenaltyAwarded, 3, 10.0, 25, false),
                (TokenKind::VarNoFoul, 7, 10.0, 25, false),
            ],
            // Open play never reaches the generator.
            MatchSituation::Normal => &[],
        };

        let mut bag = Vec::new();
        let mut next_id: u32 = 1;

        for &(kind, count, quality, duration, defending_side) in entries {
            let team_id = if defending_side {
                opponent_team_id
            } else {
                possession_team_id
            };

            for _ in 0..count {
                bag.push(Token::system(next_id, kind, team_id, quality, duration));
                next_id += 1;
            }
        }

        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTACKERS: u32 = 1;
    const DEFENDERS: u32 = 2;

    #[test]
    fn test_all_situations_yield_tokens() {
        let situations = [
            MatchSituation::KickOff,
            MatchSituation::Corner,
            MatchSituation::Penalty,
            MatchSituation::FreeKick,
            MatchSituation::GoalKick,
            MatchSituation::ThrowIn,
            MatchSituation::ReboundZone,
            MatchSituation::VarZone,
        ];

        for situation in situations {
            let bag = SituationGenerator::build_bag(situation, ATTACKERS, DEFENDERS);
            assert!(!bag.is_empty(), "{situation:?} produced an empty bag");
        }
    }

    #[test]
    fn test_kickoff_biases_back_pass() {
        let bag = SituationGenerator::build_bag(MatchSituation::KickOff, ATTACKERS, DEFENDERS);

        let back = bag
            .iter()
            .filter(|t| t.kind == TokenKind::KickoffBack)
            .count();

        assert!(back * 2 > bag.len());
    }

    #[test]
    fn test_penalty_mostly_scored() {
        let bag = SituationGenerator::build_bag(MatchSituation::Penalty, ATTACKERS, DEFENDERS);

        let scored = bag
            .iter()
            .filter(|t| t.kind == TokenKind::PenaltyScored)
            .count();

        assert!(scored * 2 > bag.len());
    }

    #[test]
    fn test_defensive_outcomes_belong_to_defenders() {
        let bag = SituationGenerator::build_bag(MatchSituation::Corner, ATTACKERS, DEFENDERS);

        for token in &bag {
            if token.kind == TokenKind::CornerCleared {
                assert_eq!(token.team_id, DEFENDERS);
            } else {
                assert_eq!(token.team_id, ATTACKERS);
            }
        }
    }
}
