use serde::Serialize;

/// Owner id used for tokens contributed by the zone catalog or a
/// situation table rather than a concrete player.
pub const SYSTEM_OWNER: u32 = 0;

/// Team id of the neutral fallback token.
pub const NEUTRAL_TEAM: u32 = 0;

/// Every discrete action the engine can draw.
///
/// The set is closed on purpose: each kind carries its resolver
/// (see `resolve.rs`), so an unhandled action is a compile error
/// instead of a silently skipped tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Open play
    ShortPass,
    BackPass,
    LongPass,
    Cross,
    Dribble,
    Shot,
    LongShot,
    Clearance,
    Tackle,
    Interception,
    HoldUp,

    // Kickoff
    KickoffBack,
    KickoffLong,
    KickoffLoss,

    // Corner
    CornerCleared,
    CornerShort,
    CornerGoal,

    // Penalty
    PenaltyScored,
    PenaltySaved,
    PenaltyMissed,

    // Goal kick
    GoalKickShort,
    GoalKickLong,
    GoalKickError,

    // Throw-in
    ThrowInShort,
    ThrowInLong,
    ThrowInLoss,

    // Free kick
    FreeKickShort,
    FreeKickCross,
    FreeKickShot,

    // Goalmouth scramble after a parried shot
    ReboundShot,
    ReboundClear,

    // Video review of a challenge in the box
    VarPenaltyAwarded,
    VarNoFoul,
}

impl TokenKind {
    /// Open-play shots are the only kinds subject to the bag builder's
    /// spatial filter; situational shot outcomes already encode their
    /// own placement.
    pub fn is_open_play_shot(&self) -> bool {
        matches!(self, TokenKind::Shot | TokenKind::LongShot)
    }

    /// Kinds executed by the side out of possession. Their tokens are
    /// stamped with the defending team so statistics land correctly.
    pub fn is_defensive(&self) -> bool {
        matches!(
            self,
            TokenKind::Clearance
                | TokenKind::Tackle
                | TokenKind::Interception
                | TokenKind::CornerCleared
                | TokenKind::ReboundClear
        )
    }

    /// Energy drained from the credited player, before the endurance
    /// scaling applied in `MatchPlayer::add_fatigue`.
    pub fn fatigue_cost(&self) -> f32 {
        match self {
            TokenKind::ShortPass
            | TokenKind::BackPass
            | TokenKind::KickoffBack
            | TokenKind::GoalKickShort
            | TokenKind::ThrowInShort
            | TokenKind::FreeKickShort
            | TokenKind::CornerShort => 0.4,

            TokenKind::LongPass
            | TokenKind::Cross
            | TokenKind::KickoffLong
            | TokenKind::GoalKickLong
            | TokenKind::ThrowInLong
            | TokenKind::FreeKickCross => 0.7,

            TokenKind::Tackle
            | TokenKind::Interception
            | TokenKind::Clearance
            | TokenKind::CornerCleared
            | TokenKind::ReboundClear => 0.9,

            TokenKind::Dribble => 1.1,

            TokenKind::Shot
            | TokenKind::LongShot
            | TokenKind::FreeKickShot
            | TokenKind::ReboundShot
            | TokenKind::CornerGoal
            | TokenKind::PenaltyScored
            | TokenKind::PenaltySaved
            | TokenKind::PenaltyMissed => 1.3,

            TokenKind::HoldUp
            | TokenKind::KickoffLoss
            | TokenKind::GoalKickError
            | TokenKind::ThrowInLoss
            | TokenKind::VarPenaltyAwarded
            | TokenKind::VarNoFoul => 0.3,
        }
    }
}

/// One candidate action in a bag. Created fresh every tick and never
/// persisted past the tick that consumes it; the chosen token is copied
/// into the log entry for traceability.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Token {
    pub id: u32,
    pub kind: TokenKind,
    pub owner_id: u32,
    pub team_id: u32,
    pub quality: f32,
    pub duration: u32,
}

impl Token {
    pub fn system(id: u32, kind: TokenKind, team_id: u32, quality: f32, duration: u32) -> Self {
        Token {
            id,
            kind,
            owner_id: SYSTEM_OWNER,
            team_id,
            quality,
            duration,
        }
    }

    pub fn owned(
        id: u32,
        kind: TokenKind,
        owner_id: u32,
        team_id: u32,
        quality: f32,
        duration: u32,
    ) -> Self {
        Token {
            id,
            kind,
            owner_id,
            team_id,
            quality,
            duration,
        }
    }

    pub fn neutral_fallback(id: u32) -> Self {
        Token::system(id, TokenKind::HoldUp, NEUTRAL_TEAM, 5.0, 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defensive_kinds() {
        assert!(TokenKind::Tackle.is_defensive());
        assert!(TokenKind::CornerCleared.is_defensive());
        assert!(!TokenKind::ShortPass.is_defensive());
        assert!(!TokenKind::Shot.is_defensive());
    }

    #[test]
    fn test_shot_costs_more_than_short_pass() {
        assert!(TokenKind::Shot.fatigue_cost() > TokenKind::ShortPass.fatigue_cost());
        assert!(TokenKind::Dribble.fatigue_cost() > TokenKind::ShortPass.fatigue_cost());
    }

    #[test]
    fn test_neutral_fallback_token() {
        let token = Token::neutral_fallback(1);

        assert_eq!(token.kind, TokenKind::HoldUp);
        assert_eq!(token.owner_id, SYSTEM_OWNER);
        assert_eq!(token.team_id, NEUTRAL_TEAM);
    }
}
