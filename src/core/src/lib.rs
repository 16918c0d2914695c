pub mod r#match;
pub mod simulator;

pub use simulator::*;

// Re-export match items
pub use r#match::{
    // Engine
    MatchEngine, MatchDuration, Score, TeamScore,
    // Grid
    GridPosition, GRID_WIDTH, GRID_HEIGHT,
    // Tokens
    Token, TokenKind, SYSTEM_OWNER, NEUTRAL_TEAM,
    // Bags & zones
    BagBuilder, ZoneDefinition, zone_for,
    // Situations
    MatchSituation, SituationGenerator,
    // Resolution
    TokenResolution, MatchEventKind,
    // Log
    MatchLogEntry, LogEntryType,
    // Statistics
    StatTracker, StatTag, StatSummary, ActionTotals, TeamStats, PlayerStats, RoleStats,
    // Players
    MatchPlayer, PlayerRole, PlayerRatings, Influence,
    // Squads
    MatchSquad, SquadPlayer, Formation,
    // Results
    MatchReport,
    // Errors
    MatchEngineError,
};
