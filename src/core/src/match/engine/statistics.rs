use crate::r#match::player::{MatchPlayer, PlayerRole};
use serde::Serialize;
use std::collections::HashMap;

/// Statistical impact of one resolved action. Every tag increments
/// exactly one counter per relevant entity; nothing is ever reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatTag {
    PassAttempted,
    PassCompleted,
    ShotOnTarget,
    ShotOffTarget,
    Goal,
    Tackle,
    Interception,
    Clearance,
    Dribble,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ActionTotals {
    pub passes_attempted: u16,
    pub passes_completed: u16,
    pub shots_on_target: u16,
    pub shots_off_target: u16,
    pub goals: u16,
    pub tackles: u16,
    pub interceptions: u16,
    pub clearances: u16,
    pub dribbles: u16,
}

impl ActionTotals {
    fn apply(&mut self, tag: StatTag) {
        match tag {
            StatTag::PassAttempted => self.passes_attempted += 1,
            StatTag::PassCompleted => self.passes_completed += 1,
            StatTag::ShotOnTarget => self.shots_on_target += 1,
            StatTag::ShotOffTarget => self.shots_off_target += 1,
            StatTag::Goal => self.goals += 1,
            StatTag::Tackle => self.tackles += 1,
            StatTag::Interception => self.interceptions += 1,
            StatTag::Clearance => self.clearances += 1,
            StatTag::Dribble => self.dribbles += 1,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TeamStats {
    pub totals: ActionTotals,
    pub possession_time: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerStats {
    pub totals: ActionTotals,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RoleStats {
    pub totals: ActionTotals,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StatSummary {
    pub teams: HashMap<u32, TeamStats>,
    pub players: HashMap<u32, PlayerStats>,
    pub roles: HashMap<PlayerRole, RoleStats>,
}

/// Accumulates team, player and role totals from resolved actions.
/// Purely additive; read once at match end.
pub struct StatTracker {
    summary: StatSummary,
    player_roles: HashMap<u32, PlayerRole>,
}

impl StatTracker {
    pub fn new(players: &[MatchPlayer], home_team_id: u32, away_team_id: u32) -> Self {
        let mut summary = StatSummary::default();

        summary.teams.insert(home_team_id, TeamStats::default());
        summary.teams.insert(away_team_id, TeamStats::default());

        let player_roles = players.iter().map(|p| (p.id, p.role)).collect();

        StatTracker {
            summary,
            player_roles,
        }
    }

    /// A goal tag updates the scorer's personal tally and the team
    /// total in the same call.
    pub fn track_action(&mut self, player_id: u32, team_id: u32, tags: &[StatTag]) {
        for &tag in tags {
            if let Some(team) = self.summary.teams.get_mut(&team_id) {
                team.totals.apply(tag);
            }

            if let Some(role) = self.player_roles.get(&player_id).copied() {
                self.summary
                    .players
                    .entry(player_id)
                    .or_default()
                    .totals
                    .apply(tag);

                self.summary.roles.entry(role).or_default().totals.apply(tag);
            }
        }
    }

    pub fn track_possession(&mut self, team_id: u32, duration: u64) {
        if let Some(team) = self.summary.teams.get_mut(&team_id) {
            team.possession_time += duration;
        }
    }

    pub fn summary(self) -> StatSummary {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::player::PlayerRatings;
    use std::collections::HashSet;

    fn tracker() -> StatTracker {
        let players = vec![MatchPlayer::new(
            7,
            1,
            String::from("Scorer"),
            PlayerRole::Forward,
            PlayerRatings::uniform(10.0),
            HashSet::new(),
            HashSet::new(),
        )];

        StatTracker::new(&players, 1, 2)
    }

    #[test]
    fn test_goal_updates_player_and_team_together() {
        let mut tracker = tracker();

        tracker.track_action(7, 1, &[StatTag::ShotOnTarget, StatTag::Goal]);

        let summary = tracker.summary();
        assert_eq!(summary.teams[&1].totals.goals, 1);
        assert_eq!(summary.teams[&1].totals.shots_on_target, 1);
        assert_eq!(summary.players[&7].totals.goals, 1);
        assert_eq!(summary.roles[&PlayerRole::Forward].totals.goals, 1);
    }

    #[test]
    fn test_system_actions_count_for_team_only() {
        let mut tracker = tracker();

        tracker.track_action(0, 2, &[StatTag::Clearance]);

        let summary = tracker.summary();
        assert_eq!(summary.teams[&2].totals.clearances, 1);
        assert!(summary.players.is_empty());
        assert!(summary.roles.is_empty());
    }

    #[test]
    fn test_possession_accumulates() {
        let mut tracker = tracker();

        tracker.track_possession(1, 10);
        tracker.track_possession(1, 15);
        tracker.track_possession(2, 5);

        let summary = tracker.summary();
        assert_eq!(summary.teams[&1].possession_time, 25);
        assert_eq!(summary.teams[&2].possession_time, 5);
    }
}
