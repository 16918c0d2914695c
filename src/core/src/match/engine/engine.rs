use crate::r#match::engine::bag::BagBuilder;
use crate::r#match::engine::grid::{GridPosition, GRID_HEIGHT, GRID_WIDTH};
use crate::r#match::engine::log::{LogEntryType, MatchLogEntry};
use crate::r#match::engine::resolve::MatchEventKind;
use crate::r#match::engine::situation::{MatchSituation, SituationGenerator};
use crate::r#match::engine::statistics::StatTracker;
use crate::r#match::engine::token::{Token, SYSTEM_OWNER};
use crate::r#match::engine::zones::zone_for;
use crate::r#match::error::MatchEngineError;
use crate::r#match::player::MatchPlayer;
use crate::r#match::result::MatchReport;
use crate::r#match::squad::MatchSquad;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Clock setup in seconds of match time.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchDuration {
    pub half: u64,
    pub full: u64,
}

impl Default for MatchDuration {
    fn default() -> Self {
        MatchDuration {
            half: 45 * 60,
            full: 90 * 60,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamScore {
    pub team_id: u32,
    pub goals: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Score {
    pub home: TeamScore,
    pub away: TeamScore,
}

impl Score {
    fn new(home_team_id: u32, away_team_id: u32) -> Self {
        Score {
            home: TeamScore {
                team_id: home_team_id,
                goals: 0,
            },
            away: TeamScore {
                team_id: away_team_id,
                goals: 0,
            },
        }
    }

    fn add_goal(&mut self, team_id: u32) {
        if self.home.team_id == team_id {
            self.home.goals = self.home.goals.saturating_add(1);
        } else {
            self.away.goals = self.away.goals.saturating_add(1);
        }
    }
}

const HALF_TIME_RECOVERY: f32 = 30.0;
const STOPPAGE_RECOVERY: f32 = 1.0;

/// Runs one match from kickoff to the final whistle.
///
/// Every tick draws a single token uniformly from the current bag,
/// resolves it, applies displacement, possession and score changes, and
/// appends a log entry. The engine owns all mutable state for the run;
/// nothing escapes except the final report.
pub struct MatchEngine;

impl MatchEngine {
    pub fn play(home: &MatchSquad, away: &MatchSquad) -> Result<MatchReport, MatchEngineError> {
        let mut rng = StdRng::from_os_rng();

        Self::play_with_rng(home, away, MatchDuration::default(), &mut rng)
    }

    /// Deterministic variant: the same squads and the same generator
    /// state reproduce the identical log tick for tick.
    pub fn play_with_rng<R: Rng + ?Sized>(
        home: &MatchSquad,
        away: &MatchSquad,
        duration: MatchDuration,
        rng: &mut R,
    ) -> Result<MatchReport, MatchEngineError> {
        let mut players = home.build_match_players(true)?;
        players.extend(away.build_match_players(false)?);

        let mut tracker = StatTracker::new(&players, home.team_id, away.team_id);
        let mut score = Score::new(home.team_id, away.team_id);
        let mut log: Vec<MatchLogEntry> = Vec::new();

        let first_kicker_home = rng.random_bool(0.5);

        let mut state = TickState {
            time: 0,
            ball: GridPosition::kickoff_spot(),
            possession_team_id: Self::side_id(home, away, first_kicker_home),
            situation: MatchSituation::KickOff,
            halftime_done: false,
        };

        let mut bag = Self::assemble_bag(&state, home, away, &mut players, rng);

        log.push(MatchLogEntry {
            time: 0,
            entry_type: LogEntryType::KickOff,
            situation: MatchSituation::KickOff,
            ball: state.ball,
            team_id: state.possession_team_id,
            possession_team_id: state.possession_team_id,
            drawn_token: None,
            turnover: false,
            is_goal: false,
            event: None,
            narrative: format!("{} get the match under way", Self::side_name(home, away, state.possession_team_id)),
            stat_tags: Vec::new(),
            next_bag: bag.clone(),
        });

        while state.time < duration.full {
            let situation_before = state.situation;

            // Uniform draw; repetition inside the bag is the weighting.
            let token = bag
                .choose(rng)
                .copied()
                .unwrap_or_else(|| Token::neutral_fallback(1));

            let player_name = players
                .iter()
                .find(|p| p.id == token.owner_id)
                .map(|p| p.name.as_str())
                .unwrap_or("");

            let is_home_attacking = state.possession_team_id == home.team_id;
            let resolution =
                token
                    .kind
                    .resolve(&token, player_name, is_home_attacking, state.ball, rng);

            let tick_seconds = u64::from(resolution.duration.max(1));
            tracker.track_possession(state.possession_team_id, tick_seconds);
            tracker.track_action(token.owner_id, token.team_id, &resolution.stat_tags);

            if token.owner_id != SYSTEM_OWNER {
                if let Some(player) = players.iter_mut().find(|p| p.id == token.owner_id) {
                    player.add_fatigue(token.kind);
                }
            }

            state.time += tick_seconds;
            state.ball = state.ball.advanced(resolution.move_x, resolution.move_y);

            if resolution.turnover {
                state.possession_team_id =
                    Self::opponent_id(home, away, state.possession_team_id);
            }

            if resolution.is_goal {
                score.add_goal(token.team_id);
                debug!(
                    "goal for team {} at {}s ({}:{})",
                    token.team_id, state.time, score.home.goals, score.away.goals
                );

                state.possession_team_id = Self::opponent_id(home, away, token.team_id);
                state.ball = GridPosition::kickoff_spot();
                state.situation = MatchSituation::KickOff;
            } else if let Some(event) = resolution.event {
                Self::apply_event(event, home.team_id, &mut state);
            } else {
                state.situation = MatchSituation::Normal;
            }

            let entry = MatchLogEntry {
                time: state.time,
                entry_type: Self::entry_type(situation_before, &resolution),
                situation: situation_before,
                ball: state.ball,
                team_id: token.team_id,
                possession_team_id: state.possession_team_id,
                drawn_token: Some(token),
                turnover: resolution.turnover,
                is_goal: resolution.is_goal,
                event: resolution.event,
                narrative: resolution.narrative.clone(),
                stat_tags: resolution.stat_tags.clone(),
                next_bag: Vec::new(),
            };
            log.push(entry);

            // Players catch their breath whenever the game stops.
            if state.situation != MatchSituation::Normal {
                for player in players.iter_mut() {
                    player.recover(STOPPAGE_RECOVERY);
                }
            }

            if !state.halftime_done && state.time >= duration.half {
                state.halftime_done = true;
                debug!(
                    "half-time at {}s ({}:{})",
                    state.time, score.home.goals, score.away.goals
                );
                state.ball = GridPosition::kickoff_spot();
                state.possession_team_id = Self::side_id(home, away, !first_kicker_home);
                state.situation = MatchSituation::KickOff;

                for player in players.iter_mut() {
                    player.recover(HALF_TIME_RECOVERY);
                }
            }

            if state.time >= duration.full {
                break;
            }

            bag = Self::assemble_bag(&state, home, away, &mut players, rng);
            if let Some(last) = log.last_mut() {
                last.next_bag = bag.clone();
            }
        }

        debug!(
            "full-time at {}s ({}:{})",
            state.time, score.home.goals, score.away.goals
        );

        Ok(MatchReport {
            home_team_id: home.team_id,
            away_team_id: away.team_id,
            score,
            final_time: state.time,
            log,
            statistics: tracker.summary(),
        })
    }

    fn assemble_bag<R: Rng + ?Sized>(
        state: &TickState,
        home: &MatchSquad,
        away: &MatchSquad,
        players: &mut [MatchPlayer],
        rng: &mut R,
    ) -> Vec<Token> {
        let opponent = Self::opponent_id(home, away, state.possession_team_id);

        if state.situation == MatchSituation::Normal {
            for player in players.iter_mut() {
                player.refresh_influence(state.ball);
            }

            BagBuilder::build(
                zone_for(state.ball),
                state.ball,
                state.possession_team_id,
                opponent,
                state.possession_team_id == home.team_id,
                players,
                rng,
            )
        } else {
            SituationGenerator::build_bag(state.situation, state.possession_team_id, opponent)
        }
    }

    /// Moves the ball to the spot a set piece is taken from and selects
    /// the next situation.
    fn apply_event(event: MatchEventKind, home_team_id: u32, state: &mut TickState) {
        let is_home_possession = state.possession_team_id == home_team_id;

        state.situation = match event {
            MatchEventKind::ShotWide | MatchEventKind::ShotSaved => {
                // Turnover already ran, so possession names the side
                // restarting from its own goalmouth.
                state.ball = GridPosition::new(Self::own_goal_column(is_home_possession), GRID_HEIGHT / 2);
                MatchSituation::GoalKick
            }
            MatchEventKind::ShotParried => MatchSituation::ReboundZone,
            MatchEventKind::CrossOut => {
                let target = GridPosition::target_column(is_home_possession);
                state.ball = GridPosition::new(target, Self::nearest_edge_row(state.ball));
                MatchSituation::Corner
            }
            MatchEventKind::BallOut => {
                state.ball = GridPosition::new(state.ball.x, Self::nearest_edge_row(state.ball));
                MatchSituation::ThrowIn
            }
            MatchEventKind::Foul => MatchSituation::FreeKick,
            MatchEventKind::BoxIncident => MatchSituation::VarZone,
            MatchEventKind::PenaltyAwarded => {
                let target = GridPosition::target_column(is_home_possession);
                state.ball = GridPosition::new(target, GRID_HEIGHT / 2);
                MatchSituation::Penalty
            }
            MatchEventKind::Goal => MatchSituation::KickOff,
        };
    }

    fn entry_type(
        situation_before: MatchSituation,
        resolution: &crate::r#match::engine::resolve::TokenResolution,
    ) -> LogEntryType {
        if situation_before == MatchSituation::KickOff {
            LogEntryType::KickOff
        } else if resolution.is_goal || resolution.event.is_some() {
            LogEntryType::Event
        } else {
            LogEntryType::Action
        }
    }

    fn own_goal_column(is_home: bool) -> u8 {
        if is_home { 0 } else { GRID_WIDTH - 1 }
    }

    fn nearest_edge_row(ball: GridPosition) -> u8 {
        if ball.y <= GRID_HEIGHT / 2 {
            0
        } else {
            GRID_HEIGHT - 1
        }
    }

    fn side_id(home: &MatchSquad, away: &MatchSquad, is_home: bool) -> u32 {
        if is_home { home.team_id } else { away.team_id }
    }

    fn opponent_id(home: &MatchSquad, away: &MatchSquad, team_id: u32) -> u32 {
        if team_id == home.team_id {
            away.team_id
        } else {
            home.team_id
        }
    }

    fn side_name<'s>(home: &'s MatchSquad, away: &'s MatchSquad, team_id: u32) -> &'s str {
        if team_id == home.team_id {
            &home.team_name
        } else {
            &away.team_name
        }
    }
}

struct TickState {
    time: u64,
    ball: GridPosition,
    possession_team_id: u32,
    situation: MatchSituation,
    halftime_done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::player::PlayerRatings;
    use crate::r#match::squad::{Formation, SquadPlayer};

    const HOME: u32 = 1;
    const AWAY: u32 = 2;

    fn squad(team_id: u32, rating: f32) -> MatchSquad {
        let players = (0..11u32)
            .map(|i| SquadPlayer {
                id: team_id * 100 + i,
                name: format!("Player {team_id}-{i}"),
                ratings: PlayerRatings::uniform(rating),
            })
            .collect();

        MatchSquad::new(team_id, format!("Team {team_id}"), Formation::F442, players)
    }

    fn play_seeded(seed: u64) -> MatchReport {
        let mut rng = StdRng::seed_from_u64(seed);

        MatchEngine::play_with_rng(
            &squad(HOME, 12.0),
            &squad(AWAY, 12.0),
            MatchDuration::default(),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_score_saturates_at_counter_limit() {
        let mut score = Score::new(HOME, AWAY);
        score.home.goals = u8::MAX;

        score.add_goal(HOME);
        score.add_goal(AWAY);

        assert_eq!(score.home.goals, u8::MAX);
        assert_eq!(score.away.goals, 1);
    }

    #[test]
    fn test_short_seeded_match_smoke() {
        let mut rng = StdRng::seed_from_u64(99);

        let report = MatchEngine::play_with_rng(
            &squad(HOME, 10.0),
            &squad(AWAY, 10.0),
            MatchDuration { half: 100, full: 200 },
            &mut rng,
        )
        .unwrap();

        assert!(!report.log.is_empty());
        assert!(report.final_time >= 200);

        let entry = report.log.iter().find(|e| e.drawn_token.is_some()).unwrap();
        assert!(entry.possession_team_id == HOME || entry.possession_team_id == AWAY);
        assert!(entry.ball.x < GRID_WIDTH);
    }

    #[test]
    fn test_match_runs_to_full_time() {
        let report = play_seeded(42);

        assert!(report.final_time >= MatchDuration::default().full);
        assert!(report.log.len() > 100);
    }

    #[test]
    fn test_clock_is_strictly_monotonic() {
        let report = play_seeded(42);

        for pair in report.log.windows(2) {
            assert!(pair[1].time > pair[0].time);
        }
    }

    #[test]
    fn test_possession_changes_are_explained() {
        let report = play_seeded(42);

        for pair in report.log.windows(2) {
            if pair[0].possession_team_id != pair[1].possession_team_id {
                let entry = &pair[1];

                assert!(
                    entry.turnover
                        || entry.is_goal
                        || entry.entry_type == LogEntryType::KickOff,
                    "unexplained possession change at {}s: {:?}",
                    entry.time,
                    entry
                );
            }
        }
    }

    #[test]
    fn test_score_matches_goal_entries() {
        let report = play_seeded(42);

        let logged_goals = report.log.iter().filter(|e| e.is_goal).count() as u8;

        assert_eq!(report.score.home.goals + report.score.away.goals, logged_goals);
    }

    #[test]
    fn test_entries_name_the_acting_team() {
        let report = play_seeded(42);

        let opener = &report.log[0];
        assert!(opener.drawn_token.is_none());
        assert_eq!(opener.team_id, opener.possession_team_id);

        for entry in &report.log {
            if let Some(token) = entry.drawn_token {
                assert_eq!(entry.team_id, token.team_id);
            }
        }
    }

    #[test]
    fn test_ball_stays_on_the_grid() {
        let report = play_seeded(42);

        for entry in &report.log {
            assert!(entry.ball.x < GRID_WIDTH);
            assert!(entry.ball.y < GRID_HEIGHT);
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_match() {
        let first = play_seeded(7);
        let second = play_seeded(7);

        assert_eq!(first.score.home.goals, second.score.home.goals);
        assert_eq!(first.score.away.goals, second.score.away.goals);
        assert_eq!(first.log.len(), second.log.len());
        assert_eq!(first.final_time, second.final_time);
    }

    #[test]
    fn test_possession_time_covers_the_clock() {
        let report = play_seeded(42);

        let home_time = report.statistics.teams[&HOME].possession_time;
        let away_time = report.statistics.teams[&AWAY].possession_time;

        assert_eq!(home_time + away_time, report.final_time);
    }

    #[test]
    fn test_stronger_squad_wins_on_aggregate() {
        let mut home_goals = 0u32;
        let mut away_goals = 0u32;

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report = MatchEngine::play_with_rng(
                &squad(HOME, 17.0),
                &squad(AWAY, 5.0),
                MatchDuration::default(),
                &mut rng,
            )
            .unwrap();

            home_goals += u32::from(report.score.home.goals);
            away_goals += u32::from(report.score.away.goals);
        }

        assert!(home_goals > away_goals);
    }
}
