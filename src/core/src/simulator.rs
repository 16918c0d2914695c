use crate::r#match::{MatchEngine, MatchEngineError, MatchReport, MatchSquad};
use log::info;
use rayon::prelude::*;

/// One scheduled pairing of a match day.
pub struct MatchFixture {
    pub home: MatchSquad,
    pub away: MatchSquad,
}

impl MatchFixture {
    pub fn new(home: MatchSquad, away: MatchSquad) -> Self {
        MatchFixture { home, away }
    }
}

/// Plays every fixture of a match day in parallel. Each match owns its
/// state exclusively, so fixtures share nothing but the immutable zone
/// catalog.
pub fn play_round(fixtures: Vec<MatchFixture>) -> Vec<Result<MatchReport, MatchEngineError>> {
    fixtures
        .into_par_iter()
        .map(|fixture| {
            let report = MatchEngine::play(&fixture.home, &fixture.away)?;

            info!(
                "{} {} - {} {}",
                fixture.home.team_name,
                report.home_score(),
                report.away_score(),
                fixture.away.team_name
            );

            Ok(report)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{Formation, PlayerRatings, SquadPlayer};

    fn squad(team_id: u32) -> MatchSquad {
        let players = (0..11u32)
            .map(|i| SquadPlayer {
                id: team_id * 100 + i,
                name: format!("Player {team_id}-{i}"),
                ratings: PlayerRatings::uniform(11.0),
            })
            .collect();

        MatchSquad::new(team_id, format!("Team {team_id}"), Formation::F433, players)
    }

    #[test]
    fn test_round_plays_every_fixture() {
        let fixtures = vec![
            MatchFixture::new(squad(1), squad(2)),
            MatchFixture::new(squad(3), squad(4)),
            MatchFixture::new(squad(5), squad(6)),
        ];

        let reports = play_round(fixtures);

        assert_eq!(reports.len(), 3);

        for report in reports {
            let report = report.unwrap();
            assert!(report.final_time >= 90 * 60);
        }
    }

    #[test]
    fn test_short_squad_surfaces_the_error() {
        let mut broken = squad(2);
        broken.players.truncate(9);

        let reports = play_round(vec![MatchFixture::new(squad(1), broken)]);

        assert!(matches!(
            reports[0],
            Err(MatchEngineError::NotEnoughPlayers { team_id: 2, .. })
        ));
    }
}
