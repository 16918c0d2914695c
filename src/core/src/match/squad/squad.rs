use crate::r#match::error::MatchEngineError;
use crate::r#match::player::{MatchPlayer, PlayerRatings};
use crate::r#match::squad::formation::{mirror_cell, Formation};

const REQUIRED_PLAYERS: usize = 11;

/// A player as supplied by the club layer: identity and ratings only.
/// Roles and zones come from the formation at match construction.
#[derive(Debug, Clone)]
pub struct SquadPlayer {
    pub id: u32,
    pub name: String,
    pub ratings: PlayerRatings,
}

/// One side's lineup for a single match. Players fill formation slots
/// in listed order: goalkeeper first, then defenders, midfielders and
/// forwards.
#[derive(Debug, Clone)]
pub struct MatchSquad {
    pub team_id: u32,
    pub team_name: String,
    pub formation: Formation,
    pub players: Vec<SquadPlayer>,
}

impl MatchSquad {
    pub fn new(
        team_id: u32,
        team_name: String,
        formation: Formation,
        players: Vec<SquadPlayer>,
    ) -> Self {
        MatchSquad {
            team_id,
            team_name,
            formation,
            players,
        }
    }

    /// Binds the first eleven players to formation slots. Away zones
    /// are mirrored so both sides defend their own goal column.
    pub fn build_match_players(&self, is_home: bool) -> Result<Vec<MatchPlayer>, MatchEngineError> {
        if self.players.len() < REQUIRED_PLAYERS {
            return Err(MatchEngineError::NotEnoughPlayers {
                team_id: self.team_id,
                available: self.players.len(),
                required: REQUIRED_PLAYERS,
            });
        }

        let slots = self.formation.slots();

        let match_players = self
            .players
            .iter()
            .take(REQUIRED_PLAYERS)
            .zip(slots)
            .map(|(player, slot)| {
                let orient = |cell| if is_home { cell } else { mirror_cell(cell) };

                MatchPlayer::new(
                    player.id,
                    self.team_id,
                    player.name.clone(),
                    slot.role,
                    player.ratings,
                    slot.active_zones.into_iter().map(orient).collect(),
                    slot.reach_zones.into_iter().map(orient).collect(),
                )
            })
            .collect();

        Ok(match_players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::grid::GRID_WIDTH;
    use crate::r#match::player::PlayerRole;

    fn squad(team_id: u32, size: usize) -> MatchSquad {
        let players = (0..size as u32)
            .map(|i| SquadPlayer {
                id: team_id * 100 + i,
                name: format!("Player {i}"),
                ratings: PlayerRatings::uniform(10.0),
            })
            .collect();

        MatchSquad::new(team_id, format!("Team {team_id}"), Formation::F442, players)
    }

    #[test]
    fn test_short_squad_is_rejected() {
        let error = squad(1, 10).build_match_players(true).unwrap_err();

        assert!(matches!(
            error,
            MatchEngineError::NotEnoughPlayers {
                team_id: 1,
                available: 10,
                required: 11,
            }
        ));
    }

    #[test]
    fn test_eleven_take_the_field() {
        let players = squad(1, 14).build_match_players(true).unwrap();

        assert_eq!(players.len(), 11);
        assert_eq!(players[0].role, PlayerRole::Goalkeeper);
    }

    #[test]
    fn test_away_zones_are_mirrored() {
        let home = squad(1, 11).build_match_players(true).unwrap();
        let away = squad(2, 11).build_match_players(false).unwrap();

        let home_keeper = &home[0];
        let away_keeper = &away[0];

        assert!(home_keeper.active_zones.iter().all(|c| c.x == 0));
        assert!(away_keeper.active_zones.iter().all(|c| c.x == GRID_WIDTH - 1));
    }
}
