use crate::r#match::engine::grid::{GridPosition, GRID_WIDTH};
use crate::r#match::error::MatchEngineError;
use crate::r#match::player::PlayerRole;
use std::collections::HashSet;

/// Supported tactical shapes. Each one maps eleven slots to roles and
/// home-oriented grid zones; away zones are produced by mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formation {
    F442,
    F433,
    F352,
    F532,
}

/// One formation slot: the role plus the player's active and reach
/// cells, laid out for a side attacking toward increasing x.
#[derive(Debug, Clone)]
pub struct FormationSlot {
    pub role: PlayerRole,
    pub active_zones: HashSet<GridPosition>,
    pub reach_zones: HashSet<GridPosition>,
}

impl Formation {
    pub fn from_key(key: &str) -> Result<Self, MatchEngineError> {
        match key {
            "4-4-2" => Ok(Formation::F442),
            "4-3-3" => Ok(Formation::F433),
            "3-5-2" => Ok(Formation::F352),
            "5-3-2" => Ok(Formation::F532),
            other => Err(MatchEngineError::UnknownFormation(String::from(other))),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F352 => "3-5-2",
            Formation::F532 => "5-3-2",
        }
    }

    fn lines(&self) -> (usize, usize, usize) {
        match self {
            Formation::F442 => (4, 4, 2),
            Formation::F433 => (4, 3, 3),
            Formation::F352 => (3, 5, 2),
            Formation::F532 => (5, 3, 2),
        }
    }

    /// The eleven slots in squad order: goalkeeper first, then the
    /// defensive, midfield and forward lines.
    pub fn slots(&self) -> Vec<FormationSlot> {
        let (defenders, midfielders, forwards) = self.lines();

        let mut slots = Vec::with_capacity(11);

        slots.push(goalkeeper_slot());

        for row in spread_rows(defenders) {
            slots.push(line_slot(PlayerRole::Defender, row, &[1], &[0, 2]));
        }

        for row in spread_rows(midfielders) {
            slots.push(line_slot(PlayerRole::Midfielder, row, &[2, 3], &[1, 4]));
        }

        for row in spread_rows(forwards) {
            slots.push(line_slot(PlayerRole::Forward, row, &[4], &[3, 5]));
        }

        slots
    }
}

fn goalkeeper_slot() -> FormationSlot {
    FormationSlot {
        role: PlayerRole::Goalkeeper,
        active_zones: HashSet::from([GridPosition::new(0, 2)]),
        reach_zones: HashSet::from([GridPosition::new(0, 1), GridPosition::new(0, 3)]),
    }
}

fn line_slot(role: PlayerRole, row: u8, active_columns: &[u8], reach_columns: &[u8]) -> FormationSlot {
    let active_zones = active_columns
        .iter()
        .map(|&x| GridPosition::new(x, row))
        .collect();

    let reach_zones = reach_columns
        .iter()
        .map(|&x| GridPosition::new(x, row))
        .collect();

    FormationSlot {
        role,
        active_zones,
        reach_zones,
    }
}

/// Spreads a line of players across the five rows, widest players
/// first on the touchlines.
fn spread_rows(count: usize) -> Vec<u8> {
    match count {
        2 => vec![1, 3],
        3 => vec![1, 2, 3],
        4 => vec![0, 1, 3, 4],
        _ => vec![0, 1, 2, 3, 4],
    }
}

/// Flips a home-oriented cell for the away side, which defends the
/// high-x goal.
pub fn mirror_cell(cell: GridPosition) -> GridPosition {
    GridPosition::new(GRID_WIDTH - 1 - cell.x, cell.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formations_field_eleven() {
        for formation in [
            Formation::F442,
            Formation::F433,
            Formation::F352,
            Formation::F532,
        ] {
            let slots = formation.slots();

            assert_eq!(slots.len(), 11);
            assert_eq!(
                slots
                    .iter()
                    .filter(|s| s.role == PlayerRole::Goalkeeper)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_from_key_round_trips() {
        for key in ["4-4-2", "4-3-3", "3-5-2", "5-3-2"] {
            let formation = Formation::from_key(key).unwrap();
            assert_eq!(formation.key(), key);
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let error = Formation::from_key("2-3-5").unwrap_err();

        assert!(matches!(error, MatchEngineError::UnknownFormation(_)));
    }

    #[test]
    fn test_mirror_flips_columns() {
        assert_eq!(mirror_cell(GridPosition::new(0, 2)), GridPosition::new(5, 2));
        assert_eq!(mirror_cell(GridPosition::new(4, 1)), GridPosition::new(1, 1));
    }

    #[test]
    fn test_forwards_reach_the_goalmouth() {
        let slots = Formation::F442.slots();

        let forward = slots
            .iter()
            .find(|s| s.role == PlayerRole::Forward)
            .unwrap();

        assert!(forward.reach_zones.iter().any(|c| c.x == GRID_WIDTH - 1));
    }
}
