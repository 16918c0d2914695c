use crate::r#match::engine::grid::{GridPosition, GRID_HEIGHT, GRID_WIDTH};
use crate::r#match::engine::token::TokenKind;
use crate::r#match::player::PlayerRole;
use itertools::iproduct;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Static description of one grid cell: which roles may contribute
/// there, which ownerless system tokens are always on offer, and how
/// hard the cell is to attack through.
///
/// Repeated entries in `base_tokens` encode relative likelihood; the
/// draw is uniform over the assembled bag.
#[derive(Debug, Clone)]
pub struct ZoneDefinition {
    pub allowed_roles: Vec<PlayerRole>,
    pub base_tokens: Vec<(TokenKind, f32, u32)>,
    pub defense_multiplier: f32,
}

impl ZoneDefinition {
    pub fn allows(&self, role: PlayerRole) -> bool {
        self.allowed_roles.contains(&role)
    }
}

static DEFAULT_ZONE: Lazy<ZoneDefinition> = Lazy::new(|| ZoneDefinition {
    allowed_roles: vec![
        PlayerRole::Defender,
        PlayerRole::Midfielder,
        PlayerRole::Forward,
    ],
    base_tokens: vec![
        (TokenKind::ShortPass, 8.0, 8),
        (TokenKind::ShortPass, 8.0, 8),
        (TokenKind::LongPass, 7.0, 12),
    ],
    defense_multiplier: 1.0,
});

/// Built once, immutable for the process lifetime, injected by
/// reference into the bag builder.
static ZONE_CATALOG: Lazy<HashMap<GridPosition, ZoneDefinition>> = Lazy::new(build_catalog);

pub fn zone_for(cell: GridPosition) -> &'static ZoneDefinition {
    ZONE_CATALOG.get(&cell).unwrap_or(&DEFAULT_ZONE)
}

fn build_catalog() -> HashMap<GridPosition, ZoneDefinition> {
    let mut catalog = HashMap::new();

    for (x, y) in iproduct!(0..GRID_WIDTH, 0..GRID_HEIGHT) {
        let cell = GridPosition::new(x, y);
        catalog.insert(cell, zone_definition(cell));
    }

    catalog
}

fn zone_definition(cell: GridPosition) -> ZoneDefinition {
    // Columns 0 and 5 are the goalmouth thirds (one side's box is the
    // other side's finishing zone), 1 and 4 the channels, 2 and 3 the
    // midfield band. The catalog is side-neutral; possession decides
    // which direction the cell is being played toward.
    let goalmouth = cell.x == 0 || cell.x == GRID_WIDTH - 1;
    let channel = cell.x == 1 || cell.x == GRID_WIDTH - 2;

    let mut base_tokens: Vec<(TokenKind, f32, u32)> = Vec::new();
    let allowed_roles;
    let defense_multiplier;

    if goalmouth {
        allowed_roles = vec![
            PlayerRole::Goalkeeper,
            PlayerRole::Defender,
            PlayerRole::Midfielder,
            PlayerRole::Forward,
        ];
        defense_multiplier = 1.4;

        base_tokens.push((TokenKind::Clearance, 9.0, 9));
        base_tokens.push((TokenKind::Clearance, 9.0, 9));
        base_tokens.push((TokenKind::Clearance, 9.0, 9));
        base_tokens.push((TokenKind::ShortPass, 7.0, 8));
        base_tokens.push((TokenKind::ShortPass, 7.0, 8));
        base_tokens.push((TokenKind::LongPass, 8.0, 12));
        base_tokens.push((TokenKind::LongPass, 8.0, 12));
    } else if channel {
        allowed_roles = vec![
            PlayerRole::Defender,
            PlayerRole::Midfielder,
            PlayerRole::Forward,
        ];
        defense_multiplier = 1.15;

        base_tokens.push((TokenKind::ShortPass, 8.0, 8));
        base_tokens.push((TokenKind::ShortPass, 8.0, 8));
        base_tokens.push((TokenKind::ShortPass, 8.0, 8));
        base_tokens.push((TokenKind::LongPass, 7.5, 12));
        base_tokens.push((TokenKind::LongPass, 7.5, 12));
        base_tokens.push((TokenKind::Clearance, 7.0, 9));
    } else {
        allowed_roles = vec![
            PlayerRole::Defender,
            PlayerRole::Midfielder,
            PlayerRole::Forward,
        ];
        defense_multiplier = 1.0;

        base_tokens.push((TokenKind::ShortPass, 8.5, 8));
        base_tokens.push((TokenKind::ShortPass, 8.5, 8));
        base_tokens.push((TokenKind::ShortPass, 8.5, 8));
        base_tokens.push((TokenKind::ShortPass, 8.5, 8));
        base_tokens.push((TokenKind::BackPass, 8.0, 7));
        base_tokens.push((TokenKind::LongPass, 7.5, 12));
    }

    // Wide cells outside the goalmouth offer a cross into the box.
    if cell.is_edge_row() && !goalmouth {
        base_tokens.push((TokenKind::Cross, 7.5, 11));
    }

    ZoneDefinition {
        allowed_roles,
        base_tokens,
        defense_multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_has_a_definition() {
        for (x, y) in iproduct!(0..GRID_WIDTH, 0..GRID_HEIGHT) {
            let zone = zone_for(GridPosition::new(x, y));

            assert!(!zone.base_tokens.is_empty());
            assert!(!zone.allowed_roles.is_empty());
            assert!(zone.defense_multiplier >= 1.0);
        }
    }

    #[test]
    fn test_goalmouth_is_harder_to_attack() {
        let goalmouth = zone_for(GridPosition::new(0, 2));
        let midfield = zone_for(GridPosition::new(2, 2));

        assert!(goalmouth.defense_multiplier > midfield.defense_multiplier);
    }

    #[test]
    fn test_goalkeeper_only_near_goal() {
        assert!(zone_for(GridPosition::new(0, 2)).allows(PlayerRole::Goalkeeper));
        assert!(!zone_for(GridPosition::new(2, 2)).allows(PlayerRole::Goalkeeper));
    }

    #[test]
    fn test_wide_cells_offer_crosses() {
        let wide = zone_for(GridPosition::new(3, 0));
        let central = zone_for(GridPosition::new(3, 2));

        assert!(wide.base_tokens.iter().any(|(k, _, _)| *k == TokenKind::Cross));
        assert!(!central.base_tokens.iter().any(|(k, _, _)| *k == TokenKind::Cross));
    }
}
