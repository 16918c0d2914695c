use crate::r#match::engine::grid::GridPosition;
use crate::r#match::engine::token::{Token, TokenKind};
use serde::Serialize;
use std::collections::HashSet;

/// Tactical role assigned from the formation at match construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerRole {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Ratings on the 0..20 scale used throughout the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerRatings {
    pub technical: f32,
    pub finishing: f32,
    pub defense: f32,
    pub endurance: f32,
}

impl PlayerRatings {
    pub fn uniform(value: f32) -> Self {
        PlayerRatings {
            technical: value,
            finishing: value,
            defense: value,
            endurance: value,
        }
    }
}

/// Offensive and defensive strength at the ball's current zone,
/// refreshed every tick from ratings, fatigue and positioning.
#[derive(Debug, Clone, Copy, Default)]
pub struct Influence {
    pub atk: f32,
    pub def: f32,
}

const MAX_FATIGUE: f32 = 100.0;

/// The engine's view of one player for the lifetime of a single match.
/// Owned exclusively by the match run; season-level records are updated
/// afterwards by an external collaborator from the final stat summary.
#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub id: u32,
    pub team_id: u32,
    pub name: String,
    pub role: PlayerRole,
    pub ratings: PlayerRatings,
    pub fatigue: f32,
    pub active_zones: HashSet<GridPosition>,
    pub reach_zones: HashSet<GridPosition>,
    pub influence: Influence,
}

impl MatchPlayer {
    pub fn new(
        id: u32,
        team_id: u32,
        name: String,
        role: PlayerRole,
        ratings: PlayerRatings,
        active_zones: HashSet<GridPosition>,
        reach_zones: HashSet<GridPosition>,
    ) -> Self {
        MatchPlayer {
            id,
            team_id,
            name,
            role,
            ratings,
            fatigue: 0.0,
            active_zones,
            reach_zones,
            influence: Influence::default(),
        }
    }

    /// Contribution weight at a cell: full inside the active zone, half
    /// inside the reach zone, none elsewhere.
    pub fn zone_weight(&self, cell: GridPosition) -> Option<f32> {
        if self.active_zones.contains(&cell) {
            Some(1.0)
        } else if self.reach_zones.contains(&cell) {
            Some(0.5)
        } else {
            None
        }
    }

    fn fatigue_factor(&self) -> f32 {
        1.0 - (self.fatigue / 120.0).min(1.0)
    }

    fn active_zone_center(&self) -> (f32, f32) {
        let count = self.active_zones.len().max(1) as f32;
        let (sum_x, sum_y) = self
            .active_zones
            .iter()
            .fold((0.0f32, 0.0f32), |acc, cell| {
                (acc.0 + cell.x as f32, acc.1 + cell.y as f32)
            });

        (sum_x / count, sum_y / count)
    }

    /// Refreshed every tick before the bag is assembled: ratings scaled
    /// by distance from the heart of the player's active zone and by
    /// accumulated fatigue.
    pub fn refresh_influence(&mut self, ball: GridPosition) {
        let (center_x, center_y) = self.active_zone_center();
        let distance_decay = 1.0 / (1.0 + ball.distance_to_point(center_x, center_y) / 3.0);
        let fatigue = self.fatigue_factor();

        self.influence.atk = self.ratings.technical * distance_decay * fatigue;
        self.influence.def = self.ratings.defense * distance_decay * fatigue;
    }

    /// Tokens the player contributes while their team has the ball.
    ///
    /// Pass-type counts scale with attacking influence so that passes
    /// vastly outnumber shots; dribbles and shots appear only above
    /// influence/finishing thresholds and inside the attacking third.
    pub fn offensive_tokens(
        &self,
        weight: f32,
        ball: GridPosition,
        attacking_home: bool,
    ) -> Vec<Token> {
        let atk = self.influence.atk * weight;
        let quality = self.ratings.technical * self.fatigue_factor();

        let mut tokens = Vec::new();

        let short_passes = 1 + (atk * 0.45) as usize;
        for _ in 0..short_passes {
            tokens.push(self.unstamped(TokenKind::ShortPass, quality, 8));
        }

        let back_passes = 1 + (atk * 0.15) as usize;
        for _ in 0..back_passes {
            tokens.push(self.unstamped(TokenKind::BackPass, quality, 7));
        }

        let long_passes = (atk * 0.2) as usize;
        for _ in 0..long_passes {
            tokens.push(self.unstamped(TokenKind::LongPass, quality, 12));
        }

        if atk > 8.0 {
            let dribbles = 1 + ((atk - 8.0) * 0.25) as usize;
            for _ in 0..dribbles {
                tokens.push(self.unstamped(TokenKind::Dribble, quality, 10));
            }
        }

        let target = GridPosition::target_column(attacking_home);
        if ball.distance_to_column(target) <= 1 {
            let shooting = self.ratings.finishing * self.fatigue_factor();

            if shooting > 6.0 {
                let shots = 1 + (shooting * 0.12) as usize;
                for _ in 0..shots {
                    tokens.push(self.unstamped(TokenKind::Shot, shooting, 6));
                }
            }

            if self.ratings.technical > 10.0 {
                tokens.push(self.unstamped(TokenKind::LongShot, shooting * 0.7, 7));
            }
        }

        tokens
    }

    /// Tokens the player contributes while defending. A floor of one
    /// token per kind keeps weak defenders offering some resistance.
    pub fn defensive_tokens(&self, weight: f32) -> Vec<Token> {
        let def = self.influence.def * weight;
        let quality = self.ratings.defense * self.fatigue_factor();

        let mut tokens = Vec::new();

        let tackles = 1 + (def * 0.3) as usize;
        for _ in 0..tackles {
            tokens.push(self.unstamped(TokenKind::Tackle, quality, 9));
        }

        let interceptions = 1 + (def * 0.2) as usize;
        for _ in 0..interceptions {
            tokens.push(self.unstamped(TokenKind::Interception, quality, 8));
        }

        tokens
    }

    /// Charged after every action the player is credited with. Shots and
    /// sprints cost more than short passes; high endurance slows the
    /// drain.
    pub fn add_fatigue(&mut self, kind: TokenKind) {
        let endurance_factor = 1.6 - (self.ratings.endurance / 20.0).clamp(0.0, 1.0);

        self.fatigue = (self.fatigue + kind.fatigue_cost() * endurance_factor).min(MAX_FATIGUE);
    }

    /// Recovery happens only at explicit recovery points: half-time and
    /// set-piece stoppages, never during open play.
    pub fn recover(&mut self, amount: f32) {
        self.fatigue = (self.fatigue - amount).max(0.0);
    }

    fn unstamped(&self, kind: TokenKind, quality: f32, duration: u32) -> Token {
        // Id, owner and team are stamped by the bag builder.
        Token::owned(0, kind, self.id, self.team_id, quality, duration)
    }
}
