use crate::r#match::engine::grid::GridPosition;
use crate::r#match::engine::token::Token;
use crate::r#match::engine::zones::ZoneDefinition;
use crate::r#match::player::MatchPlayer;
use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

pub struct BagBuilder;

impl BagBuilder {
    /// Assembles the open-play bag for one tick.
    ///
    /// The zone definition is injected by the caller and seeds the
    /// ownerless base tokens; every player whose zones cover the ball
    /// cell then contributes according to their current influence.
    /// Repetition is the only weighting mechanism: the draw over the
    /// finished bag is uniform.
    pub fn build<R: Rng + ?Sized>(
        zone: &ZoneDefinition,
        ball: GridPosition,
        possession_team_id: u32,
        opponent_team_id: u32,
        is_home_attacking: bool,
        players: &[MatchPlayer],
        rng: &mut R,
    ) -> Vec<Token> {
        let target = GridPosition::target_column(is_home_attacking);

        let mut bag: Vec<Token> = Vec::new();

        for &(kind, quality, duration) in &zone.base_tokens {
            let team_id = if kind.is_defensive() {
                opponent_team_id
            } else {
                possession_team_id
            };

            bag.push(Token::system(0, kind, team_id, quality, duration));
        }

        for player in players {
            let Some(weight) = player.zone_weight(ball) else {
                continue;
            };

            if !zone.allows(player.role) {
                continue;
            }

            if player.team_id == possession_team_id {
                bag.extend(player.offensive_tokens(weight, ball, is_home_attacking));
            } else {
                bag.extend(player.defensive_tokens(weight * zone.defense_multiplier));
            }
        }

        // Shots only exist where a real angle on goal exists; blind
        // corner cells keep their passes but lose the shot offers.
        bag.retain(|token| !token.kind.is_open_play_shot() || ball.has_shooting_angle(target));

        if bag.is_empty() {
            warn!(
                "empty bag at {:?} for team {}, inserting neutral fallback",
                ball, possession_team_id
            );
            bag.push(Token::neutral_fallback(1));
            return bag;
        }

        // Order inside the bag carries no weight; the shuffle only keeps
        // log output from looking grouped by contributor.
        bag.shuffle(rng);

        for (index, token) in bag.iter_mut().enumerate() {
            token.id = index as u32 + 1;
        }

        bag
    }
}
