use crate::r#match::engine::grid::{GridPosition, GRID_HEIGHT};
use crate::r#match::engine::statistics::StatTag;
use crate::r#match::engine::token::{Token, TokenKind};
use rand::Rng;
use serde::Serialize;

/// Event subtype attached to noteworthy resolutions. The orchestrator
/// maps these onto the next match situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchEventKind {
    Goal,
    ShotWide,
    ShotSaved,
    ShotParried,
    CrossOut,
    BallOut,
    Foul,
    BoxIncident,
    PenaltyAwarded,
}

/// Outcome of one drawn token: ball displacement (already oriented for
/// the attacking side), score/turnover flags, narrative text, duration
/// and statistical tags.
#[derive(Debug, Clone)]
pub struct TokenResolution {
    pub move_x: i8,
    pub move_y: i8,
    pub is_goal: bool,
    pub turnover: bool,
    pub event: Option<MatchEventKind>,
    pub narrative: String,
    pub duration: u32,
    pub stat_tags: Vec<StatTag>,
}

impl TokenResolution {
    fn new(narrative: String, duration: u32) -> Self {
        TokenResolution {
            move_x: 0,
            move_y: 0,
            is_goal: false,
            turnover: false,
            event: None,
            narrative,
            duration,
            stat_tags: Vec::new(),
        }
    }

    fn moved(mut self, dx: i8, dy: i8) -> Self {
        self.move_x = dx;
        self.move_y = dy;
        self
    }

    fn goal(mut self) -> Self {
        self.is_goal = true;
        self.event = Some(MatchEventKind::Goal);
        self
    }

    fn turnover(mut self) -> Self {
        self.turnover = true;
        self
    }

    fn with_event(mut self, event: MatchEventKind) -> Self {
        self.event = Some(event);
        self
    }

    fn tagged(mut self, tags: &[StatTag]) -> Self {
        self.stat_tags = tags.to_vec();
        self
    }
}

fn toward_center_row(ball: GridPosition) -> i8 {
    let center = GRID_HEIGHT / 2;

    if ball.y > center {
        -1
    } else if ball.y < center {
        1
    } else {
        0
    }
}

fn actor<'n>(player_name: &'n str, fallback: &'n str) -> &'n str {
    if player_name.is_empty() {
        fallback
    } else {
        player_name
    }
}

impl TokenKind {
    /// Turns a drawn token into its result. Exhaustive over every kind:
    /// a token without resolution semantics cannot be constructed.
    ///
    /// Shot-class kinds decide the goal with an internal draw that is
    /// independent of the bag selection; token quality shapes how often
    /// a shot is offered, the second draw shapes whether it succeeds.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        token: &Token,
        player_name: &str,
        is_home_attacking: bool,
        ball: GridPosition,
        rng: &mut R,
    ) -> TokenResolution {
        let dir: i8 = if is_home_attacking { 1 } else { -1 };
        let quality = token.quality.clamp(0.0, 20.0);
        let drift = rng.random_range(-1..=1i8);
        let who = actor(player_name, "The attack");
        let duration = token.duration;

        match self {
            TokenKind::ShortPass => {
                if rng.random::<f32>() < 0.70 + (quality / 20.0) * 0.25 {
                    TokenResolution::new(format!("{who} keeps it moving with a short pass"), duration)
                        .moved(dir, drift)
                        .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
                } else {
                    TokenResolution::new(format!("A short pass from {who} is cut out"), duration)
                        .turnover()
                        .tagged(&[StatTag::PassAttempted])
                }
            }
            TokenKind::BackPass => {
                if rng.random::<f32>() < 0.85 + quality * 0.005 {
                    TokenResolution::new(format!("{who} recycles possession backwards"), duration)
                        .moved(-dir, drift)
                        .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
                } else {
                    TokenResolution::new(format!("A loose back pass from {who} is seized upon"), duration)
                        .turnover()
                        .tagged(&[StatTag::PassAttempted])
                }
            }
            TokenKind::LongPass => {
                if rng.random::<f32>() < 0.55 + (quality / 20.0) * 0.30 {
                    TokenResolution::new(format!("{who} switches play with a long ball"), duration)
                        .moved(dir * 2, drift)
                        .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
                } else if rng.random::<f32>() < 0.30 {
                    TokenResolution::new(format!("A long ball from {who} sails into touch"), duration)
                        .with_event(MatchEventKind::BallOut)
                        .turnover()
                        .tagged(&[StatTag::PassAttempted])
                } else {
                    TokenResolution::new(format!("A long pass from {who} is picked off"), duration)
                        .turnover()
                        .tagged(&[StatTag::PassAttempted])
                }
            }
            TokenKind::Cross => {
                let roll = rng.random::<f32>();
                if roll < 0.35 {
                    TokenResolution::new(format!("{who} whips a cross into the box"), duration)
                        .moved(dir, toward_center_row(ball))
                        .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
                } else if roll < 0.80 {
                    TokenResolution::new(format!("The cross from {who} is headed away"), duration)
                        .turnover()
                        .tagged(&[StatTag::PassAttempted])
                } else {
                    TokenResolution::new(format!("The cross from {who} is deflected behind"), duration)
                        .with_event(MatchEventKind::CrossOut)
                        .tagged(&[StatTag::PassAttempted])
                }
            }
            TokenKind::Dribble => {
                if rng.random::<f32>() < 0.50 + quality * 0.015 {
                    TokenResolution::new(format!("{who} glides past a challenge"), duration)
                        .moved(dir, drift)
                        .tagged(&[StatTag::Dribble])
                } else {
                    TokenResolution::new(format!("{who} is dispossessed mid-dribble"), duration)
                        .turnover()
                }
            }
            TokenKind::Shot => {
                Self::resolve_shot(who, quality, dir, duration, 0.12, 0.18, 0.25, 0.15, rng)
            }
            TokenKind::LongShot => {
                Self::resolve_shot(who, quality, dir, duration, 0.04, 0.08, 0.30, 0.08, rng)
            }
            TokenKind::FreeKickShot => {
                Self::resolve_shot(who, quality, dir, duration, 0.08, 0.10, 0.35, 0.10, rng)
            }
            TokenKind::ReboundShot => {
                Self::resolve_shot(who, quality, dir, duration, 0.30, 0.10, 0.30, 0.05, rng)
            }
            TokenKind::Clearance => {
                let cleared = actor(player_name, "The defence");
                if rng.random::<f32>() < 0.15 {
                    // Out off the defender, so the throw stays with the
                    // attacking side.
                    TokenResolution::new(format!("{cleared} hacks the ball into touch"), duration)
                        .with_event(MatchEventKind::BallOut)
                        .tagged(&[StatTag::Clearance])
                } else {
                    TokenResolution::new(format!("{cleared} thumps the danger clear"), duration)
                        .moved(-dir * 2, drift)
                        .turnover()
                        .tagged(&[StatTag::Clearance])
                }
            }
            TokenKind::Tackle => {
                let defender = actor(player_name, "The defence");
                if rng.random::<f32>() < 0.75 {
                    TokenResolution::new(format!("{defender} wins the ball with a firm tackle"), duration)
                        .turnover()
                        .tagged(&[StatTag::Tackle])
                } else {
                    let target = GridPosition::target_column(is_home_attacking);
                    let in_the_box = ball.distance_to_column(target) <= 1;

                    if in_the_box && rng.random::<f32>() < 0.20 {
                        TokenResolution::new(
                            format!("{defender} brings the attacker down in the box"),
                            duration,
                        )
                        .with_event(MatchEventKind::BoxIncident)
                    } else {
                        TokenResolution::new(format!("{defender} fouls and concedes a free kick"), duration)
                            .with_event(MatchEventKind::Foul)
                    }
                }
            }
            TokenKind::Interception => {
                let defender = actor(player_name, "The defence");
                TokenResolution::new(format!("{defender} reads the pass and intercepts"), duration)
                    .turnover()
                    .tagged(&[StatTag::Interception])
            }
            TokenKind::HoldUp => {
                TokenResolution::new(String::from("Play breaks down and the ball is shielded"), duration)
            }
            TokenKind::KickoffBack => {
                TokenResolution::new(String::from("The kickoff is rolled safely backwards"), duration)
                    .moved(-dir, 0)
                    .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
            }
            TokenKind::KickoffLong => {
                if rng.random::<f32>() < 0.5 {
                    TokenResolution::new(String::from("A long kickoff is brought down upfield"), duration)
                        .moved(dir * 2, drift)
                        .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
                } else {
                    TokenResolution::new(String::from("The long kickoff is headed straight back"), duration)
                        .moved(dir, drift)
                        .turnover()
                        .tagged(&[StatTag::PassAttempted])
                }
            }
            TokenKind::KickoffLoss => {
                TokenResolution::new(String::from("The kickoff is given away immediately"), duration)
                    .turnover()
                    .tagged(&[StatTag::PassAttempted])
            }
            TokenKind::CornerCleared => {
                TokenResolution::new(String::from("The corner is met and cleared at the near post"), duration)
                    .moved(-dir, 0)
                    .turnover()
                    .tagged(&[StatTag::Clearance])
            }
            TokenKind::CornerShort => {
                TokenResolution::new(String::from("The corner is played short to keep possession"), duration)
                    .moved(-dir, toward_center_row(ball))
                    .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
            }
            TokenKind::CornerGoal => {
                TokenResolution::new(String::from("The corner swings straight in! An outrageous goal"), duration)
                    .goal()
                    .tagged(&[StatTag::ShotOnTarget, StatTag::Goal])
            }
            TokenKind::PenaltyScored => {
                TokenResolution::new(format!("{who} buries the penalty"), duration)
                    .goal()
                    .tagged(&[StatTag::ShotOnTarget, StatTag::Goal])
            }
            TokenKind::PenaltySaved => {
                TokenResolution::new(String::from("The keeper guesses right and holds the penalty"), duration)
                    .with_event(MatchEventKind::ShotSaved)
                    .turnover()
                    .tagged(&[StatTag::ShotOnTarget])
            }
            TokenKind::PenaltyMissed => {
                TokenResolution::new(String::from("The penalty is dragged wide of the post"), duration)
                    .with_event(MatchEventKind::ShotWide)
                    .turnover()
                    .tagged(&[StatTag::ShotOffTarget])
            }
            TokenKind::GoalKickShort => {
                TokenResolution::new(String::from("The goal kick is played short from the back"), duration)
                    .moved(dir, drift)
                    .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
            }
            TokenKind::GoalKickLong => {
                if rng.random::<f32>() < 0.5 {
                    TokenResolution::new(String::from("A towering goal kick finds its man"), duration)
                        .moved(dir * 2, drift)
                        .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
                } else {
                    TokenResolution::new(String::from("The long goal kick is won by the opposition"), duration)
                        .moved(dir * 2, drift)
                        .turnover()
                        .tagged(&[StatTag::PassAttempted])
                }
            }
            TokenKind::GoalKickError => {
                TokenResolution::new(String::from("The restart goes astray under pressure"), duration)
                    .turnover()
                    .tagged(&[StatTag::PassAttempted])
            }
            TokenKind::ThrowInShort => {
                TokenResolution::new(String::from("The throw-in is kept simple down the line"), duration)
                    .moved(0, toward_center_row(ball))
                    .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
            }
            TokenKind::ThrowInLong => {
                if rng.random::<f32>() < 0.6 {
                    TokenResolution::new(String::from("A long throw is flicked on into the channel"), duration)
                        .moved(dir, toward_center_row(ball))
                        .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
                } else {
                    TokenResolution::new(String::from("The long throw is comfortably defended"), duration)
                        .turnover()
                        .tagged(&[StatTag::PassAttempted])
                }
            }
            TokenKind::ThrowInLoss => {
                TokenResolution::new(String::from("The throw-in is given straight away"), duration)
                    .turnover()
                    .tagged(&[StatTag::PassAttempted])
            }
            TokenKind::FreeKickShort => {
                TokenResolution::new(String::from("The free kick is taken quickly and kept"), duration)
                    .moved(dir, drift)
                    .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
            }
            TokenKind::FreeKickCross => {
                let roll = rng.random::<f32>();
                if roll < 0.40 {
                    TokenResolution::new(String::from("The free kick is floated into a dangerous area"), duration)
                        .moved(dir, toward_center_row(ball))
                        .tagged(&[StatTag::PassAttempted, StatTag::PassCompleted])
                } else if roll < 0.80 {
                    TokenResolution::new(String::from("The set-piece delivery is punched away"), duration)
                        .turnover()
                        .tagged(&[StatTag::PassAttempted])
                } else {
                    TokenResolution::new(String::from("The delivery is turned behind for a corner"), duration)
                        .with_event(MatchEventKind::CrossOut)
                        .tagged(&[StatTag::PassAttempted])
                }
            }
            TokenKind::ReboundClear => {
                TokenResolution::new(String::from("The loose ball is scrambled away from the box"), duration)
                    .moved(-dir * 2, drift)
                    .turnover()
                    .tagged(&[StatTag::Clearance])
            }
            TokenKind::VarPenaltyAwarded => {
                TokenResolution::new(String::from("After a long review the referee points to the spot"), duration)
                    .with_event(MatchEventKind::PenaltyAwarded)
            }
            TokenKind::VarNoFoul => {
                TokenResolution::new(String::from("The review shows a clean challenge, play on"), duration)
                    .turnover()
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve_shot<R: Rng + ?Sized>(
        who: &str,
        quality: f32,
        dir: i8,
        duration: u32,
        base_goal: f32,
        quality_goal: f32,
        saved_band: f32,
        parried_band: f32,
        rng: &mut R,
    ) -> TokenResolution {
        let p_goal = base_goal + (quality / 20.0) * quality_goal;
        let roll = rng.random::<f32>();

        if roll < p_goal {
            TokenResolution::new(format!("{who} finds the net! GOAL"), duration)
                .goal()
                .tagged(&[StatTag::ShotOnTarget, StatTag::Goal])
        } else if roll < p_goal + saved_band {
            TokenResolution::new(format!("The effort from {who} is held by the keeper"), duration)
                .with_event(MatchEventKind::ShotSaved)
                .turnover()
                .tagged(&[StatTag::ShotOnTarget])
        } else if roll < p_goal + saved_band + parried_band {
            TokenResolution::new(format!("The keeper parries the strike from {who}"), duration)
                .moved(dir, 0)
                .with_event(MatchEventKind::ShotParried)
                .tagged(&[StatTag::ShotOnTarget])
        } else {
            TokenResolution::new(format!("{who} pulls the shot wide"), duration)
                .with_event(MatchEventKind::ShotWide)
                .turnover()
                .tagged(&[StatTag::ShotOffTarget])
        }
    }
}
