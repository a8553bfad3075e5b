use crate::game::GameOutcome;

const K_FACTOR: f64 = 32.0;

/// Streak length at which the victory series bonus starts paying out.
const SERIES_LENGTH: u32 = 3;

const SERIES_BONUS_STEP: i64 = 5;

/// The rating-accounting scheme bound to a player at creation. The binding
/// is stored with the player and consulted whenever a game is recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountKind {
    Standard,
    HalfPointsDeducted,
    VictorySeriesBonus,
}

impl AccountKind {
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "standard" => Some(AccountKind::Standard),
            "halfpointsdeducted" => Some(AccountKind::HalfPointsDeducted),
            "victoryseriesbonus" => Some(AccountKind::VictorySeriesBonus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Standard => "Standard",
            AccountKind::HalfPointsDeducted => "HalfPointsDeducted",
            AccountKind::VictorySeriesBonus => "VictorySeriesBonus",
        }
    }

    pub fn strategy(&self) -> &'static dyn AccountStrategy {
        match self {
            AccountKind::Standard => &Standard,
            AccountKind::HalfPointsDeducted => &HalfPointsDeducted,
            AccountKind::VictorySeriesBonus => &VictorySeriesBonus,
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingAdjustment {
    pub new_rating: i64,
    pub new_streak: u32,
}

/// How a game outcome transforms a player's rating. Implementations are
/// stateless; the consecutive-win streak they need is carried on the player
/// and handed back through the adjustment.
pub trait AccountStrategy {
    fn apply_outcome(
        &self,
        current_rating: i64,
        outcome: GameOutcome,
        opponent_rating: i64,
        win_streak: u32,
    ) -> RatingAdjustment;
}

fn expected_score(rating: i64, opponent_rating: i64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent_rating - rating) as f64 / 400.0))
}

/// Elo delta, rounded to the nearest point. Positive for a win against any
/// realistic opponent, zero or negative for a loss.
fn elo_delta(rating: i64, opponent_rating: i64, score: f64) -> i64 {
    (K_FACTOR * (score - expected_score(rating, opponent_rating))).round() as i64
}

fn score_of(outcome: GameOutcome) -> f64 {
    match outcome {
        GameOutcome::Win => 1.0,
        GameOutcome::Loss => 0.0,
    }
}

fn next_streak(outcome: GameOutcome, win_streak: u32) -> u32 {
    match outcome {
        GameOutcome::Win => win_streak + 1,
        GameOutcome::Loss => 0,
    }
}

/// Full Elo delta on both win and loss.
pub struct Standard;

impl AccountStrategy for Standard {
    fn apply_outcome(
        &self,
        current_rating: i64,
        outcome: GameOutcome,
        opponent_rating: i64,
        win_streak: u32,
    ) -> RatingAdjustment {
        let delta = elo_delta(current_rating, opponent_rating, score_of(outcome));
        RatingAdjustment {
            new_rating: current_rating + delta,
            new_streak: next_streak(outcome, win_streak),
        }
    }
}

/// Standard gain on a win; on a loss only half the Elo penalty is deducted,
/// with the deducted amount rounded down.
pub struct HalfPointsDeducted;

impl AccountStrategy for HalfPointsDeducted {
    fn apply_outcome(
        &self,
        current_rating: i64,
        outcome: GameOutcome,
        opponent_rating: i64,
        win_streak: u32,
    ) -> RatingAdjustment {
        let new_rating = match outcome {
            GameOutcome::Win => current_rating + elo_delta(current_rating, opponent_rating, 1.0),
            GameOutcome::Loss => {
                let penalty = -elo_delta(current_rating, opponent_rating, 0.0);
                current_rating - penalty / 2
            }
        };
        RatingAdjustment {
            new_rating,
            new_streak: next_streak(outcome, win_streak),
        }
    }
}

/// Standard Elo delta, plus an escalating bonus once a consecutive-win
/// streak reaches `SERIES_LENGTH`: the third win in a row pays
/// `SERIES_BONUS_STEP` extra points, the fourth twice that, and so on.
/// Any loss resets the streak.
pub struct VictorySeriesBonus;

impl AccountStrategy for VictorySeriesBonus {
    fn apply_outcome(
        &self,
        current_rating: i64,
        outcome: GameOutcome,
        opponent_rating: i64,
        win_streak: u32,
    ) -> RatingAdjustment {
        match outcome {
            GameOutcome::Win => {
                let new_streak = win_streak + 1;
                let mut new_rating =
                    current_rating + elo_delta(current_rating, opponent_rating, 1.0);
                if new_streak >= SERIES_LENGTH {
                    new_rating += SERIES_BONUS_STEP * (new_streak - SERIES_LENGTH + 1) as i64;
                }
                RatingAdjustment {
                    new_rating,
                    new_streak,
                }
            }
            GameOutcome::Loss => RatingAdjustment {
                new_rating: current_rating + elo_delta(current_rating, opponent_rating, 0.0),
                new_streak: 0,
            },
        }
    }
}
