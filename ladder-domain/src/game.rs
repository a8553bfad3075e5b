use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{ServiceResult, player::PlayerId};

pub type GameId = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
}

impl GameOutcome {
    pub fn parse(input: &str) -> Option<Self> {
        if input.eq_ignore_ascii_case("win") {
            Some(GameOutcome::Win)
        } else if input.eq_ignore_ascii_case("loss") {
            Some(GameOutcome::Loss)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameOutcome::Win => "Win",
            GameOutcome::Loss => "Loss",
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable row in the game log. The opponent is free text, not a
/// player reference; `rating` is the value submitted for this game, not
/// the rating that resulted from it.
#[derive(Clone, Debug)]
pub struct Game {
    pub id: GameId,
    pub player_id: PlayerId,
    pub opponent_name: String,
    pub outcome: GameOutcome,
    pub rating: i64,
    pub played_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewGame {
    pub player_id: PlayerId,
    pub opponent_name: String,
    pub outcome: GameOutcome,
    pub rating: i64,
}

pub type ArcGameRepository = Arc<Box<dyn GameRepository + Send + Sync + 'static>>;

pub trait GameRepository {
    fn create_game(&self, game: &NewGame) -> ServiceResult<GameId>;
    fn get_games_by_player(&self, player_id: PlayerId) -> ServiceResult<Vec<Game>>;
}
