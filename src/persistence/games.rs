use std::sync::Mutex;

use chrono::Utc;
use ladder_domain::{
    ServiceResult,
    game::{Game, GameId, GameRepository, NewGame},
    player::PlayerId,
};

use crate::persistence::lock_store;

/// Append-only in-memory game log. Rows are stamped with the creation time
/// and never mutated.
pub struct GameRepositoryImpl {
    games: Mutex<Vec<Game>>,
}

impl GameRepositoryImpl {
    pub fn new() -> Self {
        Self {
            games: Mutex::new(Vec::new()),
        }
    }
}

impl GameRepository for GameRepositoryImpl {
    fn create_game(&self, game: &NewGame) -> ServiceResult<GameId> {
        let mut games = lock_store(&self.games)?;
        let id = games.last().map_or(1, |g| g.id + 1);
        games.push(Game {
            id,
            player_id: game.player_id,
            opponent_name: game.opponent_name.clone(),
            outcome: game.outcome,
            rating: game.rating,
            played_at: Utc::now(),
        });
        Ok(id)
    }

    fn get_games_by_player(&self, player_id: PlayerId) -> ServiceResult<Vec<Game>> {
        Ok(lock_store(&self.games)?
            .iter()
            .filter(|g| g.player_id == player_id)
            .cloned()
            .collect())
    }
}
