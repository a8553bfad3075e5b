use ladder_domain::{
    ServiceResult,
    account::AccountStrategy,
    game::{ArcGameRepository, GameOutcome, GameRepository, NewGame},
    player::{ArcPlayerRepository, PlayerRepository, PlayerUpdate, find_player},
};
use log::info;

use crate::{
    commands::{Command, CommandOutcome},
    console::Console,
};

/// Records the outcome of a game: applies the player's bound account
/// strategy to their rating and appends an immutable game row. All input is
/// validated before anything is written, so the rating update and the game
/// record land together or not at all.
pub struct PlayGameCommand {
    player_repository: ArcPlayerRepository,
    game_repository: ArcGameRepository,
}

impl PlayGameCommand {
    pub fn new(player_repository: ArcPlayerRepository, game_repository: ArcGameRepository) -> Self {
        Self {
            player_repository,
            game_repository,
        }
    }
}

impl Command for PlayGameCommand {
    fn name(&self) -> &'static str {
        "PlayGame"
    }

    fn execute(&self, console: &mut dyn Console) -> ServiceResult<CommandOutcome> {
        let query = console.prompt("Enter player name or ID: ")?;
        let players = self.player_repository.get_players()?;
        let Some(player) = find_player(&players, &query) else {
            console.write_line("Player not found.")?;
            return Ok(CommandOutcome::Continue);
        };

        let opponent_name = console.prompt("Enter opponent name: ")?;

        let rating_input = console.prompt("Enter rating for the game: ")?;
        let Ok(rating) = rating_input.parse::<i64>() else {
            console.write_line("Invalid rating. Game not recorded.")?;
            return Ok(CommandOutcome::Continue);
        };

        let outcome_input = console.prompt("Enter game outcome (Win/Loss): ")?;
        let Some(outcome) = GameOutcome::parse(&outcome_input) else {
            console.write_line("Invalid outcome. Game not recorded.")?;
            return Ok(CommandOutcome::Continue);
        };

        let adjustment =
            player
                .account
                .strategy()
                .apply_outcome(player.rating, outcome, rating, player.win_streak);
        self.player_repository.update_player(
            player.id,
            &PlayerUpdate {
                rating: Some(adjustment.new_rating),
                win_streak: Some(adjustment.new_streak),
            },
        )?;
        let game_id = self.game_repository.create_game(&NewGame {
            player_id: player.id,
            opponent_name: opponent_name.clone(),
            outcome,
            rating,
        })?;

        info!(
            "Recorded game {} for player {}: {} vs {}, rating {} -> {}",
            game_id, player.username, outcome, opponent_name, player.rating, adjustment.new_rating
        );
        console.write_line("Game recorded successfully.")?;
        Ok(CommandOutcome::Continue)
    }
}
