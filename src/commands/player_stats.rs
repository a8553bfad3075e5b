use ladder_domain::{
    ServiceResult,
    game::{ArcGameRepository, GameRepository},
    player::{ArcPlayerRepository, PlayerRepository, find_player},
};

use crate::{
    commands::{Command, CommandOutcome, player_line},
    console::Console,
};

/// Looks a player up by id or case-insensitive username and prints their
/// current standing along with the games recorded for them. Read-only.
pub struct PlayerStatsCommand {
    player_repository: ArcPlayerRepository,
    game_repository: ArcGameRepository,
}

impl PlayerStatsCommand {
    pub fn new(player_repository: ArcPlayerRepository, game_repository: ArcGameRepository) -> Self {
        Self {
            player_repository,
            game_repository,
        }
    }
}

impl Command for PlayerStatsCommand {
    fn name(&self) -> &'static str {
        "PlayerStats"
    }

    fn execute(&self, console: &mut dyn Console) -> ServiceResult<CommandOutcome> {
        let query = console.prompt("Enter player name or ID: ")?;
        let players = self.player_repository.get_players()?;
        let Some(player) = find_player(&players, &query) else {
            console.write_line("Player not found.")?;
            return Ok(CommandOutcome::Continue);
        };

        console.write_line(&player_line(player))?;

        let games = self.game_repository.get_games_by_player(player.id)?;
        if games.is_empty() {
            console.write_line("No games recorded.")?;
        } else {
            console.write_line(&format!("Games recorded: {}", games.len()))?;
            for game in &games {
                console.write_line(&format!(
                    "  {} vs {}: {} (game rating {})",
                    game.played_at.format("%Y-%m-%d %H:%M"),
                    game.opponent_name,
                    game.outcome,
                    game.rating
                ))?;
            }
        }
        Ok(CommandOutcome::Continue)
    }
}
