use ladder_domain::{
    ServiceResult,
    player::{ArcPlayerRepository, PlayerRepository},
};

use crate::{
    commands::{Command, CommandOutcome, player_line},
    console::Console,
};

/// Prints every registered player in creation order. Read-only.
pub struct DisplayPlayersCommand {
    player_repository: ArcPlayerRepository,
}

impl DisplayPlayersCommand {
    pub fn new(player_repository: ArcPlayerRepository) -> Self {
        Self { player_repository }
    }
}

impl Command for DisplayPlayersCommand {
    fn name(&self) -> &'static str {
        "DisplayPlayers"
    }

    fn execute(&self, console: &mut dyn Console) -> ServiceResult<CommandOutcome> {
        let players = self.player_repository.get_players()?;
        console.write_line("All Players:")?;
        for player in &players {
            console.write_line(&player_line(player))?;
        }
        console.write_line("")?;
        Ok(CommandOutcome::Continue)
    }
}
