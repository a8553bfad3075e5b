use ladder_domain::{
    ServiceError, ServiceResult,
    account::AccountKind,
    player::{ArcPlayerRepository, NewPlayer, PlayerRepository, validate_username},
};
use log::{info, warn};

use crate::{
    commands::{Command, CommandOutcome},
    console::Console,
};

/// Registers a new player under one of the rating-accounting schemes. Any
/// validation failure aborts with a message and zero repository mutations.
pub struct AddPlayerCommand {
    player_repository: ArcPlayerRepository,
}

impl AddPlayerCommand {
    pub fn new(player_repository: ArcPlayerRepository) -> Self {
        Self { player_repository }
    }
}

impl Command for AddPlayerCommand {
    fn name(&self) -> &'static str {
        "AddPlayer"
    }

    fn execute(&self, console: &mut dyn Console) -> ServiceResult<CommandOutcome> {
        let username = console.prompt("Enter player name: ")?;
        if let Err(e) = validate_username(&username) {
            warn!("Rejected player name {:?}: {}", username, e);
            console.write_line("Invalid player name. Player not created.")?;
            return Ok(CommandOutcome::Continue);
        }

        let rating_input = console.prompt("Enter initial rating: ")?;
        let Ok(rating) = rating_input.parse::<i64>() else {
            console.write_line("Invalid initial rating. Player not created.")?;
            return Ok(CommandOutcome::Continue);
        };

        let account_input =
            console.prompt("Enter account type (Standard/HalfPointsDeducted/VictorySeriesBonus): ")?;
        let Some(account) = AccountKind::parse(&account_input) else {
            console.write_line("Invalid account type. Player not created.")?;
            return Ok(CommandOutcome::Continue);
        };

        let new_player = NewPlayer {
            username,
            rating,
            account,
        };
        match self.player_repository.create_player(&new_player) {
            Ok(player) => {
                info!(
                    "Created player {} (id {}) with account type {} and rating {}",
                    player.username, player.id, player.account, player.rating
                );
                console.write_line(&format!(
                    "Player {} with account type {} created successfully.",
                    player.username, player.account
                ))?;
            }
            Err(ServiceError::NotPossible(_)) => {
                console.write_line("Username already taken. Player not created.")?;
            }
            Err(e) => return Err(e),
        }
        Ok(CommandOutcome::Continue)
    }
}
