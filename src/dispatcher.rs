use ladder_domain::ServiceResult;
use log::error;

use crate::{
    commands::{Command, CommandOutcome},
    console::Console,
};

/// Ordered command registry built once at startup. Presents the menu,
/// routes a 1-based selection to the matching command and loops until a
/// command asks to quit or the input stream closes.
pub struct Dispatcher {
    commands: Vec<Box<dyn Command>>,
}

impl Dispatcher {
    pub fn new(commands: Vec<Box<dyn Command>>) -> Self {
        Self { commands }
    }

    pub fn run(&self, console: &mut dyn Console) -> ServiceResult<()> {
        loop {
            console.write_line("Select a command:")?;
            for (index, command) in self.commands.iter().enumerate() {
                console.write_line(&format!("{}. {}", index + 1, command.name()))?;
            }

            let selection = console.prompt("")?;
            let Some(command) = selection
                .parse::<usize>()
                .ok()
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| self.commands.get(index))
            else {
                console.write_line("Invalid command index. Please try again.")?;
                continue;
            };

            match command.execute(console) {
                Ok(CommandOutcome::Continue) => {}
                Ok(CommandOutcome::Quit) => break,
                Err(e) => {
                    // Commands resolve their own validation errors; anything
                    // escaping here is a defect, contained to keep the loop
                    // alive.
                    error!("Command {} failed: {}", command.name(), e);
                    console.write_line("Something went wrong. See the log for details.")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ladder_domain::{
        game::{ArcGameRepository, GameRepository},
        player::{ArcPlayerRepository, PlayerRepository},
    };

    use super::*;
    use crate::{
        commands::{
            AddPlayerCommand, DisplayPlayersCommand, PlayGameCommand, PlayerStatsCommand,
            QuitCommand,
        },
        console::MockConsole,
        persistence::{GameRepositoryImpl, PlayerRepositoryImpl},
    };

    fn full_dispatcher() -> (ArcPlayerRepository, ArcGameRepository, Dispatcher) {
        let players: ArcPlayerRepository = Arc::new(Box::new(PlayerRepositoryImpl::new()));
        let games: ArcGameRepository = Arc::new(Box::new(GameRepositoryImpl::new()));
        let dispatcher = Dispatcher::new(vec![
            Box::new(DisplayPlayersCommand::new(players.clone())),
            Box::new(AddPlayerCommand::new(players.clone())),
            Box::new(PlayerStatsCommand::new(players.clone(), games.clone())),
            Box::new(PlayGameCommand::new(players.clone(), games.clone())),
            Box::new(QuitCommand),
        ]);
        (players, games, dispatcher)
    }

    #[test]
    fn test_menu_lists_commands_in_order() {
        let (_, _, dispatcher) = full_dispatcher();
        let mut console = MockConsole::new(["5"]);
        dispatcher.run(&mut console).unwrap();
        let menu: Vec<_> = console.output.iter().take(6).cloned().collect();
        assert_eq!(
            menu,
            vec![
                "Select a command:",
                "1. DisplayPlayers",
                "2. AddPlayer",
                "3. PlayerStats",
                "4. PlayGame",
                "5. Quit",
            ]
        );
    }

    #[test]
    fn test_invalid_selection_redisplays_menu() {
        let (_, _, dispatcher) = full_dispatcher();
        for bad in ["0", "6", "two", ""] {
            let mut console = MockConsole::new([bad, "5"]);
            dispatcher.run(&mut console).unwrap();
            assert!(console.output_contains("Invalid command index. Please try again."));
            assert!(console.output_contains("Goodbye."));
            // The menu is shown again after the rejection.
            let menus = console
                .output
                .iter()
                .filter(|l| *l == "Select a command:")
                .count();
            assert_eq!(menus, 2);
        }
    }

    #[test]
    fn test_add_then_display_then_quit() {
        let (_, _, dispatcher) = full_dispatcher();
        let mut console = MockConsole::new([
            "2", "alice", "1000", "standard", // AddPlayer
            "1", // DisplayPlayers
            "5", // Quit
        ]);
        dispatcher.run(&mut console).unwrap();
        assert!(console
            .output_contains("Player alice with account type Standard created successfully."));
        assert!(console.output_contains("Player ID: 1, Username: alice, Current Rating: 1000"));
    }

    #[test]
    fn test_full_session_records_game() {
        // End-to-end: register alice, record a win against bob, check stats.
        let (players, games, dispatcher) = full_dispatcher();
        let mut console = MockConsole::new([
            "2", "alice", "1000", "standard", // AddPlayer
            "4", "alice", "bob", "1000", "Win", // PlayGame
            "3", "alice", // PlayerStats
            "5", // Quit
        ]);
        dispatcher.run(&mut console).unwrap();

        assert!(console.output_contains("Game recorded successfully."));
        assert!(console.output_contains("Player ID: 1, Username: alice, Current Rating: 1016"));

        let alice = &players.get_players().unwrap()[0];
        let recorded = games.get_games_by_player(alice.id).unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].opponent_name, "bob");
    }

    #[test]
    fn test_rejected_add_leaves_no_player_behind() {
        let (_, _, dispatcher) = full_dispatcher();
        let mut console = MockConsole::new([
            "2", "alice", "1000", "wizard", // AddPlayer, rejected
            "1", // DisplayPlayers
            "5", // Quit
        ]);
        dispatcher.run(&mut console).unwrap();
        assert!(console.output_contains("Invalid account type. Player not created."));
        assert!(!console.output_contains("Username: alice"));
    }
}
