use ladder_domain::{ServiceResult, player::Player};

use crate::console::Console;

mod add_player;
mod display_players;
mod play_game;
mod player_stats;
mod quit;

pub use add_player::AddPlayerCommand;
pub use display_players::DisplayPlayersCommand;
pub use play_game::PlayGameCommand;
pub use player_stats::PlayerStatsCommand;
pub use quit::QuitCommand;

/// What the dispatcher should do after a command finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}

/// A single operator-triggered unit of work against the repositories.
///
/// Validation failures and lookup misses are resolved inside `execute` into
/// console messages and a no-op outcome. An `Err` escaping `execute` is a
/// defect; the dispatcher logs it and keeps the loop alive.
pub trait Command {
    /// Display name shown in the menu.
    fn name(&self) -> &'static str;
    fn execute(&self, console: &mut dyn Console) -> ServiceResult<CommandOutcome>;
}

pub(crate) fn player_line(player: &Player) -> String {
    format!(
        "Player ID: {}, Username: {}, Current Rating: {}",
        player.id, player.username, player.rating
    )
}
