use std::sync::Arc;

use ladder_domain::{game::ArcGameRepository, player::ArcPlayerRepository};
use log::{error, info};

use crate::{
    commands::{
        AddPlayerCommand, Command, DisplayPlayersCommand, PlayGameCommand, PlayerStatsCommand,
        QuitCommand,
    },
    console::StdConsole,
    dispatcher::Dispatcher,
    persistence::{GameRepositoryImpl, PlayerRepositoryImpl},
};

mod commands;
mod console;
mod dispatcher;
mod logs;
mod persistence;

fn main() {
    dotenvy::dotenv().ok();

    logs::init_logger();

    let player_repository: ArcPlayerRepository = Arc::new(Box::new(PlayerRepositoryImpl::new()));
    let game_repository: ArcGameRepository = Arc::new(Box::new(GameRepositoryImpl::new()));

    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(DisplayPlayersCommand::new(player_repository.clone())),
        Box::new(AddPlayerCommand::new(player_repository.clone())),
        Box::new(PlayerStatsCommand::new(
            player_repository.clone(),
            game_repository.clone(),
        )),
        Box::new(PlayGameCommand::new(
            player_repository.clone(),
            game_repository.clone(),
        )),
        Box::new(QuitCommand),
    ];
    let dispatcher = Dispatcher::new(commands);

    info!("Starting ladder console");

    let mut console = StdConsole::new();
    if let Err(e) = dispatcher.run(&mut console) {
        error!("Console session ended unexpectedly: {}", e);
        std::process::exit(1);
    }

    info!("Ladder console exited");
}
