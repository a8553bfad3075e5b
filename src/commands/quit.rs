use ladder_domain::ServiceResult;

use crate::{
    commands::{Command, CommandOutcome},
    console::Console,
};

/// Clean exit from the menu loop.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &'static str {
        "Quit"
    }

    fn execute(&self, console: &mut dyn Console) -> ServiceResult<CommandOutcome> {
        console.write_line("Goodbye.")?;
        Ok(CommandOutcome::Quit)
    }
}
