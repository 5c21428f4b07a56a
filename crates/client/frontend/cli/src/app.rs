//! Glue between the game session and the terminal console.
use anyhow::Result;

use client_frontend_core::{Frontend, FrontendConfig, GameController};
use game_core::GameSession;

use crate::config::CliConfig;
use crate::console::TerminalConsole;

pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

impl Frontend for CliFrontend {
    fn run(&mut self, session: &mut GameSession<'_>) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let console = TerminalConsole::stdio(self.cli_config.ui.clone());
        let mut controller = GameController::new(console, self.frontend_config.clone());
        controller.run(session)?;

        tracing::info!(messages = controller.log().len(), "CLI frontend finished");
        Ok(())
    }
}
