//! Top-level client tying content and a frontend together.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ ContentBundle (catalog, rules, enemy)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The client owns the content for the lifetime of one game, opens a
//! [`GameSession`] over it and hands the session to the frontend.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_bootstrap::ContentBundle;
use game_core::{BattleReport, GameSession};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects content and frontend
/// 2. `Client::run()` opens a session and transfers control to the frontend
/// 3. When the frontend returns, the battle report (if any) is handed back
pub struct Client {
    content: ContentBundle,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Plays one game.
    ///
    /// Returns `Ok(None)` when the battle was called off as a stalemate.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails, including when input ends
    /// before the game is over.
    pub fn run(self) -> Result<Option<BattleReport>> {
        let Client {
            content,
            mut frontend,
        } = self;
        let ContentBundle {
            catalog,
            config,
            enemy,
        } = content;

        let mut session = GameSession::new(&catalog, config, enemy);
        frontend.run(&mut session)?;

        let report = session.report().cloned();
        match &report {
            Some(report) => tracing::info!(
                outcome = ?report.outcome,
                rounds = report.rounds(),
                "game over"
            ),
            None => tracing::info!(finished = session.is_finished(), "game over without a result"),
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Catalog, CombatOutcome, EnemyProfile, GameConfig};

    /// Answers every prompt from a fixed script.
    struct ScriptedFrontend(Vec<&'static str>);

    impl Frontend for ScriptedFrontend {
        fn run(&mut self, session: &mut GameSession<'_>) -> Result<()> {
            session.begin()?;
            for token in &self.0 {
                session.submit(token)?;
            }
            Ok(())
        }
    }

    fn content() -> ContentBundle {
        ContentBundle {
            catalog: Catalog::standard(),
            config: GameConfig::default(),
            enemy: EnemyProfile::alien_destroyer(),
        }
    }

    #[test]
    fn returns_the_battle_report() {
        let report = Client::builder()
            .content(content())
            .frontend(ScriptedFrontend(vec!["no", "no", "1", "1", "1", "1", "2", "1"]))
            .build()
            .unwrap()
            .run()
            .unwrap()
            .expect("battle resolved");

        assert_eq!(report.outcome, CombatOutcome::PlayerVictory);
    }

    #[test]
    fn stalemate_has_no_report() {
        let enemy = EnemyProfile::new("Bulwark", 10, 50, 0);
        let report = Client::builder()
            .content(ContentBundle { enemy, ..content() })
            .frontend(ScriptedFrontend(vec!["no", "no", "1", "1", "5"]))
            .build()
            .unwrap()
            .run()
            .unwrap();

        assert!(report.is_none());
    }

    #[test]
    fn frontend_errors_propagate() {
        let result = Client::builder()
            .content(content())
            .frontend(ScriptedFrontend(vec!["no", "no", "1", "1", "5", "extra"]))
            .build()
            .unwrap()
            .run();

        assert!(result.is_err());
    }
}
