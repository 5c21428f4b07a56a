//! Drives a [`GameSession`] against a [`Console`].
use std::io;

use game_core::{GameError, GameSession, SessionError, SessionEvent};

use crate::config::FrontendConfig;
use crate::console::Console;
use crate::format;
use crate::message::{MessageEntry, MessageLog};

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// Input ran out while the session still needed an answer.
    #[error("input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Prompt/answer loop: render events, ask for the next token, repeat until
/// the session is finished.
pub struct GameController<C> {
    console: C,
    log: MessageLog,
    config: FrontendConfig,
    rejections: usize,
}

impl<C: Console> GameController<C> {
    pub fn new(console: C, config: FrontendConfig) -> Self {
        Self {
            console,
            log: MessageLog::new(config.messages.capacity),
            config,
            rejections: 0,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Answers the session refused so far.
    pub fn rejections(&self) -> usize {
        self.rejections
    }

    /// Plays `session` to the end. The battle report stays on the session.
    pub fn run(&mut self, session: &mut GameSession<'_>) -> Result<(), ControllerError> {
        let events = session.begin()?;
        self.render(session, &events)?;

        while let Some(prompt) = session.prompt() {
            let question = format::prompt_text(&prompt);
            let Some(token) = self.console.read_token(&question)? else {
                tracing::warn!(%question, "input closed before the session finished");
                self.emit(MessageEntry::error("INPUT CLOSED BEFORE THE GAME ENDED"))?;
                return Err(ControllerError::InputClosed { prompt: question });
            };
            tracing::debug!(%question, %token, "answer received");

            let events = session.submit(&token).inspect_err(|err| {
                tracing::error!(code = err.error_code(), %err, "session rejected submission");
            })?;
            self.rejections += events.iter().filter(|event| event.is_rejection()).count();
            self.render(session, &events)?;
        }

        tracing::info!(rejections = self.rejections, "session played to the end");
        Ok(())
    }

    fn render(
        &mut self,
        session: &GameSession<'_>,
        events: &[SessionEvent],
    ) -> Result<(), ControllerError> {
        for event in events {
            if matches!(event, SessionEvent::Turn(_)) && !self.config.messages.show_battle_turns {
                continue;
            }
            for entry in format::render_event(event, session.catalog(), session.enemy()) {
                self.emit(entry)?;
            }
        }
        Ok(())
    }

    fn emit(&mut self, entry: MessageEntry) -> Result<(), ControllerError> {
        self.console.write_line(&entry)?;
        self.log.push(entry);
        Ok(())
    }
}
