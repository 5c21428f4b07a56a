use crate::combat::CombatError;
use crate::error::{ErrorSeverity, GameError};
use crate::loadout::LoadoutError;

/// Contract violations while driving a [`GameSession`](super::GameSession).
///
/// Bad player input is never an error here; it becomes a
/// [`SessionEvent::Rejected`](super::SessionEvent::Rejected) instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session has not been started")]
    NotStarted,

    #[error("session was already started")]
    AlreadyStarted,

    #[error("session is finished and accepts no more input")]
    Finished,

    #[error("loadout error: {0}")]
    Loadout(#[from] LoadoutError),

    #[error("combat error: {0}")]
    Combat(#[from] CombatError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotStarted | Self::AlreadyStarted | Self::Finished => ErrorSeverity::Internal,
            Self::Loadout(err) => err.severity(),
            Self::Combat(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotStarted => "SESSION_NOT_STARTED",
            Self::AlreadyStarted => "SESSION_ALREADY_STARTED",
            Self::Finished => "SESSION_FINISHED",
            Self::Loadout(err) => err.error_code(),
            Self::Combat(err) => err.error_code(),
        }
    }
}
