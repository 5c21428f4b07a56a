//! Question-and-answer flow of one game.
//!
//! [`GameSession`] is a pure state machine: every [`submit`](GameSession::submit)
//! takes one textual token and returns the events the player should see, in
//! order. It never reads or writes a terminal; frontends own all I/O.
//!
//! ```text
//! Instructions → ManeuverChart → PatrolSystem → Ship → Weapon ⇄ Quantity → Finished
//! ```
//!
//! The instructions and chart questions are skipped when
//! [`GameConfig::offer_instructions`] is off.

mod error;
mod event;

pub use error::SessionError;
pub use event::{Prompt, SessionEvent};

use crate::catalog::{Catalog, PatrolSystem, WeaponChoice};
use crate::combat::{BattleReport, CombatEngine, CombatError, EnemyProfile};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::loadout::{Loadout, LoadoutBuilder, LoadoutError, WeaponSelection};

/// Step of the flow the session is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    NotStarted,
    Instructions,
    ManeuverChart,
    PatrolSystem,
    Ship,
    Weapon,
    /// Waiting for the quantity of the weapon at `selection`.
    Quantity { selection: usize },
    Finished,
}

/// One playthrough: loadout assembly followed by a single battle.
#[derive(Clone, Debug)]
pub struct GameSession<'c> {
    builder: LoadoutBuilder<'c>,
    config: GameConfig,
    enemy: EnemyProfile,
    phase: SessionPhase,
    system: Option<PatrolSystem>,
    report: Option<BattleReport>,
}

impl<'c> GameSession<'c> {
    pub fn new(catalog: &'c Catalog, config: GameConfig, enemy: EnemyProfile) -> Self {
        Self {
            builder: LoadoutBuilder::new(catalog),
            config,
            enemy,
            phase: SessionPhase::NotStarted,
            system: None,
            report: None,
        }
    }

    /// Session against the classic opponent with default settings.
    pub fn standard(catalog: &'c Catalog) -> Self {
        Self::new(catalog, GameConfig::default(), EnemyProfile::alien_destroyer())
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.builder.catalog()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn enemy(&self) -> &EnemyProfile {
        &self.enemy
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn builder(&self) -> &LoadoutBuilder<'c> {
        &self.builder
    }

    pub fn patrol_system(&self) -> Option<PatrolSystem> {
        self.system
    }

    pub fn loadout(&self) -> Option<&Loadout> {
        self.builder.loadout()
    }

    /// Battle record, once the battle has been fought.
    pub fn report(&self) -> Option<&BattleReport> {
        self.report.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    /// Opens the session with the intro and the first question.
    pub fn begin(&mut self) -> Result<Vec<SessionEvent>, SessionError> {
        if self.phase != SessionPhase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }

        let mut events = vec![SessionEvent::Intro];
        if self.config.offer_instructions {
            self.phase = SessionPhase::Instructions;
        } else {
            self.open_system_menu(&mut events);
        }

        tracing::info!(phase = %self.phase, "session started");
        Ok(events)
    }

    /// Decision currently awaited, or `None` before `begin()` and after the battle.
    pub fn prompt(&self) -> Option<Prompt> {
        let catalog = self.catalog();
        match self.phase {
            SessionPhase::NotStarted | SessionPhase::Finished => None,
            SessionPhase::Instructions => Some(Prompt::Instructions),
            SessionPhase::ManeuverChart => Some(Prompt::ManeuverChart),
            SessionPhase::PatrolSystem => Some(Prompt::PatrolSystem {
                count: catalog.patrol_systems().len(),
            }),
            SessionPhase::Ship => Some(Prompt::Ship {
                count: catalog.ship_classes().len(),
            }),
            SessionPhase::Weapon => Some(Prompt::Weapon {
                done: catalog.done_selection(),
            }),
            SessionPhase::Quantity { selection } => catalog
                .weapon(selection)
                .map(|weapon| Prompt::Quantity { weapon: *weapon }),
        }
    }

    /// Feeds the answer to the current prompt.
    pub fn submit(&mut self, token: &str) -> Result<Vec<SessionEvent>, SessionError> {
        let token = token.trim();
        let mut events = Vec::new();

        match self.phase {
            SessionPhase::NotStarted => return Err(SessionError::NotStarted),
            SessionPhase::Finished => return Err(SessionError::Finished),
            SessionPhase::Instructions => {
                if is_yes(token) {
                    events.push(SessionEvent::InstructionsShown);
                }
                self.phase = SessionPhase::ManeuverChart;
            }
            SessionPhase::ManeuverChart => {
                if is_yes(token) {
                    events.push(SessionEvent::ManeuverChartShown);
                }
                self.open_system_menu(&mut events);
            }
            SessionPhase::PatrolSystem => self.choose_system(token, &mut events),
            SessionPhase::Ship => self.choose_ship(token, &mut events),
            SessionPhase::Weapon => self.choose_weapon(token, &mut events)?,
            SessionPhase::Quantity { selection } => {
                self.choose_quantity(selection, token, &mut events)?
            }
        }

        Ok(events)
    }

    fn open_system_menu(&mut self, events: &mut Vec<SessionEvent>) {
        events.push(SessionEvent::SystemMenu);
        self.phase = SessionPhase::PatrolSystem;
    }

    fn choose_system(&mut self, token: &str, events: &mut Vec<SessionEvent>) {
        let system = parse_selection(token).and_then(|sel| {
            self.catalog()
                .patrol_system(sel)
                .ok_or_else(|| LoadoutError::invalid(token))
        });

        match system {
            Ok(system) => {
                tracing::debug!(%system, "patrol system selected");
                self.system = Some(system);
                self.phase = SessionPhase::Ship;
                events.push(SessionEvent::PatrolSystemSelected(system));
            }
            Err(err) => reject(err, events),
        }
    }

    fn choose_ship(&mut self, token: &str, events: &mut Vec<SessionEvent>) {
        let result = parse_selection(token)
            .and_then(|selection| Ok((selection, self.builder.select_ship(selection)?)));

        match result {
            Ok((selection, ship)) => {
                self.phase = SessionPhase::Weapon;
                events.push(SessionEvent::ShipSelected { selection, ship });
                events.push(SessionEvent::WeaponMenu {
                    remaining: ship.cargo_capacity,
                });
            }
            Err(err) => reject(err, events),
        }
    }

    fn choose_weapon(
        &mut self,
        token: &str,
        events: &mut Vec<SessionEvent>,
    ) -> Result<(), SessionError> {
        let choice =
            parse_selection(token).and_then(|sel| Ok((sel, self.builder.check_weapon(sel)?)));

        match choice {
            Ok((_, WeaponChoice::Done)) => {
                self.builder.complete()?;
                self.complete_selection(events)?;
            }
            Ok((selection, WeaponChoice::Weapon(_))) => {
                self.phase = SessionPhase::Quantity { selection };
            }
            Err(err) => {
                reject(err, events);
                self.reopen_weapon_menu(events);
            }
        }
        Ok(())
    }

    fn choose_quantity(
        &mut self,
        selection: usize,
        token: &str,
        events: &mut Vec<SessionEvent>,
    ) -> Result<(), SessionError> {
        let result = token
            .parse::<i64>()
            .map_err(|_| LoadoutError::invalid(token))
            .and_then(|quantity| self.builder.select_weapon(selection, quantity));

        match result {
            Ok(WeaponSelection::Loaded(receipt)) => {
                events.push(SessionEvent::WeaponLoaded(receipt));
                if receipt.finalized {
                    events.push(SessionEvent::CargoFull);
                    self.complete_selection(events)?;
                } else {
                    self.reopen_weapon_menu(events);
                }
            }
            Ok(WeaponSelection::Completed) => self.complete_selection(events)?,
            // A rejected quantity returns to the weapon menu so a weapon that
            // can no longer fit does not trap the player.
            Err(err) => {
                reject(err, events);
                self.reopen_weapon_menu(events);
            }
        }
        Ok(())
    }

    fn reopen_weapon_menu(&mut self, events: &mut Vec<SessionEvent>) {
        self.phase = SessionPhase::Weapon;
        if let Some(remaining) = self.builder.remaining_cargo() {
            events.push(SessionEvent::WeaponMenu { remaining });
        }
    }

    /// Freezes the loadout and fights the battle.
    fn complete_selection(&mut self, events: &mut Vec<SessionEvent>) -> Result<(), SessionError> {
        let loadout = self.builder.finalize()?.clone();
        events.push(SessionEvent::SelectionComplete);
        self.phase = SessionPhase::Finished;

        let engine = CombatEngine::new(&loadout, self.config.player_health, &self.enemy);
        events.push(SessionEvent::BattleStarted { loadout });

        match engine.run() {
            Ok(report) => {
                events.extend(report.turns.iter().copied().map(SessionEvent::Turn));
                events.push(SessionEvent::BattleEnded(report.outcome));
                tracing::info!(outcome = ?report.outcome, rounds = report.rounds(), "session finished");
                self.report = Some(report);
                Ok(())
            }
            Err(err @ CombatError::Stalemate { .. }) => {
                tracing::warn!(%err, "battle abandoned");
                events.push(SessionEvent::Stalemate(err));
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Only `YES`/`Y` (any case) count as yes; anything else is no.
fn is_yes(token: &str) -> bool {
    token.eq_ignore_ascii_case("yes") || token.eq_ignore_ascii_case("y")
}

fn parse_selection(token: &str) -> Result<usize, LoadoutError> {
    token.parse().map_err(|_| LoadoutError::invalid(token))
}

fn reject(err: LoadoutError, events: &mut Vec<SessionEvent>) {
    tracing::warn!(code = err.error_code(), %err, "input rejected");
    events.push(SessionEvent::Rejected(err));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_is_lenient_about_case_only() {
        assert!(is_yes("YES"));
        assert!(is_yes("y"));
        assert!(is_yes("Yes"));
        assert!(!is_yes("yeah"));
        assert!(!is_yes(""));
        assert!(!is_yes("NO"));
    }

    #[test]
    fn cannot_submit_before_begin_or_begin_twice() {
        let catalog = Catalog::standard();
        let mut session = GameSession::standard(&catalog);

        assert_eq!(session.submit("YES"), Err(SessionError::NotStarted));
        assert_eq!(session.prompt(), None);

        session.begin().unwrap();
        assert_eq!(session.begin(), Err(SessionError::AlreadyStarted));
        assert_eq!(session.prompt(), Some(Prompt::Instructions));
    }

    #[test]
    fn instructions_can_be_skipped_by_config() {
        let catalog = Catalog::standard();
        let config = GameConfig::default().without_instructions();
        let mut session = GameSession::new(&catalog, config, EnemyProfile::default());

        let events = session.begin().unwrap();
        assert_eq!(events, vec![SessionEvent::Intro, SessionEvent::SystemMenu]);
        assert_eq!(session.prompt(), Some(Prompt::PatrolSystem { count: 3 }));
    }

    #[test]
    fn quantity_prompt_names_the_weapon() {
        let catalog = Catalog::standard();
        let config = GameConfig::default().without_instructions();
        let mut session = GameSession::new(&catalog, config, EnemyProfile::default());
        session.begin().unwrap();
        session.submit("3").unwrap();
        session.submit("2").unwrap();

        assert_eq!(session.prompt(), Some(Prompt::Weapon { done: 5 }));
        assert!(session.submit("4").unwrap().is_empty());
        assert_eq!(
            session.prompt(),
            Some(Prompt::Quantity {
                weapon: crate::catalog::WeaponType::PHOTON_TORPEDO
            })
        );
    }
}
