//! Combat resolution.
//!
//! A battle is a strict alternation of attacks between the player and one
//! enemy, player first. Each attack deals `offense - protection` (floored at
//! zero) and the battle ends the moment either side's health reaches zero.
//!
//! # Phases
//!
//! ```text
//! PlayerTurn ⇄ EnemyTurn
//!     │            │
//!     ▼            ▼
//! PlayerVictory  EnemyVictory
//! ```
//!
//! The engine is deterministic: identical loadouts, health and enemy profile
//! always produce identical [`BattleReport`]s.

pub mod damage;
mod error;
mod state;

pub use damage::{apply_damage, calculate_damage};
pub use error::CombatError;
pub use state::{CombatantState, EnemyProfile, Side};

use crate::loadout::Loadout;

/// Where a battle currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatPhase {
    PlayerTurn,
    EnemyTurn,
    PlayerVictory,
    EnemyVictory,
}

impl CombatPhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::PlayerVictory | Self::EnemyVictory)
    }

    /// Side whose attack resolves next, if the battle is still running.
    pub const fn attacker(self) -> Option<Side> {
        match self {
            Self::PlayerTurn => Some(Side::Player),
            Self::EnemyTurn => Some(Side::Enemy),
            Self::PlayerVictory | Self::EnemyVictory => None,
        }
    }

    pub const fn turn_of(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerTurn,
            Side::Enemy => Self::EnemyTurn,
        }
    }

    pub const fn victory_of(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerVictory,
            Side::Enemy => Self::EnemyVictory,
        }
    }
}

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatOutcome {
    PlayerVictory,
    EnemyVictory,
}

impl CombatOutcome {
    pub const fn winner(self) -> Side {
        match self {
            Self::PlayerVictory => Side::Player,
            Self::EnemyVictory => Side::Enemy,
        }
    }
}

/// One resolved attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnEvent {
    /// 1-based round; a round is one player attack plus the enemy's reply.
    pub round: u32,
    pub attacker: Side,
    pub damage: u32,
    /// Defender health after the attack.
    pub defender_remaining: u32,
}

/// Complete record of a finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub outcome: CombatOutcome,
    pub turns: Vec<TurnEvent>,
    pub player: CombatantState,
    pub enemy: CombatantState,
}

impl BattleReport {
    pub fn rounds(&self) -> u32 {
        self.turns.last().map_or(0, |turn| turn.round)
    }
}

/// Turn-based damage exchange between the player and one enemy.
#[derive(Clone, Debug)]
pub struct CombatEngine {
    player: CombatantState,
    enemy: CombatantState,
    phase: CombatPhase,
    round: u32,
    turns: Vec<TurnEvent>,
}

impl CombatEngine {
    /// Sets up a battle for a finalized loadout. The player strikes first.
    pub fn new(loadout: &Loadout, player_health: u32, enemy: &EnemyProfile) -> Self {
        Self::from_states(
            CombatantState::from_loadout(loadout, player_health),
            enemy.combatant(),
        )
    }

    pub fn from_states(player: CombatantState, enemy: CombatantState) -> Self {
        Self {
            player,
            enemy,
            phase: CombatPhase::PlayerTurn,
            round: 1,
            turns: Vec::new(),
        }
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn player(&self) -> &CombatantState {
        &self.player
    }

    pub fn enemy(&self) -> &CombatantState {
        &self.enemy
    }

    pub fn turns(&self) -> &[TurnEvent] {
        &self.turns
    }

    /// Resolves the next half-turn.
    ///
    /// A player attack that destroys the enemy ends the battle immediately;
    /// the enemy gets no retaliation.
    pub fn step(&mut self) -> Result<TurnEvent, CombatError> {
        self.ensure_progress()?;

        let Some(attacker) = self.phase.attacker() else {
            return Err(CombatError::AlreadyFinished { phase: self.phase });
        };
        let (attacking, defending) = match attacker {
            Side::Player => (&self.player, &mut self.enemy),
            Side::Enemy => (&self.enemy, &mut self.player),
        };

        let damage = calculate_damage(attacking.offense, defending.protection);
        defending.health = apply_damage(defending.health, damage);

        let event = TurnEvent {
            round: self.round,
            attacker,
            damage,
            defender_remaining: defending.health,
        };

        self.phase = if defending.is_destroyed() {
            CombatPhase::victory_of(attacker)
        } else {
            if attacker == Side::Enemy {
                self.round += 1;
            }
            CombatPhase::turn_of(attacker.opponent())
        };

        tracing::debug!(
            round = event.round,
            attacker = %attacker,
            damage,
            remaining = event.defender_remaining,
            "attack resolved"
        );
        if self.phase.is_finished() {
            tracing::info!(phase = %self.phase, rounds = event.round, "battle finished");
        }

        self.turns.push(event);
        Ok(event)
    }

    /// One player attack followed, if the enemy survived, by one enemy attack.
    ///
    /// Called mid-round (after a lone [`step`](Self::step)) it only resolves the
    /// enemy's reply.
    pub fn advance_round(&mut self) -> Result<Vec<TurnEvent>, CombatError> {
        let mut events = Vec::with_capacity(2);
        let opened_round = self.phase == CombatPhase::PlayerTurn;
        events.push(self.step()?);
        if opened_round && self.phase == CombatPhase::EnemyTurn {
            events.push(self.step()?);
        }
        Ok(events)
    }

    /// Drives the battle to a terminal phase.
    pub fn run(mut self) -> Result<BattleReport, CombatError> {
        tracing::info!(
            player_health = self.player.health,
            player_offense = self.player.offense,
            enemy_health = self.enemy.health,
            enemy_offense = self.enemy.offense,
            "battle started"
        );

        while !self.phase.is_finished() {
            self.step()?;
        }
        self.into_report()
    }

    /// Report of a finished battle; fails while the battle is still running.
    pub fn into_report(self) -> Result<BattleReport, CombatError> {
        let outcome = match self.phase {
            CombatPhase::PlayerVictory => CombatOutcome::PlayerVictory,
            CombatPhase::EnemyVictory => CombatOutcome::EnemyVictory,
            phase @ (CombatPhase::PlayerTurn | CombatPhase::EnemyTurn) => {
                return Err(CombatError::InProgress { phase });
            }
        };

        Ok(BattleReport {
            outcome,
            turns: self.turns,
            player: self.player,
            enemy: self.enemy,
        })
    }

    /// Fails when the battle is over or can never end.
    fn ensure_progress(&self) -> Result<(), CombatError> {
        if self.phase.is_finished() {
            return Err(CombatError::AlreadyFinished { phase: self.phase });
        }

        let player_hits = calculate_damage(self.player.offense, self.enemy.protection) > 0;
        let enemy_hits = calculate_damage(self.enemy.offense, self.player.protection) > 0;
        let decided = self.player.is_destroyed() || self.enemy.is_destroyed();

        if !player_hits && !enemy_hits && !decided {
            tracing::warn!(
                player_offense = self.player.offense,
                enemy_protection = self.enemy.protection,
                "battle cannot progress"
            );
            return Err(self.stalemate());
        }
        Ok(())
    }

    fn stalemate(&self) -> CombatError {
        CombatError::Stalemate {
            player_offense: self.player.offense,
            enemy_protection: self.enemy.protection,
            enemy_offense: self.enemy.offense,
            player_protection: self.player.protection,
        }
    }
}
