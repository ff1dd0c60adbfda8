use super::action_log::{ActionEntry, ActionLog, ActionPayload};
use super::session::BattleSession;
use super::types::{AnswerEffects, BattleResult};
use crate::catalog::BossCatalog;
use crate::config::BattleConfig;
use std::sync::Arc;

/// Managed Rocket state holding the arena.
pub type SharedArena = Arc<rocket::futures::lock::Mutex<BattleArena>>;

/// Reasons an arena operation can be refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    NotFound(String),
    Rejected(String),
}

impl ArenaError {
    pub fn message(&self) -> &str {
        match self {
            ArenaError::NotFound(m) | ArenaError::Rejected(m) => m,
        }
    }
}

/// The live battle (at most one) plus everything needed to start new ones.
///
/// Every accepted action is appended to the action log, so a fresh arena
/// replaying the log ends in the same state.
#[derive(Debug, Clone)]
pub struct BattleArena {
    pub catalog: Arc<BossCatalog>,
    pub config: BattleConfig,
    pub current: Option<BattleSession>,
    pub last_result: Option<BattleResult>,
    pub action_log: ActionLog,
}

impl BattleArena {
    pub fn new(catalog: Arc<BossCatalog>, config: BattleConfig) -> Self {
        BattleArena {
            catalog,
            config,
            current: None,
            last_result: None,
            action_log: ActionLog::new(),
        }
    }

    /// Start a battle against `boss_id`, replacing any battle in progress.
    pub fn start_battle(&mut self, boss_id: &str) -> Result<ActionEntry, ArenaError> {
        let boss = self
            .catalog
            .get(boss_id)
            .cloned()
            .ok_or_else(|| ArenaError::NotFound(format!("Boss {} not found", boss_id)))?;
        let questions = self
            .catalog
            .questions_for(boss_id)
            .map(<[_]>::to_vec)
            .unwrap_or_default();
        let session = BattleSession::start(
            boss,
            questions,
            self.config.player_xp,
            self.config.partner_xp,
        )
        .map_err(ArenaError::NotFound)?;
        self.current = Some(session);
        Ok(self.action_log.append(
            "StartBattle",
            ActionPayload::StartBattle {
                boss_id: boss_id.to_string(),
            },
        ))
    }

    /// Answer the current question of the live battle.
    pub fn answer(
        &mut self,
        selected_index: usize,
    ) -> Result<(ActionEntry, AnswerEffects), ArenaError> {
        let session = self.current.as_mut().ok_or_else(|| {
            ArenaError::Rejected("Cannot answer if there is no active battle!".to_string())
        })?;
        let effects = session
            .answer(selected_index)
            .map_err(ArenaError::Rejected)?;
        if let Some(result) = &session.result {
            self.last_result = Some(result.clone());
        }
        let entry = self.action_log.append(
            "Answer",
            ActionPayload::Answer {
                selected_index,
                correct: effects.correct,
            },
        );
        Ok((entry, effects))
    }

    /// Restart the current battle against the same boss.
    pub fn play_again(&mut self) -> Result<ActionEntry, ArenaError> {
        let session = self.current.as_mut().ok_or_else(|| {
            ArenaError::Rejected("Cannot play again without a battle to repeat!".to_string())
        })?;
        session.restart();
        Ok(self.action_log.append("PlayAgain", ActionPayload::PlayAgain))
    }

    /// Drop the current battle. Its result, if any, stays available.
    pub fn leave_battle(&mut self) -> Result<ActionEntry, ArenaError> {
        if self.current.take().is_none() {
            return Err(ArenaError::Rejected("No battle to leave".to_string()));
        }
        Ok(self
            .action_log
            .append("LeaveBattle", ActionPayload::LeaveBattle))
    }

    /// Reconstruct an arena by re-applying logged actions in order.
    pub fn replay_from_log(
        catalog: Arc<BossCatalog>,
        config: BattleConfig,
        entries: &[ActionEntry],
    ) -> Self {
        let mut arena = BattleArena::new(catalog, config);
        for entry in entries {
            let applied = match &entry.payload {
                ActionPayload::StartBattle { boss_id } => arena.start_battle(boss_id).map(|_| ()),
                ActionPayload::Answer {
                    selected_index,
                    correct,
                } => arena.answer(*selected_index).map(|(_, effects)| {
                    if effects.correct != *correct {
                        log::warn!(
                            "Replay judged entry {} as {} but it was logged as {}",
                            entry.seq,
                            effects.correct,
                            correct
                        );
                    }
                }),
                ActionPayload::PlayAgain => arena.play_again().map(|_| ()),
                ActionPayload::LeaveBattle => arena.leave_battle().map(|_| ()),
            };
            if let Err(e) = applied {
                log::warn!("Replay skipped entry {}: {}", entry.seq, e.message());
            }
        }
        arena
    }
}
