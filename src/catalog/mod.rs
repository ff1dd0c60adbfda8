//! Static boss catalog and question bank.

mod canonical;
pub mod endpoints;

use crate::battle::types::{BattleQuestion, Boss};
use std::collections::HashMap;

/// Bosses by id plus each boss's ordered question list.
#[derive(Debug, Clone, Default)]
pub struct BossCatalog {
    pub bosses: Vec<Boss>,
    pub questions: HashMap<String, Vec<BattleQuestion>>,
}

impl BossCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in bosses and questions.
    pub fn with_canonical() -> Self {
        let mut catalog = BossCatalog::new();
        for (boss, questions) in canonical::entries() {
            catalog.add_boss(boss, questions);
        }
        catalog
    }

    /// Register a boss, replacing any boss with the same id.
    pub fn add_boss(&mut self, boss: Boss, questions: Vec<BattleQuestion>) {
        self.bosses.retain(|b| b.id != boss.id);
        self.questions.insert(boss.id.clone(), questions);
        self.bosses.push(boss);
    }

    pub fn get(&self, boss_id: &str) -> Option<&Boss> {
        self.bosses.iter().find(|b| b.id == boss_id)
    }

    pub fn questions_for(&self, boss_id: &str) -> Option<&[BattleQuestion]> {
        self.questions.get(boss_id).map(Vec::as_slice)
    }

    /// Lobby order: practice bosses first, then the rest, each in insertion
    /// order.
    pub fn lobby(&self) -> Vec<Boss> {
        let (mut practice, regular): (Vec<Boss>, Vec<Boss>) =
            self.bosses.iter().cloned().partition(|b| b.is_practice);
        practice.extend(regular);
        practice
    }

    /// Check every question points at one of its own options and every boss
    /// has something to ask.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        for boss in &self.bosses {
            match self.questions.get(&boss.id) {
                None => errors.push(format!("Boss {} has no question list", boss.id)),
                Some(list) if list.is_empty() => {
                    errors.push(format!("Boss {} has an empty question list", boss.id))
                }
                Some(list) => {
                    for q in list {
                        if q.correct_index >= q.options.len() {
                            errors.push(format!(
                                "Question {} of boss {} has correct index {} but {} options",
                                q.id,
                                boss.id,
                                q.correct_index,
                                q.options.len()
                            ));
                        }
                        if q.options.len() < 2 {
                            errors.push(format!(
                                "Question {} of boss {} needs at least two options",
                                q.id, boss.id
                            ));
                        }
                    }
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
