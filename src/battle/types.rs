use rocket_okapi::JsonSchema;
use serde::{Deserialize, Serialize};

/// Difficulty tier shared by bosses and questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Static boss definition from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct Boss {
    pub id: String,
    pub name: String,
    pub description: String,
    pub subject: String,
    pub topic: String,
    /// Shield plus core.
    pub max_hp: u32,
    pub base_damage: u32,
    pub difficulty: Difficulty,
    /// Halves damage dealt to the learners and the final XP reward.
    pub is_practice: bool,
    pub avatar_color: String,
    pub avatar_icon: String,
}

/// A multiple-choice quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub difficulty: Difficulty,
    pub hint: Option<String>,
}

impl BattleQuestion {
    pub fn is_correct(&self, selected_index: usize) -> bool {
        selected_index == self.correct_index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum BattleStatus {
    Active,
    Victory,
    Defeat,
}

impl BattleStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BattleStatus::Active)
    }
}

/// The mutable battle session. Built once per battle by
/// [`BattleState::new`] and advanced by [`super::resolve::apply_answer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleState {
    pub boss_shield_hp: u32,
    pub boss_shield_max_hp: u32,
    pub boss_core_hp: u32,
    pub boss_core_max_hp: u32,
    /// 1 while the shield holds, 2 once it has broken.
    pub boss_phase: u8,
    pub is_rage_mode: bool,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub partner_hp: u32,
    pub partner_max_hp: u32,
    pub combo_count: u32,
    pub current_question_index: usize,
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub is_practice_boss: bool,
    pub status: BattleStatus,
    pub battle_logs: Vec<String>,
}

/// What a single answer did, for damage/regen popups in the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct AnswerEffects {
    pub correct: bool,
    pub damage_to_boss: u32,
    pub boss_regen: u32,
    pub damage_to_allies: u32,
}

/// Payload shown on the result screen once a battle ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleResult {
    pub victory: bool,
    pub xp_earned: u32,
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub max_combo: u32,
    /// Name of the boss, present only on victory.
    pub boss_defeated: Option<String>,
    /// Rounded percentage of correct answers.
    pub accuracy: u32,
}

/// A hint for the current question and how long the UI should lock the
/// hint button afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleHint {
    pub question_id: String,
    pub hint: String,
    pub cooldown_seconds: u32,
}

/// Question as shown to the learner, without the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct QuestionView {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub difficulty: Difficulty,
    /// 1-based position within the boss's question list.
    pub number: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct CombatantView {
    pub name: String,
    pub total_xp: u64,
    pub hp: u32,
    pub max_hp: u32,
}

/// Everything the battle screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleView {
    pub boss: Boss,
    pub state: BattleState,
    pub max_combo: u32,
    pub current_question: Option<QuestionView>,
    pub player: CombatantView,
    pub partner: CombatantView,
    pub recent_logs: Vec<String>,
    pub last_effects: Option<AnswerEffects>,
}
