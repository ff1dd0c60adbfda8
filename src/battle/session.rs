use super::resolve::apply_answer;
use super::reward::build_result;
use super::types::{
    AnswerEffects, BattleHint, BattleQuestion, BattleResult, BattleState, BattleView, Boss,
    CombatantView, QuestionView,
};
use crate::config::BattleConfig;

const HINT_COOLDOWN_SECONDS: u32 = 20;
const RAGE_HINT_COOLDOWN_SECONDS: u32 = 30;

const FALLBACK_HINTS: [&str; 4] = [
    "Read every option before answering; the distractors are often close.",
    "Eliminate the answers you know are wrong first.",
    "Look for keywords in the question that point at the concept.",
    "Keep your streak going: longer combos hit harder and soften the boss's counter.",
];

/// One battle against one boss, wrapping the pure [`BattleState`] with the
/// question list and the bookkeeping the state itself does not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSession {
    pub boss: Boss,
    pub questions: Vec<BattleQuestion>,
    pub state: BattleState,
    /// Highest streak seen in this battle; the state's combo resets on a miss.
    pub max_combo: u32,
    pub result: Option<BattleResult>,
    pub last_effects: Option<AnswerEffects>,
    pub player_xp: u64,
    pub partner_xp: u64,
}

impl BattleSession {
    /// Start a battle. Fails when the boss has no questions to ask.
    pub fn start(
        boss: Boss,
        questions: Vec<BattleQuestion>,
        player_xp: u64,
        partner_xp: u64,
    ) -> Result<Self, String> {
        if questions.is_empty() {
            return Err(format!("Boss {} has no battle questions", boss.id));
        }
        let state = BattleState::new(&boss, player_xp, partner_xp);
        log::info!(
            "Battle started against '{}': shield {} core {} player {} partner {}",
            boss.id,
            state.boss_shield_hp,
            state.boss_core_hp,
            state.player_hp,
            state.partner_hp
        );
        Ok(BattleSession {
            boss,
            questions,
            state,
            max_combo: 0,
            result: None,
            last_effects: None,
            player_xp,
            partner_xp,
        })
    }

    pub fn current_question(&self) -> &BattleQuestion {
        &self.questions[self.state.current_question_index % self.questions.len()]
    }

    /// Answer the current question with the option at `selected_index`.
    pub fn answer(&mut self, selected_index: usize) -> Result<AnswerEffects, String> {
        if self.state.is_finished() {
            return Err("Battle is already over".to_string());
        }
        let question = self.current_question();
        if selected_index >= question.options.len() {
            return Err(format!(
                "Option {} does not exist for question {} ({} options)",
                selected_index,
                question.id,
                question.options.len()
            ));
        }
        let is_correct = question.is_correct(selected_index);
        Ok(self.resolve(selected_index, is_correct))
    }

    /// Feed an already-judged answer to the state machine.
    pub fn resolve(&mut self, selected_index: usize, is_correct: bool) -> AnswerEffects {
        let (next, effects) = apply_answer(&self.state, &self.boss, selected_index, is_correct);
        self.state = next;
        self.max_combo = self.max_combo.max(self.state.combo_count);
        self.last_effects = Some(effects);

        if self.state.is_finished() && self.result.is_none() {
            let result = build_result(
                matches!(self.state.status, super::types::BattleStatus::Victory),
                self.state.questions_answered,
                self.state.correct_answers,
                self.max_combo,
                &self.boss.name,
                self.state.is_practice_boss,
            );
            log::info!(
                "Battle against '{}' ended ({:?}) after {} answers, {} XP earned",
                self.boss.id,
                self.state.status,
                result.questions_answered,
                result.xp_earned
            );
            self.result = Some(result);
        }
        effects
    }

    /// Throw the current state away and fight the same boss again.
    pub fn restart(&mut self) {
        self.state = BattleState::new(&self.boss, self.player_xp, self.partner_xp);
        self.max_combo = 0;
        self.result = None;
        self.last_effects = None;
        log::info!("Battle against '{}' restarted", self.boss.id);
    }

    /// The question's own hint, or a general tip when it has none.
    pub fn hint(&self) -> BattleHint {
        let question = self.current_question();
        let hint = match &question.hint {
            Some(h) => h.clone(),
            None => {
                FALLBACK_HINTS[self.state.current_question_index % FALLBACK_HINTS.len()]
                    .to_string()
            }
        };
        BattleHint {
            question_id: question.id.clone(),
            hint,
            cooldown_seconds: if self.state.is_rage_mode {
                RAGE_HINT_COOLDOWN_SECONDS
            } else {
                HINT_COOLDOWN_SECONDS
            },
        }
    }

    pub fn view(&self, config: &BattleConfig) -> BattleView {
        let current_question = (!self.state.is_finished()).then(|| {
            let q = self.current_question();
            QuestionView {
                id: q.id.clone(),
                question: q.question.clone(),
                options: q.options.clone(),
                difficulty: q.difficulty,
                number: self.state.current_question_index % self.questions.len() + 1,
                total: self.questions.len(),
            }
        });
        let logs = &self.state.battle_logs;
        BattleView {
            boss: self.boss.clone(),
            state: self.state.clone(),
            max_combo: self.max_combo,
            current_question,
            player: CombatantView {
                name: config.player_name.clone(),
                total_xp: self.player_xp,
                hp: self.state.player_hp,
                max_hp: self.state.player_max_hp,
            },
            partner: CombatantView {
                name: config.partner_name.clone(),
                total_xp: self.partner_xp,
                hp: self.state.partner_hp,
                max_hp: self.state.partner_max_hp,
            },
            recent_logs: logs[logs.len().saturating_sub(2)..].to_vec(),
            last_effects: self.last_effects,
        }
    }
}

/// Answer data for [`simulate_battle`]: `true` picks the correct option,
/// `false` the first wrong one.
pub fn simulate_battle(
    boss: Boss,
    questions: Vec<BattleQuestion>,
    player_xp: u64,
    partner_xp: u64,
    answers: &[bool],
) -> Result<BattleSession, String> {
    let mut session = BattleSession::start(boss, questions, player_xp, partner_xp)?;
    for &correct in answers {
        if session.state.is_finished() {
            break;
        }
        let question = session.current_question();
        let selected = if correct {
            question.correct_index
        } else {
            (0..question.options.len())
                .find(|i| *i != question.correct_index)
                .ok_or_else(|| format!("Question {} has no wrong option", question.id))?
        };
        session.answer(selected)?;
    }
    Ok(session)
}
