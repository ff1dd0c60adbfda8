//! Deterministic, pure-data battle resolution.
//!
//! [`apply_answer`] is the only transition on [`BattleState`]. It never
//! mutates its input; the caller swaps in the returned state.

use super::capability::capability;
use super::damage::{boss_damage, core_regen, player_damage, regenerate, shield_regen};
use super::types::{AnswerEffects, BattleState, BattleStatus, Boss};

/// Share of the boss's total HP assigned to the shield layer, in percent.
const SHIELD_SHARE_PERCENT: u64 = 30;
/// Core HP ratio at or below which rage mode latches, in percent.
const RAGE_THRESHOLD_PERCENT: u64 = 40;

/// Result of resolving one answer: the next state and what happened.
pub type AnswerTick = (BattleState, AnswerEffects);

impl BattleState {
    /// Fresh state for a battle against `boss`.
    ///
    /// The boss's HP is split 30/70 between shield and core; learner HP comes
    /// from [`capability`].
    pub fn new(boss: &Boss, player_xp: u64, partner_xp: u64) -> Self {
        let shield = (boss.max_hp as u64 * SHIELD_SHARE_PERCENT / 100) as u32;
        let core = boss.max_hp - shield;
        let player_hp = capability(player_xp);
        let partner_hp = capability(partner_xp);
        BattleState {
            boss_shield_hp: shield,
            boss_shield_max_hp: shield,
            boss_core_hp: core,
            boss_core_max_hp: core,
            boss_phase: if shield > 0 { 1 } else { 2 },
            is_rage_mode: false,
            player_hp,
            player_max_hp: player_hp,
            partner_hp,
            partner_max_hp: partner_hp,
            combo_count: 0,
            current_question_index: 0,
            questions_answered: 0,
            correct_answers: 0,
            is_practice_boss: boss.is_practice,
            status: BattleStatus::Active,
            battle_logs: Vec::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    fn core_at_rage_threshold(&self) -> bool {
        self.boss_core_hp as u64 * 100 <= self.boss_core_max_hp as u64 * RAGE_THRESHOLD_PERCENT
    }
}

/// Decide whether the battle is over. Victory wins a tie with defeat.
pub fn check_battle_end(state: &BattleState) -> Option<BattleStatus> {
    if state.boss_core_hp == 0 {
        Some(BattleStatus::Victory)
    } else if state.player_hp == 0 && state.partner_hp == 0 {
        Some(BattleStatus::Defeat)
    } else {
        None
    }
}

/// Resolve one quiz answer.
///
/// A correct answer strikes the shield while it stands, otherwise the core,
/// and extends the streak. A wrong answer lets the active layer regenerate,
/// hits the player (or the partner once the player is down) and resets the
/// streak. Finished battles are returned unchanged.
pub fn apply_answer(
    current_state: &BattleState,
    boss: &Boss,
    selected_index: usize,
    is_correct: bool,
) -> AnswerTick {
    if current_state.is_finished() {
        log::debug!(
            "Ignoring answer {} on finished battle against '{}'",
            selected_index,
            boss.id
        );
        return (current_state.clone(), AnswerEffects::default());
    }

    let mut state = current_state.clone();
    let mut effects = AnswerEffects {
        correct: is_correct,
        ..AnswerEffects::default()
    };
    state.questions_answered += 1;

    if is_correct {
        let damage = player_damage(state.combo_count);
        effects.damage_to_boss = damage;

        if state.boss_shield_hp > 0 {
            state.boss_shield_hp = state.boss_shield_hp.saturating_sub(damage);
            state.battle_logs.push(format!("Shield hit -{} HP!", damage));
            if state.boss_shield_hp == 0 {
                state.boss_phase = 2;
                state.battle_logs.push("Shield broken!".to_string());
            }
        } else {
            state.boss_core_hp = state.boss_core_hp.saturating_sub(damage);
            state.battle_logs.push(format!("Core hit -{} HP!", damage));
        }

        state.combo_count += 1;
        state.correct_answers += 1;

        if !state.is_rage_mode && state.core_at_rage_threshold() {
            state.is_rage_mode = true;
            state.battle_logs.push("RAGE MODE ACTIVATED!".to_string());
            log::info!("Boss '{}' entered rage mode", boss.id);
        }
    } else {
        let damage = boss_damage(boss.base_damage, state.combo_count, state.is_practice_boss);

        if state.boss_shield_hp > 0 {
            let (hp, gained) = regenerate(
                state.boss_shield_hp,
                state.boss_shield_max_hp,
                shield_regen(state.boss_shield_max_hp),
            );
            state.boss_shield_hp = hp;
            effects.boss_regen = gained;
            if gained > 0 {
                state.battle_logs.push(format!("Shield +{} HP", gained));
            }
        } else {
            let (hp, gained) = regenerate(
                state.boss_core_hp,
                state.boss_core_max_hp,
                core_regen(state.boss_core_max_hp, state.is_rage_mode),
            );
            state.boss_core_hp = hp;
            effects.boss_regen = gained;
            if gained > 0 {
                let suffix = if state.is_rage_mode { " (RAGE)" } else { "" };
                state.battle_logs.push(format!("Core +{} HP{}", gained, suffix));
            }
        }

        if state.player_hp > 0 {
            state.player_hp = state.player_hp.saturating_sub(damage);
            state.battle_logs.push(format!("Player -{} HP", damage));
            effects.damage_to_allies = damage;
        } else if state.partner_hp > 0 {
            state.partner_hp = state.partner_hp.saturating_sub(damage);
            state.battle_logs.push(format!("Partner -{} HP", damage));
            effects.damage_to_allies = damage;
        }

        state.combo_count = 0;
    }

    log::debug!(
        "Answer {} ({}) against '{}': boss {}+{}, allies {}+{}, combo {}",
        selected_index,
        if is_correct { "correct" } else { "wrong" },
        boss.id,
        state.boss_shield_hp,
        state.boss_core_hp,
        state.player_hp,
        state.partner_hp,
        state.combo_count
    );

    match check_battle_end(&state) {
        Some(status) => {
            state.status = status;
            state.battle_logs.push(
                match status {
                    BattleStatus::Victory => "VICTORY!",
                    _ => "DEFEAT!",
                }
                .to_string(),
            );
        }
        None => state.current_question_index += 1,
    }

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::types::Difficulty;

    fn boss(max_hp: u32, base_damage: u32, is_practice: bool) -> Boss {
        Boss {
            id: "test-boss".to_string(),
            name: "Test Boss".to_string(),
            description: String::new(),
            subject: "Testing".to_string(),
            topic: "Unit tests".to_string(),
            max_hp,
            base_damage,
            difficulty: Difficulty::Medium,
            is_practice,
            avatar_color: "slate".to_string(),
            avatar_icon: "robot".to_string(),
        }
    }

    #[test]
    fn new_state_splits_boss_hp() {
        let state = BattleState::new(&boss(600, 15, false), 2450, 1800);
        assert_eq!(state.boss_shield_hp, 180);
        assert_eq!(state.boss_core_hp, 420);
        assert_eq!(state.player_hp, 245);
        assert_eq!(state.partner_hp, 180);
        assert_eq!(state.boss_phase, 1);
        assert_eq!(state.status, BattleStatus::Active);
    }

    #[test]
    fn odd_max_hp_keeps_total() {
        let state = BattleState::new(&boss(333, 15, false), 0, 0);
        assert_eq!(state.boss_shield_max_hp, 99);
        assert_eq!(state.boss_core_max_hp, 234);
    }

    #[test]
    fn correct_answer_hits_shield_only() {
        let b = boss(600, 15, false);
        let state = BattleState::new(&b, 2450, 1800);
        let (next, effects) = apply_answer(&state, &b, 0, true);
        assert_eq!(next.boss_shield_hp, 165);
        assert_eq!(next.boss_core_hp, 420);
        assert_eq!(next.combo_count, 1);
        assert_eq!(next.current_question_index, 1);
        assert_eq!(effects.damage_to_boss, 15);
        assert_eq!(next.battle_logs, vec!["Shield hit -15 HP!".to_string()]);
    }

    #[test]
    fn overflow_damage_does_not_spill_into_core() {
        let b = boss(600, 15, false);
        let mut state = BattleState::new(&b, 2450, 1800);
        state.boss_shield_hp = 3;
        let (next, _) = apply_answer(&state, &b, 0, true);
        assert_eq!(next.boss_shield_hp, 0);
        assert_eq!(next.boss_core_hp, 420);
        assert_eq!(next.boss_phase, 2);
    }

    #[test]
    fn rage_latches_at_forty_percent() {
        let b = boss(600, 15, false);
        let mut state = BattleState::new(&b, 2450, 1800);
        state.boss_shield_hp = 0;
        state.boss_core_hp = 183;
        let (next, _) = apply_answer(&state, &b, 0, true);
        assert_eq!(next.boss_core_hp, 168);
        assert!(next.is_rage_mode);
        assert!(next.battle_logs.contains(&"RAGE MODE ACTIVATED!".to_string()));
    }

    #[test]
    fn miss_regenerates_core_faster_in_rage() {
        let b = boss(600, 15, false);
        let mut state = BattleState::new(&b, 2450, 1800);
        state.boss_shield_hp = 0;
        state.boss_core_hp = 100;
        state.is_rage_mode = true;
        let (next, effects) = apply_answer(&state, &b, 1, false);
        assert_eq!(next.boss_core_hp, 118);
        assert_eq!(effects.boss_regen, 18);
        assert!(next.battle_logs.contains(&"Core +18 HP (RAGE)".to_string()));
    }

    #[test]
    fn partner_absorbs_once_player_is_down() {
        let b = boss(600, 15, false);
        let mut state = BattleState::new(&b, 2450, 1800);
        state.player_hp = 0;
        let (next, _) = apply_answer(&state, &b, 1, false);
        assert_eq!(next.player_hp, 0);
        assert_eq!(next.partner_hp, 165);
        assert!(next.battle_logs.contains(&"Partner -15 HP".to_string()));
    }

    #[test]
    fn last_blow_on_partner_is_defeat() {
        let b = boss(600, 15, false);
        let mut state = BattleState::new(&b, 2450, 1800);
        state.player_hp = 0;
        state.partner_hp = 10;
        let (next, _) = apply_answer(&state, &b, 1, false);
        assert_eq!(next.status, BattleStatus::Defeat);
        assert_eq!(next.current_question_index, 0);
        assert_eq!(next.battle_logs.last().map(String::as_str), Some("DEFEAT!"));
    }

    #[test]
    fn victory_wins_a_tie() {
        let b = boss(600, 15, false);
        let mut state = BattleState::new(&b, 2450, 1800);
        state.boss_core_hp = 0;
        state.player_hp = 0;
        state.partner_hp = 0;
        assert_eq!(check_battle_end(&state), Some(BattleStatus::Victory));
    }
}
