//! End-to-end battle scenarios against the pure engine.

use boss_battle_engine::battle::types::{BattleState, BattleStatus, Boss, Difficulty};
use boss_battle_engine::battle::{apply_answer, battle_xp, boss_damage, simulate_battle};
use boss_battle_engine::catalog::BossCatalog;

fn boss(max_hp: u32, base_damage: u32, is_practice: bool) -> Boss {
    Boss {
        id: "scenario-boss".to_string(),
        name: "Scenario Boss".to_string(),
        description: "Used by the scenario tests".to_string(),
        subject: "Mathematics".to_string(),
        topic: "Fractions".to_string(),
        max_hp,
        base_damage,
        difficulty: Difficulty::Medium,
        is_practice,
        avatar_color: "indigo".to_string(),
        avatar_icon: "calculator".to_string(),
    }
}

#[test]
fn three_correct_answers_chip_the_shield() {
    let b = boss(600, 15, false);
    let mut state = BattleState::new(&b, 2450, 1800);
    assert_eq!((state.boss_shield_hp, state.boss_core_hp), (180, 420));

    let mut dealt = Vec::new();
    for _ in 0..3 {
        let (next, effects) = apply_answer(&state, &b, 0, true);
        dealt.push(effects.damage_to_boss);
        state = next;
    }

    assert_eq!(dealt, vec![15, 20, 25]);
    assert_eq!(state.boss_shield_hp, 120);
    assert_eq!(state.boss_core_hp, 420);
    assert_eq!(state.combo_count, 3);
}

#[test]
fn miss_at_full_shield_clamps_regen() {
    let b = boss(600, 15, false);
    let state = BattleState::new(&b, 2450, 1800);
    let (next, effects) = apply_answer(&state, &b, 2, false);

    assert_eq!(effects.damage_to_allies, 15);
    assert_eq!(effects.boss_regen, 0);
    assert_eq!(next.boss_shield_hp, 180);
    assert_eq!(next.player_hp, state.player_hp - 15);
    assert_eq!(next.partner_hp, state.partner_hp);
    assert_eq!(next.battle_logs, vec!["Player -15 HP".to_string()]);
}

#[test]
fn practice_boss_hits_for_half() {
    let b = boss(600, 15, true);
    let mut state = BattleState::new(&b, 2450, 1800);
    state.combo_count = 2;
    assert_eq!(boss_damage(15, 2, true), 4);

    let (next, effects) = apply_answer(&state, &b, 1, false);
    assert_eq!(effects.damage_to_allies, 4);
    assert_eq!(next.player_hp, state.player_hp - 4);
    assert_eq!(next.combo_count, 0);
}

#[test]
fn reward_for_victory() {
    assert_eq!(battle_xp(true, 8, 6, false), 210);
    assert_eq!(battle_xp(true, 8, 6, true), 105);
}

#[test]
fn perfect_run_defeats_the_algebra_titan() {
    let catalog = BossCatalog::with_canonical();
    let titan = catalog.get("algebra-titan").cloned().expect("boss");
    let questions = catalog.questions_for("algebra-titan").expect("questions").to_vec();

    let session = simulate_battle(titan, questions, 2450, 1800, &[true; 40]).expect("simulate");

    // shield 180 breaks on the seventh hit (15..=45), core 420 takes 50..=80
    assert_eq!(session.state.status, BattleStatus::Victory);
    assert_eq!(session.state.questions_answered, 14);
    assert_eq!(session.state.boss_phase, 2);
    assert!(session.state.is_rage_mode);
    let result = session.result.expect("result");
    assert_eq!(result.max_combo, 14);
    assert_eq!(result.xp_earned, 100 + 140 + 4 * 15);
    assert_eq!(result.accuracy, 100);
    assert_eq!(
        session.state.battle_logs.last().map(String::as_str),
        Some("VICTORY!")
    );
}

#[test]
fn constant_misses_wear_down_player_then_partner() {
    let b = boss(600, 15, false);
    let questions = BossCatalog::with_canonical()
        .questions_for("algebra-titan")
        .expect("questions")
        .to_vec();

    // player 245 HP needs 17 hits of 15, partner 180 HP needs 12
    let session = simulate_battle(b, questions, 2450, 1800, &[false; 100]).expect("simulate");

    assert_eq!(session.state.status, BattleStatus::Defeat);
    assert_eq!(session.state.questions_answered, 29);
    assert_eq!(session.state.player_hp, 0);
    assert_eq!(session.state.partner_hp, 0);
    assert_eq!(session.state.boss_shield_hp, 180);
    let result = session.result.expect("result");
    assert!(!result.victory);
    assert_eq!(result.xp_earned, 25);
    assert_eq!(result.boss_defeated, None);
}

#[test]
fn answers_after_the_end_change_nothing() {
    let b = boss(100, 15, false);
    let mut state = BattleState::new(&b, 0, 0);
    state.boss_shield_hp = 0;
    state.boss_core_hp = 10;
    let (won, _) = apply_answer(&state, &b, 0, true);
    assert_eq!(won.status, BattleStatus::Victory);

    let (after_hit, effects) = apply_answer(&won, &b, 0, true);
    let (after_miss, _) = apply_answer(&won, &b, 1, false);
    assert_eq!(after_hit, won);
    assert_eq!(after_miss, won);
    assert_eq!(effects.damage_to_boss, 0);
}
