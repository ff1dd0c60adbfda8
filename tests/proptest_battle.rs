// Property-based tests over the battle formulas and the answer reducer
use boss_battle_engine::battle::types::{BattleState, BattleStatus, Boss, Difficulty};
use boss_battle_engine::battle::{apply_answer, boss_damage, capability, player_damage};
use proptest::prelude::*;

fn boss(max_hp: u32, base_damage: u32, is_practice: bool) -> Boss {
    Boss {
        id: "prop-boss".to_string(),
        name: "Prop Boss".to_string(),
        description: String::new(),
        subject: "Science".to_string(),
        topic: "Properties".to_string(),
        max_hp,
        base_damage,
        difficulty: Difficulty::Hard,
        is_practice,
        avatar_color: "red".to_string(),
        avatar_icon: "flame".to_string(),
    }
}

fn assert_bounds(state: &BattleState) -> Result<(), TestCaseError> {
    prop_assert!(state.boss_shield_hp <= state.boss_shield_max_hp);
    prop_assert!(state.boss_core_hp <= state.boss_core_max_hp);
    prop_assert!(state.player_hp <= state.player_max_hp);
    prop_assert!(state.partner_hp <= state.partner_max_hp);
    Ok(())
}

proptest! {
    #[test]
    fn capability_is_bounded_and_monotonic(a in 0u64..100_000, b in 0u64..100_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!((50..=300).contains(&capability(lo)));
        prop_assert!(capability(lo) <= capability(hi));
    }

    #[test]
    fn player_damage_is_linear(combo in 0u32..10_000) {
        prop_assert_eq!(player_damage(combo), 15 + 5 * combo);
    }

    #[test]
    fn boss_damage_has_floor_and_shrinks_with_combo(
        base in 0u32..500,
        combo in 0u32..10,
        practice in any::<bool>()
    ) {
        let dmg = boss_damage(base, combo, practice);
        let floor = if practice { 2 } else { 5 };
        prop_assert!(dmg >= floor);
        prop_assert!(boss_damage(base, combo + 1, practice) <= dmg);
        if combo >= 5 {
            prop_assert_eq!(boss_damage(base, combo + 1, practice), dmg);
        }
    }

    #[test]
    fn reducer_keeps_invariants(
        max_hp in 0u32..2_000,
        base in 0u32..60,
        practice in any::<bool>(),
        player_xp in 0u64..5_000,
        partner_xp in 0u64..5_000,
        answers in prop::collection::vec(any::<bool>(), 0..120)
    ) {
        let b = boss(max_hp, base, practice);
        let mut state = BattleState::new(&b, player_xp, partner_xp);
        prop_assert_eq!(state.boss_shield_max_hp + state.boss_core_max_hp, max_hp);

        for (i, correct) in answers.iter().enumerate() {
            let before = state.clone();
            let (next, effects) = apply_answer(&before, &b, i % 4, *correct);
            assert_bounds(&next)?;

            if before.status != BattleStatus::Active {
                prop_assert_eq!(&next, &before);
            } else if *correct {
                // never both layers in one strike
                let shield_changed = next.boss_shield_hp != before.boss_shield_hp;
                let core_changed = next.boss_core_hp != before.boss_core_hp;
                prop_assert!(!(shield_changed && core_changed));
                if before.boss_shield_hp > 0 {
                    prop_assert!(!core_changed);
                }
                prop_assert_eq!(next.combo_count, before.combo_count + 1);
                prop_assert_eq!(effects.damage_to_boss, player_damage(before.combo_count));
            } else {
                prop_assert_eq!(next.combo_count, 0);
                if before.player_hp > 0 {
                    prop_assert_eq!(next.partner_hp, before.partner_hp);
                }
            }

            if before.is_rage_mode {
                prop_assert!(next.is_rage_mode);
            }
            if before.boss_phase == 2 {
                prop_assert_eq!(next.boss_phase, 2);
            }
            prop_assert!(next.battle_logs.starts_with(&before.battle_logs));

            // same input, same output
            let (again, _) = apply_answer(&before, &b, i % 4, *correct);
            prop_assert_eq!(&again, &next);

            state = next;
        }
    }
}
