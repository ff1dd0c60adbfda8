//! Damage and regeneration formulas.
//!
//! All functions are pure. Percentages are applied with integer arithmetic
//! and floored.

/// Damage a correct answer deals at the current streak.
///
/// ```text
/// damage = 15 + combo * 5
/// ```
///
/// The streak bonus is not capped.
pub fn player_damage(combo_count: u32) -> u32 {
    15u32.saturating_add(combo_count.saturating_mul(5))
}

pub const MAX_COMBO_REDUCTION: u32 = 15;
pub const MIN_BOSS_DAMAGE: u32 = 5;

/// Damage the boss deals on a wrong answer.
///
/// ```text
/// reduction = min(combo * 3, 15)
/// raw       = max(base_damage - reduction, 5)
/// damage    = practice ? floor(raw / 2) : raw
/// ```
pub fn boss_damage(base_damage: u32, combo_count: u32, is_practice: bool) -> u32 {
    let reduction = combo_count.saturating_mul(3).min(MAX_COMBO_REDUCTION);
    let raw = base_damage.saturating_sub(reduction).max(MIN_BOSS_DAMAGE);
    if is_practice {
        raw / 2
    } else {
        raw
    }
}

/// Shield regeneration per wrong answer: 5% of its max.
pub fn shield_regen(shield_max_hp: u32) -> u32 {
    (shield_max_hp as u64 * 5 / 100) as u32
}

/// Core regeneration per wrong answer: 3% of its max, 4.5% in rage mode.
pub fn core_regen(core_max_hp: u32, is_rage_mode: bool) -> u32 {
    let per_mille: u64 = if is_rage_mode { 45 } else { 30 };
    (core_max_hp as u64 * per_mille / 1000) as u32
}

/// Add `amount` to `current` without exceeding `max`. Returns the new value
/// and how much was actually gained.
pub fn regenerate(current: u32, max: u32, amount: u32) -> (u32, u32) {
    let next = current.saturating_add(amount).min(max).max(current);
    (next, next - current)
}
