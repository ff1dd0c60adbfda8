//! XP to battle HP.

pub const MIN_BATTLE_HP: u32 = 50;
pub const MAX_BATTLE_HP: u32 = 300;

/// Convert a combatant's accumulated XP into battle HP.
///
/// ```text
/// hp = clamp(floor(total_xp / 10), 50, 300)
/// ```
pub fn capability(total_xp: u64) -> u32 {
    let hp = (total_xp / 10).min(MAX_BATTLE_HP as u64) as u32;
    hp.max(MIN_BATTLE_HP)
}
