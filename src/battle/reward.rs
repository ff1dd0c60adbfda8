//! XP payout for a finished battle.

use super::types::BattleResult;

const VICTORY_XP: u32 = 100;
const DEFEAT_XP: u32 = 25;
const XP_PER_CORRECT: u32 = 10;
const XP_PER_THREE_COMBO: u32 = 15;

/// XP earned from a battle.
///
/// ```text
/// xp  = victory ? 100 : 25
/// xp += correct_answers * 10
/// xp += floor(max_combo / 3) * 15
/// xp  = practice ? floor(xp / 2) : xp
/// ```
pub fn battle_xp(victory: bool, correct_answers: u32, max_combo: u32, is_practice: bool) -> u32 {
    let base = if victory { VICTORY_XP } else { DEFEAT_XP };
    let xp = base
        .saturating_add(correct_answers.saturating_mul(XP_PER_CORRECT))
        .saturating_add((max_combo / 3).saturating_mul(XP_PER_THREE_COMBO));
    if is_practice {
        xp / 2
    } else {
        xp
    }
}

/// Rounded percentage of correct answers; 0 when nothing was answered.
pub fn accuracy(correct_answers: u32, questions_answered: u32) -> u32 {
    if questions_answered == 0 {
        return 0;
    }
    let correct = correct_answers as u64 * 100;
    let answered = questions_answered as u64;
    ((correct + answered / 2) / answered) as u32
}

/// Build the result screen payload and fill in the XP reward.
pub fn build_result(
    victory: bool,
    questions_answered: u32,
    correct_answers: u32,
    max_combo: u32,
    boss_name: &str,
    is_practice: bool,
) -> BattleResult {
    BattleResult {
        victory,
        xp_earned: battle_xp(victory, correct_answers, max_combo, is_practice),
        questions_answered,
        correct_answers,
        max_combo,
        boss_defeated: victory.then(|| boss_name.to_string()),
        accuracy: accuracy(correct_answers, questions_answered),
    }
}
