//! Battle configuration read from Rocket's figment (`Rocket.toml` or
//! `ROCKET_BATTLE={...}` environment variables).
//!
//! ```toml
//! [default.battle]
//! player_name = "Andi Pratama"
//! player_xp = 2450
//! partner_name = "Partner AI"
//! partner_xp = 1800
//! ```

use rocket::figment::Figment;
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

/// Who fights the boss and how much XP each combatant brings.
///
/// XP values stand in for the account service; they only feed the
/// capability mapper when a battle starts.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", default)]
pub struct BattleConfig {
    pub player_name: String,
    pub player_xp: u64,
    pub partner_name: String,
    pub partner_xp: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        BattleConfig {
            player_name: "Andi Pratama".to_string(),
            player_xp: 2450,
            partner_name: "Partner AI".to_string(),
            partner_xp: 1800,
        }
    }
}

impl BattleConfig {
    /// Extract the `battle` table, falling back to defaults when it is absent
    /// or malformed.
    pub fn from_figment(figment: &Figment) -> Self {
        match figment.extract_inner::<BattleConfig>("battle") {
            Ok(config) => config,
            Err(e) => {
                if figment.contains("battle") {
                    log::warn!("Invalid battle config, using defaults: {}", e);
                } else {
                    log::debug!("No battle config found, using defaults");
                }
                BattleConfig::default()
            }
        }
    }
}
