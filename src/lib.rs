//! # Boss Battle Engine
//!
//! A quiz-driven boss battle served as a JSON API.
//!
//! ## Overview
//!
//! A learner and a partner fight a boss by answering quiz questions. Correct
//! answers strike the boss (shield first, then core) with damage that grows
//! with the answer streak. Wrong answers let the boss regenerate and hit back.
//! When the core falls the battle is won; when both learners fall it is lost,
//! and an XP reward is computed from the battle statistics.
//!
//! ## Architecture
//!
//! The combat rules in [`battle`] are pure functions over a serialisable
//! [`battle::types::BattleState`]. The API is built using the Rocket web
//! framework with OpenAPI documentation support. The live battle is held in a
//! thread-safe `Arc<Mutex<BattleArena>>` so answers are resolved one at a
//! time.

// Rocket makes this a bit tricky to support
#![allow(clippy::module_name_repetitions)]
#[macro_use]
extern crate rocket;

use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

pub mod action;
pub mod actions_log;
pub mod battle;
pub mod catalog;
pub mod config;
pub mod status_messages;

pub use crate::battle::arena::{BattleArena, SharedArena};
pub use crate::config::BattleConfig;

/// Initializes and configures the Rocket web server with all routes and OpenAPI documentation.
///
/// # Returns
///
/// A configured Rocket instance ready to be launched.
///
/// # Example
///
/// ```no_run
/// use boss_battle_engine::rocket_initialize;
///
/// #[rocket::main]
/// async fn main() {
///     let _ = rocket_initialize().launch().await.expect("Failed to launch rocket");
/// }
/// ```
pub fn rocket_initialize() -> rocket::Rocket<rocket::Build> {
    use crate::action::okapi_add_operation_for_play_;
    use crate::action::play;
    use crate::actions_log::list_actions_log;
    use crate::actions_log::okapi_add_operation_for_list_actions_log_;
    use crate::battle::endpoints::okapi_add_operation_for_get_battle_;
    use crate::battle::endpoints::okapi_add_operation_for_get_battle_hint_;
    use crate::battle::endpoints::okapi_add_operation_for_get_battle_result_;
    use crate::battle::endpoints::{get_battle, get_battle_hint, get_battle_result};
    use crate::catalog::endpoints::okapi_add_operation_for_get_boss_;
    use crate::catalog::endpoints::okapi_add_operation_for_get_boss_questions_;
    use crate::catalog::endpoints::okapi_add_operation_for_list_bosses_;
    use crate::catalog::endpoints::{get_boss, get_boss_questions, list_bosses};

    #[allow(clippy::no_effect_underscore_binding)]
    let _ = env_logger::try_init();

    let rocket = rocket::build();
    let config = BattleConfig::from_figment(rocket.figment());
    log::info!(
        "Battle config: player '{}' ({} XP), partner '{}' ({} XP)",
        config.player_name, config.player_xp, config.partner_name, config.partner_xp
    );

    let catalog = std::sync::Arc::new(catalog::BossCatalog::with_canonical());
    if let Err(errors) = catalog.validate() {
        for error in &errors {
            log::warn!("Boss catalog: {}", error);
        }
    }
    let arena: SharedArena = std::sync::Arc::new(rocket::futures::lock::Mutex::new(
        BattleArena::new(catalog.clone(), config),
    ));

    rocket
        .mount(
            "/",
            openapi_get_routes![
                list_bosses,
                get_boss,
                get_boss_questions,
                get_battle,
                get_battle_result,
                get_battle_hint,
                play,
                list_actions_log
            ],
        )
        .mount("/swagger", make_swagger_ui(&get_docs()))
        .manage(catalog)
        .manage(arena)
}

fn get_docs() -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: "/openapi.json".to_string(),
        ..Default::default()
    }
}
