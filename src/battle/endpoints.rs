use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use super::arena::SharedArena;
use super::types::{BattleHint, BattleResult, BattleView};

/// The live battle, or `null` when none is running.
#[openapi]
#[get("/battle")]
pub async fn get_battle(arena: &State<SharedArena>) -> Json<Option<BattleView>> {
    let arena = arena.lock().await;
    Json(
        arena
            .current
            .as_ref()
            .map(|session| session.view(&arena.config)),
    )
}

/// Result of the most recently finished battle.
#[openapi]
#[get("/battle/result")]
pub async fn get_battle_result(arena: &State<SharedArena>) -> Json<Option<BattleResult>> {
    Json(arena.lock().await.last_result.clone())
}

#[openapi]
#[get("/battle/hint")]
pub async fn get_battle_hint(arena: &State<SharedArena>) -> Json<Option<BattleHint>> {
    let arena = arena.lock().await;
    Json(
        arena
            .current
            .as_ref()
            .filter(|session| !session.state.is_finished())
            .map(|session| session.hint()),
    )
}
