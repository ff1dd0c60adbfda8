use rocket::response::status::NotFound;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use std::sync::Arc;

use super::BossCatalog;
use crate::battle::types::{BattleQuestion, Boss};
use crate::status_messages::{new_status, Status};

/// Bosses in lobby order: practice first.
#[openapi]
#[get("/bosses")]
pub async fn list_bosses(catalog: &State<Arc<BossCatalog>>) -> Json<Vec<Boss>> {
    Json(catalog.lobby())
}

#[openapi]
#[get("/bosses/<boss_id>")]
pub async fn get_boss(
    catalog: &State<Arc<BossCatalog>>,
    boss_id: &str,
) -> Result<Json<Boss>, NotFound<Json<Status>>> {
    match catalog.get(boss_id) {
        Some(boss) => Ok(Json(boss.clone())),
        None => Err(NotFound(new_status(format!("Boss {} not found", boss_id)))),
    }
}

/// The boss's question bank, answers included.
#[openapi]
#[get("/bosses/<boss_id>/questions")]
pub async fn get_boss_questions(
    catalog: &State<Arc<BossCatalog>>,
    boss_id: &str,
) -> Result<Json<Vec<BattleQuestion>>, NotFound<Json<Status>>> {
    match catalog.questions_for(boss_id) {
        Some(questions) => Ok(Json(questions.to_vec())),
        None => Err(NotFound(new_status(format!("Boss {} not found", boss_id)))),
    }
}
