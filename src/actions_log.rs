use rocket::serde::json::Json;
use rocket_okapi::openapi;

use crate::battle::action_log::ActionEntry;
use crate::battle::arena::SharedArena;

#[derive(rocket::serde::Serialize, rocket::serde::Deserialize, rocket_okapi::JsonSchema, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ActionLogResponse {
    pub entries: Vec<ActionEntry>,
    pub next_seq: Option<u64>,
    pub limit: usize,
}

#[openapi]
#[get("/actions/log?<from_seq>&<limit>&<action_type>")]
pub async fn list_actions_log(
    from_seq: Option<u64>,
    limit: Option<usize>,
    action_type: Option<String>,
    arena: &rocket::State<SharedArena>,
) -> Json<ActionLogResponse> {
    let arena = arena.lock().await;
    let mut filtered: Vec<ActionEntry> = arena
        .action_log
        .entries()
        .iter()
        .filter(|e| from_seq.map_or(true, |f| e.seq >= f))
        .filter(|e| action_type.as_ref().map_or(true, |at| e.action_type == *at))
        .cloned()
        .collect();
    let max = limit.unwrap_or(1000);
    let next_seq = filtered.get(max).map(|e| e.seq);
    filtered.truncate(max);
    Json(ActionLogResponse {
        entries: filtered,
        next_seq,
        limit: max,
    })
}
