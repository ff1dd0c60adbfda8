use either::{Either, Left, Right};
use rocket::response::status::{BadRequest, NotFound};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::State;
use rocket_okapi::{openapi, JsonSchema};

use crate::battle::action_log::ActionEntry;
use crate::battle::arena::{ArenaError, SharedArena};
use crate::battle::types::AnswerEffects;
use crate::status_messages::{new_status, Status};

/// Player actions
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema, Hash)]
#[serde(crate = "rocket::serde", tag = "action_type")]
pub enum BattleActions {
    StartBattle { boss_id: String },
    Answer { selected_index: usize },
    PlayAgain,
    LeaveBattle,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    pub entry: ActionEntry,
    /// Present for answers.
    pub effects: Option<AnswerEffects>,
}

pub type ActionError = Either<NotFound<Json<Status>>, BadRequest<Json<Status>>>;

fn to_response_error(error: ArenaError) -> ActionError {
    log::warn!("Action rejected: {}", error.message());
    match error {
        ArenaError::NotFound(message) => Left(NotFound(new_status(message))),
        ArenaError::Rejected(message) => Right(BadRequest(new_status(message))),
    }
}

#[openapi]
#[post("/action", format = "json", data = "<battle_action>")]
pub async fn play(
    arena: &State<SharedArena>,
    battle_action: Json<BattleActions>,
) -> Result<(rocket::http::Status, Json<ActionResponse>), ActionError> {
    let mut arena = arena.lock().await;

    let (entry, effects) = match battle_action.0 {
        BattleActions::StartBattle { boss_id } => arena
            .start_battle(&boss_id)
            .map(|entry| (entry, None))
            .map_err(to_response_error)?,
        BattleActions::Answer { selected_index } => arena
            .answer(selected_index)
            .map(|(entry, effects)| (entry, Some(effects)))
            .map_err(to_response_error)?,
        BattleActions::PlayAgain => arena
            .play_again()
            .map(|entry| (entry, None))
            .map_err(to_response_error)?,
        BattleActions::LeaveBattle => arena
            .leave_battle()
            .map(|entry| (entry, None))
            .map_err(to_response_error)?,
    };

    Ok((
        rocket::http::Status::Created,
        Json(ActionResponse { entry, effects }),
    ))
}
