//! Boss battle rules and the live battle session.
//!
//! The leaves ([`capability`], [`damage`], [`reward`]) are pure formulas;
//! [`resolve`] is the state machine built on them; [`session`] and [`arena`]
//! add question selection, streak bookkeeping and the action log.

pub mod action_log;
pub mod arena;
pub mod capability;
pub mod damage;
pub mod endpoints;
pub mod resolve;
pub mod reward;
pub mod session;
pub mod types;

pub use arena::{ArenaError, BattleArena};
pub use capability::capability;
pub use damage::{boss_damage, player_damage};
pub use resolve::{apply_answer, check_battle_end};
pub use reward::battle_xp;
pub use session::{simulate_battle, BattleSession};
