use boss_battle_engine::rocket_initialize;

#[rocket::launch]
fn rocket() -> _ {
    rocket_initialize()
}
