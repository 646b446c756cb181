// Library exports for the forager Battlesnake
// This allows the server, the replay tool and the integration tests to share the core logic

#[macro_use]
extern crate rocket;

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod geometry;
pub mod handler;
pub mod replay;
pub mod selector;
pub mod snake;
pub mod types;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};

/// Builds the Rocket instance serving the Battlesnake API for `bot`
pub fn build_rocket(bot: bot::Bot) -> Rocket<Build> {
    rocket::build()
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/github/forager-snake");
            })
        }))
        .mount(
            "/",
            routes![handler::index, handler::start, handler::get_move, handler::end],
        )
}
