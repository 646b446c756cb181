// Integration tests for the Rocket HTTP layer
//
// Drives the real routes through Rocket's local blocking client.

use forager_snake::bot::Bot;
use forager_snake::config::Config;
use forager_snake::debug_logger::DebugLogger;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};

fn client() -> Client {
    let bot = Bot::new(Config::default_hardcoded(), DebugLogger::disabled());
    Client::tracked(forager_snake::build_rocket(bot)).expect("valid rocket instance")
}

fn sample_request() -> Value {
    json!({
        "game": {
            "id": "game-00fe20da-94ad-11ea-bb37",
            "ruleset": { "name": "standard", "version": "v.1.2.3" },
            "timeout": 500
        },
        "turn": 14,
        "board": {
            "height": 11,
            "width": 11,
            "food": [{ "x": 5, "y": 5 }, { "x": 9, "y": 0 }, { "x": 2, "y": 6 }],
            "hazards": [{ "x": 3, "y": 2 }],
            "snakes": [{
                "id": "snake-b67f4906-94ae-11ea-bb37",
                "name": "Another Snake",
                "health": 16,
                "body": [{ "x": 5, "y": 4 }, { "x": 5, "y": 3 }, { "x": 6, "y": 3 }, { "x": 6, "y": 2 }],
                "latency": "222",
                "head": { "x": 5, "y": 4 },
                "length": 4,
                "shout": "I'm not really sure...",
                "squad": ""
            }]
        },
        "you": {
            "id": "snake-508e96ac-94ad-11ea-bb37",
            "name": "My Snake",
            "health": 54,
            "body": [{ "x": 0, "y": 0 }, { "x": 1, "y": 0 }, { "x": 2, "y": 0 }],
            "latency": "111",
            "head": { "x": 0, "y": 0 },
            "length": 3,
            "shout": "why are we shouting??",
            "squad": ""
        }
    })
}

#[test]
fn test_index_returns_appearance() {
    let client = client();
    let response = client.get("/").dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Server"),
        Some("battlesnake/github/forager-snake")
    );

    let body: Value = response.into_json().expect("json body");
    assert_eq!(body["apiversion"], "1");
    assert_eq!(body["head"], "default");
}

#[test]
fn test_move_returns_up_for_sample_request() {
    let client = client();
    let response = client
        .post("/move")
        .header(ContentType::JSON)
        .body(sample_request().to_string())
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().expect("json body");
    assert_eq!(body, json!({ "move": "up" }));
}

#[test]
fn test_start_and_end_acknowledge() {
    let client = client();

    for path in ["/start", "/end"] {
        let response = client
            .post(path)
            .header(ContentType::JSON)
            .body(sample_request().to_string())
            .dispatch();
        assert_eq!(response.status(), Status::Ok, "{}", path);
    }
}

#[test]
fn test_malformed_move_is_rejected() {
    let client = client();
    let response = client
        .post("/move")
        .header(ContentType::JSON)
        .body(r#"{"turn": 1}"#)
        .dispatch();

    assert_ne!(response.status(), Status::Ok);
}
