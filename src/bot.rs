// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// Endpoint logic for the forager snake. The decision itself lives in `selector`;
// this file wires it to configuration, randomness and logging.
// For more info see docs.battlesnake.com

use log::{debug, info};
use serde_json::{json, Value};

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::selector::{self, Decision};
use crate::types::{Battlesnake, Board, Direction, Game};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    /// * `debug_logger` - Sink for per-turn decision records
    pub fn new(config: Config, debug_logger: DebugLogger) -> Self {
        Bot {
            config,
            debug_logger,
        }
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = &self.config.appearance;
        json!({
            "apiversion": "1",
            "author": appearance.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("{} GAME START", game.id);
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("{} GAME OVER after turn {}", game.id, turn);
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// # Returns
    /// * `Value` - JSON response containing the chosen move direction
    pub async fn get_move(&self, game: &Game, turn: &i32, board: &Board, you: &Battlesnake) -> Value {
        let decision = selector::evaluate(board, you);
        let chosen_move = self.pick(&decision, *turn);

        debug!("Turn {}: {:?}", turn, decision);
        info!(
            "{} MOVE {}: {} picked from {} (policy: {}{})",
            game.id,
            turn,
            chosen_move,
            Self::format_moves(&decision.candidates()),
            decision.policy,
            if decision.fell_back { ", fallback" } else { "" }
        );

        self.debug_logger
            .log_move(&game.id, *turn, board, you, &decision, chosen_move);

        json!({ "move": chosen_move.as_str() })
    }

    /// Draws the final move, seeded per turn when a seed is configured
    fn pick(&self, decision: &Decision, turn: i32) -> Direction {
        match self.config.selection.seed {
            Some(seed) => decision.pick(&mut selector::turn_rng(seed, turn)),
            None => decision.pick(&mut rand::rng()),
        }
    }

    fn format_moves(moves: &[Direction]) -> String {
        let labels: Vec<&str> = moves.iter().map(|m| m.as_str()).collect();
        format!("[{}]", labels.join(", "))
    }
}
