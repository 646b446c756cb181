// Move selection for a single turn
//
// The pipeline runs leaves first:
// 1. Lethal moves: board edges, reversing onto the neck, running into our own body
// 2. Legal moves: everything that is not lethal
// 3. Nearest food by Manhattan distance
// 4. Health-gated food policy: seek food when health would run out on the way,
//    otherwise avoid stepping onto food
// 5. Uniform random pick among the recommended moves
//
// Nothing here is kept between turns.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::{manhattan_distance, Edges};
use crate::snake::SnakeState;
use crate::types::{Battlesnake, Board, Coord, Direction};

pub use crate::types::MoveSet;

/// Which food rule was applied this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodPolicy {
    /// No food on the board
    Unconstrained,
    /// Health does not exceed the distance to the nearest food
    Seek,
    /// Health comfortably exceeds the distance; stay off food tiles
    Avoid,
}

impl fmt::Display for FoodPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FoodPolicy::Unconstrained => "unconstrained",
            FoodPolicy::Seek => "seek",
            FoodPolicy::Avoid => "avoid",
        };
        f.write_str(label)
    }
}

/// Closest food item to the head and its city-block distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestFood {
    pub coord: Coord,
    pub distance: i32,
}

/// Everything the selector derived for one turn
#[derive(Debug, Clone)]
pub struct Decision {
    pub lethal: MoveSet,
    pub legal: MoveSet,
    pub nearest_food: Option<NearestFood>,
    pub policy: FoodPolicy,
    pub recommended: MoveSet,
    /// The food rule filtered out every legal move and was dropped
    pub fell_back: bool,
}

impl Decision {
    /// Moves the final pick is drawn from. Never empty: when no move is legal
    /// the snake still has to answer, so all four directions are returned.
    pub fn candidates(&self) -> Vec<Direction> {
        if self.recommended.is_empty() {
            Direction::all().to_vec()
        } else {
            self.recommended.iter().copied().collect()
        }
    }

    /// Picks uniformly among the candidates
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        self.candidates()
            .choose(rng)
            .copied()
            .unwrap_or(Direction::Up)
    }
}

/// Directions that kill the snake this turn: edge exits, the neck, and own body
pub fn lethal_moves(board: &Board, snake: &SnakeState) -> MoveSet {
    let mut lethal = Edges::of(board).exit_directions(&snake.head);
    lethal.extend(snake.neck_direction());
    lethal.extend(snake.self_collision_directions());
    lethal
}

/// All four directions minus the lethal ones. May be empty.
pub fn legal_moves(lethal: &MoveSet) -> MoveSet {
    Direction::all()
        .into_iter()
        .filter(|dir| !lethal.contains(dir))
        .collect()
}

/// Closest food by Manhattan distance. Ties keep the first food in board order.
pub fn nearest_food(head: &Coord, food: &[Coord]) -> Option<NearestFood> {
    food.iter()
        .map(|coord| NearestFood {
            coord: *coord,
            distance: manhattan_distance(head, coord),
        })
        .min_by_key(|nearest| nearest.distance)
}

/// Chooses the food rule. Health drops by one per turn, so health is the
/// number of turns we can go without eating.
pub fn food_policy(health: i32, nearest: Option<&NearestFood>) -> FoodPolicy {
    match nearest {
        None => FoodPolicy::Unconstrained,
        Some(food) if health <= food.distance => FoodPolicy::Seek,
        Some(_) => FoodPolicy::Avoid,
    }
}

/// Directions that close the gap to `target`, at most one per axis
pub fn food_directions(head: &Coord, target: &Coord) -> MoveSet {
    let mut dirs = MoveSet::new();

    if head.x < target.x {
        dirs.insert(Direction::Right);
    } else if head.x > target.x {
        dirs.insert(Direction::Left);
    }

    if head.y < target.y {
        dirs.insert(Direction::Up);
    } else if head.y > target.y {
        dirs.insert(Direction::Down);
    }

    dirs
}

/// Directions whose target tile holds food
pub fn food_adjacent_directions(head: &Coord, food: &[Coord]) -> MoveSet {
    head.neighbors()
        .into_iter()
        .filter(|(_, next)| food.contains(next))
        .map(|(dir, _)| dir)
        .collect()
}

/// Runs the full pipeline for our snake on this board
pub fn evaluate(board: &Board, you: &Battlesnake) -> Decision {
    let snake = SnakeState::from_snapshot(you);

    let lethal = lethal_moves(board, &snake);
    let legal = legal_moves(&lethal);
    let nearest = nearest_food(&snake.head, &board.food);
    let policy = food_policy(snake.health, nearest.as_ref());

    let filtered = match (policy, nearest.as_ref()) {
        (FoodPolicy::Seek, Some(food)) => {
            let towards = food_directions(&snake.head, &food.coord);
            Some(legal.intersection(&towards).copied().collect::<MoveSet>())
        }
        (FoodPolicy::Avoid, _) => {
            let onto_food = food_adjacent_directions(&snake.head, &board.food);
            Some(legal.difference(&onto_food).copied().collect::<MoveSet>())
        }
        _ => None,
    };

    let (recommended, fell_back) = match filtered {
        Some(moves) if moves.is_empty() => (legal.clone(), true),
        Some(moves) => (moves, false),
        None => (legal.clone(), false),
    };

    Decision {
        lethal,
        legal,
        nearest_food: nearest,
        policy,
        recommended,
        fell_back,
    }
}

/// RNG for a configured seed. The turn is mixed in so consecutive turns
/// do not repeat the same draw.
pub fn turn_rng(seed: u64, turn: i32) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(turn as u64))
}

/// Evaluates the board and picks one move
pub fn choose_move<R: Rng + ?Sized>(board: &Board, you: &Battlesnake, rng: &mut R) -> Direction {
    evaluate(board, you).pick(rng)
}
