// Per-turn view of our own snake
//
// Built fresh from each /move snapshot and dropped once the move is chosen.

use crate::types::{Battlesnake, Coord, Direction, MoveSet};

/// Head, body and health of the acting snake
#[derive(Debug, Clone)]
pub struct SnakeState<'a> {
    pub head: Coord,
    pub body: &'a [Coord],
    pub health: i32,
}

impl<'a> SnakeState<'a> {
    pub fn from_snapshot(you: &'a Battlesnake) -> Self {
        SnakeState {
            head: you.head,
            body: &you.body,
            health: you.health,
        }
    }

    /// Body segment directly behind the head, if the snake has one
    pub fn neck(&self) -> Option<Coord> {
        self.body.get(1).copied()
    }

    /// Direction that would reverse onto the neck.
    ///
    /// `None` for a length-1 snake or when the neck is stacked on the head,
    /// as happens on the first turns of a game.
    pub fn neck_direction(&self) -> Option<Direction> {
        let neck = self.neck()?;
        if neck == self.head {
            return None;
        }

        self.head
            .neighbors()
            .into_iter()
            .find(|(_, next)| *next == neck)
            .map(|(dir, _)| dir)
    }

    /// Every direction whose target tile is occupied by our own body, neck included
    pub fn self_collision_directions(&self) -> MoveSet {
        self.head
            .neighbors()
            .into_iter()
            .filter(|(_, next)| self.body.contains(next))
            .map(|(dir, _)| dir)
            .collect()
    }
}
