// Board geometry: edge thresholds and grid distances
//
// Coordinates and their neighbor offsets live in `types`; this module adds
// the board-relative queries the move selector needs.

use crate::types::{Board, Coord, Direction, MoveSet};

/// Edge thresholds derived once from the board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edges {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Edges {
    pub fn of(board: &Board) -> Self {
        Edges {
            top: board.height - 1,
            bottom: 0,
            left: 0,
            right: board.width - 1,
        }
    }

    pub fn is_top_edge(&self, coord: &Coord) -> bool {
        coord.y == self.top
    }

    pub fn is_bottom_edge(&self, coord: &Coord) -> bool {
        coord.y == self.bottom
    }

    pub fn is_left_edge(&self, coord: &Coord) -> bool {
        coord.x == self.left
    }

    pub fn is_right_edge(&self, coord: &Coord) -> bool {
        coord.x == self.right
    }

    /// Directions that leave the board from `head`, one per edge it sits on
    pub fn exit_directions(&self, head: &Coord) -> MoveSet {
        let mut exits = MoveSet::new();
        if self.is_top_edge(head) {
            exits.insert(Direction::Up);
        }
        if self.is_bottom_edge(head) {
            exits.insert(Direction::Down);
        }
        if self.is_left_edge(head) {
            exits.insert(Direction::Left);
        }
        if self.is_right_edge(head) {
            exits.insert(Direction::Right);
        }
        exits
    }
}

/// Calculates Manhattan distance between two coordinates
pub fn manhattan_distance(a: &Coord, b: &Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: i32, height: i32) -> Board {
        Board {
            height,
            width,
            food: vec![],
            snakes: vec![],
            hazards: vec![],
        }
    }

    #[test]
    fn test_edges_from_dimensions() {
        let edges = Edges::of(&board(11, 7));
        assert_eq!(edges.top, 6);
        assert_eq!(edges.bottom, 0);
        assert_eq!(edges.left, 0);
        assert_eq!(edges.right, 10);
    }

    #[test]
    fn test_each_edge_test_checks_one_axis() {
        let edges = Edges::of(&board(11, 11));
        assert!(edges.is_top_edge(&Coord::new(5, 10)));
        assert!(edges.is_bottom_edge(&Coord::new(5, 0)));
        assert!(edges.is_left_edge(&Coord::new(0, 5)));
        assert!(edges.is_right_edge(&Coord::new(10, 5)));
        assert!(!edges.is_top_edge(&Coord::new(10, 5)));
        assert!(!edges.is_left_edge(&Coord::new(5, 0)));
    }

    #[test]
    fn test_exit_directions_in_corner() {
        let edges = Edges::of(&board(11, 11));
        let exits = edges.exit_directions(&Coord::new(0, 0));
        assert_eq!(exits, MoveSet::from([Direction::Down, Direction::Left]));
    }

    #[test]
    fn test_exit_directions_in_center_is_empty() {
        let edges = Edges::of(&board(11, 11));
        assert!(edges.exit_directions(&Coord::new(5, 5)).is_empty());
    }

    #[test]
    fn test_single_cell_board_exits_everywhere() {
        let edges = Edges::of(&board(1, 1));
        assert_eq!(edges.exit_directions(&Coord::new(0, 0)).len(), 4);
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(&Coord::new(0, 0), &Coord::new(9, 0)), 9);
        assert_eq!(manhattan_distance(&Coord::new(0, 0), &Coord::new(5, 5)), 10);
        assert_eq!(manhattan_distance(&Coord::new(3, 7), &Coord::new(1, 2)), 7);
        assert_eq!(manhattan_distance(&Coord::new(4, 4), &Coord::new(4, 4)), 0);
    }
}
