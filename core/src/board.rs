// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use crate::{Color, Vertex};
use serde::{Deserialize, Serialize};

/// Represents the Go board with stones and empty positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Size of the board (typically 9, 13, or 19)
    size: u8,
    /// Positions on the board, row-major from (1, 1)
    positions: Vec<Option<Color>>,
}

impl Board {
    /// Create a new empty board with the specified size
    pub fn new(size: u8) -> Self {
        let cells = (size as usize) * (size as usize);
        Self {
            size,
            positions: vec![None; cells],
        }
    }

    /// Get the stone at the specified vertex
    pub fn get(&self, vertex: Vertex) -> Option<Color> {
        if !vertex.is_valid(self.size) {
            return None;
        }

        self.positions[self.vertex_to_index(vertex)]
    }

    /// Place a stone at the specified vertex
    pub fn place(&mut self, vertex: Vertex, color: Color) -> bool {
        if !vertex.is_valid(self.size) {
            return false;
        }

        let idx = self.vertex_to_index(vertex);
        if self.positions[idx].is_some() {
            return false;
        }

        self.positions[idx] = Some(color);
        true
    }

    /// Remove a stone at the specified vertex
    pub fn remove(&mut self, vertex: Vertex) -> bool {
        if !vertex.is_valid(self.size) {
            return false;
        }

        let idx = self.vertex_to_index(vertex);
        self.positions[idx].take().is_some()
    }

    /// Get the size of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Iterate over all occupied intersections
    pub fn stones(&self) -> impl Iterator<Item = (Vertex, Color)> + '_ {
        let size = self.size as usize;
        self.positions.iter().enumerate().filter_map(move |(idx, stone)| {
            stone.map(|color| {
                let vertex = Vertex::new((idx % size) as u8 + 1, (idx / size) as u8 + 1);
                (vertex, color)
            })
        })
    }

    fn vertex_to_index(&self, vertex: Vertex) -> usize {
        (vertex.y as usize - 1) * (self.size as usize) + (vertex.x as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_and_remove() {
        let mut board = Board::new(9);
        let vertex = Vertex::new(1, 9);

        assert!(board.place(vertex, Color::White));
        assert!(!board.place(vertex, Color::Black));
        assert_eq!(board.get(vertex), Some(Color::White));

        assert!(board.remove(vertex));
        assert!(!board.remove(vertex));
        assert_eq!(board.get(vertex), None);
    }

    #[test]
    fn stones_reports_one_based_vertices() {
        let mut board = Board::new(5);
        board.place(Vertex::new(1, 1), Color::Black);
        board.place(Vertex::new(5, 2), Color::White);

        let stones: Vec<_> = board.stones().collect();
        assert_eq!(
            stones,
            vec![(Vertex::new(1, 1), Color::Black), (Vertex::new(5, 2), Color::White)]
        );
    }

    #[test]
    fn off_board_vertices_are_ignored() {
        let mut board = Board::new(9);
        assert!(!board.place(Vertex::new(0, 3), Color::Black));
        assert_eq!(board.get(Vertex::new(10, 10)), None);
    }
}
