// SPDX-License-Identifier: MIT OR Apache-2.0

//! Influence estimate for the empty intersections of a board
//!
//! Every stone radiates influence that fades linearly with Manhattan
//! distance and stops after [`INFLUENCE_RADIUS`] steps. Black counts
//! positive, white negative. Occupied intersections carry no influence.

use crate::board::Board;
use crate::{Color, Vertex};

/// Farthest distance a stone's influence reaches
pub const INFLUENCE_RADIUS: u8 = 3;

/// Per-intersection influence in `-1.0..=1.0`, positive for black
#[derive(Debug, Clone, PartialEq)]
pub struct InfluenceMap {
    size: u8,
    values: Vec<f32>,
}

impl InfluenceMap {
    /// Estimate influence from the stones on `board`
    pub fn estimate(board: &Board) -> Self {
        let size = board.size();
        let mut map = Self {
            size,
            values: vec![0.0; usize::from(size) * usize::from(size)],
        };

        let reach = i32::from(INFLUENCE_RADIUS);
        let falloff = (reach + 1) as f32;
        for (stone, color) in board.stones() {
            let sign = match color {
                Color::Black => 1.0,
                Color::White => -1.0,
            };
            for dy in -reach..=reach {
                for dx in -reach..=reach {
                    let distance = dx.abs() + dy.abs();
                    if distance > reach {
                        continue;
                    }
                    let Some(index) = map.index(i32::from(stone.x) + dx, i32::from(stone.y) + dy) else {
                        continue;
                    };
                    map.values[index] += sign * (falloff - distance as f32) / falloff;
                }
            }
        }

        for (stone, _) in board.stones() {
            if let Some(index) = map.index(i32::from(stone.x), i32::from(stone.y)) {
                map.values[index] = 0.0;
            }
        }
        for value in &mut map.values {
            *value = value.clamp(-1.0, 1.0);
        }
        map
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Influence at `vertex`, 0 off the board
    pub fn get(&self, vertex: Vertex) -> f32 {
        self.index(i32::from(vertex.x), i32::from(vertex.y))
            .map_or(0.0, |index| self.values[index])
    }

    /// Player with the upper hand at `vertex` and by how much, `None` if neither
    pub fn dominant(&self, vertex: Vertex) -> Option<(Color, f32)> {
        let value = self.get(vertex);
        if value > 0.0 {
            Some((Color::Black, value))
        } else if value < 0.0 {
            Some((Color::White, -value))
        } else {
            None
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let size = i32::from(self.size);
        if (1..=size).contains(&x) && (1..=size).contains(&y) {
            Some(((y - 1) * size + (x - 1)) as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_influence() {
        let map = InfluenceMap::estimate(&Board::new(9));
        assert_eq!(map.dominant(Vertex::new(5, 5)), None);
    }

    #[test]
    fn influence_fades_with_distance() {
        let mut board = Board::new(9);
        board.place(Vertex::new(5, 5), Color::Black);
        let map = InfluenceMap::estimate(&board);

        assert_eq!(map.get(Vertex::new(5, 5)), 0.0);
        assert_eq!(map.get(Vertex::new(5, 6)), 0.75);
        assert_eq!(map.get(Vertex::new(6, 6)), 0.5);
        assert_eq!(map.get(Vertex::new(5, 8)), 0.25);
        assert_eq!(map.get(Vertex::new(5, 9)), 0.0);
    }

    #[test]
    fn opposing_stones_cancel_and_clamp() {
        let mut board = Board::new(9);
        board.place(Vertex::new(3, 5), Color::Black);
        board.place(Vertex::new(7, 5), Color::White);
        board.place(Vertex::new(1, 1), Color::White);
        board.place(Vertex::new(2, 2), Color::White);
        let map = InfluenceMap::estimate(&board);

        assert_eq!(map.dominant(Vertex::new(5, 5)), None);
        assert_eq!(map.dominant(Vertex::new(4, 5)), Some((Color::Black, 0.5)));
        assert_eq!(map.get(Vertex::new(1, 2)), -1.0);
        assert_eq!(map.get(Vertex::new(20, 20)), 0.0);
    }
}
