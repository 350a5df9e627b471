// SPDX-License-Identifier: MIT OR Apache-2.0

//! Little Go Core - Game State and Board Model
//!
//! This crate provides the collaborators the play view consumes:
//! - Go board representation with 1-based vertices
//! - Game state (stones, move history, game phase)
//! - Hex color parsing for the board palette
//! - A distance-based influence estimate for empty intersections
//! - The event bus the play view subscribes to

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod color_constants;
pub mod events;
pub mod influence;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use board::Board;
pub use events::{Computation, Event, EventBus, EventKind, SubscriptionId};
pub use influence::InfluenceMap;

/// Column letters used by Go notation. `I` is skipped to avoid confusion with `J`.
const COLUMN_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Largest board size that Go notation can express
pub const MAX_BOARD_SIZE: u8 = COLUMN_LETTERS.len() as u8;

/// Player color in a Go game (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Black player (traditionally goes first)
    Black,
    /// White player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Board intersection, 1-based.
///
/// `x` grows left to right, `y` grows bottom to top, so `(1, 1)` is the
/// lower-left corner as the board is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    /// Column, 1 = leftmost
    pub x: u8,
    /// Row, 1 = bottom
    pub y: u8,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if the vertex lies on a board of the given size
    pub fn is_valid(&self, board_size: u8) -> bool {
        (1..=board_size).contains(&self.x) && (1..=board_size).contains(&self.y)
    }

    /// Column letter in Go notation, `None` past the last expressible column
    pub fn column_letter(&self) -> Option<char> {
        let index = usize::from(self.x).checked_sub(1)?;
        COLUMN_LETTERS.get(index).map(|&c| c as char)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column_letter() {
            Some(letter) => write!(f, "{}{}", letter, self.y),
            None => write!(f, "?{}", self.y),
        }
    }
}

impl FromStr for Vertex {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidNotation(s.to_string());
        let mut chars = s.trim().chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        let x = COLUMN_LETTERS
            .iter()
            .position(|&c| c as char == letter)
            .ok_or_else(invalid)?;
        let y: u8 = chars.as_str().parse().map_err(|_| invalid())?;
        if y == 0 || y > MAX_BOARD_SIZE {
            return Err(invalid());
        }
        Ok(Vertex::new(x as u8 + 1, y))
    }
}

/// Represents a move in the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Place a stone at the specified vertex
    Place(Vertex),
    /// Pass the turn
    Pass,
    /// Resign the game
    Resign,
}

/// A move together with the player who made it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub color: Color,
    pub mv: Move,
}

/// Represents the current state of a Go game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// The size of the board (typically 9, 13, or 19)
    pub board_size: u8,
    /// Stones on the board
    pub board: Board,
    /// History of moves
    pub moves: Vec<PlayedMove>,
    /// Number of consecutive passes
    pub pass_count: u8,
}

impl GameState {
    /// Create a new game with the specified board size
    pub fn new(board_size: u8) -> Self {
        Self {
            board_size,
            board: Board::new(board_size),
            moves: Vec::new(),
            pass_count: 0,
        }
    }

    /// The player whose turn it is: black at game start, otherwise the
    /// opponent of whoever moved last
    pub fn next_player(&self) -> Color {
        self.last_move()
            .map(|played| played.color.opposite())
            .unwrap_or(Color::Black)
    }

    /// The most recent move, if any
    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.moves.last()
    }

    /// Vertex of the most recent move if it placed a stone. A pass or
    /// resignation as the most recent move leaves nothing to mark.
    pub fn last_placed_vertex(&self) -> Option<Vertex> {
        match self.last_move() {
            Some(PlayedMove { mv: Move::Place(vertex), .. }) => Some(*vertex),
            _ => None,
        }
    }

    /// Stone at a vertex
    pub fn stone_at(&self, vertex: Vertex) -> Option<Color> {
        self.board.get(vertex)
    }

    /// Client-side legality: game still running, vertex on the board and empty.
    /// Capture, ko and suicide rules belong to the engine, not to this model.
    pub fn is_legal_move(&self, vertex: Vertex) -> bool {
        self.move_is_illegal_reason(vertex).is_none()
    }

    /// Why placing a stone on `vertex` is not allowed, `None` if it is
    pub fn move_is_illegal_reason(&self, vertex: Vertex) -> Option<MoveIsIllegalReason> {
        if self.is_game_over() {
            Some(MoveIsIllegalReason::GameOver)
        } else if !vertex.is_valid(self.board_size) {
            Some(MoveIsIllegalReason::OffBoard)
        } else if self.stone_at(vertex).is_some() {
            Some(MoveIsIllegalReason::Occupied)
        } else {
            None
        }
    }

    /// Estimated influence of each player over the empty intersections
    pub fn influence(&self) -> InfluenceMap {
        InfluenceMap::estimate(&self.board)
    }

    /// Apply a move for the player to move
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let color = self.next_player();
        match mv {
            Move::Place(vertex) => {
                if !vertex.is_valid(self.board_size) {
                    return Err(GameError::InvalidVertex(vertex));
                }
                if !self.board.place(vertex, color) {
                    return Err(GameError::OccupiedPosition(vertex));
                }
                self.pass_count = 0;
            }
            Move::Pass => {
                self.pass_count += 1;
            }
            Move::Resign => {}
        }

        tracing::debug!("{:?} played {:?}", color, mv);
        self.moves.push(PlayedMove { color, mv });
        Ok(())
    }

    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        // Game ends after two consecutive passes or resignation
        self.pass_count >= 2 || matches!(self.last_move(), Some(PlayedMove { mv: Move::Resign, .. }))
    }

    /// Count stones of specified color on the board
    pub fn count_stones_for(&self, color: Color) -> usize {
        self.board.stones().filter(|(_, c)| *c == color).count()
    }
}

/// Why a stone cannot be placed on an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveIsIllegalReason {
    /// A stone already sits on the intersection
    Occupied,
    /// The vertex lies outside the board
    OffBoard,
    /// The game has ended
    GameOver,
}

impl fmt::Display for MoveIsIllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveIsIllegalReason::Occupied => "Intersection is occupied",
            MoveIsIllegalReason::OffBoard => "Intersection is not on the board",
            MoveIsIllegalReason::GameOver => "The game has ended",
        };
        f.write_str(text)
    }
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The vertex is outside the board
    #[error("Invalid vertex {0}")]
    InvalidVertex(Vertex),

    /// The position is already occupied
    #[error("Position {0} already occupied")]
    OccupiedPosition(Vertex),

    /// No more moves are accepted
    #[error("Game has ended")]
    GameOver,

    /// Text is not a vertex in Go notation
    #[error("Invalid vertex notation: {0:?}")]
    InvalidNotation(String),
}
