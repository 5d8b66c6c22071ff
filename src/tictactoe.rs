//! Tic-Tac-Toe board, win detection, state encoding and game flow

pub mod board;
pub mod encoding;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Coord, Mark};
pub use encoding::{STATE_COUNT, StateKey};
pub use game::{Game, GameOutcome, GameStatus};
pub use lines::{LineAnalyzer, WINNING_LINES};
