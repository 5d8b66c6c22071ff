//! Single-game state machine

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Board, Coord, Mark, encoding::StateKey};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(mark),
            GameOutcome::Draw => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(mark) => write!(f, "{mark}"),
            GameOutcome::Draw => f.write_str("no winner"),
        }
    }
}

/// Where a game stands after the last ply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(GameOutcome::Win(mark)),
            GameStatus::Drawn => Some(GameOutcome::Draw),
        }
    }
}

/// A game in progress: board, ply counter and the state key after each ply.
///
/// Player 1 moves on even plies, player 2 on odd plies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    player1: Mark,
    player2: Mark,
    move_list: Vec<StateKey>,
    status: GameStatus,
}

impl Game {
    /// Start a game on an empty board
    pub fn new(player1: Mark, player2: Mark) -> Self {
        Self::from_board(Board::new(), player1, player2)
    }

    /// Start a game from an existing board.
    ///
    /// The ply counter starts at zero regardless of the marks already on
    /// the board, so the game ends after nine plies or a completed line.
    pub fn from_board(board: Board, player1: Mark, player2: Mark) -> Self {
        let status = match board.winner() {
            Some(mark) => GameStatus::Won(mark),
            None if board.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        };
        Game {
            board,
            player1,
            player2,
            move_list: Vec::with_capacity(9),
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn ply(&self) -> usize {
        self.move_list.len()
    }

    /// State keys recorded after every ply, in order
    pub fn move_list(&self) -> &[StateKey] {
        &self.move_list
    }

    pub fn player1(&self) -> Mark {
        self.player1
    }

    pub fn player2(&self) -> Mark {
        self.player2
    }

    /// Mark whose turn it is
    pub fn to_move(&self) -> Mark {
        if self.ply().is_multiple_of(2) {
            self.player1
        } else {
            self.player2
        }
    }

    /// Play the current player's mark at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game is terminal and
    /// [`crate::Error::InvalidMove`] for an occupied or off-board cell.
    pub fn play(&mut self, coord: Coord) -> Result<GameStatus, crate::Error> {
        if self.status.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        self.board.place(coord, self.to_move())?;
        self.move_list.push(self.board.key());

        self.status = match self.board.winner() {
            Some(mark) => GameStatus::Won(mark),
            None if self.ply() >= 9 || self.board.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        };
        Ok(self.status)
    }

    /// Consume the game, returning the final board and move list
    pub fn into_parts(self) -> (Board, Vec<StateKey>) {
        (self.board, self.move_list)
    }
}
