use std::collections::HashSet;

use log::debug;

use crate::board::{Board, Color, Piece};
use crate::history::History;
use crate::position::Position;
use crate::rules::MoveRule;

/// A game in progress: the board, whose turn it is, and the move log.
///
/// This is the single mutable resource of the engine. Callers hold exactly
/// one `GameState` per game and serialize access to it; everything handed
/// out (`piece_at`, `possible_moves`, `render_history`) is a copy or
/// snapshot, never an aliased mutable handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_turn: Color,
    history: History,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// New game from the standard initial setup, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::initial())
    }

    /// Game over an arbitrary board, White to move, empty history.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            current_turn: Color::White,
            history: History::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board.get(pos)
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Squares the piece at `from` may move to. Empty when unoccupied.
    pub fn possible_moves(&self, from: Position) -> HashSet<Position> {
        match self.board.get(from) {
            Some(piece) => {
                MoveRule::for_piece(piece.piece_type).candidates(from, piece.color, &self.board)
            }
            None => HashSet::new(),
        }
    }

    /// Attempt a move. Returns false with zero state change when either
    /// selection is absent, `from` is unoccupied, `from == to`, or `to` is
    /// not among the possible moves of the piece at `from`.
    ///
    /// On success the move is recorded in history (with its captured piece
    /// and ambiguity flag) before the board mutates. The turn does NOT
    /// advance here; callers invoke [`GameState::end_move`] once they are
    /// done inspecting the post-move state.
    pub fn try_move(&mut self, from: Option<Position>, to: Option<Position>) -> bool {
        let (Some(from), Some(to)) = (from, to) else {
            debug!("move rejected: selection missing");
            return false;
        };
        let Some(piece) = self.board.get(from) else {
            debug!("move rejected: no piece at {from}");
            return false;
        };
        if from == to || !self.possible_moves(from).contains(&to) {
            debug!("move rejected: {from} -> {to} is not possible");
            return false;
        }

        let captured = self.board.get(to);
        let ambiguous = self.another_piece_could_reach(piece, to);
        self.history.push(from, to, piece, captured, ambiguous);

        self.board.set(to, Some(piece));
        self.board.set(from, None);
        debug!("moved {piece:?} {from} -> {to}");
        true
    }

    /// Hand the move over to the other side. Always toggles, no checks.
    pub fn end_move(&mut self) {
        self.current_turn = self.current_turn.opposite();
        debug!("turn passes to {:?}", self.current_turn);
    }

    /// The full move log as a single notation line.
    pub fn render_history(&self) -> String {
        self.history.render()
    }

    /// Whether two or more pieces of the mover's type and color (the mover
    /// included) can reach `to` on the current board.
    fn another_piece_could_reach(&self, mover: Piece, to: Position) -> bool {
        let reachers = self
            .board
            .positions_where(|piece| piece == mover)
            .into_iter()
            .filter(|&origin| self.possible_moves(origin).contains(&to))
            .count();
        reachers > 1
    }
}
