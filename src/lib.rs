//! Chess position tracker and move-legality engine.
//!
//! Given a board state and a piece's square, the engine computes the set of
//! squares that piece may legally move to, mutates the board when a move is
//! accepted, tracks whose turn it is, and records a move history renderable
//! as notation. The rule set is deliberately relaxed: no check or checkmate
//! detection, no castling, en passant, or promotion.
//!
//! [`game::GameState`] is the single entry point for a UI layer: it owns the
//! board, the turn flag, and the history, and exposes `piece_at`,
//! `possible_moves`, `try_move`, `end_move`, `current_turn`, and
//! `render_history`. All failures are soft (boolean returns and empty
//! sets), so callers poll return values rather than catching errors.

pub mod board;
pub mod game;
pub mod history;
pub mod position;
pub mod rules;
pub mod visualization;

pub use board::{Board, Color, Piece, PieceType};
pub use game::GameState;
pub use history::{History, MoveRecord};
pub use position::{ParseSquareError, Position};
pub use rules::MoveRule;
