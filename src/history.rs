use crate::board::{Piece, PieceType};
use crate::position::Position;

/// One executed move, immutable once appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    pub moving_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// 1-based, assigned when the record is appended.
    pub sequence_number: u32,
    /// True when another same-type, same-color piece could also have
    /// reached `to`. Recorded but not yet folded into the notation.
    pub ambiguous: bool,
}

/// Append-only log of executed moves.
///
/// Records are never truncated or reordered; there is no undo. The log is
/// the source for the notation renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    moves: Vec<MoveRecord>,
    next_number: u32,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub const fn new() -> Self {
        Self {
            moves: Vec::new(),
            next_number: 1,
        }
    }

    /// Append a move, assigning it the next sequence number.
    pub fn push(
        &mut self,
        from: Position,
        to: Position,
        moving_piece: Piece,
        captured_piece: Option<Piece>,
        ambiguous: bool,
    ) {
        self.moves.push(MoveRecord {
            from,
            to,
            moving_piece,
            captured_piece,
            sequence_number: self.next_number,
            ambiguous,
        });
        self.next_number += 1;
    }

    /// All recorded moves in execution order.
    #[inline]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Render the move list as a single notation line.
    ///
    /// White moves carry the move number (`1.e4`); captures insert an `x`,
    /// with a pawn's empty piece letter replaced by its origin file.
    /// No check signs and no origin-square disambiguation are emitted.
    pub fn render(&self) -> String {
        let rendered: Vec<String> = self
            .moves
            .iter()
            .enumerate()
            .map(|(index, record)| {
                if index % 2 == 0 {
                    format!("{}.{}", index / 2 + 1, render_move(record))
                } else {
                    render_move(record)
                }
            })
            .collect();
        rendered.join(" ")
    }
}

fn render_move(record: &MoveRecord) -> String {
    let letter = piece_letter(record.moving_piece.piece_type);
    if record.captured_piece.is_some() {
        // Pawn captures are written with the origin file, e.g. "exd5".
        let prefix = match record.moving_piece.piece_type {
            PieceType::Pawn => record.from.file_char().to_string(),
            _ => letter.to_string(),
        };
        format!("{prefix}x{}", record.to)
    } else {
        format!("{letter}{}", record.to)
    }
}

const fn piece_letter(piece_type: PieceType) -> &'static str {
    match piece_type {
        PieceType::Pawn => "",
        PieceType::Knight => "N",
        PieceType::Bishop => "B",
        PieceType::Rook => "R",
        PieceType::Queen => "Q",
        PieceType::King => "K",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use test_case::test_case;

    fn pos(text: &str) -> Position {
        text.parse().expect("test square should be valid")
    }

    fn quiet(history: &mut History, from: &str, to: &str, piece_type: PieceType, color: Color) {
        history.push(pos(from), pos(to), Piece::new(piece_type, color), None, false);
    }

    fn capture(history: &mut History, from: &str, to: &str, piece_type: PieceType, color: Color) {
        let victim = Piece::new(PieceType::Pawn, color.opposite());
        history.push(
            pos(from),
            pos(to),
            Piece::new(piece_type, color),
            Some(victim),
            false,
        );
    }

    #[test]
    fn test_empty_history_renders_empty_string() {
        assert_eq!(History::new().render(), "");
        assert!(History::new().is_empty());
    }

    #[test]
    fn test_sequence_numbers_are_one_based_and_monotonic() {
        let mut history = History::new();
        quiet(&mut history, "e2", "e4", PieceType::Pawn, Color::White);
        quiet(&mut history, "e7", "e5", PieceType::Pawn, Color::Black);
        quiet(&mut history, "g1", "f3", PieceType::Knight, Color::White);

        let numbers: Vec<u32> = history.moves().iter().map(|m| m.sequence_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_render_numbers_white_moves_only() {
        let mut history = History::new();
        quiet(&mut history, "e2", "e4", PieceType::Pawn, Color::White);
        quiet(&mut history, "e7", "e5", PieceType::Pawn, Color::Black);
        quiet(&mut history, "g1", "f3", PieceType::Knight, Color::White);

        assert_eq!(history.render(), "1.e4 e5 2.Nf3");
    }

    #[test_case(PieceType::Knight, "1.Nc3")]
    #[test_case(PieceType::Bishop, "1.Bc3")]
    #[test_case(PieceType::Rook, "1.Rc3")]
    #[test_case(PieceType::Queen, "1.Qc3")]
    #[test_case(PieceType::King, "1.Kc3")]
    #[test_case(PieceType::Pawn, "1.c3")]
    fn test_piece_letters(piece_type: PieceType, expected: &str) {
        let mut history = History::new();
        quiet(&mut history, "c2", "c3", piece_type, Color::White);
        assert_eq!(history.render(), expected);
    }

    #[test]
    fn test_pawn_capture_uses_origin_file() {
        let mut history = History::new();
        capture(&mut history, "e4", "d5", PieceType::Pawn, Color::White);
        assert_eq!(history.render(), "1.exd5");
    }

    #[test]
    fn test_piece_capture_uses_piece_letter() {
        let mut history = History::new();
        quiet(&mut history, "e2", "e4", PieceType::Pawn, Color::White);
        capture(&mut history, "d8", "d2", PieceType::Queen, Color::Black);
        assert_eq!(history.render(), "1.e4 Qxd2");
    }

    #[test]
    fn test_ambiguous_flag_is_stored() {
        let mut history = History::new();
        history.push(
            pos("b1"),
            pos("c3"),
            Piece::new(PieceType::Knight, Color::White),
            None,
            true,
        );
        assert!(history.moves()[0].ambiguous);
        // The rendered text does not (yet) carry an origin qualifier.
        assert_eq!(history.render(), "1.Nc3");
    }
}
