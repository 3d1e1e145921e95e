use crate::position::{BOARD_SIZE, Position};

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece occupying a board cell. Plain value, owned by its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }
}

/// Back-rank layout shared by both sides, file a to h.
const BACK_RANK: [PieceType; BOARD_SIZE as usize] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The 8x8 grid of optional pieces.
///
/// Storage is indexed `(row, col)` with row 0 at Black's home side; all
/// access goes through the [`Position`] mapping so file and rank are never
/// swapped. `get` is total over strict positions and `set` performs no
/// legality check — legality lives in the move executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The standard initial setup: back ranks on ranks 0 and 7, pawns on
    /// ranks 1 and 6, everything else empty.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for file in 0..BOARD_SIZE {
            let kind = BACK_RANK[file as usize];
            board.place(file, 0, Piece::new(kind, Color::White));
            board.place(file, 1, Piece::new(PieceType::Pawn, Color::White));
            board.place(file, 6, Piece::new(PieceType::Pawn, Color::Black));
            board.place(file, 7, Piece::new(kind, Color::Black));
        }
        board
    }

    fn place(&mut self, file: u8, rank: u8, piece: Piece) {
        if let Some(pos) = Position::new(file, rank) {
            self.set(pos, Some(piece));
        }
    }

    /// Piece occupying the given square, if any.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        let (row, col) = pos.to_storage();
        self.cells[row][col]
    }

    /// Unconditional write. `None` clears the square.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        let (row, col) = pos.to_storage();
        self.cells[row][col] = piece;
    }

    /// All occupied squares whose piece satisfies the predicate, in storage
    /// scan order.
    pub fn positions_where<F>(&self, predicate: F) -> Vec<Position>
    where
        F: Fn(Piece) -> bool,
    {
        let mut positions = Vec::new();
        for row in 0..BOARD_SIZE as usize {
            for col in 0..BOARD_SIZE as usize {
                let Some(pos) = Position::from_storage(row, col) else {
                    continue;
                };
                if self.cells[row][col].is_some_and(&predicate) {
                    positions.push(pos);
                }
            }
        }
        positions
    }
}
