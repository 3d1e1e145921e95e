use std::collections::HashSet;
use std::io::{self, Write};

use crate::board::{Color, Piece, PieceType};
use crate::game::GameState;
use crate::position::{BOARD_SIZE, Position};

/// Clears the screen and moves cursor to top-left.
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive terminal interface for playing a game.
///
/// Square selection shows the candidate destinations the engine offers;
/// an accepted move is followed by the turn handover.
pub fn run_interactive_terminal(mut game: GameState) {
    let mut highlights: HashSet<Position> = HashSet::new();

    clear_screen();
    draw_interface(&game, &highlights);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        if let Err(e) = io::stdin().read_line(&mut input) {
            eprintln!("Failed to read input: {}", e);
            break;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "s" => {
                if parts.len() < 2 {
                    println!("Usage: s <square>");
                    continue;
                }
                match parts[1].parse::<Position>() {
                    Ok(square) => {
                        highlights = game.possible_moves(square);
                        clear_screen();
                        draw_interface(&game, &highlights);
                    }
                    Err(e) => println!("Invalid square: {}", e),
                }
            }
            "m" => {
                if parts.len() < 3 {
                    println!("Usage: m <from> <to>");
                    continue;
                }
                match (parts[1].parse::<Position>(), parts[2].parse::<Position>()) {
                    (Ok(from), Ok(to)) => {
                        if game.try_move(Some(from), Some(to)) {
                            game.end_move();
                            highlights.clear();
                            clear_screen();
                            draw_interface(&game, &highlights);
                        } else {
                            println!("Illegal move: {} -> {}", from, to);
                        }
                    }
                    (Err(e), _) | (_, Err(e)) => println!("Invalid square: {}", e),
                }
            }
            "h" => println!("{}", game.render_history()),
            "p" => {
                clear_screen();
                draw_interface(&game, &highlights);
            }
            "q" => break,
            _ => println!("Unknown command"),
        }
    }
}

/// Draws the complete interface: help text and board.
fn draw_interface(game: &GameState, highlights: &HashSet<Position>) {
    println!("♟️  Chess Tracker");
    println!();
    println!("Commands: s <square> | m <from> <to> | h (history) | p (refresh) | q (quit)");
    println!();
    draw_board(game, highlights);
    println!(
        "{} to move | Moves played: {:02}",
        color_name(game.current_turn()),
        game.history().len()
    );
}

/// Draws the board with rank/file borders, highlighting candidate squares.
fn draw_board(game: &GameState, highlights: &HashSet<Position>) {
    println!("╔═════════════════════════════╗");
    println!("║       Chess  Board          ║");
    println!("╠═══╦═════════════════════════╣");

    for rank in (0..BOARD_SIZE).rev() {
        print!("║ {} ║", rank + 1);
        for file in 0..BOARD_SIZE {
            if let Some(square) = Position::new(file, rank) {
                print!("{}", cell_text(game, highlights, square));
            }
        }
        println!(" ║");
    }

    println!("╠═══╬═════════════════════════╣");
    println!("║   ║ a  b  c  d  e  f  g  h  ║");
    println!("╚═══╩═════════════════════════╝");
}

fn cell_text(game: &GameState, highlights: &HashSet<Position>, square: Position) -> String {
    let glyph = match game.piece_at(square) {
        Some(piece) => piece_glyph(piece),
        None => '·',
    };
    if highlights.contains(&square) {
        format!("[{}]", glyph)
    } else {
        format!(" {} ", glyph)
    }
}

const fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

const fn piece_glyph(piece: Piece) -> char {
    match (piece.color, piece.piece_type) {
        (Color::White, PieceType::King) => '♔',
        (Color::White, PieceType::Queen) => '♕',
        (Color::White, PieceType::Rook) => '♖',
        (Color::White, PieceType::Bishop) => '♗',
        (Color::White, PieceType::Knight) => '♘',
        (Color::White, PieceType::Pawn) => '♙',
        (Color::Black, PieceType::King) => '♚',
        (Color::Black, PieceType::Queen) => '♛',
        (Color::Black, PieceType::Rook) => '♜',
        (Color::Black, PieceType::Bishop) => '♝',
        (Color::Black, PieceType::Knight) => '♞',
        (Color::Black, PieceType::Pawn) => '♟',
    }
}
