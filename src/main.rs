use chess_tracker::GameState;
use chess_tracker::visualization;

fn main() {
    visualization::run_interactive_terminal(GameState::new());
}
