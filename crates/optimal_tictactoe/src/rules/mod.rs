//! Game rules for tic-tac-toe.
//!
//! Pure functions deciding whether a board is terminal. The search engine
//! uses them as its base case and the game uses them after every move.

pub mod draw;
pub mod terminal;
pub mod win;

pub use draw::{is_draw, is_full};
pub use terminal::{Verdict, evaluate, is_terminal};
pub use win::{LINES, Line, check_winner, winning_line};
