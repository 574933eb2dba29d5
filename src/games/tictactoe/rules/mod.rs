//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`](super::Grid). Rules are kept apart from
//! board storage so the controller and the front ends share one definition.

pub mod tie;
pub mod win;

pub use tie::is_tie;
pub use win::{WinningLine, has_won, mark_mask, winning_line};
