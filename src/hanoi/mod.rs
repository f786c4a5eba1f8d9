//! Towers of Hanoi: the peg/disk model, its move validator, and the
//! recursive solver.

mod solver;
mod towers;

pub use solver::{solve, total_moves, transfer};
pub use towers::{MAX_DISKS, Move, Peg, Towers};
