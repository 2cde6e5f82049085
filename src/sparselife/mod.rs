//! Sparse-set Game of Life engine and its building blocks.

mod coord_set;
mod engine;
mod generation;
mod neighbors;
mod rules;

pub use engine::{Engine, advance};
pub use generation::Generation;
pub use neighbors::{Cell, Direction, Neighbors};
pub use rules::next_alive;
