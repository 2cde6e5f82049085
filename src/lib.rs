//! Sparse-set Conway's Game of Life (B3/S23) on the unbounded i64 plane.

pub mod life106;
pub mod seed;
pub mod simulation;
pub mod sparselife;
pub use simulation::{Simulation, SimulationConfig};
pub use sparselife::{Cell, Engine, Generation, advance};
