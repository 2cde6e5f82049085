//! The B3/S23 transition rule.

/// Whether a cell is alive in the next generation, given its current state
/// and how many of its Moore neighbours are alive.
#[inline(always)]
pub const fn next_alive(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}
