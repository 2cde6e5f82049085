use tracing::debug;

use super::coord_set::CoordSet;
use super::generation::Generation;
use super::neighbors::Cell;
use super::rules::next_alive;

/// Generation-advance engine over a sparse alive set.
///
/// Only the candidate region is examined: every alive cell plus its Moore
/// neighbourhood. Anything further out has no alive neighbour and cannot be
/// born, so the infinite plane is never materialised.
///
/// The engine carries no simulation state. It only owns scratch sets that are
/// reused between calls, so `advance` on equal inputs gives equal outputs.
pub struct Engine {
    /// Membership index over the generation being advanced.
    alive: CoordSet,
    /// Dead neighbours already evaluated for birth this generation.
    visited: CoordSet,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            alive: CoordSet::new(),
            visited: CoordSet::new(),
        }
    }

    /// Compute the successor of `current` under B3/S23.
    ///
    /// All neighbour counts read `current` only, so births and deaths within
    /// one call never influence each other.
    pub fn advance(&mut self, current: &Generation) -> Generation {
        let population = current.population();
        if population == 0 {
            return Generation::empty();
        }

        self.alive.clear();
        self.alive.reserve_for(population);
        for &cell in current {
            self.alive.insert(cell);
        }

        self.visited.clear();
        self.visited.reserve_for(population.saturating_mul(8));

        let mut next = Vec::with_capacity(population);
        let mut survivors = 0usize;
        let mut births = 0usize;

        for &cell in current {
            let mut alive_neighbors = 0u8;
            for neighbor in cell.neighbors() {
                if self.alive.contains(neighbor) {
                    alive_neighbors += 1;
                    continue;
                }
                if !self.visited.insert(neighbor) {
                    continue;
                }
                if next_alive(false, self.alive_neighbors(neighbor)) {
                    next.push(neighbor);
                    births += 1;
                }
            }
            if next_alive(true, alive_neighbors) {
                next.push(cell);
                survivors += 1;
            }
        }

        debug!(
            population,
            candidates = self.visited.len(),
            survivors,
            births,
            "advanced generation"
        );
        Generation::from_cells(next)
    }

    /// Apply [`Engine::advance`] `n` times. `n == 0` returns a copy of `seed`.
    pub fn step_n(&mut self, seed: &Generation, n: u64) -> Generation {
        let mut current = seed.clone();
        for _ in 0..n {
            if current.is_empty() {
                break;
            }
            current = self.advance(&current);
        }
        current
    }

    #[inline]
    fn alive_neighbors(&self, cell: Cell) -> u8 {
        cell.neighbors().filter(|&n| self.alive.contains(n)).count() as u8
    }
}

/// One-shot [`Engine::advance`] with fresh scratch buffers.
pub fn advance(current: &Generation) -> Generation {
    Engine::new().advance(current)
}
