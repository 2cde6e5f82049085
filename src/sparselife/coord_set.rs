//! Scratch [`Cell`] set owned by the engine.
//!
//! [`super::Engine::advance`] keeps two of these: one answers "is this cell
//! alive in the current generation", the other records which dead neighbours
//! were already tested for birth so each is evaluated once. Both are emptied
//! at the start of every generation by bumping a stamp instead of rewriting
//! the slots.

use super::neighbors::Cell;

const LOAD_NUM: usize = 3;
const LOAD_DEN: usize = 4;
const MIN_SLOTS: usize = 16;

#[derive(Clone, Copy)]
struct Slot {
    cell: Cell,
    stamp: u32,
}

impl Slot {
    const EMPTY: Self = Self {
        cell: Cell::new(0, 0),
        stamp: 0,
    };
}

#[inline(always)]
fn cell_hash(cell: Cell) -> u64 {
    // Per-axis multipliers so mirrored cells (x, y) and (y, x) hash apart.
    const MX: u64 = 0x517c_c1b7_2722_0a95;
    const MY: u64 = 0x6c62_272e_07bb_0142;
    let hx = (cell.x as u64).wrapping_mul(MX);
    let hy = (cell.y as u64).wrapping_mul(MY);
    hx ^ hy.rotate_right(32)
}

#[inline]
fn slots_for(keys: usize) -> usize {
    keys.saturating_mul(LOAD_DEN)
        .div_ceil(LOAD_NUM)
        .next_power_of_two()
        .max(MIN_SLOTS)
}

pub struct CoordSet {
    slots: Vec<Slot>,
    mask: usize,
    stamp: u32,
    len: usize,
}

impl Default for CoordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordSet {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(cap: usize) -> Self {
        let slots = slots_for(cap);
        Self {
            slots: vec![Slot::EMPTY; slots],
            mask: slots - 1,
            stamp: 1,
            len: 0,
        }
    }

    /// Forget every key. O(1) except once every 2^32 calls.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.stamp = self.stamp.wrapping_add(1);
        if self.stamp == 0 {
            self.stamp = 1;
            for slot in &mut self.slots {
                slot.stamp = 0;
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Grow ahead of time so `keys` insertions never rehash.
    #[inline]
    pub fn reserve_for(&mut self, keys: usize) {
        if keys == 0 {
            return;
        }
        let needed = slots_for(keys);
        if needed > self.slots.len() {
            self.resize(needed);
        }
    }

    #[inline(always)]
    fn needs_grow(&self) -> bool {
        (self.len + 1) * LOAD_DEN > self.slots.len() * LOAD_NUM
    }

    fn resize(&mut self, new_slots: usize) {
        debug_assert!(new_slots.is_power_of_two());
        let old_slots = std::mem::replace(&mut self.slots, vec![Slot::EMPTY; new_slots]);
        self.mask = new_slots - 1;
        self.len = 0;

        for slot in old_slots {
            if slot.stamp == self.stamp {
                self.insert_rehash(slot.cell);
            }
        }
    }

    #[inline(always)]
    fn insert_rehash(&mut self, cell: Cell) {
        let mut pos = cell_hash(cell) as usize & self.mask;
        while self.slots[pos].stamp == self.stamp {
            pos = (pos + 1) & self.mask;
        }
        self.slots[pos] = Slot {
            cell,
            stamp: self.stamp,
        };
        self.len += 1;
    }

    /// Insert a coordinate.
    /// Returns `true` if newly inserted, `false` if it already existed.
    #[inline]
    pub fn insert(&mut self, cell: Cell) -> bool {
        if self.needs_grow() {
            self.resize(self.slots.len() * 2);
        }

        let mut pos = cell_hash(cell) as usize & self.mask;
        loop {
            let slot = &mut self.slots[pos];
            if slot.stamp != self.stamp {
                *slot = Slot {
                    cell,
                    stamp: self.stamp,
                };
                self.len += 1;
                return true;
            }
            if slot.cell == cell {
                return false;
            }
            pos = (pos + 1) & self.mask;
        }
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        let mut pos = cell_hash(cell) as usize & self.mask;
        loop {
            let slot = &self.slots[pos];
            if slot.stamp != self.stamp {
                return false;
            }
            if slot.cell == cell {
                return true;
            }
            pos = (pos + 1) & self.mask;
        }
    }
}
