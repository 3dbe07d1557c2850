/// Hands out small, dense `u32` indices and recycles released ones.
///
/// Used by the buffer store to give every shader of a chain a stable
/// slot in its buffer table when the chain is assigned. Released
/// indices are handed out again before the table grows, so the
/// table size stays bounded by the longest chain ever assigned.
///
/// # Example
///
/// ```ignore
/// let mut slots = SlotAllocator::new();
/// let a = slots.acquire();  // 0
/// let b = slots.acquire();  // 1
/// slots.release(a);         // 0 is free again
/// let c = slots.acquire();  // 0 (recycled)
/// ```
#[derive(Debug, Default)]
pub struct SlotAllocator {
    free_list: Vec<u32>,
    in_use: Vec<bool>,
    live: u32,
}

impl SlotAllocator {
    /// Create a new empty allocator
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next available index (most recently released first)
    pub fn acquire(&mut self) -> u32 {
        let id = match self.free_list.pop() {
            Some(id) => id,
            None => {
                self.in_use.push(false);
                (self.in_use.len() - 1) as u32
            }
        };
        self.in_use[id as usize] = true;
        self.live += 1;
        id
    }

    /// Return an index to the pool. Releasing a free or unknown index is a no-op.
    pub fn release(&mut self, id: u32) {
        if let Some(used) = self.in_use.get_mut(id as usize) {
            if *used {
                *used = false;
                self.live -= 1;
                self.free_list.push(id);
            }
        }
    }

    /// Release every live index
    pub fn release_all(&mut self) {
        // Reverse so that index 0 is handed out first afterwards
        for id in (0..self.in_use.len() as u32).rev() {
            if self.in_use[id as usize] {
                self.release(id);
            }
        }
    }

    /// Whether `id` is currently handed out
    pub fn is_live(&self, id: u32) -> bool {
        self.in_use.get(id as usize).copied().unwrap_or(false)
    }

    /// Number of indices ever created (minimum size of the backing table)
    pub fn capacity(&self) -> u32 {
        self.in_use.len() as u32
    }

    /// Number of indices currently handed out
    pub fn len(&self) -> u32 {
        self.live
    }

    /// Whether no indices are handed out
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

#[cfg(test)]
#[path = "slot_allocator_tests.rs"]
mod tests;
