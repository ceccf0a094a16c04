//! Scroll cache: keeps view recomputation proportional to the screen height.
//!
//! Walking down from the current view origin, every row start is recorded in
//! a ring of `2 × height` slots. When the walk reaches the cursor's row the
//! new origin is read back from the ring instead of being recomputed by a
//! backward scan, which could otherwise cost a rescan from the start of a
//! very long line.

use crate::wrap::{next_row_start, row_start};

/// Smallest screen height the cache works with.
pub const MIN_HEIGHT: usize = 2;

/// Ring of recently seen row-start offsets.
#[derive(Debug, Clone)]
pub struct ScrollCache {
    slots: Vec<usize>,
    height: usize,
}

impl ScrollCache {
    /// Creates a cache for a screen `height` rows tall.
    pub fn new(height: usize) -> Self {
        let height = height.max(MIN_HEIGHT);
        Self {
            slots: vec![0; height * 2],
            height,
        }
    }

    /// Resizes the ring for a new screen height, discarding its contents.
    pub fn resize(&mut self, height: usize) {
        *self = Self::new(height);
    }

    /// Screen height the ring is sized for.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the view origin that keeps `cursor` on screen.
    ///
    /// A cursor above `view_origin` jumps the view straight to the cursor's
    /// row. Otherwise the origin is moved down only as far as needed for the
    /// cursor's row to sit `height - 2` rows below it.
    pub fn recompute(
        &mut self,
        data: &[u8],
        width: usize,
        cursor: usize,
        view_origin: usize,
    ) -> usize {
        if cursor < view_origin {
            return row_start(data, cursor, width);
        }

        let ring = self.slots.len();
        // Slot for row `i` is (i + height - 2) mod ring; 3h - 2 keeps it unsigned.
        let offset = 3 * self.height - 2;
        self.slots[..self.height].fill(view_origin);

        let mut vpos = view_origin;
        let mut i = 0;
        loop {
            self.slots[(i + offset) % ring] = vpos;

            let next = next_row_start(data, vpos, width);
            if cursor < next || vpos >= data.len() {
                break;
            }
            vpos = next;
            i += 1;
        }

        self.slots[i % ring]
    }
}
