//! Square adjacency storage with explicit capacity.
//!
//! Cells live in one flat buffer of `capacity * capacity` entries, row-major.
//! Only the leading `len x len` block is meaningful; everything outside it is
//! kept at `W::default()` so a slot can be reused without clearing.

/// A symmetric square matrix indexed by vertex slot.
#[derive(Debug, Clone)]
pub(crate) struct AdjacencyMatrix<W> {
    cells: Vec<W>,
    capacity: usize,
    len: usize,
}

impl<W: Copy + Default + PartialEq> AdjacencyMatrix<W> {
    /// Allocate an empty matrix with room for `capacity` slots.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: vec![W::default(); capacity * capacity],
            capacity,
            len: 0,
        }
    }

    #[inline]
    fn position(&self, row: usize, col: usize) -> usize {
        row * self.capacity + col
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cell value at `(row, col)`.
    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> W {
        debug_assert!(row < self.len && col < self.len);
        self.cells[self.position(row, col)]
    }

    /// Set `(a, b)` and `(b, a)` together.
    pub(crate) fn set_symmetric(&mut self, a: usize, b: usize, value: W) {
        debug_assert!(a < self.len && b < self.len);
        let ab = self.position(a, b);
        let ba = self.position(b, a);
        self.cells[ab] = value;
        self.cells[ba] = value;
    }

    /// The occupied part of `row`.
    pub(crate) fn row(&self, row: usize) -> &[W] {
        debug_assert!(row < self.len);
        let start = self.position(row, 0);
        &self.cells[start..start + self.len]
    }

    /// Reallocate to `new_capacity` slots, copying the occupied block.
    ///
    /// Does nothing if the matrix is already at least that large.
    pub(crate) fn grow_to(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity {
            return;
        }
        let mut cells = vec![W::default(); new_capacity * new_capacity];
        for row in 0..self.len {
            let src = self.position(row, 0);
            let dst = row * new_capacity;
            cells[dst..dst + self.len].copy_from_slice(&self.cells[src..src + self.len]);
        }
        self.cells = cells;
        self.capacity = new_capacity;
    }

    /// Occupy the next slot and return its index.
    ///
    /// The caller grows the matrix first; a full matrix grows by one slot here
    /// only as a fallback.
    pub(crate) fn push_slot(&mut self) -> usize {
        if self.len == self.capacity {
            self.grow_to(self.capacity + 1);
        }
        let slot = self.len;
        self.len += 1;
        // Cells outside the occupied block are already default.
        debug_assert!((0..self.len).all(|i| {
            self.get(slot, i) == W::default() && self.get(i, slot) == W::default()
        }));
        slot
    }

    /// Drop the row and column of `slot`, shifting later slots down by one.
    pub(crate) fn remove_slot(&mut self, slot: usize) {
        debug_assert!(slot < self.len);
        let len = self.len;

        // Rows below `slot` move up.
        for row in slot..len - 1 {
            let src = self.position(row + 1, 0);
            let dst = self.position(row, 0);
            self.cells.copy_within(src..src + len, dst);
        }
        // Columns right of `slot` move left, within every remaining row.
        for row in 0..len - 1 {
            let start = self.position(row, 0);
            self.cells
                .copy_within(start + slot + 1..start + len, start + slot);
        }

        let last = len - 1;
        for i in 0..len {
            let a = self.position(last, i);
            let b = self.position(i, last);
            self.cells[a] = W::default();
            self.cells[b] = W::default();
        }
        self.len = last;
    }

    /// Number of unordered pairs `{i, j}`, `i < j`, whose cell is not default.
    pub(crate) fn count_pairs(&self) -> usize {
        let empty = W::default();
        (0..self.len)
            .map(|i| ((i + 1)..self.len).filter(|&j| self.get(i, j) != empty).count())
            .sum()
    }

    /// True if the occupied block is symmetric with a default diagonal.
    pub(crate) fn is_well_formed(&self) -> bool {
        let empty = W::default();
        (0..self.len).all(|i| {
            self.get(i, i) == empty && (0..i).all(|j| self.get(i, j) == self.get(j, i))
        })
    }
}
