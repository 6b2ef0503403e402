use std::alloc::{Layout, handle_alloc_error};
use std::fmt;
use std::ops::{Deref, DerefMut};

use log::debug;

mod config;
pub mod sort;

pub use config::{GrowthPolicy, PivotPolicy, VectorConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    pub requested: usize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "allocation of {} i32 slots failed", self.requested)
    }
}

impl std::error::Error for AllocError {}

/// A growable, contiguous vector of `i32`.
///
/// The buffer always holds exactly `capacity()` slots; only `[0, len())` is
/// meaningful. Out-of-bounds access and allocation failure are fatal: the
/// former panics, the latter goes through `handle_alloc_error`.
#[derive(Clone)]
pub struct IntVector {
    items: Box<[i32]>,
    len: usize,
    config: VectorConfig,
}

impl IntVector {
    /// Creates an empty vector without allocating.
    pub fn new() -> Self {
        Self::with_config(0, VectorConfig::default())
    }

    /// Creates an empty vector with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(capacity, VectorConfig::default())
    }

    /// Creates an empty vector with room for `capacity` values and the given policies.
    pub fn with_config(capacity: usize, config: VectorConfig) -> Self {
        Self {
            items: allocate_or_abort(capacity),
            len: 0,
            config,
        }
    }

    /// Growth and pivot policies this vector was built with.
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no live values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next insertion has to grow the buffer.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Reallocates to exactly `new_capacity` slots.
    ///
    /// Values below `min(len, new_capacity)` are kept; shrinking below `len`
    /// truncates. Aborts if the allocation fails.
    pub fn set_capacity(&mut self, new_capacity: usize) {
        let items = allocate_or_abort(new_capacity);
        self.replace_buffer(items);
    }

    /// Like `set_capacity`, but leaves the vector untouched and reports the
    /// failure when the new buffer cannot be allocated.
    pub fn try_set_capacity(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        let items = allocate(new_capacity)?;
        self.replace_buffer(items);
        Ok(())
    }

    /// Overrides the number of live values without touching the buffer.
    ///
    /// Growing the size exposes whatever values the slots currently hold.
    /// Panics if `new_size` exceeds the capacity.
    #[track_caller]
    pub fn set_size(&mut self, new_size: usize) {
        assert!(
            new_size <= self.capacity(),
            "set_size: size {} exceeds capacity {}",
            new_size,
            self.capacity()
        );
        self.len = new_size;
    }

    /// Reference to the value at `index`. Panics if `index >= len`.
    #[track_caller]
    pub fn at(&self, index: usize) -> &i32 {
        self.check_index(index);
        &self.items[index]
    }

    /// Mutable reference to the value at `index`. Panics if `index >= len`.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut i32 {
        self.check_index(index);
        &mut self.items[index]
    }

    /// Value at `index`.
    #[track_caller]
    pub fn get_at(&self, index: usize) -> i32 {
        *self.at(index)
    }

    /// Overwrites the value at `index`.
    #[track_caller]
    pub fn set_at(&mut self, index: usize, value: i32) {
        *self.at_mut(index) = value;
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot to the right.
    ///
    /// Grows by the configured policy when full. Panics if `index > len`.
    #[track_caller]
    pub fn insert_at(&mut self, index: usize, value: i32) {
        assert!(
            index <= self.len,
            "insert_at: index {} out of bounds for size {}",
            index, self.len
        );

        if self.is_full() {
            let new_capacity = self.config.growth.next_capacity(self.capacity());
            self.set_capacity(new_capacity);
        }

        if index < self.len {
            self.items.copy_within(index..self.len, index + 1);
        }
        self.items[index] = value;
        self.len += 1;
    }

    /// Appends `value`, growing if full.
    #[track_caller]
    pub fn push_back(&mut self, value: i32) {
        self.insert_at(self.len, value);
    }

    /// Prepends `value`, shifting every live value right.
    #[track_caller]
    pub fn push_front(&mut self, value: i32) {
        self.insert_at(0, value);
    }

    /// Removes and returns the value at `index`, closing the gap.
    ///
    /// The capacity is left as is. Panics if `index >= len`.
    #[track_caller]
    pub fn delete_at(&mut self, index: usize) -> i32 {
        self.check_index(index);
        let removed = self.items[index];
        self.items.copy_within(index + 1..self.len, index);
        self.len -= 1;
        removed
    }

    /// Removes and returns the last value. Panics if empty.
    #[track_caller]
    pub fn pop_back(&mut self) -> i32 {
        assert!(self.len > 0, "pop_back on an empty IntVector");
        self.delete_at(self.len - 1)
    }

    /// Removes and returns the first value. Panics if empty.
    #[track_caller]
    pub fn pop_front(&mut self) -> i32 {
        assert!(self.len > 0, "pop_front on an empty IntVector");
        self.delete_at(0)
    }

    /// Index of the first occurrence of `value`, or `len()` if absent.
    pub fn linear_search(&self, value: i32) -> usize {
        self.as_slice()
            .iter()
            .position(|&v| v == value)
            .unwrap_or(self.len)
    }

    /// Index of some occurrence of `value`, or `len()` if absent.
    ///
    /// The live values must be sorted ascending; otherwise the result is
    /// meaningless but still in `[0, len()]`.
    pub fn binary_search(&self, value: i32) -> usize {
        let values = self.as_slice();
        let mut lo = 0;
        let mut hi = values.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if values[mid] == value {
                return mid;
            }
            if values[mid] < value {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        self.len
    }

    /// Sorts ascending with bubble sort; returns the number of passes made.
    pub fn bubble_sort(&mut self) -> usize {
        let passes = sort::bubble_sort(self.as_mut_slice());
        debug!("bubble sort: {} values, {} passes", self.len, passes);
        passes
    }

    /// Sorts ascending with quicksort using the configured pivot policy.
    pub fn quick_sort(&mut self) {
        self.quick_sort_with(self.config.pivot);
    }

    /// Sorts ascending with quicksort using `pivot` for this call only.
    pub fn quick_sort_with(&mut self, pivot: PivotPolicy) {
        debug!("quick sort of {} values, pivot {:?}", self.len, pivot);
        sort::quick_sort(self.as_mut_slice(), pivot);
    }

    /// The live values `[0, len)`.
    pub fn as_slice(&self) -> &[i32] {
        &self.items[..self.len]
    }

    /// The live values `[0, len)`, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.items[..self.len]
    }

    #[track_caller]
    fn check_index(&self, index: usize) {
        if index >= self.len {
            panic!(
                "index out of bounds: the size is {} but the index is {}",
                self.len, index
            );
        }
    }

    fn replace_buffer(&mut self, mut items: Box<[i32]>) {
        let (old, new) = (self.capacity(), items.len());
        let keep = self.len.min(new);
        items[..keep].copy_from_slice(&self.items[..keep]);
        debug!("reallocated IntVector: capacity {} -> {}", old, new);
        if keep < self.len {
            debug!("truncated IntVector: size {} -> {}", self.len, keep);
        }
        self.items = items;
        self.len = keep;
    }
}

fn allocate(capacity: usize) -> Result<Box<[i32]>, AllocError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| AllocError {
            requested: capacity,
        })?;
    buf.resize(capacity, 0);
    Ok(buf.into_boxed_slice())
}

fn allocate_or_abort(capacity: usize) -> Box<[i32]> {
    match allocate(capacity) {
        Ok(items) => items,
        Err(_) => match Layout::array::<i32>(capacity) {
            Ok(layout) => handle_alloc_error(layout),
            Err(_) => panic!("capacity overflow"),
        },
    }
}

impl Default for IntVector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntVector")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish()
    }
}

/// Equal when the live values are equal; capacity and config are ignored.
impl PartialEq for IntVector {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntVector {}

impl Deref for IntVector {
    type Target = [i32];
    fn deref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl DerefMut for IntVector {
    fn deref_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

impl Extend<i32> for IntVector {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl FromIterator<i32> for IntVector {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut v = IntVector::new();
        v.extend(iter);
        v
    }
}

impl<'a> IntoIterator for &'a IntVector {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a mut IntVector {
    type Item = &'a mut i32;
    type IntoIter = std::slice::IterMut<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

#[cfg(test)]
mod tests;
