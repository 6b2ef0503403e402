/// How much room to make when inserting into a full vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Add a fixed number of slots.
    Linear { increment: usize },
    /// Double the current capacity, starting from one slot.
    Doubling,
}

impl GrowthPolicy {
    pub const DEFAULT_INCREMENT: usize = 16;

    /// Capacity to grow to from `current`. Always strictly larger than `current`.
    pub fn next_capacity(&self, current: usize) -> usize {
        let next = match *self {
            GrowthPolicy::Linear { increment } => current.checked_add(increment.max(1)),
            GrowthPolicy::Doubling => current.checked_mul(2).map(|c| c.max(1)),
        };
        match next {
            Some(cap) => cap,
            None => panic!("capacity overflow"),
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::Linear {
            increment: Self::DEFAULT_INCREMENT,
        }
    }
}

/// Which element of a range quicksort partitions around.
///
/// `First` and `Last` degrade to quadratic time on already sorted input;
/// `MedianOfThree` and `Random` avoid that for the common cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotPolicy {
    First,
    Last,
    Middle,
    Random,
    #[default]
    MedianOfThree,
}

/// Policies an `IntVector` is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VectorConfig {
    pub growth: GrowthPolicy,
    pub pivot: PivotPolicy,
}

impl VectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    pub fn with_pivot(mut self, pivot: PivotPolicy) -> Self {
        self.pivot = pivot;
        self
    }
}
