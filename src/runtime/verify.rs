use std::fmt;

/// An adjacent pair found out of ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub index: usize,
    pub previous: i32,
    pub current: i32,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a[{}]({}) > a[{}]({})!",
            self.index - 1,
            self.previous,
            self.index,
            self.current
        )
    }
}

/// Checks `values[i - 1] <= values[i]` for every `i` in `[1, len)`.
pub fn verify_sorted(values: &[i32]) -> Vec<Violation> {
    values
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] > pair[1])
        .map(|(i, pair)| Violation {
            index: i + 1,
            previous: pair[0],
            current: pair[1],
        })
        .collect()
}
