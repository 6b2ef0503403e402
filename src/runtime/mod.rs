pub mod array;
pub mod io;
pub mod verify;

pub use io::fill_random;
pub use verify::{Violation, verify_sorted};
