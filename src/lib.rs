pub mod cli;
pub mod runtime;
pub mod smoke;

pub use int_vector;
