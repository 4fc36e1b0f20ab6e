pub mod finite_diff;

pub use finite_diff::{FiniteDifference, ParallelFiniteDifference, Reentrant, DEFAULT_FD_STEP};
