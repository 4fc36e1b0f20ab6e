pub mod closure;
pub mod cost_function;
pub mod counting;
pub mod guard;
pub mod test_functions;

pub use closure::{ValueFn, ValueGradFn};
pub use cost_function::CostFunction;
pub use counting::{Counting, EvalCounts};
