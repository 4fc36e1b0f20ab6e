pub mod gradient_check;

pub use gradient_check::{GradientCheck, GradientCheckRecord, GradientCheckReport};
