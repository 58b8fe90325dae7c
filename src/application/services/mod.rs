//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod evaluation;

pub use evaluation::{format_value, Evaluation, EvaluationService};
