//! Domain layer: expression trees and their evaluation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod display;
pub mod error;
pub mod node;
pub mod operator;
pub mod scenario;

pub use builder::ExprBuilder;
pub use display::TreeDisplay;
pub use error::{DomainError, DomainResult};
pub use node::Node;
pub use operator::Operator;
pub use scenario::Scenario;
