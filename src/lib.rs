//! Arithmetic expression trees.
//!
//! A [`Node`](domain::Node) is either a numeric leaf or an operation (`+ - * /`)
//! over an ordered list of child trees. Trees are validated while they are
//! built and evaluated recursively, left to right.
//!
//! ```
//! use exprtree::domain::Node;
//!
//! let tree = Node::operation(
//!     '+',
//!     vec![
//!         Node::leaf(5),
//!         Node::leaf(3),
//!         Node::operation('*', vec![Node::leaf(2); 4])?,
//!     ],
//! )?;
//! assert_eq!(tree.evaluate()?, 24.0);
//! # Ok::<(), exprtree::domain::DomainError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
