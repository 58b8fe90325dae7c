//! Expression tree nodes and their recursive evaluation.

use std::fmt;

use tracing::{instrument, trace};

use crate::domain::error::DomainResult;
use crate::domain::operator::Operator;

/// A node of an arithmetic expression tree.
///
/// Children are owned exclusively by their parent, so a tree is finite and
/// acyclic by construction. There is no mutation API: a tree is assembled once
/// (directly or through [`ExprBuilder`](crate::domain::ExprBuilder)) and then
/// only read.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal node holding a literal value
    Leaf(f64),
    /// Internal node combining its children with `operator`, left to right
    Operation {
        operator: Operator,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn leaf(value: impl Into<f64>) -> Self {
        Node::Leaf(value.into())
    }

    /// Build an operation node from its symbol.
    ///
    /// Fails with [`DomainError::InvalidOperator`](crate::domain::DomainError::InvalidOperator)
    /// if `symbol` is not one of `+ - * /`; the children are dropped in that case.
    #[instrument(level = "debug", skip(children), fields(children = children.len()))]
    pub fn operation(symbol: char, children: Vec<Node>) -> DomainResult<Self> {
        let operator = Operator::try_from(symbol)?;
        Ok(Self::from_operator(operator, children))
    }

    pub fn from_operator(operator: Operator, children: Vec<Node>) -> Self {
        Node::Operation { operator, children }
    }

    /// Evaluate the tree bottom-up.
    ///
    /// Children are evaluated strictly left to right before their parent's
    /// operator is applied. The tree is not modified, so repeated calls yield
    /// identical results.
    pub fn evaluate(&self) -> DomainResult<f64> {
        match self {
            Node::Leaf(value) => Ok(*value),
            Node::Operation { operator, children } => {
                let operands = children
                    .iter()
                    .map(Node::evaluate)
                    .collect::<DomainResult<Vec<f64>>>()?;
                let value = operator.apply(&operands)?;
                trace!(%operator, ?operands, value, "applied operator");
                Ok(value)
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Operation { children, .. } => children,
        }
    }

    /// Number of levels; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}

/// Prefix rendering: `(+ 5 3 (* 2 2))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(value) => write!(f, "{}", value),
            Node::Operation { operator, children } => {
                write!(f, "({}", operator)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_tree_when_displaying_then_renders_prefix_form() {
        let tree = Node::from_operator(
            Operator::Add,
            vec![
                Node::leaf(5),
                Node::from_operator(Operator::Mul, vec![Node::leaf(2), Node::leaf(0.5)]),
            ],
        );
        assert_eq!(tree.to_string(), "(+ 5 (* 2 0.5))");
    }

    #[test]
    fn given_empty_operation_when_displaying_then_renders_bare_operator() {
        let tree = Node::from_operator(Operator::Sub, vec![]);
        assert_eq!(tree.to_string(), "(-)");
    }
}
