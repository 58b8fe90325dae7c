//! Incremental construction of expression trees.
//!
//! Operations are opened, filled with children, then closed, the way a tree
//! is assembled by appending children to an already created parent.

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::Node;
use crate::domain::operator::Operator;

/// Stack-based builder: every open operation sits on the stack together with
/// the children collected for it so far.
///
/// ```
/// use exprtree::domain::ExprBuilder;
///
/// let mut builder = ExprBuilder::new();
/// builder.open('+')?.leaf(5).leaf(3).open('*')?.leaf(2).leaf(2).close()?.close()?;
/// let tree = builder.build()?;
/// assert_eq!(tree.evaluate()?, 12.0);
/// # Ok::<(), exprtree::domain::DomainError>(())
/// ```
#[derive(Debug, Default)]
pub struct ExprBuilder {
    stack: Vec<(Operator, Vec<Node>)>,
    root: Option<Node>,
    extra_root: bool,
}

impl ExprBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an operation; following nodes become its children until `close`.
    #[instrument(level = "trace", skip(self))]
    pub fn open(&mut self, symbol: char) -> DomainResult<&mut Self> {
        let operator = Operator::try_from(symbol)?;
        if self.stack.is_empty() && self.root.is_some() {
            return Err(DomainError::MultipleRoots);
        }
        self.stack.push((operator, Vec::new()));
        Ok(self)
    }

    /// Append a leaf to the innermost open operation.
    ///
    /// With nothing open the leaf becomes the root; a second top-level node is
    /// reported by [`ExprBuilder::build`].
    pub fn leaf(&mut self, value: impl Into<f64>) -> &mut Self {
        self.attach(Node::leaf(value));
        self
    }

    /// Close the innermost open operation and attach it to its parent.
    #[instrument(level = "trace", skip(self))]
    pub fn close(&mut self) -> DomainResult<&mut Self> {
        let (operator, children) = self.stack.pop().ok_or(DomainError::NoOpenOperation)?;
        debug!(%operator, children = children.len(), "closing operation");
        self.attach(Node::from_operator(operator, children));
        Ok(self)
    }

    /// Finish construction and hand out the immutable tree.
    pub fn build(self) -> DomainResult<Node> {
        if let Some((operator, _)) = self.stack.last() {
            return Err(DomainError::UnclosedOperation(operator.symbol()));
        }
        if self.extra_root {
            return Err(DomainError::MultipleRoots);
        }
        self.root.ok_or(DomainError::EmptyTree)
    }

    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some((_, children)) => children.push(node),
            None => {
                if self.root.is_some() {
                    self.extra_root = true;
                } else {
                    self.root = Some(node);
                }
            }
        }
    }
}
