//! Terminal tree rendering via termtree.

use termtree::Tree;
use tracing::instrument;

use crate::domain::node::Node;

pub trait TreeDisplay {
    fn to_tree(&self) -> Tree<String>;
}

impl TreeDisplay for Node {
    #[instrument(level = "trace", skip(self))]
    fn to_tree(&self) -> Tree<String> {
        match self {
            Node::Leaf(value) => Tree::new(value.to_string()),
            Node::Operation { operator, children } => {
                // Recursively construct the children
                let leaves: Vec<_> = children.iter().map(|c| c.to_tree()).collect();
                Tree::new(operator.to_string()).with_leaves(leaves)
            }
        }
    }
}
