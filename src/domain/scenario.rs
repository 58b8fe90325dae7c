//! Built-in, hand-assembled expression trees.

use std::fmt;

use crate::domain::builder::ExprBuilder;
use crate::domain::error::DomainResult;
use crate::domain::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scenario {
    /// `5 + 3 + (2 * 2 * 2 * 2)`
    #[default]
    Nested,
    /// `5 + 3 + 2`
    Flat,
    /// `10 - 3 - 2`
    Difference,
    /// `100 / 5 / 2`
    Quotient,
    /// Root built with `%`, rejected during construction
    Modulo,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Nested,
        Scenario::Flat,
        Scenario::Difference,
        Scenario::Quotient,
        Scenario::Modulo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Nested => "nested",
            Scenario::Flat => "flat",
            Scenario::Difference => "difference",
            Scenario::Quotient => "quotient",
            Scenario::Modulo => "modulo",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Nested => "sum of two leaves and a four-fold product",
            Scenario::Flat => "sum of three leaves",
            Scenario::Difference => "first operand minus the rest",
            Scenario::Quotient => "first operand divided by the rest",
            Scenario::Modulo => "unsupported operator, fails to build",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(name))
    }

    /// Assemble the tree. Only [`Scenario::Modulo`] fails.
    pub fn build(self) -> DomainResult<Node> {
        match self {
            Scenario::Nested => {
                let mut builder = ExprBuilder::new();
                builder.open('+')?.leaf(5).leaf(3).open('*')?;
                for _ in 0..4 {
                    builder.leaf(2);
                }
                builder.close()?.close()?;
                builder.build()
            }
            Scenario::Flat => {
                Node::operation('+', vec![Node::leaf(5), Node::leaf(3), Node::leaf(2)])
            }
            Scenario::Difference => {
                Node::operation('-', vec![Node::leaf(10), Node::leaf(3), Node::leaf(2)])
            }
            Scenario::Quotient => {
                Node::operation('/', vec![Node::leaf(100), Node::leaf(5), Node::leaf(2)])
            }
            Scenario::Modulo => Node::operation('%', vec![Node::leaf(10), Node::leaf(3)]),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
