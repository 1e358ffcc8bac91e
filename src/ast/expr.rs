use serde::{Deserialize, Serialize};

use super::{LogicalOperator, Value};

/// Leaf node: `selector`, operator token and argument(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Field being compared
    pub selector: String,
    /// Operator token such as `==` or `=gt=`
    pub comparison: String,
    /// Right-hand side; a [`Value::List`] for multi-value operators
    pub arguments: Value,
}

impl Comparison {
    pub fn new(
        selector: impl Into<String>,
        comparison: impl Into<String>,
        arguments: impl Into<Value>,
    ) -> Self {
        Self {
            selector: selector.into(),
            comparison: comparison.into(),
            arguments: arguments.into(),
        }
    }
}

/// Internal node combining operands with AND or OR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logical {
    pub operator: LogicalOperator,
    pub operands: Vec<Expression>,
}

impl Logical {
    pub fn new(operator: LogicalOperator, operands: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            operator,
            operands: operands.into_iter().collect(),
        }
    }
}

/// A filter expression tree.
///
/// Serialized with an explicit discriminant:
///
/// ```json
/// { "kind": "comparison", "selector": "status", "comparison": "==", "arguments": "active" }
/// { "kind": "logical", "operator": "AND", "operands": [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Expression {
    Comparison(Comparison),
    Logical(Logical),
}

impl Expression {
    /// Unwrap single-operand logical nodes until something else is reached.
    ///
    /// `AND(OR(a==1))` collapses to `a==1`. Logical nodes with zero or
    /// several operands are returned as they are.
    pub fn collapsed(&self) -> &Expression {
        let mut node = self;
        loop {
            match node {
                Expression::Logical(logical) if logical.operands.len() == 1 => {
                    node = &logical.operands[0];
                }
                _ => return node,
            }
        }
    }

    /// Whether this is an OR node with more than one operand.
    pub fn is_compound_or(&self) -> bool {
        matches!(
            self,
            Expression::Logical(Logical { operator: LogicalOperator::Or, operands }) if operands.len() > 1
        )
    }

    /// Number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        match self {
            Expression::Comparison(_) => 1,
            Expression::Logical(logical) => {
                1 + logical.operands.iter().map(Expression::node_count).sum::<usize>()
            }
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Comparison(_) => 1,
            Expression::Logical(logical) => {
                1 + logical.operands.iter().map(Expression::depth).max().unwrap_or(0)
            }
        }
    }
}

impl From<Comparison> for Expression {
    fn from(c: Comparison) -> Self {
        Expression::Comparison(c)
    }
}

impl From<Logical> for Expression {
    fn from(l: Logical) -> Self {
        Expression::Logical(l)
    }
}
