use serde::{Deserialize, Serialize};

/// Logical combinator of a [`Logical`](super::Logical) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    /// `;`
    And,
    /// `,`
    Or,
}

impl LogicalOperator {
    /// The RSQL separator placed between operands.
    pub fn separator(self) -> &'static str {
        match self {
            LogicalOperator::And => ";",
            LogicalOperator::Or => ",",
        }
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicalOperator::And => write!(f, "AND"),
            LogicalOperator::Or => write!(f, "OR"),
        }
    }
}

/// Standard RSQL / FIQL comparison operator tokens.
///
/// A [`Comparison`](super::Comparison) takes any operator string; these are
/// only the common ones.
pub mod comparison {
    pub const EQ: &str = "==";
    pub const NE: &str = "!=";
    pub const GT: &str = "=gt=";
    pub const GE: &str = "=ge=";
    pub const LT: &str = "=lt=";
    pub const LE: &str = "=le=";
    pub const IN: &str = "=in=";
    pub const OUT: &str = "=out=";

    /// `(token, name, meaning)` for every standard operator.
    pub const ALL: [(&str, &str, &str); 8] = [
        (EQ, "Equal", "selector equals argument"),
        (NE, "Not equal", "selector differs from argument"),
        (GT, "Greater than", "selector > argument"),
        (GE, "Greater or equal", "selector >= argument"),
        (LT, "Less than", "selector < argument"),
        (LE, "Less or equal", "selector <= argument"),
        (IN, "In", "selector is one of (a,b,...)"),
        (OUT, "Not in", "selector is none of (a,b,...)"),
    ];
}
