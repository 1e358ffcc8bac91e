//! RSQL renderer for expression trees.
//!
//! Comparisons bind tighter than both logical operators and OR binds looser
//! than AND, so the only child that ever needs brackets is a multi-operand
//! OR sitting under a multi-operand AND. Single-operand logical nodes are
//! collapsed first and never show up in the output.

pub mod values;

#[cfg(test)]
mod tests;

use crate::ast::*;

pub use self::values::{escape, format_str, format_value};

/// Trait for converting AST nodes to readable RSQL.
pub trait ToRsql {
    /// Convert this node to an RSQL string (not URL-encoded).
    fn to_rsql(&self) -> String;
}

impl ToRsql for Value {
    fn to_rsql(&self) -> String {
        format_value(self)
    }
}

impl ToRsql for Comparison {
    fn to_rsql(&self) -> String {
        let mut rsql = format_str(&self.selector);
        rsql.push_str(&self.comparison);
        rsql.push_str(&format_value(&self.arguments));
        rsql
    }
}

impl ToRsql for Logical {
    fn to_rsql(&self) -> String {
        let bracket_or = self.operator == LogicalOperator::And && self.operands.len() > 1;
        let parts: Vec<String> = self
            .operands
            .iter()
            .map(|child| child_rsql(child, bracket_or))
            .collect();
        parts.join(self.operator.separator())
    }
}

impl ToRsql for Expression {
    fn to_rsql(&self) -> String {
        match self {
            Expression::Comparison(c) => c.to_rsql(),
            Expression::Logical(l) => l.to_rsql(),
        }
    }
}

/// Render an operand, bracketing it when it would otherwise bind too loosely.
fn child_rsql(child: &Expression, bracket_or: bool) -> String {
    let child = child.collapsed();
    let rsql = child.to_rsql();
    if bracket_or && child.is_compound_or() {
        format!("({})", rsql)
    } else {
        rsql
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rsql())
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rsql())
    }
}

impl std::fmt::Display for Logical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rsql())
    }
}
