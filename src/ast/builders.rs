//! Shorthand constructors for expression trees.
//!
//! ```
//! use rsql_builder::ast::builders::*;
//!
//! let filter = and([eq("status", "active"), or([eq("role", "admin"), eq("role", "owner")])]);
//! assert_eq!(rsql_builder::build_readable(&filter), "status==active;(role==admin,role==owner)");
//! ```

use super::operators::comparison as op;
use super::{Comparison, Expression, Logical, LogicalOperator, Value};

/// Create a comparison with an arbitrary operator token
pub fn comparison(selector: &str, comparison: &str, value: impl Into<Value>) -> Expression {
    Comparison::new(selector, comparison, value).into()
}

/// `selector==value`
pub fn eq(selector: &str, value: impl Into<Value>) -> Expression {
    comparison(selector, op::EQ, value)
}

/// `selector!=value`
pub fn ne(selector: &str, value: impl Into<Value>) -> Expression {
    comparison(selector, op::NE, value)
}

/// `selector=gt=value`
pub fn gt(selector: &str, value: impl Into<Value>) -> Expression {
    comparison(selector, op::GT, value)
}

/// `selector=ge=value`
pub fn ge(selector: &str, value: impl Into<Value>) -> Expression {
    comparison(selector, op::GE, value)
}

/// `selector=lt=value`
pub fn lt(selector: &str, value: impl Into<Value>) -> Expression {
    comparison(selector, op::LT, value)
}

/// `selector=le=value`
pub fn le(selector: &str, value: impl Into<Value>) -> Expression {
    comparison(selector, op::LE, value)
}

/// `selector=in=(a,b,...)`
pub fn is_in<V: Into<Value>>(selector: &str, values: impl IntoIterator<Item = V>) -> Expression {
    let vals: Vec<Value> = values.into_iter().map(|v| v.into()).collect();
    comparison(selector, op::IN, Value::List(vals))
}

/// `selector=out=(a,b,...)`
pub fn out<V: Into<Value>>(selector: &str, values: impl IntoIterator<Item = V>) -> Expression {
    let vals: Vec<Value> = values.into_iter().map(|v| v.into()).collect();
    comparison(selector, op::OUT, Value::List(vals))
}

/// Join operands with `;`
pub fn and(operands: impl IntoIterator<Item = Expression>) -> Expression {
    Logical::new(LogicalOperator::And, operands).into()
}

/// Join operands with `,`
pub fn or(operands: impl IntoIterator<Item = Expression>) -> Expression {
    Logical::new(LogicalOperator::Or, operands).into()
}
