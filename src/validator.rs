//! Structural checks for the strict build path.
//!
//! The permissive renderer accepts any tree. These checks reject the shapes
//! that would otherwise produce meaningless RSQL.

use crate::ast::{Comparison, Expression, Logical};
use crate::error::{RsqlError, RsqlResult};

/// Validate a whole tree, returning the first problem found in pre-order.
pub fn validate(expr: &Expression) -> RsqlResult<()> {
    match expr {
        Expression::Comparison(c) => validate_comparison(c),
        Expression::Logical(l) => validate_logical(l),
    }
}

fn validate_comparison(c: &Comparison) -> RsqlResult<()> {
    if c.selector.is_empty() {
        return Err(RsqlError::EmptySelector);
    }
    if c.comparison.is_empty() {
        return Err(RsqlError::empty_comparison(&c.selector));
    }
    Ok(())
}

fn validate_logical(l: &Logical) -> RsqlResult<()> {
    if l.operands.is_empty() {
        return Err(RsqlError::EmptyOperands {
            operator: l.operator,
        });
    }
    l.operands.iter().try_for_each(validate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::*;
    use crate::ast::{Expression, LogicalOperator};

    #[test]
    fn test_valid_tree() {
        let expr = and([eq("a", 1), or([eq("b", 2), is_in("c", [1, 2])])]);
        assert!(validate(&expr).is_ok());
    }

    #[test]
    fn test_empty_selector() {
        let expr = and([eq("a", 1), eq("", 2)]);
        assert!(matches!(validate(&expr), Err(RsqlError::EmptySelector)));
    }

    #[test]
    fn test_empty_comparison() {
        let expr = comparison("a", "", 1);
        assert!(matches!(
            validate(&expr),
            Err(RsqlError::EmptyComparison { selector }) if selector == "a"
        ));
    }

    #[test]
    fn test_empty_operands_nested() {
        let expr = and([eq("a", 1), or(Vec::<Expression>::new())]);
        assert!(matches!(
            validate(&expr),
            Err(RsqlError::EmptyOperands { operator: LogicalOperator::Or })
        ));
    }

    #[test]
    fn test_first_problem_in_pre_order() {
        let expr = or([comparison("a", "", 1), eq("", 2)]);
        assert!(matches!(validate(&expr), Err(RsqlError::EmptyComparison { .. })));
    }
}
