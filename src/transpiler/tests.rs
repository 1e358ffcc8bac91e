//! Renderer scenarios: comparisons, grouping and bracket placement.

use super::ToRsql;
use crate::ast::builders::*;
use crate::ast::{Comparison, Expression, Logical, LogicalOperator};
use pretty_assertions::assert_eq;

#[test]
fn test_simple_comparison() {
    assert_eq!(eq("status", "active").to_rsql(), "status==active");
}

#[test]
fn test_custom_operator() {
    assert_eq!(comparison("age", "=gt=", 30).to_rsql(), "age=gt=30");
    assert_eq!(comparison("name", "=like=", "*son").to_rsql(), "name=like=*son");
}

#[test]
fn test_quoted_argument() {
    assert_eq!(eq("name", "John Doe").to_rsql(), "name=='John Doe'");
}

#[test]
fn test_selector_is_formatted() {
    assert_eq!(eq("a b", 1).to_rsql(), "'a b'==1");
    assert_eq!(eq("", 1).to_rsql(), "''==1");
}

#[test]
fn test_null_argument() {
    assert_eq!(eq("deleted_at", None::<&str>).to_rsql(), "deleted_at==''");
    assert_eq!(eq("name", "").to_rsql(), "name==''");
}

#[test]
fn test_in_list() {
    assert_eq!(is_in("id", [1, 2, 3]).to_rsql(), "id=in=(1,2,3)");
    assert_eq!(out("role", ["a b", "c"]).to_rsql(), "role=out=('a b',c)");
}

#[test]
fn test_and_joins_with_semicolon() {
    let expr = and([eq("a", 1), eq("b", 2)]);
    assert_eq!(expr.to_rsql(), "a==1;b==2");
}

#[test]
fn test_or_joins_with_comma() {
    let expr = or([eq("a", 1), eq("b", 2)]);
    assert_eq!(expr.to_rsql(), "a==1,b==2");
}

#[test]
fn test_or_under_and_is_bracketed() {
    let expr = and([eq("a", 1), or([eq("b", 2), eq("c", 3)])]);
    assert_eq!(expr.to_rsql(), "a==1;(b==2,c==3)");
}

#[test]
fn test_or_under_or_is_flat() {
    let expr = or([eq("a", 1), or([eq("b", 2), eq("c", 3)])]);
    assert_eq!(expr.to_rsql(), "a==1,b==2,c==3");
}

#[test]
fn test_and_under_or_is_flat() {
    let expr = or([eq("a", 1), and([eq("b", 2), eq("c", 3)])]);
    assert_eq!(expr.to_rsql(), "a==1,b==2;c==3");
}

#[test]
fn test_and_under_and_is_flat() {
    let expr = and([eq("a", 1), and([eq("b", 2), eq("c", 3)])]);
    assert_eq!(expr.to_rsql(), "a==1;b==2;c==3");
}

#[test]
fn test_single_operand_and_parent_does_not_bracket() {
    let expr = and([or([eq("b", 2), eq("c", 3)])]);
    assert_eq!(expr.to_rsql(), "b==2,c==3");
}

#[test]
fn test_single_operand_nodes_render_as_their_child() {
    let leaf = eq("a", 1);
    let wrapped = and([or([and([leaf.clone()])])]);
    assert_eq!(wrapped.to_rsql(), leaf.to_rsql());

    let group = or([eq("b", 2), eq("c", 3)]);
    assert_eq!(or([group.clone()]).to_rsql(), group.to_rsql());
}

#[test]
fn test_single_operand_or_under_and_is_not_bracketed() {
    let expr = and([eq("a", 1), or([or([eq("b", 2)])])]);
    assert_eq!(expr.to_rsql(), "a==1;b==2");
}

#[test]
fn test_collapsed_or_under_and_is_bracketed() {
    // AND(x, AND(OR(b, c))) - the single-operand AND unwraps to the OR
    let expr = and([eq("a", 1), and([or([eq("b", 2), eq("c", 3)])])]);
    assert_eq!(expr.to_rsql(), "a==1;(b==2,c==3)");
}

#[test]
fn test_deep_mixed_tree() {
    let expr = and([
        eq("status", "active"),
        or([
            eq("role", "admin"),
            and([eq("role", "owner"), or([eq("team", "x"), eq("team", "y")])]),
        ]),
    ]);
    assert_eq!(
        expr.to_rsql(),
        "status==active;(role==admin,role==owner;(team==x,team==y))"
    );
}

#[test]
fn test_empty_operands_render_empty() {
    let expr: Expression = Logical::new(LogicalOperator::And, Vec::<Expression>::new()).into();
    assert_eq!(expr.to_rsql(), "");
}

#[test]
fn test_display_matches_to_rsql() {
    let c = Comparison::new("a", "!=", "x y");
    assert_eq!(c.to_string(), "a!='x y'");
    let expr = and([c.into(), eq("b", true)]);
    assert_eq!(format!("{}", expr), "a!='x y';b==true");
}
