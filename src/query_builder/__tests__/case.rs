use pretty_assertions::assert_eq;

use crate::query_builder::helpers::{cond, expr, field, gte, lt};
use crate::query_builder::{from, CaseBuilder, Error, Value};

#[test]
fn basic_case_with_else_and_alias() {
    let case = CaseBuilder::new()
        .when(("age", lt(18)))
        .then("Minor")
        .when(("age", gte(65)))
        .then("Senior")
        .else_("Adult")
        .end_as("category");
    assert_eq!(
        case.expression().expect("expression"),
        "CASE WHEN age < 18 THEN 'Minor' WHEN age >= 65 THEN 'Senior' ELSE 'Adult' END AS category"
    );
}

#[test]
fn then_field_reference_is_not_quoted() {
    let case = CaseBuilder::new()
        .when(("status", "active"))
        .then(field("name"))
        .else_("Unknown");
    assert_eq!(
        case.expression().expect("expression"),
        "CASE WHEN status = 'active' THEN name ELSE 'Unknown' END"
    );
}

#[test]
fn then_null_renders_null_literal() {
    let case = CaseBuilder::new().when(("status", "ghost")).then(Value::Null);
    assert_eq!(
        case.expression().expect("expression"),
        "CASE WHEN status = 'ghost' THEN NULL END"
    );
}

#[test]
fn case_without_else_omits_clause() {
    let case = CaseBuilder::new()
        .when(("age", gte(18)))
        .then("Adult")
        .end_as("category");
    assert_eq!(
        case.expression().expect("expression"),
        "CASE WHEN age >= 18 THEN 'Adult' END AS category"
    );
}

#[test]
fn multi_field_condition_joins_with_and() {
    let case = CaseBuilder::new()
        .when(cond().field("age", gte(18)).field("status", "active"))
        .then("Active Adult")
        .else_("Other");
    assert_eq!(
        case.expression().expect("expression"),
        "CASE WHEN age >= 18 AND status = 'active' THEN 'Active Adult' ELSE 'Other' END"
    );
}

#[test]
fn later_else_overwrites_earlier_one() {
    let case = CaseBuilder::new()
        .when(("a", 1))
        .then(1)
        .else_("first")
        .else_("second");
    assert_eq!(
        case.expression().expect("expression"),
        "CASE WHEN a = 1 THEN 1 ELSE 'second' END"
    );
}

#[test]
fn zero_when_clauses_is_an_error() {
    let err = CaseBuilder::new().else_("x").expression().unwrap_err();
    assert_eq!(err, Error::EmptyCase);
}

#[test]
fn empty_when_condition_is_an_error() {
    let err = CaseBuilder::new()
        .when(cond())
        .then(1)
        .expression()
        .unwrap_err();
    assert_eq!(err, Error::EmptyCaseCondition);
}

#[test]
fn standalone_to_sql_falls_back_to_expression() {
    let case = CaseBuilder::new().when(("a", 1)).then("one");
    assert_eq!(
        case.to_sql().expect("to_sql"),
        "CASE WHEN a = 1 THEN 'one' END"
    );
}

#[test]
fn source_bound_case_renders_full_select() {
    let sql = from(("users", "u"))
        .case()
        .when(("age", gte(18)))
        .then("Adult")
        .end_as("category")
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT CASE WHEN age >= 18 THEN 'Adult' END AS category FROM users AS u"
    );
}

#[test]
fn where_bound_case_keeps_filter() {
    let sql = from(("users", "u"))
        .where_(("active", true))
        .case()
        .when(("age", gte(65)))
        .then("Senior")
        .else_("Regular")
        .end_as("tier")
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT CASE WHEN age >= 65 THEN 'Senior' ELSE 'Regular' END AS tier FROM users AS u WHERE u.active = true"
    );
}

#[test]
fn expression_embeds_into_projection() {
    let case_sql = CaseBuilder::new()
        .when(("age", lt(18)))
        .then("Minor")
        .else_("Adult")
        .end_as("category")
        .expression()
        .expect("expression");
    let sql = from(("users", "u"))
        .select((crate::query_builder::helpers::col("name"), expr(case_sql)))
        .to_sql()
        .expect("to_sql");
    assert_eq!(
        sql,
        "SELECT name, CASE WHEN age < 18 THEN 'Minor' ELSE 'Adult' END AS category FROM users AS u"
    );
}
