use std::rc::Rc;

use crate::query_builder::args::IntoCond;
use crate::query_builder::ast::{Cond, Projection, QueryNode, SelectItem, SelectNode, Value};
use crate::query_builder::{Error, Query, Result, WhereQuery};
use crate::renderer::condition::{render_cond_level, render_value};
use crate::renderer::select::render_select_node;
use crate::renderer::writer::SqlWriter;
use crate::renderer::RenderOptions;

/// Значение ветки CASE: литерал либо ссылка на колонку.
/// Строковый литерал уходит в кавычках, `field("name")` — как есть.
#[derive(Clone, Debug, PartialEq)]
pub enum CaseValue {
    Value(Value),
    Field(String),
}

impl From<Value> for CaseValue {
    fn from(v: Value) -> Self {
        CaseValue::Value(v)
    }
}
impl From<bool> for CaseValue {
    fn from(v: bool) -> Self {
        CaseValue::Value(v.into())
    }
}
impl From<i32> for CaseValue {
    fn from(v: i32) -> Self {
        CaseValue::Value(v.into())
    }
}
impl From<i64> for CaseValue {
    fn from(v: i64) -> Self {
        CaseValue::Value(v.into())
    }
}
impl From<f64> for CaseValue {
    fn from(v: f64) -> Self {
        CaseValue::Value(v.into())
    }
}
impl From<&str> for CaseValue {
    fn from(v: &str) -> Self {
        CaseValue::Value(v.into())
    }
}
impl From<String> for CaseValue {
    fn from(v: String) -> Self {
        CaseValue::Value(v.into())
    }
}

/// Конструктор выражения `CASE WHEN .. THEN .. [ELSE ..] END [AS ..]`.
///
/// Самостоятелен (`CaseBuilder::new()`) либо привязан к дереву-источнику
/// (`query.case()`) — тогда `to_sql()` собирает полный SELECT.
/// Условия веток рендерятся с голыми именами полей, без алиасов таблиц.
#[derive(Clone, Debug, Default)]
pub struct CaseBuilder {
    source: Option<Rc<QueryNode>>,
    clauses: Vec<(Cond, CaseValue)>,
    else_value: Option<CaseValue>,
    alias: Option<String>,
}

/// Открытая ветка: `when()` уже вызван, до `then()` продолжить нельзя.
#[derive(Clone, Debug)]
pub struct CaseWhen {
    case: CaseBuilder,
    cond: Cond,
}

impl CaseWhen {
    /// Закрывает ветку значением и возвращает builder.
    pub fn then<V: Into<CaseValue>>(self, value: V) -> CaseBuilder {
        let mut case = self.case;
        case.clauses.push((self.cond, value.into()));
        case
    }
}

impl CaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_source(source: Rc<QueryNode>) -> Self {
        Self {
            source: Some(source),
            ..Self::default()
        }
    }

    /// Открывает ветку; следующим шагом обязан идти `then()`.
    pub fn when<C: IntoCond>(self, cond: C) -> CaseWhen {
        CaseWhen {
            case: self,
            cond: cond.into_cond(),
        }
    }

    /// Запасная ветка; повторный вызов перезаписывает прежнюю.
    pub fn else_<V: Into<CaseValue>>(mut self, value: V) -> Self {
        self.else_value = Some(value.into());
        self
    }

    /// Выходной алиас: `END AS <alias>`.
    pub fn end_as<S: Into<String>>(mut self, alias: S) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Только сам CASE-фрагмент — для встраивания в проекцию
    /// через `expr(..)`.
    pub fn expression(&self) -> Result<String> {
        self.expression_with(&RenderOptions::default())
    }

    pub(crate) fn expression_with(&self, opts: &RenderOptions) -> Result<String> {
        if self.clauses.is_empty() {
            return Err(Error::EmptyCase);
        }

        let mut w = SqlWriter::new(64);
        w.push("CASE");
        for (cond, value) in &self.clauses {
            if cond.is_empty() && cond.or_groups.iter().all(|g| g.is_empty()) {
                return Err(Error::EmptyCaseCondition);
            }
            w.push(" WHEN ");
            render_cond_level(&mut w, cond, &cond.or_groups, None, opts);
            w.push(" THEN ");
            push_case_value(&mut w, value);
        }
        if let Some(v) = &self.else_value {
            w.push(" ELSE ");
            push_case_value(&mut w, v);
        }
        w.push(" END");
        if let Some(a) = &self.alias {
            w.push(" AS ");
            w.push(a);
        }
        Ok(w.finish())
    }

    /// Полный SELECT, если builder привязан к источнику;
    /// иначе — просто CASE-фрагмент.
    pub fn to_sql(&self) -> Result<String> {
        self.to_sql_with(&RenderOptions::default())
    }

    pub fn to_sql_with(&self, opts: &RenderOptions) -> Result<String> {
        let expression = self.expression_with(opts)?;
        match &self.source {
            Some(source) => {
                let node = SelectNode {
                    source: Rc::clone(source),
                    projection: Projection::Items(vec![SelectItem::Expr { sql: expression }]),
                };
                render_select_node(&node, opts)
            }
            None => Ok(expression),
        }
    }
}

fn push_case_value(w: &mut SqlWriter, value: &CaseValue) {
    match value {
        CaseValue::Value(v) => render_value(w, v),
        CaseValue::Field(name) => w.push(name),
    }
}

impl Query {
    /// CASE с источником: `to_sql()` соберёт `SELECT <case> FROM ...`.
    pub fn case(&self) -> CaseBuilder {
        CaseBuilder::with_source(Rc::clone(&self.node))
    }
}

impl WhereQuery {
    pub fn case(&self) -> CaseBuilder {
        CaseBuilder::with_source(Rc::new(QueryNode::Where(self.node.clone())))
    }
}
