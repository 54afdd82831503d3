mod __tests__;
pub mod args;
pub mod ast;
mod case;
mod error;
mod from;
pub mod helpers;
mod join;
mod limit;
mod order_by;
mod select;
mod where_clause;

use std::rc::Rc;

use crate::alias::AliasGenerator;
use ast::QueryNode;

pub use ast::{Cond, CondExpr, JoinKind, OrderDirection, SelectItem, Value};
pub use case::{CaseBuilder, CaseValue, CaseWhen};
pub use error::{Error, Result};
pub use from::from;
pub use join::PendingJoin;
pub use limit::LimitedQuery;
pub use order_by::OrderedQuery;
pub use select::SelectQuery;
pub use where_clause::WhereQuery;

/// Базовая ручка цепочки: источник либо завершённый JOIN.
/// Дешёвый `Clone` — узлы разделяются через `Rc`, поэтому одно и то же
/// дерево можно встроить подзапросом в несколько родительских.
#[derive(Clone, Debug)]
pub struct Query {
    pub(crate) node: Rc<QueryNode>,
    pub(crate) gen: Rc<AliasGenerator>,
}

impl Query {
    pub(crate) fn new(node: Rc<QueryNode>, gen: Rc<AliasGenerator>) -> Self {
        Self { node, gen }
    }

    /// Доступ к дереву (нужен рендеру и тестам).
    #[inline]
    pub fn node(&self) -> &QueryNode {
        &self.node
    }

    /// Генератор алиасов этой цепочки.
    #[inline]
    pub fn alias_generator(&self) -> &AliasGenerator {
        &self.gen
    }

    pub(crate) fn into_parts(self) -> (Rc<QueryNode>, Rc<AliasGenerator>) {
        (self.node, self.gen)
    }

    pub(crate) fn snapshot(&self) -> QueryNode {
        QueryNode::clone(&self.node)
    }
}
