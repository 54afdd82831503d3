use std::rc::Rc;

use crate::alias::AliasGenerator;
use crate::query_builder::ast::{LimitNode, QueryNode};
use crate::query_builder::{OrderedQuery, Query, WhereQuery};

/// Ручка с LIMIT наверху.
#[derive(Clone, Debug)]
pub struct LimitedQuery {
    pub(crate) node: LimitNode,
    pub(crate) gen: Rc<AliasGenerator>,
}

impl LimitedQuery {
    pub(crate) fn into_parts(self) -> (Rc<QueryNode>, Rc<AliasGenerator>) {
        (Rc::new(QueryNode::Limit(self.node)), self.gen)
    }

    pub(crate) fn snapshot(&self) -> QueryNode {
        QueryNode::Limit(self.node.clone())
    }

    #[inline]
    pub fn node(&self) -> &LimitNode {
        &self.node
    }

    /// Заменяет только OFFSET, LIMIT остаётся прежним.
    pub fn offset(mut self, offset: u64) -> Self {
        self.node.offset = Some(offset);
        self
    }
}

fn limit_node(
    inner: Rc<QueryNode>,
    gen: Rc<AliasGenerator>,
    limit: u64,
    offset: Option<u64>,
) -> LimitedQuery {
    LimitedQuery {
        node: LimitNode {
            inner,
            limit,
            offset,
        },
        gen,
    }
}

impl Query {
    /// LIMIT <n>.
    pub fn limit(self, limit: u64) -> LimitedQuery {
        limit_node(self.node, self.gen, limit, None)
    }

    /// LIMIT <n> OFFSET <m>.
    pub fn limit_offset(self, limit: u64, offset: u64) -> LimitedQuery {
        limit_node(self.node, self.gen, limit, Some(offset))
    }
}

impl WhereQuery {
    pub fn limit(self, limit: u64) -> LimitedQuery {
        let (node, gen) = self.into_parts();
        limit_node(node, gen, limit, None)
    }

    pub fn limit_offset(self, limit: u64, offset: u64) -> LimitedQuery {
        let (node, gen) = self.into_parts();
        limit_node(node, gen, limit, Some(offset))
    }
}

impl OrderedQuery {
    pub fn limit(self, limit: u64) -> LimitedQuery {
        limit_node(Rc::new(QueryNode::OrderBy(self.node)), self.gen, limit, None)
    }

    pub fn limit_offset(self, limit: u64, offset: u64) -> LimitedQuery {
        limit_node(
            Rc::new(QueryNode::OrderBy(self.node)),
            self.gen,
            limit,
            Some(offset),
        )
    }
}
