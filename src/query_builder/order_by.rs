use std::rc::Rc;

use smallvec::smallvec;

use crate::alias::AliasGenerator;
use crate::query_builder::args::IntoOrderItem;
use crate::query_builder::ast::{OrderByNode, QueryNode};
use crate::query_builder::{Query, WhereQuery};

/// Ручка с сортировкой наверху. Повторный `order_by` дописывает ключ,
/// а не заменяет список.
#[derive(Clone, Debug)]
pub struct OrderedQuery {
    pub(crate) node: OrderByNode,
    pub(crate) gen: Rc<AliasGenerator>,
}

impl OrderedQuery {
    pub(crate) fn into_parts(self) -> (Rc<QueryNode>, Rc<AliasGenerator>) {
        (Rc::new(QueryNode::OrderBy(self.node)), self.gen)
    }

    pub(crate) fn snapshot(&self) -> QueryNode {
        QueryNode::OrderBy(self.node.clone())
    }

    #[inline]
    pub fn node(&self) -> &OrderByNode {
        &self.node
    }

    /// Ещё один ключ сортировки: `"col"` (ASC) либо `("col", Desc)`.
    pub fn order_by<O: IntoOrderItem>(mut self, item: O) -> Self {
        self.node.fields.push(item.into_order_item());
        self
    }
}

impl Query {
    /// ORDER BY <поле> [ASC|DESC].
    pub fn order_by<O: IntoOrderItem>(self, item: O) -> OrderedQuery {
        OrderedQuery {
            node: OrderByNode {
                inner: self.node,
                fields: smallvec![item.into_order_item()],
            },
            gen: self.gen,
        }
    }
}

impl WhereQuery {
    pub fn order_by<O: IntoOrderItem>(self, item: O) -> OrderedQuery {
        let (node, gen) = self.into_parts();
        OrderedQuery {
            node: OrderByNode {
                inner: node,
                fields: smallvec![item.into_order_item()],
            },
            gen,
        }
    }
}
