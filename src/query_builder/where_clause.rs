use std::rc::Rc;

use crate::alias::AliasGenerator;
use crate::query_builder::args::IntoCond;
use crate::query_builder::ast::{Cond, QueryNode, WhereNode};
use crate::query_builder::{OrderedQuery, Query};

/// Ручка с фильтром наверху дерева. Повторные `where_`/`or` пересобирают
/// верхний узел иммутабельно, не трогая внутренности.
#[derive(Clone, Debug)]
pub struct WhereQuery {
    pub(crate) node: WhereNode,
    pub(crate) gen: Rc<AliasGenerator>,
}

impl WhereQuery {
    pub(crate) fn into_parts(self) -> (Rc<QueryNode>, Rc<AliasGenerator>) {
        (Rc::new(QueryNode::Where(self.node)), self.gen)
    }

    pub(crate) fn snapshot(&self) -> QueryNode {
        QueryNode::Where(self.node.clone())
    }

    #[inline]
    pub fn node(&self) -> &WhereNode {
        &self.node
    }
}

/// Раскладывает условие: поля отдельно, OR-группы (включая вложенные
/// в группы) — плоским списком в порядке добавления.
pub(crate) fn split_cond(cond: Cond) -> (Cond, Vec<Cond>) {
    let Cond { fields, or_groups } = cond;
    let mut groups = Vec::new();
    for g in or_groups {
        flatten_group(g, &mut groups);
    }
    (
        Cond {
            fields,
            or_groups: Vec::new(),
        },
        groups,
    )
}

fn flatten_group(cond: Cond, out: &mut Vec<Cond>) {
    let Cond { fields, or_groups } = cond;
    out.push(Cond {
        fields,
        or_groups: Vec::new(),
    });
    for g in or_groups {
        flatten_group(g, out);
    }
}

impl Query {
    /// WHERE <условия>. Принимает `Cond` либо короткую пару
    /// `("поле", значение | оператор)`.
    pub fn where_<C: IntoCond>(self, cond: C) -> WhereQuery {
        let (main, or_groups) = split_cond(cond.into_cond());
        WhereQuery {
            node: WhereNode {
                inner: self.node,
                main,
                or_groups,
            },
            gen: self.gen,
        }
    }
}

impl WhereQuery {
    /// Дослияние условий: последняя запись выигрывает по ключу,
    /// OR-группы накапливаются.
    pub fn where_<C: IntoCond>(mut self, cond: C) -> Self {
        let (main, or_groups) = split_cond(cond.into_cond());
        self.node.main.merge(main);
        self.node.or_groups.extend(or_groups);
        self
    }

    /// Новая OR-группа; основные условия не трогаются.
    pub fn or<C: IntoCond>(mut self, cond: C) -> Self {
        let (group, nested) = split_cond(cond.into_cond());
        if !group.is_empty() {
            self.node.or_groups.push(group);
        }
        self.node.or_groups.extend(nested);
        self
    }
}

impl OrderedQuery {
    /// WHERE поверх сортировки: декоратор прозрачен для рендера,
    /// условия обоих уровней склеятся через AND (внутренний — последним).
    pub fn where_<C: IntoCond>(self, cond: C) -> WhereQuery {
        let (main, or_groups) = split_cond(cond.into_cond());
        WhereQuery {
            node: WhereNode {
                inner: Rc::new(QueryNode::OrderBy(self.node)),
                main,
                or_groups,
            },
            gen: self.gen,
        }
    }
}
