use std::rc::Rc;

use crate::alias::AliasGenerator;
use crate::query_builder::args::{IntoSelectItems, IntoSubquery};
use crate::query_builder::ast::{Projection, QueryNode, SelectNode};
use crate::query_builder::{LimitedQuery, OrderedQuery, Query, Result, WhereQuery};
use crate::renderer::select::{render_select_node, render_statement};
use crate::renderer::RenderOptions;

/// Терминальная ручка: проекция зафиксирована, дальше только рендер
/// либо встраивание подзапросом в другое дерево.
#[derive(Clone, Debug)]
pub struct SelectQuery {
    pub(crate) node: SelectNode,
    pub(crate) gen: Rc<AliasGenerator>,
}

impl SelectQuery {
    #[inline]
    pub fn node(&self) -> &SelectNode {
        &self.node
    }

    /// SQL-текст с настройками по умолчанию (однострочный, без `;`).
    pub fn to_sql(&self) -> Result<String> {
        self.to_sql_with(&RenderOptions::default())
    }

    pub fn to_sql_with(&self, opts: &RenderOptions) -> Result<String> {
        render_select_node(&self.node, opts)
    }
}

fn make_select(
    source: Rc<QueryNode>,
    gen: Rc<AliasGenerator>,
    projection: Projection,
) -> SelectQuery {
    SelectQuery {
        node: SelectNode { source, projection },
        gen,
    }
}

// Проекция и рендер одинаковы для всех ручек цепочки; разница только в том,
// как ручка отдаёт своё дерево (`into_parts` / `snapshot`).
macro_rules! impl_select_and_render {
    ($ty:ty) => {
        impl $ty {
            /// Проекция: строки, пары `(колонка, алиас)`, `col(..)`/`expr(..)`.
            /// Пустой список рендерится как `*`.
            pub fn select<P: IntoSelectItems>(self, items: P) -> SelectQuery {
                let (node, gen) = self.into_parts();
                make_select(node, gen, Projection::Items(items.into_select_items()))
            }

            /// Подзапрос единственной вычисляемой колонкой,
            /// алиас выдаст генератор (`s1, s2, ...`).
            pub fn select_subquery<Q: IntoSubquery>(self, sub: Q) -> SelectQuery {
                let (node, gen) = self.into_parts();
                let alias = gen.next_subquery();
                make_select(
                    node,
                    gen,
                    Projection::Subquery {
                        query: sub.into_subquery(),
                        alias,
                    },
                )
            }

            /// То же с явным алиасом колонки.
            pub fn select_subquery_as<Q: IntoSubquery>(self, sub: Q, alias: &str) -> SelectQuery {
                let (node, gen) = self.into_parts();
                make_select(
                    node,
                    gen,
                    Projection::Subquery {
                        query: sub.into_subquery(),
                        alias: alias.to_string(),
                    },
                )
            }

            /// Неявный `SELECT *` по текущему дереву.
            pub fn to_sql(&self) -> Result<String> {
                self.to_sql_with(&RenderOptions::default())
            }

            pub fn to_sql_with(&self, opts: &RenderOptions) -> Result<String> {
                render_statement(&self.snapshot(), opts)
            }
        }
    };
}

impl_select_and_render!(Query);
impl_select_and_render!(WhereQuery);
impl_select_and_render!(OrderedQuery);
impl_select_and_render!(LimitedQuery);
