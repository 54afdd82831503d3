use std::rc::Rc;

use smallvec::SmallVec;

use crate::alias::AliasGenerator;
use crate::query_builder::ast::{
    Cond, CondExpr, OrderDirection, QueryNode, SelectItem, SourceName, SourceNode,
};
use crate::query_builder::{LimitedQuery, OrderedQuery, Query, SelectQuery, WhereQuery};

/// Аргумент `from()` и цели JOIN: имя таблицы, пара (имя, алиас)
/// либо уже построенное дерево — оно станет скобочным подзапросом.
/// Без явного алиаса источнику выдаётся генераторный (`tN`).
pub trait IntoSource {
    fn into_source(self, gen: &AliasGenerator) -> SourceNode;
}

impl IntoSource for &str {
    fn into_source(self, gen: &AliasGenerator) -> SourceNode {
        SourceNode {
            name: SourceName::Table(self.to_string()),
            alias: gen.next_table(),
        }
    }
}

impl IntoSource for String {
    fn into_source(self, gen: &AliasGenerator) -> SourceNode {
        SourceNode {
            name: SourceName::Table(self),
            alias: gen.next_table(),
        }
    }
}

impl IntoSource for (&str, &str) {
    fn into_source(self, _gen: &AliasGenerator) -> SourceNode {
        SourceNode {
            name: SourceName::Table(self.0.to_string()),
            alias: self.1.to_string(),
        }
    }
}

impl IntoSource for (String, String) {
    fn into_source(self, _gen: &AliasGenerator) -> SourceNode {
        SourceNode {
            name: SourceName::Table(self.0),
            alias: self.1,
        }
    }
}

impl IntoSource for (&str, String) {
    fn into_source(self, _gen: &AliasGenerator) -> SourceNode {
        SourceNode {
            name: SourceName::Table(self.0.to_string()),
            alias: self.1,
        }
    }
}

impl IntoSource for (String, &str) {
    fn into_source(self, _gen: &AliasGenerator) -> SourceNode {
        SourceNode {
            name: SourceName::Table(self.0),
            alias: self.1.to_string(),
        }
    }
}

/// Готовое дерево в роли подзапроса (колонка-подзапрос, FROM, цель JOIN).
/// Ручки дешёвые: узлы разделяются по `Rc`, поэтому и владеющая,
/// и ссылочная форма отдают одно и то же дерево.
pub trait IntoSubquery {
    fn into_subquery(self) -> Rc<QueryNode>;
}

impl IntoSubquery for Query {
    fn into_subquery(self) -> Rc<QueryNode> {
        self.node
    }
}

impl IntoSubquery for &Query {
    fn into_subquery(self) -> Rc<QueryNode> {
        Rc::clone(&self.node)
    }
}

impl IntoSubquery for WhereQuery {
    fn into_subquery(self) -> Rc<QueryNode> {
        Rc::new(QueryNode::Where(self.node))
    }
}

impl IntoSubquery for &WhereQuery {
    fn into_subquery(self) -> Rc<QueryNode> {
        Rc::new(QueryNode::Where(self.node.clone()))
    }
}

impl IntoSubquery for OrderedQuery {
    fn into_subquery(self) -> Rc<QueryNode> {
        Rc::new(QueryNode::OrderBy(self.node))
    }
}

impl IntoSubquery for &OrderedQuery {
    fn into_subquery(self) -> Rc<QueryNode> {
        Rc::new(QueryNode::OrderBy(self.node.clone()))
    }
}

impl IntoSubquery for LimitedQuery {
    fn into_subquery(self) -> Rc<QueryNode> {
        Rc::new(QueryNode::Limit(self.node))
    }
}

impl IntoSubquery for &LimitedQuery {
    fn into_subquery(self) -> Rc<QueryNode> {
        Rc::new(QueryNode::Limit(self.node.clone()))
    }
}

impl IntoSubquery for SelectQuery {
    fn into_subquery(self) -> Rc<QueryNode> {
        Rc::new(QueryNode::Select(self.node))
    }
}

impl IntoSubquery for &SelectQuery {
    fn into_subquery(self) -> Rc<QueryNode> {
        Rc::new(QueryNode::Select(self.node.clone()))
    }
}

// Деревья как источники: `from(subquery)` / `join(subquery)`.
macro_rules! impl_source_for_handles {
    ($($ty:ty),+ $(,)?) => {$(
        impl IntoSource for $ty {
            fn into_source(self, gen: &AliasGenerator) -> SourceNode {
                SourceNode {
                    name: SourceName::Subquery(self.into_subquery()),
                    alias: gen.next_table(),
                }
            }
        }

        impl IntoSource for ($ty, &str) {
            fn into_source(self, _gen: &AliasGenerator) -> SourceNode {
                SourceNode {
                    name: SourceName::Subquery(self.0.into_subquery()),
                    alias: self.1.to_string(),
                }
            }
        }
    )+};
}

impl_source_for_handles!(
    Query,
    &Query,
    WhereQuery,
    &WhereQuery,
    OrderedQuery,
    &OrderedQuery,
    LimitedQuery,
    &LimitedQuery,
    SelectQuery,
    &SelectQuery,
);

/// Список элементов проекции: строки, пары (колонка, алиас),
/// готовые `SelectItem`, массивы/срезы/векторы и кортежи из них.
pub trait IntoSelectItems {
    fn into_select_items(self) -> Vec<SelectItem>;
}

impl IntoSelectItems for &str {
    fn into_select_items(self) -> Vec<SelectItem> {
        vec![SelectItem::from(self)]
    }
}

impl IntoSelectItems for String {
    fn into_select_items(self) -> Vec<SelectItem> {
        vec![SelectItem::from(self)]
    }
}

impl IntoSelectItems for SelectItem {
    fn into_select_items(self) -> Vec<SelectItem> {
        vec![self]
    }
}

impl<T: Into<SelectItem>, const N: usize> IntoSelectItems for [T; N] {
    fn into_select_items(self) -> Vec<SelectItem> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<SelectItem>> IntoSelectItems for Vec<T> {
    fn into_select_items(self) -> Vec<SelectItem> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<SelectItem> + Clone> IntoSelectItems for &[T] {
    fn into_select_items(self) -> Vec<SelectItem> {
        self.iter().cloned().map(Into::into).collect()
    }
}

macro_rules! impl_select_items_for_tuples {
    ($(($($name:ident),+))+) => {$(
        impl<$($name: Into<SelectItem>),+> IntoSelectItems for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_select_items(self) -> Vec<SelectItem> {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    )+};
}

impl_select_items_for_tuples! {
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
}

/// Ключ сортировки: `"col"` (ASC по умолчанию) либо `("col", Desc)`.
pub trait IntoOrderItem {
    fn into_order_item(self) -> (String, OrderDirection);
}

impl IntoOrderItem for &str {
    fn into_order_item(self) -> (String, OrderDirection) {
        (self.to_string(), OrderDirection::Asc)
    }
}

impl IntoOrderItem for String {
    fn into_order_item(self) -> (String, OrderDirection) {
        (self, OrderDirection::Asc)
    }
}

impl IntoOrderItem for (&str, OrderDirection) {
    fn into_order_item(self) -> (String, OrderDirection) {
        (self.0.to_string(), self.1)
    }
}

impl IntoOrderItem for (String, OrderDirection) {
    fn into_order_item(self) -> (String, OrderDirection) {
        self
    }
}

/// Пары `левое поле = правое поле` для `on()`: одиночная пара,
/// массив или вектор пар.
pub trait IntoOnPairs {
    fn into_on_pairs(self) -> SmallVec<[(String, String); 2]>;
}

impl IntoOnPairs for (&str, &str) {
    fn into_on_pairs(self) -> SmallVec<[(String, String); 2]> {
        smallvec::smallvec![(self.0.to_string(), self.1.to_string())]
    }
}

impl IntoOnPairs for (String, String) {
    fn into_on_pairs(self) -> SmallVec<[(String, String); 2]> {
        smallvec::smallvec![self]
    }
}

impl<const N: usize> IntoOnPairs for [(&str, &str); N] {
    fn into_on_pairs(self) -> SmallVec<[(String, String); 2]> {
        self.into_iter()
            .map(|(l, r)| (l.to_string(), r.to_string()))
            .collect()
    }
}

impl IntoOnPairs for Vec<(&str, &str)> {
    fn into_on_pairs(self) -> SmallVec<[(String, String); 2]> {
        self.into_iter()
            .map(|(l, r)| (l.to_string(), r.to_string()))
            .collect()
    }
}

impl IntoOnPairs for Vec<(String, String)> {
    fn into_on_pairs(self) -> SmallVec<[(String, String); 2]> {
        self.into_iter().collect()
    }
}

/// Отображение полей правой стороны JOIN: список имён (каждое — само на
/// себя) либо пары `выходное имя → реальная колонка`.
pub trait IntoFieldMapping {
    fn into_field_mapping(self) -> Vec<(String, String)>;
}

impl<const N: usize> IntoFieldMapping for [&str; N] {
    fn into_field_mapping(self) -> Vec<(String, String)> {
        self.into_iter()
            .map(|f| (f.to_string(), f.to_string()))
            .collect()
    }
}

impl IntoFieldMapping for Vec<&str> {
    fn into_field_mapping(self) -> Vec<(String, String)> {
        self.into_iter()
            .map(|f| (f.to_string(), f.to_string()))
            .collect()
    }
}

impl IntoFieldMapping for &[&str] {
    fn into_field_mapping(self) -> Vec<(String, String)> {
        self.iter().map(|f| (f.to_string(), f.to_string())).collect()
    }
}

impl<const N: usize> IntoFieldMapping for [(&str, &str); N] {
    fn into_field_mapping(self) -> Vec<(String, String)> {
        self.into_iter()
            .map(|(a, f)| (a.to_string(), f.to_string()))
            .collect()
    }
}

impl IntoFieldMapping for Vec<(&str, &str)> {
    fn into_field_mapping(self) -> Vec<(String, String)> {
        self.into_iter()
            .map(|(a, f)| (a.to_string(), f.to_string()))
            .collect()
    }
}

/// Условие: готовый `Cond` либо короткая форма — одиночная пара
/// `("поле", значение | оператор)`.
pub trait IntoCond {
    fn into_cond(self) -> Cond;
}

impl IntoCond for Cond {
    fn into_cond(self) -> Cond {
        self
    }
}

impl<V: Into<CondExpr>> IntoCond for (&str, V) {
    fn into_cond(self) -> Cond {
        Cond::new().field(self.0, self.1)
    }
}

impl<V: Into<CondExpr>> IntoCond for (String, V) {
    fn into_cond(self) -> Cond {
        Cond::new().field(self.0, self.1)
    }
}
