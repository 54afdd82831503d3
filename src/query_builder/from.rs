use std::rc::Rc;

use crate::alias::AliasGenerator;
use crate::query_builder::args::IntoSource;
use crate::query_builder::ast::QueryNode;
use crate::query_builder::Query;

/// Начало цепочки: `FROM <таблица | (подзапрос)>`.
///
/// Создаёт генератор алиасов цепочки и первый узел-источник:
/// - `from("games")` — алиас выдаст генератор (`t1`);
/// - `from(("games", "g"))` — явный алиас сохраняется как есть;
/// - `from(subquery)` / `from((subquery, "sq"))` — готовое дерево
///   встраивается скобочным подзапросом.
pub fn from<T: IntoSource>(source: T) -> Query {
    let gen = Rc::new(AliasGenerator::new());
    let src = source.into_source(&gen);
    Query::new(Rc::new(QueryNode::Source(src)), gen)
}
