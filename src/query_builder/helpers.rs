use crate::query_builder::ast::{Cond, CondExpr, SelectItem, Value};
use crate::query_builder::case::CaseValue;

/// Пустое условие для последующего чейнинга: `cond().field("a", 1)`.
#[inline]
pub fn cond() -> Cond {
    Cond::new()
}

/// `=` (эквивалент голого значения).
pub fn eq<V: Into<Value>>(v: V) -> CondExpr {
    CondExpr::Eq(v.into())
}

/// `>`
pub fn gt<V: Into<Value>>(v: V) -> CondExpr {
    CondExpr::Gt(v.into())
}

/// `<`
pub fn lt<V: Into<Value>>(v: V) -> CondExpr {
    CondExpr::Lt(v.into())
}

/// `>=`
pub fn gte<V: Into<Value>>(v: V) -> CondExpr {
    CondExpr::Gte(v.into())
}

/// `<=`
pub fn lte<V: Into<Value>>(v: V) -> CondExpr {
    CondExpr::Lte(v.into())
}

/// `!=`; против `null()` даёт `IS NOT NULL`.
pub fn ne<V: Into<Value>>(v: V) -> CondExpr {
    CondExpr::Ne(v.into())
}

/// `IN (v1, v2, ...)`
pub fn r#in<I, V>(values: I) -> CondExpr
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    CondExpr::In(values.into_iter().map(Into::into).collect())
}

/// Алиас `r#in` без сырого идентификатора.
#[inline]
pub fn in_<I, V>(values: I) -> CondExpr
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    r#in(values)
}

/// `LIKE 'pattern'`
pub fn like<S: Into<String>>(pattern: S) -> CondExpr {
    CondExpr::Like(pattern.into())
}

/// NULL-литерал: `eq(null())` → `IS NULL`.
#[inline]
pub fn null() -> Value {
    Value::Null
}

/// Колонка проекции без переименования: `col("a").alias("b")` даёт `a AS b`.
pub fn col<S: Into<String>>(name: S) -> SelectItem {
    SelectItem::from(name.into())
}

/// Готовый фрагмент выражения в проекции (например, результат
/// `CaseBuilder::expression()`). В рендере не квалифицируется.
pub fn expr<S: Into<String>>(sql: S) -> SelectItem {
    SelectItem::Expr { sql: sql.into() }
}

/// Ссылка на колонку в ветке CASE — в отличие от строкового литерала
/// не берётся в кавычки.
pub fn field<S: Into<String>>(name: S) -> CaseValue {
    CaseValue::Field(name.into())
}
