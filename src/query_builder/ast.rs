use std::rc::Rc;

use smallvec::SmallVec;

/// Замкнутое дерево запроса. Каждая операция цепочки оборачивает прежний
/// узел в новый через `Rc` (персистентное дерево): уже построенный узел
/// можно переиспользовать как подзапрос в нескольких родительских деревьях.
#[derive(Clone, Debug)]
pub enum QueryNode {
    Source(SourceNode),
    Join(JoinNode),
    Where(WhereNode),
    OrderBy(OrderByNode),
    Limit(LimitNode),
    Select(SelectNode),
}

/// Имя источника: литеральная таблица либо вложенное дерево,
/// рендерящееся в `( ... )` на месте.
#[derive(Clone, Debug)]
pub enum SourceName {
    Table(String),
    Subquery(Rc<QueryNode>),
}

/// Лист: таблица либо подзапрос, всегда с алиасом.
#[derive(Clone, Debug)]
pub struct SourceNode {
    pub name: SourceName,
    pub alias: String,
}

impl SourceNode {
    #[inline]
    pub fn is_subquery(&self) -> bool {
        matches!(self.name, SourceName::Subquery(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
}

impl JoinKind {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
        }
    }
}

/// Завершённый JOIN: левая сторона — произвольное поддерево, правая —
/// всегда источник. `on` выставляется ровно один раз при финализации;
/// `field_mapping` — только если перед `on()` был шаг проекции/переименования
/// полей правой стороны (выходное имя → реальная колонка).
#[derive(Clone, Debug)]
pub struct JoinNode {
    pub left: Rc<QueryNode>,
    pub right: SourceNode,
    pub kind: JoinKind,
    pub on: Option<SmallVec<[(String, String); 2]>>,
    pub field_mapping: Option<Vec<(String, String)>>,
}

/// Литеральное значение условия. Вставляется в SQL как есть
/// (строки в одинарных кавычках, без экранирования — см. ограничения крейта).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}
impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}
impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}
impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}
impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}
impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// Оператор условия по одному полю. Голое значение — это равенство.
#[derive(Clone, Debug, PartialEq)]
pub enum CondExpr {
    Eq(Value),
    Gt(Value),
    Lt(Value),
    Gte(Value),
    Lte(Value),
    Ne(Value),
    In(Vec<Value>),
    Like(String),
}

impl From<Value> for CondExpr {
    fn from(v: Value) -> Self {
        CondExpr::Eq(v)
    }
}
impl From<bool> for CondExpr {
    fn from(v: bool) -> Self {
        CondExpr::Eq(v.into())
    }
}
impl From<i32> for CondExpr {
    fn from(v: i32) -> Self {
        CondExpr::Eq(v.into())
    }
}
impl From<i64> for CondExpr {
    fn from(v: i64) -> Self {
        CondExpr::Eq(v.into())
    }
}
impl From<u32> for CondExpr {
    fn from(v: u32) -> Self {
        CondExpr::Eq(v.into())
    }
}
impl From<f64> for CondExpr {
    fn from(v: f64) -> Self {
        CondExpr::Eq(v.into())
    }
}
impl From<&str> for CondExpr {
    fn from(v: &str) -> Self {
        CondExpr::Eq(v.into())
    }
}
impl From<String> for CondExpr {
    fn from(v: String) -> Self {
        CondExpr::Eq(v.into())
    }
}

/// Упорядоченное отображение поле → оператор плюс встроенные OR-группы.
/// Повторная запись существующего поля заменяет значение на месте.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cond {
    pub(crate) fields: SmallVec<[(String, CondExpr); 4]>,
    pub(crate) or_groups: Vec<Cond>,
}

impl Cond {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет (или перезаписывает) условие по полю.
    pub fn field<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<CondExpr>,
    {
        self.set(name.into(), value.into());
        self
    }

    /// Встроенная OR-группа внутри самого условия.
    pub fn or(mut self, group: Cond) -> Self {
        self.or_groups.push(group);
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn set(&mut self, name: String, value: CondExpr) {
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Поверхностное слияние: последняя запись выигрывает по ключу,
    /// OR-группы накапливаются в порядке добавления.
    pub(crate) fn merge(&mut self, other: Cond) {
        for (k, v) in other.fields {
            self.set(k, v);
        }
        self.or_groups.extend(other.or_groups);
    }
}

/// Фильтр поверх внутреннего узла. `main` — AND-условия, `or_groups` —
/// OR-группы (встроенные и навешенные через `or()`), в порядке добавления.
#[derive(Clone, Debug)]
pub struct WhereNode {
    pub inner: Rc<QueryNode>,
    pub main: Cond,
    pub or_groups: Vec<Cond>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrderByNode {
    pub inner: Rc<QueryNode>,
    pub fields: SmallVec<[(String, OrderDirection); 2]>,
}

#[derive(Clone, Debug)]
pub struct LimitNode {
    pub inner: Rc<QueryNode>,
    pub limit: u64,
    pub offset: Option<u64>,
}

/// Элемент проекции SELECT.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectItem {
    Star,
    /// `column [AS alias]`; alias == column схлопывается при рендере.
    Column {
        column: String,
        alias: Option<String>,
    },
    /// Готовый фрагмент выражения (например, собранный CASE). Не квалифицируется.
    Expr { sql: String },
}

impl SelectItem {
    /// Выходной алиас колонки; для `Star`/`Expr` — без эффекта.
    pub fn alias<S: Into<String>>(self, alias: S) -> Self {
        match self {
            SelectItem::Column { column, .. } => SelectItem::Column {
                column,
                alias: Some(alias.into()),
            },
            other => other,
        }
    }
}

impl From<&str> for SelectItem {
    fn from(s: &str) -> Self {
        if s == "*" {
            SelectItem::Star
        } else {
            SelectItem::Column {
                column: s.to_string(),
                alias: None,
            }
        }
    }
}

impl From<String> for SelectItem {
    fn from(s: String) -> Self {
        SelectItem::from(s.as_str())
    }
}

impl From<(&str, &str)> for SelectItem {
    fn from((column, alias): (&str, &str)) -> Self {
        SelectItem::Column {
            column: column.to_string(),
            alias: Some(alias.to_string()),
        }
    }
}

impl From<(String, String)> for SelectItem {
    fn from((column, alias): (String, String)) -> Self {
        SelectItem::Column {
            column,
            alias: Some(alias),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Projection {
    Items(Vec<SelectItem>),
    /// Подзапрос как единственная вычисляемая колонка: `( ... ) AS alias`.
    Subquery {
        query: Rc<QueryNode>,
        alias: String,
    },
}

/// Терминальный узел: проекция поверх дерева-источника.
#[derive(Clone, Debug)]
pub struct SelectNode {
    pub source: Rc<QueryNode>,
    pub projection: Projection,
}
