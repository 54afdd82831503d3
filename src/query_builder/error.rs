pub type Result<T> = core::result::Result<T, Error>;

/// Ошибки использования, всплывающие при рендере.
/// Построение дерева само по себе не падает — цепочка типов
/// не даёт собрать некорректное состояние, рендер лишь страхует.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// CASE без единого WHEN рендерить нельзя.
    #[error("CASE expression must have at least one WHEN clause")]
    EmptyCase,

    /// Условие WHEN без полей.
    #[error("CASE condition must contain at least one field")]
    EmptyCaseCondition,

    /// JOIN, у которого так и не вызвали `on()`.
    #[error("JOIN is missing its ON condition")]
    UnfinishedJoin,
}
