use std::cell::Cell;

/// Генератор последовательных алиасов: `t1, t2, ...` для таблиц,
/// `s1, s2, ...` для колонок-подзапросов.
///
/// Один генератор на одну цепочку запроса; внутри цепочки он передаётся
/// по `Rc` и мутируется при каждой выдаче. Коллизии с явными алиасами
/// вызывающей стороны не отслеживаются.
#[derive(Debug, Default)]
pub struct AliasGenerator {
    tables: Cell<u32>,
    subqueries: Cell<u32>,
}

impl AliasGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Очередной алиас таблицы: t1, t2, ...
    pub fn next_table(&self) -> String {
        let n = self.tables.get() + 1;
        self.tables.set(n);
        format!("t{n}")
    }

    /// Синоним `next_table()`.
    #[inline]
    pub fn generate(&self) -> String {
        self.next_table()
    }

    /// Очередной алиас колонки-подзапроса: s1, s2, ...
    pub fn next_subquery(&self) -> String {
        let n = self.subqueries.get() + 1;
        self.subqueries.set(n);
        format!("s{n}")
    }

    /// Обнуляет счётчики. Только для изоляции тестов.
    pub fn reset(&self) {
        self.tables.set(0);
        self.subqueries.set(0);
    }
}
