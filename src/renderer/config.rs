/// Итоговый вид SQL-текста.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Одна строка.
    Compact,
    /// Прогон через форматер (многострочный SQL с отступами).
    Indented,
}

/// Настройки рендера. Спорные места вывода (писать ли `AS` у алиаса
/// таблицы, скобки вокруг однополевой OR-группы) вынесены в явные флаги
/// с дефолтами под канонический вид.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub format: OutputFormat,

    /// Завершать ли statement символом `;`.
    pub include_terminator: bool,

    /// `FROM users AS u` против `FROM users u`.
    pub emit_as_for_table_alias: bool,

    /// То же для правой стороны JOIN: `JOIN devs AS d` против `JOIN devs d`.
    pub emit_as_in_joins: bool,

    /// Скобки вокруг OR-группы из одного поля.
    pub paren_single_field_or_groups: bool,

    /// Ширина отступа для `Indented`.
    pub indent_size: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Compact,
            include_terminator: false,
            emit_as_for_table_alias: true,
            emit_as_in_joins: true,
            paren_single_field_or_groups: true,
            indent_size: 2,
        }
    }
}

impl RenderOptions {
    /// Пресет: многострочный вывод с `;` на конце.
    pub fn indented() -> Self {
        Self {
            format: OutputFormat::Indented,
            include_terminator: true,
            ..Self::default()
        }
    }
}
