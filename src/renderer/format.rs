//! Эвристический SQL-форматер: текст в текст, без настоящего парсера.
//! Расставляет переводы строк перед ключевыми словами клауз, различает
//! «простые» скобки (список `IN (...)` — остаётся в строке) и «сложные»
//! (подзапрос — многострочно, с отступом на уровень вложенности),
//! раскладывает списки полей SELECT и AND/OR-цепочки WHERE по строкам,
//! когда элементов больше одного. Необычные литералы, комментарии или
//! вложенный CASE могут отформатироваться криво — это осознанный предел.

#[derive(Clone, Copy, Debug)]
pub struct FormatOptions {
    pub indent_size: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent_size: 2 }
    }
}

/// Форматирование с шириной отступа по умолчанию (2).
pub fn format_sql(sql: &str) -> String {
    format_sql_with(sql, FormatOptions::default())
}

pub fn format_sql_with(sql: &str, opts: FormatOptions) -> String {
    log::trace!("formatting sql ({} bytes)", sql.len());
    let normalized = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return String::new();
    }
    let tokens = tokenize(&normalized);
    format_tokens(&tokens, opts.indent_size)
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Keyword(&'static str),
    Text(String),
    Open,
    Close,
    Comma,
}

// Длинные раньше коротких, чтобы "ORDER BY" не разобрался как текст + "BY".
const KEYWORDS: &[&str] = &[
    "RIGHT JOIN",
    "INNER JOIN",
    "OUTER JOIN",
    "UNION ALL",
    "LEFT JOIN",
    "FULL JOIN",
    "INTERSECT",
    "ORDER BY",
    "GROUP BY",
    "SELECT",
    "HAVING",
    "EXCEPT",
    "UNION",
    "WHERE",
    "LIMIT",
    "JOIN",
    "FROM",
    "CASE",
    "WHEN",
    "THEN",
    "ELSE",
    "AND",
    "END",
    "OR",
    "ON",
];

// Ключевые слова, начинающие строку на текущем уровне.
const NEWLINE_KEYWORDS: &[&str] = &[
    "SELECT",
    "FROM",
    "WHERE",
    "GROUP BY",
    "HAVING",
    "ORDER BY",
    "LIMIT",
    "UNION",
    "UNION ALL",
    "INTERSECT",
    "EXCEPT",
];

const JOIN_KEYWORDS: &[&str] = &["LEFT JOIN", "RIGHT JOIN", "INNER JOIN", "OUTER JOIN", "FULL JOIN", "JOIN"];

// Ключевые слова со строкой на уровень глубже.
const INDENT_KEYWORDS: &[&str] = &["ON", "AND", "OR", "WHEN", "THEN", "ELSE"];

// Маркеры «сложной» скобки: внутри подзапрос, а не список значений.
const SUBQUERY_KEYWORDS: &[&str] = &["SELECT", "FROM", "WHERE", "GROUP BY", "HAVING", "ORDER BY"];

fn is_boundary(b: u8) -> bool {
    matches!(b, b' ' | b'(' | b')' | b',' | b';')
}

/// Ключевое слово с позиции `at` (граница слова с обеих сторон обязательна).
fn match_keyword(sql: &str, at: usize) -> Option<&'static str> {
    let bytes = sql.as_bytes();
    for &kw in KEYWORDS {
        let end = at + kw.len();
        if end > bytes.len() {
            continue;
        }
        if bytes[at..end].eq_ignore_ascii_case(kw.as_bytes())
            && (end == bytes.len() || is_boundary(bytes[end]))
        {
            return Some(kw);
        }
    }
    None
}

fn tokenize(sql: &str) -> Vec<Token> {
    let bytes = sql.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b' ' => i += 1,
            b'(' => {
                tokens.push(Token::Open);
                i += 1;
            }
            b')' => {
                tokens.push(Token::Close);
                i += 1;
            }
            b',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            _ => {
                if let Some(kw) = match_keyword(sql, i) {
                    tokens.push(Token::Keyword(kw));
                    i += kw.len();
                    continue;
                }
                // текст до разделителя либо до начала ключевого слова
                let start = i;
                while i < bytes.len() {
                    match bytes[i] {
                        b'(' | b')' | b',' => break,
                        b' ' if match_keyword(sql, i + 1).is_some() => break,
                        _ => i += 1,
                    }
                }
                let text = sql[start..i].trim();
                if !text.is_empty() {
                    tokens.push(Token::Text(text.to_string()));
                }
            }
        }
    }

    tokens
}

/// Список SELECT многострочен, если до конца клаузы встречается запятая
/// на её уровне вложенности.
fn select_is_multi(tokens: &[Token], idx: usize) -> bool {
    let mut depth = 0usize;
    for t in &tokens[idx + 1..] {
        match t {
            Token::Open => depth += 1,
            Token::Close => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            Token::Comma if depth == 0 => return true,
            Token::Keyword(k) if depth == 0 && is_clause_stopper(k) => return false,
            _ => {}
        }
    }
    false
}

/// WHERE многострочен, если в пределах клаузы (до скобки или следующей
/// клаузы) есть AND/OR.
fn where_is_multi(tokens: &[Token], idx: usize) -> bool {
    for t in &tokens[idx + 1..] {
        match t {
            Token::Open | Token::Close => return false,
            Token::Keyword(k) if *k == "AND" || *k == "OR" => return true,
            Token::Keyword(k) if is_clause_stopper(k) => return false,
            _ => {}
        }
    }
    false
}

fn is_clause_stopper(k: &str) -> bool {
    NEWLINE_KEYWORDS.contains(&k) || JOIN_KEYWORDS.contains(&k)
}

/// Куда класть следующее слово.
#[derive(Clone, Copy)]
enum Pending {
    Inline,
    Break(usize),
}

struct Fmt {
    out: String,
    depth: usize,
    simple_stack: Vec<bool>,
    select_lists: Vec<usize>,
    pending: Pending,
}

impl Fmt {
    fn pad(&mut self, col: usize) {
        for _ in 0..col {
            self.out.push(' ');
        }
    }

    fn newline_at(&mut self, col: usize) {
        if self.out.is_empty() {
            return;
        }
        while self.out.ends_with(' ') {
            self.out.pop();
        }
        if !self.out.ends_with('\n') {
            self.out.push('\n');
        }
        self.pad(col);
    }

    fn word(&mut self, s: &str) {
        match self.pending {
            Pending::Break(col) => self.newline_at(col),
            Pending::Inline => {
                // `;` липнет к предыдущему токену: `... 2021);`
                if !self.out.is_empty()
                    && !self.out.ends_with(' ')
                    && !self.out.ends_with('\n')
                    && !self.out.ends_with('(')
                    && !s.starts_with(';')
                {
                    self.out.push(' ');
                }
            }
        }
        self.out.push_str(s);
        self.pending = Pending::Inline;
    }
}

fn format_tokens(tokens: &[Token], indent: usize) -> String {
    let mut f = Fmt {
        out: String::with_capacity(256),
        depth: 0,
        simple_stack: Vec::new(),
        select_lists: Vec::new(),
        pending: Pending::Inline,
    };

    for (idx, token) in tokens.iter().enumerate() {
        match token {
            Token::Keyword(k) if NEWLINE_KEYWORDS.contains(k) || JOIN_KEYWORDS.contains(k) => {
                let depth = f.depth;
                f.select_lists.retain(|&c| c < depth);
                f.newline_at(depth * indent);
                f.out.push_str(k);
                f.pending = Pending::Inline;
                if *k == "SELECT" && select_is_multi(tokens, idx) {
                    f.select_lists.push(depth);
                    f.pending = Pending::Break(depth * indent + indent);
                } else if *k == "WHERE" && where_is_multi(tokens, idx) {
                    f.pending = Pending::Break(depth * indent + indent);
                }
            }
            Token::Keyword(k) if INDENT_KEYWORDS.contains(k) => {
                f.newline_at(f.depth * indent + indent);
                f.out.push_str(k);
                f.pending = Pending::Inline;
            }
            Token::Keyword("END") => {
                f.newline_at(f.depth * indent);
                f.out.push_str("END");
                f.pending = Pending::Inline;
            }
            // CASE и прочее — в поток, как текст
            Token::Keyword(k) => f.word(k),
            Token::Text(t) => f.word(t),
            Token::Open => {
                let complex = paren_is_complex(tokens, idx);
                match f.pending {
                    Pending::Break(col) => f.newline_at(col),
                    Pending::Inline => {
                        if !f.out.is_empty() && !f.out.ends_with(' ') && !f.out.ends_with('(') {
                            f.out.push(' ');
                        }
                    }
                }
                f.out.push('(');
                f.simple_stack.push(!complex);
                if complex {
                    f.depth += 1;
                    f.pending = Pending::Break(f.depth * indent);
                } else {
                    f.pending = Pending::Inline;
                }
            }
            Token::Close => {
                let simple = f.simple_stack.pop().unwrap_or(true);
                if simple {
                    f.out.push(')');
                } else {
                    f.depth = f.depth.saturating_sub(1);
                    let depth = f.depth;
                    f.select_lists.retain(|&c| c <= depth);
                    f.newline_at(depth * indent);
                    f.out.push(')');
                }
                f.pending = Pending::Inline;
            }
            Token::Comma => {
                f.out.push(',');
                // запятая внутри простой скобки (список IN, аргументы
                // функции) не рвёт строку даже в многострочном SELECT
                let in_simple = matches!(f.simple_stack.last(), Some(true));
                match f.select_lists.last() {
                    Some(&c) if c == f.depth && !in_simple => {
                        f.pending = Pending::Break(f.depth * indent + indent)
                    }
                    _ => f.pending = Pending::Inline,
                }
            }
        }
    }

    // подчистка хвостовых пробелов построчно
    let mut cleaned = String::with_capacity(f.out.len());
    for (i, line) in f.out.lines().enumerate() {
        if i > 0 {
            cleaned.push('\n');
        }
        cleaned.push_str(line.trim_end());
    }
    cleaned.trim().to_string()
}

/// Скобка «сложная», если внутри (до парной закрывающей) есть клаузы подзапроса.
fn paren_is_complex(tokens: &[Token], open_idx: usize) -> bool {
    let mut depth = 0usize;
    for t in &tokens[open_idx + 1..] {
        match t {
            Token::Open => depth += 1,
            Token::Close => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            Token::Keyword(k) if depth == 0 && SUBQUERY_KEYWORDS.contains(k) => return true,
            _ => {}
        }
    }
    false
}
