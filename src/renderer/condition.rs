use crate::query_builder::ast::{Cond, CondExpr, Value};
use crate::renderer::config::RenderOptions;
use crate::renderer::writer::SqlWriter;

/// Резолвер голого поля в пару (алиас, колонка). Поля с точкой
/// резолвер не видит — они проходят как есть.
pub(crate) type FieldResolver<'a> = dyn Fn(&str) -> (String, String) + 'a;

/// Один уровень WHERE: AND-цепочка основных условий, затем OR-группы
/// в порядке добавления. У `main` читаются только поля — его собственные
/// встроенные группы передаются через `groups`.
pub(crate) fn render_cond_level(
    w: &mut SqlWriter,
    main: &Cond,
    groups: &[Cond],
    resolver: Option<&FieldResolver>,
    opts: &RenderOptions,
) {
    let has_or = groups.iter().any(|g| !g.is_empty());
    let mut first = true;

    if !main.is_empty() {
        push_group(w, main, has_or, resolver, opts);
        first = false;
    }
    for g in groups {
        if g.is_empty() {
            continue;
        }
        if !first {
            w.push(" OR ");
        }
        push_group(w, g, true, resolver, opts);
        first = false;
    }
}

fn push_group(
    w: &mut SqlWriter,
    cond: &Cond,
    in_or_context: bool,
    resolver: Option<&FieldResolver>,
    opts: &RenderOptions,
) {
    let parens = in_or_context && (cond.fields.len() > 1 || opts.paren_single_field_or_groups);
    if parens {
        w.push_char('(');
    }
    for (i, (field, expr)) in cond.fields.iter().enumerate() {
        w.push_sep(i, " AND ");
        render_field_cond(w, field, expr, resolver);
    }
    if parens {
        w.push_char(')');
    }
}

pub(crate) fn render_field_cond(
    w: &mut SqlWriter,
    field: &str,
    expr: &CondExpr,
    resolver: Option<&FieldResolver>,
) {
    push_field(w, field, resolver);
    match expr {
        // Null под равенством/неравенством — это IS [NOT] NULL
        CondExpr::Eq(Value::Null) => w.push(" IS NULL"),
        CondExpr::Ne(Value::Null) => w.push(" IS NOT NULL"),
        CondExpr::Eq(v) => {
            w.push(" = ");
            render_value(w, v);
        }
        CondExpr::Gt(v) => {
            w.push(" > ");
            render_value(w, v);
        }
        CondExpr::Lt(v) => {
            w.push(" < ");
            render_value(w, v);
        }
        CondExpr::Gte(v) => {
            w.push(" >= ");
            render_value(w, v);
        }
        CondExpr::Lte(v) => {
            w.push(" <= ");
            render_value(w, v);
        }
        CondExpr::Ne(v) => {
            w.push(" != ");
            render_value(w, v);
        }
        CondExpr::In(values) => {
            w.push(" IN (");
            for (i, v) in values.iter().enumerate() {
                w.push_sep(i, ", ");
                render_value(w, v);
            }
            w.push_char(')');
        }
        CondExpr::Like(pattern) => {
            w.push(" LIKE ");
            render_value(w, &Value::Str(pattern.clone()));
        }
    }
}

fn push_field(w: &mut SqlWriter, field: &str, resolver: Option<&FieldResolver>) {
    if field.contains('.') {
        w.push(field);
        return;
    }
    match resolver {
        // алиас может оказаться пустым — тогда выходит `.field`,
        // синтаксически кривой, но не падающий SQL
        Some(resolve) => {
            let (alias, column) = resolve(field);
            w.push(alias);
            w.push_char('.');
            w.push(column);
        }
        None => w.push(field),
    }
}

/// Литерал в SQL-текст: строки в одинарных кавычках, остальное —
/// текстовой формой. Без экранирования и параметризации.
pub(crate) fn render_value(w: &mut SqlWriter, v: &Value) {
    match v {
        Value::Null => w.push("NULL"),
        Value::Bool(b) => w.push(if *b { "true" } else { "false" }),
        Value::Int(n) => w.push_i64(*n),
        Value::Float(f) => w.push(f.to_string()),
        Value::Str(s) => {
            w.push_char('\'');
            w.push(s);
            w.push_char('\'');
        }
    }
}
