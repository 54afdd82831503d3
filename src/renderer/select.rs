use crate::query_builder::ast::{
    Cond, OrderDirection, Projection, QueryNode, SelectItem, SelectNode, SourceNode, SourceName,
};
use crate::query_builder::{Error, Result};
use crate::renderer::condition::render_cond_level;
use crate::renderer::config::{OutputFormat, RenderOptions};
use crate::renderer::format::{format_sql_with, FormatOptions};
use crate::renderer::writer::SqlWriter;

/// Рендер узла как законченного statement: `Select` — по своей проекции,
/// любой другой узел — как неявный `SELECT *`. Форматер и `;`
/// применяются только здесь, на верхнем уровне.
pub(crate) fn render_statement(node: &QueryNode, opts: &RenderOptions) -> Result<String> {
    Ok(finish_statement(render_statement_compact(node, opts)?, opts))
}

pub(crate) fn render_select_node(sel: &SelectNode, opts: &RenderOptions) -> Result<String> {
    Ok(finish_statement(
        render_query(&sel.source, &sel.projection, opts)?,
        opts,
    ))
}

/// Однострочный рендер для вложенных позиций (подзапросы): без форматера и `;`.
pub(crate) fn render_statement_compact(node: &QueryNode, opts: &RenderOptions) -> Result<String> {
    match node {
        QueryNode::Select(sel) => render_query(&sel.source, &sel.projection, opts),
        other => render_query(other, &Projection::Items(vec![SelectItem::Star]), opts),
    }
}

fn finish_statement(mut sql: String, opts: &RenderOptions) -> String {
    if let OutputFormat::Indented = opts.format {
        sql = format_sql_with(
            &sql,
            FormatOptions {
                indent_size: opts.indent_size,
            },
        );
    }
    if opts.include_terminator {
        sql.push(';');
    }
    log::debug!("rendered SELECT statement ({} bytes)", sql.len());
    sql
}

/// Фиксированный порядок сборки:
/// SELECT .. FROM .. [JOIN .. ON ..]* [WHERE ..] [ORDER BY ..] [LIMIT .. [OFFSET ..]]
fn render_query(source: &QueryNode, projection: &Projection, opts: &RenderOptions) -> Result<String> {
    let mut w = SqlWriter::new(128);

    w.push("SELECT ");
    render_projection(&mut w, projection, source, opts)?;

    w.push(" FROM ");
    render_source(&mut w, source, opts)?;

    let mut levels = Vec::new();
    collect_where(source, &mut levels);
    levels.retain(|(main, groups)| !main.is_empty() || groups.iter().any(|g| !g.is_empty()));
    if !levels.is_empty() {
        w.push(" WHERE ");
        render_where_levels(&mut w, &levels, source, opts);
    }

    let mut order = Vec::new();
    collect_order_by(source, &mut order);
    if !order.is_empty() {
        w.push(" ORDER BY ");
        for (i, (field, dir)) in order.iter().enumerate() {
            w.push_sep(i, ", ");
            if field.contains('.') {
                w.push(field);
            } else {
                let (alias, column) = resolve_field(source, field);
                w.push(alias);
                w.push_char('.');
                w.push(column);
            }
            w.push_char(' ');
            w.push(dir.keyword());
        }
    }

    if let Some((limit, offset)) = collect_limit(source) {
        w.push(" LIMIT ");
        w.push_u64(limit);
        if let Some(o) = offset {
            w.push(" OFFSET ");
            w.push_u64(o);
        }
    }

    Ok(w.finish())
}

fn render_projection(
    w: &mut SqlWriter,
    projection: &Projection,
    source: &QueryNode,
    opts: &RenderOptions,
) -> Result<()> {
    match projection {
        Projection::Subquery { query, alias } => {
            w.push_char('(');
            w.push(render_statement_compact(query, opts)?);
            w.push(") AS ");
            w.push(alias);
        }
        Projection::Items(items) if items.is_empty() => w.push_char('*'),
        Projection::Items(items) => {
            // без JOIN'ов колонки идут голыми, с JOIN'ами — квалифицируются
            let qualify = has_joins(source);
            for (i, item) in items.iter().enumerate() {
                w.push_sep(i, ", ");
                match item {
                    SelectItem::Star => w.push_char('*'),
                    SelectItem::Expr { sql } => w.push(sql),
                    SelectItem::Column { column, alias } => {
                        if !qualify || column.contains('.') {
                            w.push(column);
                        } else {
                            let (a, c) = resolve_field(source, column);
                            w.push(a);
                            w.push_char('.');
                            w.push(c);
                        }
                        if let Some(a) = alias {
                            // self-alias схлопывается: {col: col} ≡ col
                            if a != column {
                                w.push(" AS ");
                                w.push(a);
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

/// FROM-фрагмент: источник плюс вся цепочка JOIN'ов с их ON.
fn render_source(w: &mut SqlWriter, node: &QueryNode, opts: &RenderOptions) -> Result<()> {
    match node {
        QueryNode::Source(s) => {
            render_source_name(w, s, opts)?;
            push_alias(w, &s.alias, opts.emit_as_for_table_alias);
        }
        QueryNode::Join(j) => {
            render_source(w, &j.left, opts)?;
            w.push_char(' ');
            w.push(j.kind.keyword());
            w.push_char(' ');
            render_source_name(w, &j.right, opts)?;
            push_alias(w, &j.right.alias, opts.emit_as_in_joins);

            let pairs = j.on.as_ref().ok_or(Error::UnfinishedJoin)?;
            w.push(" ON ");
            for (i, (left_key, right_key)) in pairs.iter().enumerate() {
                w.push_sep(i, " AND ");
                if left_key.contains('.') {
                    w.push(left_key);
                } else {
                    let (a, c) = resolve_field(&j.left, left_key);
                    w.push(a);
                    w.push_char('.');
                    w.push(c);
                }
                w.push(" = ");
                if right_key.contains('.') {
                    w.push(right_key);
                } else {
                    let column = j
                        .field_mapping
                        .as_ref()
                        .and_then(|m| m.iter().find(|(out, _)| out == right_key))
                        .map(|(_, src)| src.as_str())
                        .unwrap_or(right_key);
                    w.push(&j.right.alias);
                    w.push_char('.');
                    w.push(column);
                }
            }
        }
        QueryNode::Where(x) => render_source(w, &x.inner, opts)?,
        QueryNode::OrderBy(x) => render_source(w, &x.inner, opts)?,
        QueryNode::Limit(x) => render_source(w, &x.inner, opts)?,
        QueryNode::Select(sel) => render_source(w, &sel.source, opts)?,
    }
    Ok(())
}

fn render_source_name(w: &mut SqlWriter, s: &SourceNode, opts: &RenderOptions) -> Result<()> {
    match &s.name {
        SourceName::Table(name) => w.push(name),
        SourceName::Subquery(q) => {
            w.push_char('(');
            w.push(render_statement_compact(q, opts)?);
            w.push_char(')');
        }
    }
    Ok(())
}

#[inline]
fn push_alias(w: &mut SqlWriter, alias: &str, emit_as: bool) {
    if emit_as {
        w.push(" AS ");
    } else {
        w.push_char(' ');
    }
    w.push(alias);
}

/// Уровни WHERE: внешние первыми, внутренние последними; AND между
/// уровнями, уровень с OR-группами берётся в скобки.
fn render_where_levels(
    w: &mut SqlWriter,
    levels: &[(&Cond, &[Cond])],
    tree: &QueryNode,
    opts: &RenderOptions,
) {
    let resolver = |field: &str| resolve_field(tree, field);
    let multi = levels.len() > 1;
    for (i, (main, groups)) in levels.iter().enumerate() {
        w.push_sep(i, " AND ");
        let wrap = multi && groups.iter().any(|g| !g.is_empty());
        if wrap {
            w.push_char('(');
        }
        render_cond_level(w, main, groups, Some(&resolver), opts);
        if wrap {
            w.push_char(')');
        }
    }
}

fn collect_where<'a>(node: &'a QueryNode, out: &mut Vec<(&'a Cond, &'a [Cond])>) {
    match node {
        QueryNode::Where(wn) => {
            out.push((&wn.main, wn.or_groups.as_slice()));
            collect_where(&wn.inner, out);
        }
        QueryNode::OrderBy(x) => collect_where(&x.inner, out),
        QueryNode::Limit(x) => collect_where(&x.inner, out),
        QueryNode::Join(j) => collect_where(&j.left, out),
        QueryNode::Select(sel) => collect_where(&sel.source, out),
        QueryNode::Source(_) => {}
    }
}

fn collect_order_by(node: &QueryNode, out: &mut Vec<(String, OrderDirection)>) {
    match node {
        QueryNode::OrderBy(o) => {
            // внутренние ключи первыми: поздние вызовы только дописывают
            collect_order_by(&o.inner, out);
            out.extend(o.fields.iter().cloned());
        }
        QueryNode::Where(x) => collect_order_by(&x.inner, out),
        QueryNode::Limit(x) => collect_order_by(&x.inner, out),
        QueryNode::Join(j) => collect_order_by(&j.left, out),
        QueryNode::Select(sel) => collect_order_by(&sel.source, out),
        QueryNode::Source(_) => {}
    }
}

fn collect_limit(node: &QueryNode) -> Option<(u64, Option<u64>)> {
    match node {
        QueryNode::Limit(l) => Some((l.limit, l.offset)),
        QueryNode::Where(x) => collect_limit(&x.inner),
        QueryNode::OrderBy(x) => collect_limit(&x.inner),
        QueryNode::Join(j) => collect_limit(&j.left),
        QueryNode::Select(sel) => collect_limit(&sel.source),
        QueryNode::Source(_) => None,
    }
}

pub(crate) fn has_joins(node: &QueryNode) -> bool {
    match node {
        QueryNode::Join(_) => true,
        QueryNode::Source(_) => false,
        QueryNode::Where(x) => has_joins(&x.inner),
        QueryNode::OrderBy(x) => has_joins(&x.inner),
        QueryNode::Limit(x) => has_joins(&x.inner),
        QueryNode::Select(sel) => has_joins(&sel.source),
    }
}

/// Единая политика разрешения голого поля: сперва field-mapping'и JOIN'ов
/// (внешний, то есть самый поздний, выигрывает) — тогда поле уходит на
/// правую сторону соответствующего JOIN под реальным именем колонки;
/// иначе — алиас самой левой (базовой) таблицы поддерева.
pub(crate) fn resolve_field(tree: &QueryNode, field: &str) -> (String, String) {
    if let Some(found) = find_mapping(tree, field) {
        return found;
    }
    (leftmost_alias(tree), field.to_string())
}

fn find_mapping(node: &QueryNode, field: &str) -> Option<(String, String)> {
    match node {
        QueryNode::Join(j) => {
            if let Some(mapping) = &j.field_mapping {
                if let Some((_, src)) = mapping.iter().find(|(out, _)| out == field) {
                    return Some((j.right.alias.clone(), src.clone()));
                }
            }
            find_mapping(&j.left, field)
        }
        QueryNode::Where(x) => find_mapping(&x.inner, field),
        QueryNode::OrderBy(x) => find_mapping(&x.inner, field),
        QueryNode::Limit(x) => find_mapping(&x.inner, field),
        QueryNode::Select(sel) => find_mapping(&sel.source, field),
        QueryNode::Source(_) => None,
    }
}

fn leftmost_alias(node: &QueryNode) -> String {
    match node {
        QueryNode::Source(s) => s.alias.clone(),
        QueryNode::Join(j) => leftmost_alias(&j.left),
        QueryNode::Where(x) => leftmost_alias(&x.inner),
        QueryNode::OrderBy(x) => leftmost_alias(&x.inner),
        QueryNode::Limit(x) => leftmost_alias(&x.inner),
        QueryNode::Select(sel) => leftmost_alias(&sel.source),
    }
}
