use std::fmt::Write;

use crate::{
    dialect::{ConvertType, Dialect},
    error::Result,
    expr::{Expr, order::OrderItem},
    query::{Join, SelectQuery, TableSource},
    writer::{FormatContext, FormatWriter},
};

use super::expr::{write_expr, write_table_source};

pub fn write_select<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    query: &SelectQuery,
) -> Result<()> {
    let dialect = context.dialect();
    write_select_clause(context, query)?;
    dialect.write_from_clause(context, &query.from)?;
    write_where_clause(context, query.where_clause.as_ref())?;
    write_order_by_clause(context, &query.order_by)?;
    dialect.write_offset_limit(context, query)
}

pub fn write_select_clause<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    query: &SelectQuery,
) -> Result<()> {
    context.write_indent()?;
    context.write_str("SELECT")?;
    if query.distinct {
        context.write_str(" DISTINCT")?;
    }
    context.new_line()?;

    context.indented(|ctx| {
        if query.columns.is_empty() {
            ctx.write_indent()?;
            return ctx.write_char('*');
        }
        for (index, column) in query.columns.iter().enumerate() {
            if index > 0 {
                ctx.write_str(",\n")?;
            }
            ctx.write_indent()?;
            write_expr(ctx, &column.expr, true)?;
            if let Some(ref alias) = column.alias {
                ctx.write_str(" as ")?;
                ctx.write_name(alias.as_str(), ConvertType::NameToQueryFieldAlias)?;
            }
        }
        Ok(())
    })?;
    context.new_line()
}

/// FROM clause of the generic renderer. Nothing is written for an empty list.
pub fn write_from_clause<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    sources: &[TableSource],
) -> Result<()> {
    if sources.is_empty() {
        return Ok(());
    }
    write_table_list(context, "FROM", sources)
}

/// A keyword line followed by the sources, their aliases and their joins.
///
/// Shared by every clause that lists tables the way FROM does.
pub fn write_table_list<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    keyword: &str,
    sources: &[TableSource],
) -> Result<()> {
    context.write_line(keyword)?;
    context.indented(|ctx| {
        for (index, source) in sources.iter().enumerate() {
            if index > 0 {
                ctx.write_str(",\n")?;
            }
            ctx.write_indent()?;
            write_joined_source(ctx, source)?;
        }
        Ok(())
    })?;
    context.new_line()
}

fn write_joined_source<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    source: &TableSource,
) -> Result<()> {
    write_table_source(context, source)?;
    context.indented(|ctx| {
        for join in &source.joins {
            ctx.new_line()?;
            write_join(ctx, join)?;
        }
        Ok(())
    })
}

fn write_join<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    join: &Join,
) -> Result<()> {
    let nested = !join.source.joins.is_empty() && context.dialect().nested_join_parenthesis_required();

    context.write_indent()?;
    join.kind.format_writer(context)?;
    context.write_char(' ')?;
    if nested {
        context.write_char('(')?;
    }
    write_joined_source(context, &join.source)?;
    if nested {
        context.write_char(')')?;
    }
    if let Some(ref condition) = join.condition {
        context.write_str(" ON ")?;
        write_expr(context, condition, true)?;
    }
    Ok(())
}

pub fn write_where_clause<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    condition: Option<&Expr>,
) -> Result<()> {
    let Some(condition) = condition else {
        return Ok(());
    };
    context.write_line("WHERE")?;
    context.indented(|ctx| {
        ctx.write_indent()?;
        write_expr(ctx, condition, true)
    })?;
    context.new_line()
}

pub fn write_order_by_clause<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    items: &[OrderItem],
) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    context.write_line("ORDER BY")?;
    context.indented(|ctx| {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                ctx.write_str(",\n")?;
            }
            ctx.write_indent()?;
            item.format_writer(ctx)?;
        }
        Ok(())
    })?;
    context.new_line()
}

/// `LIMIT <take>` then `OFFSET <skip>`, each on its own line and each only
/// when the value is present and the dialect has a keyword for it.
pub fn write_offset_limit<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    query: &SelectQuery,
) -> Result<()> {
    let dialect = context.dialect();
    if let (Some(take), Some(keyword)) = (query.take.as_ref(), dialect.limit_keyword()) {
        context.write_indent()?;
        write!(context, "{keyword} ")?;
        write_expr(context, take, false)?;
        context.new_line()?;
    }
    if let (Some(skip), Some(keyword)) = (query.effective_skip(), dialect.offset_keyword()) {
        context.write_indent()?;
        write!(context, "{keyword} ")?;
        write_expr(context, skip, false)?;
        context.new_line()?;
    }
    Ok(())
}
