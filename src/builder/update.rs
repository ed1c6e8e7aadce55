use std::fmt::Write;

use crate::{
    dialect::Dialect,
    error::Result,
    expr::ColumnRef,
    query::UpdateQuery,
    writer::FormatContext,
};

use super::{
    expr::{write_column, write_expr, write_table_source},
    select::write_where_clause,
};

pub fn write_update<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    query: &UpdateQuery,
) -> Result<()> {
    let dialect = context.dialect();
    dialect.write_update_clause(context, query)?;
    dialect.write_from_clause(context, &query.from)?;
    write_where_clause(context, query.where_clause.as_ref())
}

/// `UPDATE` with the target table, then the SET list.
pub fn write_update_clause<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    query: &UpdateQuery,
) -> Result<()> {
    context.write_line("UPDATE")?;
    if let Some(target) = query.target() {
        context.indented(|ctx| {
            ctx.write_indent()?;
            write_table_source(ctx, &target)
        })?;
        context.new_line()?;
    }
    write_update_set(context, query)
}

pub fn write_update_set<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    query: &UpdateQuery,
) -> Result<()> {
    let qualify = context.dialect().update_set_table_alias_supported();
    let alias = query.target().and_then(|target| target.alias);

    context.write_line("SET")?;
    context.indented(|ctx| {
        for (index, (column, value)) in query.items.iter().enumerate() {
            if index > 0 {
                ctx.write_str(",\n")?;
            }
            ctx.write_indent()?;
            let column = ColumnRef {
                table: alias.clone(),
                name: column.clone(),
            };
            write_column(ctx, &column, qualify)?;
            ctx.write_str(" = ")?;
            write_expr(ctx, value, true)?;
        }
        Ok(())
    })?;
    context.new_line()
}
