use std::fmt::Write;

use crate::{
    dialect::{ConvertType, Dialect},
    error::{Error, Result},
    query::{InsertOrUpdateQuery, InsertQuery, SetItems, Table},
    writer::FormatContext,
};

use super::expr::{write_expr, write_table_name};

pub fn write_insert<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    query: &InsertQuery,
) -> Result<()> {
    write_insert_clause(context, &query.into, &query.items)
}

/// `INSERT INTO` with its column and value lists, or the dialect's empty
/// insert body when there is no column.
pub fn write_insert_clause<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    table: &Table,
    items: &SetItems,
) -> Result<()> {
    context.write_indent()?;
    context.write_str("INSERT INTO ")?;
    write_table_name(context, table)?;
    context.new_line()?;

    if items.is_empty() {
        let dialect = context.dialect();
        return dialect.write_empty_insert(context);
    }

    context.write_line("(")?;
    context.indented(|ctx| {
        for (index, column) in items.columns().enumerate() {
            if index > 0 {
                ctx.write_str(",\n")?;
            }
            ctx.write_indent()?;
            ctx.write_name(column.as_str(), ConvertType::NameToQueryField)?;
        }
        ctx.new_line()
    })?;
    context.write_line(")")?;

    context.write_line("VALUES")?;
    context.write_line("(")?;
    context.indented(|ctx| {
        for (index, value) in items.values().enumerate() {
            if index > 0 {
                ctx.write_str(",\n")?;
            }
            ctx.write_indent()?;
            write_expr(ctx, value, true)?;
        }
        ctx.new_line()
    })?;
    context.write_line(")")
}

pub fn write_empty_insert<W: Write, D: Dialect>(context: &mut FormatContext<'_, W, D>) -> Result<()> {
    context.write_line("DEFAULT VALUES")
}

/// There is no portable insert-or-update; dialects that support one render it
/// themselves.
pub fn write_insert_or_update<W: Write, D: Dialect>(
    _context: &mut FormatContext<'_, W, D>,
    _query: &InsertOrUpdateQuery,
) -> Result<()> {
    Err(Error::Unsupported("insert or update"))
}
