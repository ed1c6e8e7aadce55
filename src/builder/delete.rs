use std::fmt::Write;

use crate::{dialect::Dialect, error::Result, query::DeleteQuery, writer::FormatContext};

use super::select::write_where_clause;

pub fn write_delete<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    query: &DeleteQuery,
) -> Result<()> {
    let dialect = context.dialect();
    dialect.write_delete_clause(context, query)?;
    dialect.write_from_clause(context, &query.from)?;
    write_where_clause(context, query.where_clause.as_ref())
}

pub fn write_delete_clause<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    _query: &DeleteQuery,
) -> Result<()> {
    context.write_line("DELETE")
}
