//! Dialect policies.
//!
//! The generic renderer in [`crate::builder`] walks a statement and asks the
//! dialect at every point where databases disagree. Every hook has a default
//! that renders the dialect independent form, so a dialect only overrides
//! what it spells differently.

use std::{borrow::Cow, fmt::Write};

use crate::{
    builder,
    data_type::{self, SqlDataType},
    error::Result,
    query::{
        DeleteQuery, FieldDef, InsertOrUpdateQuery, QueryType, SelectQuery, Statement,
        TableSource, UpdateQuery,
    },
    writer::FormatContext,
};

mod generic;
mod mysql;

pub use generic::GenericDialect;
pub use mysql::MySqlDialect;

/// What a name is about to be used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertType {
    NameToQueryParameter,
    NameToCommandParameter,
    NameToSprocParameter,
    SprocParameterToName,
    NameToQueryField,
    NameToQueryFieldAlias,
    NameToQueryTableAlias,
    NameToDatabase,
    NameToOwner,
    NameToQueryTable,
}

pub trait Dialect: Sized {
    fn name(&self) -> &'static str;

    /// Turn `value` into its spelling for the given purpose. Unhandled
    /// purposes return the value untouched.
    fn convert<'v>(&self, value: &'v str, _convert: ConvertType) -> Result<Cow<'v, str>> {
        Ok(Cow::Borrowed(value))
    }

    /// Keyword of the single value row limit clause.
    fn limit_keyword(&self) -> Option<&'static str> {
        Some("LIMIT")
    }

    /// Keyword of the row offset clause.
    fn offset_keyword(&self) -> Option<&'static str> {
        Some("OFFSET")
    }

    /// Wrap a joined source that has joins of its own in parentheses.
    fn nested_join_parenthesis_required(&self) -> bool {
        false
    }

    /// Qualify SET columns with their table alias.
    fn update_set_table_alias_supported(&self) -> bool {
        false
    }

    /// Whether column references get their table qualifier, given what the
    /// caller asked for and the statement being rendered.
    fn build_table_name(&self, _query_type: QueryType, build_table_name: bool) -> bool {
        build_table_name
    }

    /// Number of physical commands a statement renders to.
    fn command_count(&self, _statement: &Statement) -> usize {
        1
    }

    /// Text of a follow-up command (1 based index) of a statement.
    fn write_command<W: Write>(
        &self,
        _context: &mut FormatContext<'_, W, Self>,
        _statement: &Statement,
        _command: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// The flag is set for column definitions, unset for inline casts.
    fn write_data_type<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        ty: &SqlDataType,
        _create_db_type: bool,
    ) -> Result<()> {
        data_type::write_data_type(context, ty)
    }

    fn write_offset_limit<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        query: &SelectQuery,
    ) -> Result<()> {
        builder::select::write_offset_limit(context, query)
    }

    fn write_from_clause<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        sources: &[TableSource],
    ) -> Result<()> {
        builder::select::write_from_clause(context, sources)
    }

    fn write_update_clause<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        query: &UpdateQuery,
    ) -> Result<()> {
        builder::update::write_update_clause(context, query)
    }

    fn write_delete_clause<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        query: &DeleteQuery,
    ) -> Result<()> {
        builder::delete::write_delete_clause(context, query)
    }

    fn write_insert_or_update<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        query: &InsertOrUpdateQuery,
    ) -> Result<()> {
        builder::insert::write_insert_or_update(context, query)
    }

    /// Body of an insert that names no column.
    fn write_empty_insert<W: Write>(&self, context: &mut FormatContext<'_, W, Self>) -> Result<()> {
        builder::insert::write_empty_insert(context)
    }

    fn write_identity_attribute<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        field: &FieldDef,
    ) -> Result<()> {
        builder::create::write_identity_attribute(context, field)
    }

    /// `field_names` holds at least one already converted name.
    fn write_primary_key<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        pk_name: &str,
        field_names: &[String],
    ) -> Result<()> {
        builder::create::write_primary_key(context, pk_name, field_names)
    }

    fn write_string<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        value: &str,
    ) -> Result<()> {
        builder::expr::write_string(context, value)
    }

    fn write_char<W: Write>(&self, context: &mut FormatContext<'_, W, Self>, value: char) -> Result<()> {
        builder::expr::write_char(context, value)
    }
}
