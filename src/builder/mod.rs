//! The generic renderer.
//!
//! Clause functions here emit the dialect independent form and call back into
//! the [`Dialect`] wherever a database may spell things its own way. Dialects
//! reuse them from their hook overrides.

use std::{borrow::Cow, fmt::Write};

use crate::{
    dialect::{ConvertType, Dialect},
    error::Result,
    query::Statement,
    writer::FormatContext,
};

pub mod create;
pub mod delete;
pub mod expr;
pub mod insert;
pub mod select;
pub mod update;

/// Renders statement trees with one dialect.
#[derive(Debug, Default, Clone)]
pub struct SqlBuilder<D: Dialect> {
    dialect: D,
}

impl<D: Dialect> SqlBuilder<D> {
    pub fn new(dialect: D) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Number of physical commands `statement` expands to.
    pub fn command_count(&self, statement: &Statement) -> usize {
        self.dialect.command_count(statement)
    }

    /// Write command `command` of `statement`: 0 is the statement itself,
    /// later ones are the dialect's follow-up commands.
    pub fn build_command<W: Write>(
        &self,
        statement: &Statement,
        command: usize,
        writer: &mut W,
    ) -> Result<()> {
        tracing::trace!(
            dialect = self.dialect.name(),
            query_type = ?statement.query_type(),
            command,
            "rendering sql command"
        );
        let mut context =
            FormatContext::new(writer, &self.dialect, statement.query_type()).with_command(command);
        if command == 0 {
            write_statement(&mut context, statement)
        } else {
            self.dialect.write_command(&mut context, statement, command)
        }
    }

    /// Text of the first command.
    pub fn to_sql(&self, statement: &Statement) -> Result<String> {
        let mut str = String::with_capacity(64);
        self.build_command(statement, 0, &mut str)?;
        Ok(str)
    }

    /// Text of every command, in execution order.
    pub fn build(&self, statement: &Statement) -> Result<Vec<String>> {
        let count = self.command_count(statement);
        if count > 1 {
            tracing::debug!(
                dialect = self.dialect.name(),
                query_type = ?statement.query_type(),
                count,
                "statement expands to several commands"
            );
        }
        let mut commands = Vec::with_capacity(count);
        for command in 0..count {
            let mut str = String::with_capacity(64);
            self.build_command(statement, command, &mut str)?;
            commands.push(str);
        }
        Ok(commands)
    }

    /// Convert a bare name for `convert` the way this dialect renders it.
    pub fn convert<'v>(&self, value: &'v str, convert: ConvertType) -> Result<Cow<'v, str>> {
        self.dialect.convert(value, convert)
    }
}

/// Write the main command of `statement`.
pub fn write_statement<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    statement: &Statement,
) -> Result<()> {
    let dialect = context.dialect();
    match statement {
        Statement::Select(query) => select::write_select(context, query),
        Statement::Insert(query) => insert::write_insert(context, query),
        Statement::Update(query) => update::write_update(context, query),
        Statement::Delete(query) => delete::write_delete(context, query),
        Statement::InsertOrUpdate(query) => dialect.write_insert_or_update(context, query),
        Statement::CreateTable(query) => create::write_create_table(context, query),
        Statement::DropTable(query) => create::write_drop_table(context, query),
    }
}
