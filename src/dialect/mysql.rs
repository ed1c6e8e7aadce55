use std::{borrow::Cow, fmt::Write};

use crate::{
    builder::{
        self,
        expr::write_expr,
        insert::write_insert_clause,
        select::write_table_list,
        update::write_update_set,
    },
    config::DialectConfig,
    data_type::{self, DataType, SqlDataType},
    error::{Error, Result},
    query::{
        DeleteQuery, FieldDef, InsertOrUpdateQuery, QueryType, SelectQuery, Statement,
        TableSource, UpdateQuery,
    },
    writer::FormatContext,
};

use super::{ConvertType, Dialect};

const QUOTE: char = '`';

/// MySQL: backtick quoted names, `LIMIT skip,take` paging,
/// `ON DUPLICATE KEY UPDATE` upserts and backslash escaped literals.
#[derive(Debug, Default, Clone)]
pub struct MySqlDialect {
    config: DialectConfig,
}

impl MySqlDialect {
    pub fn new(config: DialectConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    fn sproc_parameter<'v>(&self, value: &'v str) -> Result<Cow<'v, str>> {
        if value.is_empty() {
            return Err(Error::InvalidParameterName);
        }
        let symbol = self.config.parameter_symbol;
        let prefix = self.config.sproc_parameter_prefix.as_str();
        let name = value.strip_prefix(symbol).unwrap_or(value);
        let name = name.strip_prefix(prefix).unwrap_or(name);
        Ok(Cow::Owned(format!("{symbol}{prefix}{name}")))
    }

    fn sproc_parameter_name<'v>(&self, value: &'v str) -> Cow<'v, str> {
        let mut chars = value.chars();
        let name = match chars.next() {
            Some(symbol) if self.config.is_convertible_symbol(symbol) => chars.as_str(),
            _ => value,
        };
        let prefix = self.config.sproc_parameter_prefix.as_str();
        if prefix.is_empty() {
            return Cow::Borrowed(name);
        }
        Cow::Borrowed(name.strip_prefix(prefix).unwrap_or(name))
    }
}

/// Wrap `value` in backticks unless it already starts with one. With
/// `split_path` every `.` separated segment is quoted on its own, provided the
/// first `.` is not the leading character.
fn quote_identifier(value: &str, split_path: bool) -> Cow<'_, str> {
    if value.starts_with(QUOTE) {
        return Cow::Borrowed(value);
    }
    let split_path = split_path && value.find('.').is_some_and(|index| index > 0);
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(QUOTE);
    for (index, segment) in value.split('.').enumerate() {
        if index > 0 {
            if split_path {
                quoted.push_str("`.`");
            } else {
                quoted.push('.');
            }
        }
        for char in segment.chars() {
            if char == QUOTE {
                quoted.push(QUOTE);
            }
            quoted.push(char);
        }
    }
    quoted.push(QUOTE);
    Cow::Owned(quoted)
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn convert<'v>(&self, value: &'v str, convert: ConvertType) -> Result<Cow<'v, str>> {
        let config = &self.config;
        let converted = match convert {
            ConvertType::NameToQueryParameter => {
                Cow::Owned(format!("{}{value}", config.parameter_symbol))
            }
            ConvertType::NameToCommandParameter => Cow::Owned(format!(
                "{}{}{value}",
                config.parameter_symbol, config.command_parameter_prefix
            )),
            ConvertType::NameToSprocParameter => self.sproc_parameter(value)?,
            ConvertType::SprocParameterToName => self.sproc_parameter_name(value),
            ConvertType::NameToQueryField
            | ConvertType::NameToQueryFieldAlias
            | ConvertType::NameToQueryTableAlias => quote_identifier(value, false),
            ConvertType::NameToDatabase | ConvertType::NameToOwner | ConvertType::NameToQueryTable => {
                quote_identifier(value, true)
            }
        };
        Ok(converted)
    }

    fn nested_join_parenthesis_required(&self) -> bool {
        true
    }

    fn update_set_table_alias_supported(&self) -> bool {
        true
    }

    /// Upserts never qualify columns.
    fn build_table_name(&self, query_type: QueryType, build_table_name: bool) -> bool {
        build_table_name && query_type != QueryType::InsertOrUpdate
    }

    fn command_count(&self, statement: &Statement) -> usize {
        match statement {
            Statement::Insert(insert) if insert.with_identity => 2,
            _ => 1,
        }
    }

    fn write_command<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        _statement: &Statement,
        _command: usize,
    ) -> Result<()> {
        context.write_line("SELECT LAST_INSERT_ID()")
    }

    fn write_data_type<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        ty: &SqlDataType,
        create_db_type: bool,
    ) -> Result<()> {
        match ty.data_type {
            DataType::Int32 | DataType::UInt16 | DataType::Int16 if !create_db_type => {
                context.write_str("Signed")
            }
            DataType::SByte | DataType::Byte if !create_db_type => context.write_str("Unsigned"),
            DataType::Money => context.write_str("Decimal(19,4)"),
            DataType::SmallMoney => context.write_str("Decimal(10,4)"),
            DataType::SmallDateTime | DataType::DateTime2 => context.write_str("DateTime"),
            DataType::Boolean => context.write_str("Boolean"),
            DataType::Double | DataType::Single => {
                data_type::write_data_type(context, &SqlDataType::DECIMAL)
            }
            DataType::VarChar | DataType::NVarChar => {
                context.write_str("Char")?;
                if let Some(length) = ty.positive_length() {
                    write!(context, "({length})")?;
                }
                Ok(())
            }
            _ => data_type::write_data_type(context, ty),
        }
    }

    /// `LIMIT skip,take` once an offset is present; an offset without a
    /// count gets the largest count there is.
    fn write_offset_limit<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        query: &SelectQuery,
    ) -> Result<()> {
        let Some(skip) = query.effective_skip() else {
            return builder::select::write_offset_limit(context, query);
        };
        context.write_indent()?;
        context.write_str("LIMIT ")?;
        write_expr(context, skip, false)?;
        context.write_char(',')?;
        match query.take {
            Some(ref take) => write_expr(context, take, false)?,
            None => write!(context, "{}", i64::MAX)?,
        }
        context.new_line()
    }

    fn write_from_clause<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        sources: &[TableSource],
    ) -> Result<()> {
        // the UPDATE line already lists the sources
        if context.query_type() == QueryType::Update {
            return Ok(());
        }
        builder::select::write_from_clause(context, sources)
    }

    fn write_update_clause<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        query: &UpdateQuery,
    ) -> Result<()> {
        write_table_list(context, "UPDATE", &query.sources())?;
        write_update_set(context, query)
    }

    fn write_delete_clause<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        query: &DeleteQuery,
    ) -> Result<()> {
        let Some(target) = query.target() else {
            return context.write_line("DELETE");
        };
        context.write_indent()?;
        context.write_str("DELETE ")?;
        context.write_name(target.reference_name().as_str(), ConvertType::NameToQueryTableAlias)?;
        context.new_line()
    }

    fn write_insert_or_update<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        query: &InsertOrUpdateQuery,
    ) -> Result<()> {
        write_insert_clause(context, &query.into, &query.insert)?;
        context.write_line("ON DUPLICATE KEY UPDATE")?;
        context.indented(|ctx| {
            for (index, (column, value)) in query.update.iter().enumerate() {
                if index > 0 {
                    ctx.write_str(",\n")?;
                }
                ctx.write_indent()?;
                ctx.write_name(column.as_str(), ConvertType::NameToQueryField)?;
                ctx.write_str(" = ")?;
                write_expr(ctx, value, false)?;
            }
            Ok(())
        })?;
        context.new_line()
    }

    fn write_empty_insert<W: Write>(&self, context: &mut FormatContext<'_, W, Self>) -> Result<()> {
        context.write_line("() VALUES ()")
    }

    fn write_identity_attribute<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        _field: &FieldDef,
    ) -> Result<()> {
        context.write_str("AUTO_INCREMENT")
    }

    fn write_primary_key<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        pk_name: &str,
        field_names: &[String],
    ) -> Result<()> {
        if field_names.is_empty() {
            return Ok(());
        }
        write!(
            context,
            "CONSTRAINT {pk_name} PRIMARY KEY CLUSTERED ({})",
            field_names.join(", ")
        )
    }

    fn write_string<W: Write>(
        &self,
        context: &mut FormatContext<'_, W, Self>,
        value: &str,
    ) -> Result<()> {
        if value.contains('\\') {
            let escaped = value.replace('\\', "\\\\");
            return builder::expr::write_string(context, &escaped);
        }
        builder::expr::write_string(context, value)
    }

    fn write_char<W: Write>(&self, context: &mut FormatContext<'_, W, Self>, value: char) -> Result<()> {
        if value == '\\' {
            return builder::expr::write_string(context, "\\\\");
        }
        builder::expr::write_char(context, value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Expr, Operator, SqlBuilder,
        expr::{col, lit, param},
        query::{CreateTable, InsertQuery, Table},
        tests::format_writer,
    };

    use super::*;

    fn mysql() -> MySqlDialect {
        MySqlDialect::default()
    }

    fn to_sql<T: Into<Statement>>(statement: T) -> String {
        SqlBuilder::new(mysql()).to_sql(&statement.into()).unwrap()
    }

    fn data_type(ty: SqlDataType, create_db_type: bool) -> String {
        let dialect = mysql();
        let mut out = String::new();
        let mut context = FormatContext::new(&mut out, &dialect, QueryType::Select);
        dialect.write_data_type(&mut context, &ty, create_db_type).unwrap();
        out
    }

    #[test]
    fn test_convert_parameters() {
        let dialect = mysql();
        assert_eq!("@id", dialect.convert("id", ConvertType::NameToQueryParameter).unwrap());
        assert_eq!("@id", dialect.convert("id", ConvertType::NameToCommandParameter).unwrap());

        let dialect = MySqlDialect::new(
            DialectConfig::new()
                .with_parameter_symbol('?')
                .with_command_parameter_prefix(Some("cmd_")),
        );
        assert_eq!("?id", dialect.convert("id", ConvertType::NameToQueryParameter).unwrap());
        assert_eq!("?cmd_id", dialect.convert("id", ConvertType::NameToCommandParameter).unwrap());
    }

    #[test]
    fn test_convert_sproc_parameters() {
        let dialect = MySqlDialect::new(DialectConfig::new().with_sproc_parameter_prefix(Some("p_")));
        assert_eq!("@p_id", dialect.convert("id", ConvertType::NameToSprocParameter).unwrap());
        assert_eq!("@p_id", dialect.convert("@id", ConvertType::NameToSprocParameter).unwrap());
        assert_eq!("@p_id", dialect.convert("p_id", ConvertType::NameToSprocParameter).unwrap());
        assert_eq!("@p_id", dialect.convert("@p_id", ConvertType::NameToSprocParameter).unwrap());
        assert!(matches!(
            dialect.convert("", ConvertType::NameToSprocParameter),
            Err(Error::InvalidParameterName)
        ));

        assert_eq!("id", dialect.convert("@p_id", ConvertType::SprocParameterToName).unwrap());
        assert_eq!("id", dialect.convert("p_id", ConvertType::SprocParameterToName).unwrap());
        assert_eq!(":p_id", dialect.convert(":p_id", ConvertType::SprocParameterToName).unwrap());
        assert_eq!("", dialect.convert("", ConvertType::SprocParameterToName).unwrap());
    }

    #[test]
    fn test_sproc_parameter_round_trip() {
        let configs = [
            DialectConfig::new(),
            DialectConfig::new().with_sproc_parameter_prefix(Some("p_")),
            DialectConfig::new()
                .with_parameter_symbol(':')
                .with_sproc_parameter_prefix(Some("in_")),
        ];
        for config in configs {
            let dialect = MySqlDialect::new(config);
            for name in ["id", "user_name", "x", "名前"] {
                let built = dialect.convert(name, ConvertType::NameToSprocParameter).unwrap();
                let back = dialect.convert(&built, ConvertType::SprocParameterToName).unwrap();
                assert_eq!(name, back);
            }
        }
    }

    #[test]
    fn test_sproc_parameter_alternate_symbols() {
        let config = DialectConfig::new().with_convert_parameter_symbols([':', '?']);
        let dialect = MySqlDialect::new(config.clone());
        assert_eq!(":id", dialect.convert(":id", ConvertType::SprocParameterToName).unwrap());

        let dialect = MySqlDialect::new(config.with_try_convert_parameter_symbol(true));
        assert_eq!("id", dialect.convert(":id", ConvertType::SprocParameterToName).unwrap());
        assert_eq!("id", dialect.convert("?id", ConvertType::SprocParameterToName).unwrap());
        assert_eq!("id", dialect.convert("@id", ConvertType::SprocParameterToName).unwrap());
        assert_eq!("$id", dialect.convert("$id", ConvertType::SprocParameterToName).unwrap());
    }

    #[test]
    fn test_convert_identifiers() {
        let dialect = mysql();
        for convert in [
            ConvertType::NameToQueryField,
            ConvertType::NameToQueryFieldAlias,
            ConvertType::NameToQueryTableAlias,
            ConvertType::NameToDatabase,
            ConvertType::NameToOwner,
            ConvertType::NameToQueryTable,
        ] {
            assert_eq!("`users`", dialect.convert("users", convert).unwrap());
            assert_eq!("`users`", dialect.convert("`users`", convert).unwrap());
            assert_eq!("`a``b`", dialect.convert("a`b", convert).unwrap());
        }
        assert_eq!(
            "`schema`.`table`",
            dialect.convert("schema.table", ConvertType::NameToQueryTable).unwrap()
        );
        assert_eq!(
            "`db`.`schema`.`table`",
            dialect.convert("db.schema.table", ConvertType::NameToDatabase).unwrap()
        );
        assert_eq!("`a.b`", dialect.convert("a.b", ConvertType::NameToQueryField).unwrap());
        assert_eq!(
            "`already`.`quoted`",
            dialect.convert("`already`.`quoted`", ConvertType::NameToOwner).unwrap()
        );
    }

    #[test]
    fn test_leading_dot_is_not_a_path() {
        let dialect = mysql();
        assert_eq!("`.x`", dialect.convert(".x", ConvertType::NameToQueryTable).unwrap());
        assert_eq!("`.x.y`", dialect.convert(".x.y", ConvertType::NameToOwner).unwrap());
        assert_eq!("`x`.``", dialect.convert("x.", ConvertType::NameToDatabase).unwrap());
    }

    #[test]
    fn test_quoting_is_idempotent() {
        let dialect = mysql();
        for name in ["users", "schema.table", "odd`name", ""] {
            let once = dialect.convert(name, ConvertType::NameToQueryTable).unwrap().into_owned();
            let twice = dialect.convert(&once, ConvertType::NameToQueryTable).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_data_type_cast() {
        for ty in [DataType::Int32, DataType::UInt16, DataType::Int16] {
            assert_eq!("Signed", data_type(ty.into(), false));
        }
        assert_eq!("Unsigned", data_type(DataType::SByte.into(), false));
        assert_eq!("Unsigned", data_type(DataType::Byte.into(), false));
        assert_eq!("BigInt", data_type(DataType::Int64.into(), false));
    }

    #[test]
    fn test_data_type_create() {
        assert_eq!("Int", data_type(DataType::Int32.into(), true));
        assert_eq!("Int", data_type(DataType::UInt16.into(), true));
        assert_eq!("SmallInt", data_type(DataType::Int16.into(), true));
        assert_eq!("TinyInt", data_type(DataType::SByte.into(), true));
        assert_eq!("TinyInt", data_type(DataType::Byte.into(), true));
    }

    #[test]
    fn test_data_type_fixed() {
        for create in [false, true] {
            assert_eq!("Decimal(19,4)", data_type(DataType::Money.into(), create));
            assert_eq!("Decimal(10,4)", data_type(DataType::SmallMoney.into(), create));
            assert_eq!("DateTime", data_type(DataType::SmallDateTime.into(), create));
            assert_eq!("DateTime", data_type(DataType::DateTime2.into(), create));
            assert_eq!("Boolean", data_type(DataType::Boolean.into(), create));
            assert_eq!("Decimal(29,10)", data_type(DataType::Double.into(), create));
            assert_eq!("Decimal(29,10)", data_type(DataType::Single.into(), create));
        }
        assert_eq!("DateTime", data_type(DataType::DateTime.into(), false));
        assert_eq!("Date", data_type(DataType::Date.into(), false));
        assert_eq!(
            "Decimal(12,2)",
            data_type(SqlDataType::with_precision(DataType::Decimal, 12, 2), true)
        );
    }

    #[test]
    fn test_data_type_varchar() {
        assert_eq!("Char(50)", data_type(SqlDataType::with_length(DataType::VarChar, 50), true));
        assert_eq!("Char(10)", data_type(SqlDataType::with_length(DataType::NVarChar, 10), false));
        assert_eq!("Char", data_type(SqlDataType::with_length(DataType::NVarChar, 0), false));
        assert_eq!("Char", data_type(DataType::VarChar.into(), false));
        assert_eq!("NChar(3)", data_type(SqlDataType::with_length(DataType::NChar, 3), true));
    }

    #[test]
    fn test_cast_expression() {
        let expr = col("total").cast(DataType::Int32);
        assert_eq!("CAST(`total` AS Signed)", format_writer(expr, &mysql()));
    }

    #[test]
    fn test_nested_binary_grouping() {
        let dialect = mysql();
        let expr = Expr::binary(col("a"), Operator::Mul, col("b").add(1));
        assert_eq!("`a` * (`b` + 1)", format_writer(expr, &dialect));
        let expr = Expr::binary(col("a"), Operator::Sub, Expr::binary(col("b"), Operator::Sub, col("c")));
        assert_eq!("`a` - (`b` - `c`)", format_writer(expr, &dialect));

        let update = UpdateQuery::table("accounts")
            .set("balance", col("balance").sub(param("fee").mul(col("rate").add(1))))
            .build();
        assert_eq!(
            "UPDATE\n\t`accounts`\nSET\n\t`balance` = `balance` - @fee * (`rate` + 1)\n",
            to_sql(update)
        );
    }

    #[test]
    fn test_select_quoted() {
        let query = SelectQuery::table("users as u")
            .select(col("u.id"))
            .select_as(col("u.name"), "user_name")
            .where_expr(col("u.id").eq(param("id")))
            .build();
        assert_eq!(
            "SELECT\n\
             \t`u`.`id`,\n\
             \t`u`.`name` as `user_name`\n\
             FROM\n\
             \t`users` `u`\n\
             WHERE\n\
             \t`u`.`id` = @id\n",
            to_sql(query)
        );
    }

    #[test]
    fn test_select_schema_table() {
        let table = Table::new("orders").with_database("shop").with_owner("sales.eu");
        let query = SelectQuery::table(table).build();
        assert_eq!("SELECT\n\t*\nFROM\n\t`shop`.`sales`.`eu`.`orders`\n", to_sql(query));
    }

    #[test]
    fn test_offset_limit() {
        let query = SelectQuery::table("users").take(5).build();
        assert!(to_sql(query).ends_with("FROM\n\t`users`\nLIMIT 5\n"));

        let query = SelectQuery::table("users").skip(0).build();
        assert_eq!("SELECT\n\t*\nFROM\n\t`users`\n", to_sql(query));

        let query = SelectQuery::table("users").skip(0).take(5).build();
        assert!(to_sql(query).ends_with("\nLIMIT 5\n"));

        let query = SelectQuery::table("users").skip(10).build();
        assert!(to_sql(query).ends_with("\nLIMIT 10,9223372036854775807\n"));

        let query = SelectQuery::table("users").skip(10).take(5).build();
        assert!(to_sql(query).ends_with("\nLIMIT 10,5\n"));

        let query = SelectQuery::table("users as u")
            .skip(param("skip"))
            .take(param("take"))
            .build();
        assert!(to_sql(query).ends_with("\nLIMIT @skip,@take\n"));
    }

    #[test]
    fn test_nested_join_parenthesis() {
        let nested = TableSource::new("b").cross_join("c");
        let source = TableSource::new("a").join(
            crate::query::JoinType::Inner,
            nested,
            col("a.id").eq(col("b.id")),
        );
        let query = SelectQuery::table(source).build();
        assert_eq!(
            "SELECT\n\t*\nFROM\n\t`a`\n\t\tINNER JOIN (`b`\n\t\t\tCROSS JOIN `c`) ON `a`.`id` = `b`.`id`\n",
            to_sql(query)
        );
    }

    #[test]
    fn test_insert_or_update() {
        let upsert = InsertOrUpdateQuery::into_table("users")
            .value("id", param("id"))
            .value("name", param("name"))
            .update("visits", col("users.visits").add(1))
            .update("name", param("name"))
            .build();
        assert_eq!(
            "INSERT INTO `users`\n\
             (\n\
             \t`id`,\n\
             \t`name`\n\
             )\n\
             VALUES\n\
             (\n\
             \t@id,\n\
             \t@name\n\
             )\n\
             ON DUPLICATE KEY UPDATE\n\
             \t`visits` = `visits` + 1,\n\
             \t`name` = @name\n",
            to_sql(upsert)
        );
    }

    #[test]
    fn test_insert_or_update_keeps_order() {
        let upsert = InsertOrUpdateQuery::into_table("t")
            .value("id", 1)
            .update("z", 1)
            .update("a", 2)
            .update("m", 3)
            .build();
        assert!(to_sql(upsert).ends_with("UPDATE\n\t`z` = 1,\n\t`a` = 2,\n\t`m` = 3\n"));
    }

    #[test]
    fn test_upsert_without_table_names() {
        let upsert = InsertOrUpdateQuery::into_table("t")
            .value("id", col("src.id").add(col("src.offset")))
            .update("total", col("t.total").add(col("src.total")).group())
            .build();
        let sql = to_sql(upsert);
        assert!(sql.contains("\t`id` + `offset`\n"));
        assert!(sql.contains("\t`total` = (`total` + `total`)\n"));
        assert!(!sql.contains("`src`"));
    }

    #[test]
    fn test_empty_insert() {
        let insert = InsertQuery::into_table("counters").build();
        assert_eq!("INSERT INTO `counters`\n() VALUES ()\n", to_sql(insert));
    }

    #[test]
    fn test_insert_with_identity() {
        let insert: Statement = InsertQuery::into_table("users")
            .value("name", "bob")
            .with_identity()
            .build()
            .into();
        let builder = SqlBuilder::new(mysql());
        assert_eq!(2, builder.command_count(&insert));
        let commands = builder.build(&insert).unwrap();
        assert_eq!(
            vec![
                "INSERT INTO `users`\n(\n\t`name`\n)\nVALUES\n(\n\t'bob'\n)\n".to_string(),
                "SELECT LAST_INSERT_ID()\n".to_string(),
            ],
            commands
        );

        let mut out = String::new();
        builder.build_command(&insert, 1, &mut out).unwrap();
        assert_eq!("SELECT LAST_INSERT_ID()\n", out);
    }

    #[test]
    fn test_command_count_single() {
        let builder = SqlBuilder::new(mysql());
        let statements: Vec<Statement> = vec![
            InsertQuery::into_table("users").value("name", "bob").build().into(),
            SelectQuery::table("users").build().into(),
            UpdateQuery::table("users").set("a", 1).build().into(),
            DeleteQuery::from("users").build().into(),
            InsertOrUpdateQuery::into_table("users").value("id", 1).build().into(),
        ];
        for statement in &statements {
            assert_eq!(1, builder.command_count(statement));
        }
    }

    #[test]
    fn test_update() {
        let update = UpdateQuery::table("users")
            .set("name", param("name"))
            .where_expr(col("id").eq(param("id")))
            .build();
        assert_eq!(
            "UPDATE\n\t`users`\nSET\n\t`name` = @name\nWHERE\n\t`id` = @id\n",
            to_sql(update)
        );
    }

    #[test]
    fn test_update_with_join() {
        let source = TableSource::new("orders")
            .alias("o")
            .inner_join("customers as c", col("c.id").eq(col("o.customer_id")));
        let update = UpdateQuery::table("orders")
            .from(source)
            .set("status", col("c.status"))
            .where_expr(col("c.active").eq(true))
            .build();
        assert_eq!(
            "UPDATE\n\
             \t`orders` `o`\n\
             \t\tINNER JOIN `customers` `c` ON `c`.`id` = `o`.`customer_id`\n\
             SET\n\
             \t`o`.`status` = `c`.`status`\n\
             WHERE\n\
             \t`c`.`active` = 1\n",
            to_sql(update)
        );
    }

    #[test]
    fn test_update_target_outside_from() {
        let update = UpdateQuery::table("orders")
            .from("customers as c")
            .set("status", col("c.status"))
            .build();
        assert_eq!(
            "UPDATE\n\t`orders`,\n\t`customers` `c`\nSET\n\t`status` = `c`.`status`\n",
            to_sql(update)
        );
    }

    #[test]
    fn test_from_clause_skipped_for_update_only() {
        let dialect = mysql();
        let sources = vec![TableSource::new("users")];

        let mut out = String::new();
        let mut context = FormatContext::new(&mut out, &dialect, QueryType::Update);
        dialect.write_from_clause(&mut context, &sources).unwrap();
        assert_eq!("", out);

        let mut out = String::new();
        let mut context = FormatContext::new(&mut out, &dialect, QueryType::Delete);
        dialect.write_from_clause(&mut context, &sources).unwrap();
        assert_eq!("FROM\n\t`users`\n", out);
    }

    #[test]
    fn test_delete_with_alias() {
        let delete = DeleteQuery::from("orders as o")
            .where_expr(col("o.id").eq(param("id")))
            .build();
        assert_eq!(
            "DELETE `o`\nFROM\n\t`orders` `o`\nWHERE\n\t`o`.`id` = @id\n",
            to_sql(delete)
        );
    }

    #[test]
    fn test_delete_target_resolution() {
        let source = TableSource::new("orders")
            .alias("o")
            .inner_join("customers as c", col("c.id").eq(col("o.customer_id")));
        let delete = DeleteQuery::from(source)
            .delete("customers")
            .where_expr(col("o.total").eq(0))
            .build();
        assert!(to_sql(delete).starts_with("DELETE `c`\nFROM\n\t`orders` `o`\n"));

        let delete = DeleteQuery::from("orders").delete("archive").build();
        assert!(to_sql(delete).starts_with("DELETE `archive`\n"));

        let delete = DeleteQuery::from("orders").build();
        assert_eq!("DELETE `orders`\nFROM\n\t`orders`\n", to_sql(delete));
    }

    #[test]
    fn test_create_table() {
        let create = CreateTable::new("order_lines")
            .field(FieldDef::new("order_id", DataType::Int32).primary_key(1))
            .field(FieldDef::new("line", DataType::Int16).identity().primary_key(2))
            .field(FieldDef::new("note", SqlDataType::with_length(DataType::NVarChar, 200)))
            .field(FieldDef::new("price", DataType::Money).not_null())
            .build();
        assert_eq!(
            "CREATE TABLE `order_lines`\n\
             (\n\
             \t`order_id` Int NOT NULL,\n\
             \t`line` SmallInt AUTO_INCREMENT NOT NULL,\n\
             \t`note` Char(200) NULL,\n\
             \t`price` Decimal(19,4) NOT NULL,\n\
             \tCONSTRAINT PK_order_lines PRIMARY KEY CLUSTERED (`order_id`, `line`)\n\
             )\n",
            to_sql(create)
        );
    }

    #[test]
    fn test_primary_key_single_field() {
        let dialect = mysql();
        let mut out = String::new();
        let mut context = FormatContext::new(&mut out, &dialect, QueryType::CreateTable);
        dialect
            .write_primary_key(&mut context, "PK_t", &["`id`".to_string()])
            .unwrap();
        assert_eq!("CONSTRAINT PK_t PRIMARY KEY CLUSTERED (`id`)", out);

        let mut out = String::new();
        let mut context = FormatContext::new(&mut out, &dialect, QueryType::CreateTable);
        dialect.write_primary_key(&mut context, "PK_t", &[]).unwrap();
        assert_eq!("", out);
    }

    #[test]
    fn test_backslash_escaping() {
        let dialect = mysql();
        assert_eq!("'C:\\\\temp'", format_writer(lit("C:\\temp"), &dialect));
        assert_eq!("'\\\\'", format_writer(lit('\\'), &dialect));
        assert_eq!("'it''s\\\\'", format_writer(lit("it's\\"), &dialect));
        assert_eq!("'a'", format_writer(lit('a'), &dialect));
        assert_eq!("''''", format_writer(lit('\''), &dialect));
    }
}
