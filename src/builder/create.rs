use std::fmt::Write;

use crate::{
    dialect::{ConvertType, Dialect},
    error::Result,
    query::{CreateTable, DropTable, FieldDef},
    writer::FormatContext,
};

use super::expr::write_table_name;

pub fn write_create_table<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    query: &CreateTable,
) -> Result<()> {
    let dialect = context.dialect();

    context.write_indent()?;
    context.write_str("CREATE TABLE ")?;
    write_table_name(context, &query.table)?;
    context.new_line()?;

    context.write_line("(")?;
    context.indented(|ctx| {
        for (index, field) in query.fields.iter().enumerate() {
            if index > 0 {
                ctx.write_str(",\n")?;
            }
            ctx.write_indent()?;
            write_field(ctx, field)?;
        }

        let keys = query.primary_key();
        if !keys.is_empty() {
            let mut names = Vec::with_capacity(keys.len());
            for field in keys {
                let name = dialect.convert(field.name.as_str(), ConvertType::NameToQueryField)?;
                names.push(name.into_owned());
            }
            let pk_name = format!("PK_{}", query.table.name);

            ctx.write_str(",\n")?;
            ctx.write_indent()?;
            dialect.write_primary_key(ctx, &pk_name, &names)?;
        }
        ctx.new_line()
    })?;
    context.write_line(")")
}

fn write_field<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    field: &FieldDef,
) -> Result<()> {
    let dialect = context.dialect();
    context.write_name(field.name.as_str(), ConvertType::NameToQueryField)?;
    context.write_char(' ')?;
    dialect.write_data_type(context, &field.data_type, true)?;
    if field.identity {
        context.write_char(' ')?;
        dialect.write_identity_attribute(context, field)?;
    }
    if field.nullable {
        context.write_str(" NULL")
    } else {
        context.write_str(" NOT NULL")
    }
}

pub fn write_identity_attribute<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    _field: &FieldDef,
) -> Result<()> {
    context.write_str("GENERATED BY DEFAULT AS IDENTITY")
}

pub fn write_primary_key<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    pk_name: &str,
    field_names: &[String],
) -> Result<()> {
    write!(context, "CONSTRAINT {pk_name} PRIMARY KEY ({})", field_names.join(", "))
}

pub fn write_drop_table<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    query: &DropTable,
) -> Result<()> {
    context.write_indent()?;
    context.write_str("DROP TABLE ")?;
    write_table_name(context, &query.table)?;
    context.new_line()
}
