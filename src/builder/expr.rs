use std::fmt::Write;

use crate::{
    dialect::{ConvertType, Dialect},
    error::Result,
    expr::{ColumnRef, Expr},
    operator::{Conjunction, Operator},
    query::{Table, TableSource},
    writer::{FormatContext, FormatWriter},
};

/// Write `expr`. `build_table_name` asks for table qualified columns; the
/// dialect has the final say for the statement being rendered.
pub fn write_expr<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    expr: &Expr,
    build_table_name: bool,
) -> Result<()> {
    let dialect = context.dialect();
    let build_table_name = dialect.build_table_name(context.query_type(), build_table_name);

    match expr {
        Expr::Column(column) => write_column(context, column, build_table_name),
        Expr::Parameter(name) => {
            context.write_name(name.as_str(), ConvertType::NameToQueryParameter)
        }
        Expr::Value(value) => value.format_writer(context),
        Expr::Raw(sql) => context.write_str(sql),
        Expr::Binary(binary) => {
            let operator = binary.operator;
            let precedence = operator.precedence();
            // `a - (b - c)` keeps its group, `a + (b + c)` does not need one
            let strict = !(operator.is_associative()
                && matches!(binary.rhs, Expr::Binary(ref rhs) if rhs.operator == operator));

            write_operand(context, &binary.lhs, build_table_name, precedence, false)?;
            context.write_char(' ')?;
            operator.format_writer(context)?;
            context.write_char(' ')?;
            write_operand(context, &binary.rhs, build_table_name, precedence, strict)
        }
        Expr::Conditions(conjunction, items) => {
            if items.is_empty() {
                // neutral element of the conjunction
                return match conjunction {
                    Conjunction::And => context.write_str("1 = 1"),
                    Conjunction::Or => context.write_str("1 = 0"),
                };
            }
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    context.write_char(' ')?;
                    conjunction.format_writer(context)?;
                    context.write_char(' ')?;
                }
                write_operand(context, item, build_table_name, 0, false)?;
            }
            Ok(())
        }
        Expr::Not(inner) => {
            context.write_str("NOT ")?;
            write_operand(context, inner, build_table_name, 0, false)
        }
        Expr::IsNull { expr, negated } => {
            write_operand(context, expr, build_table_name, Operator::Eq.precedence(), true)?;
            if *negated {
                context.write_str(" IS NOT NULL")
            } else {
                context.write_str(" IS NULL")
            }
        }
        Expr::Function { name, args } => {
            context.write_str(name)?;
            context.write_char('(')?;
            for (index, arg) in args.iter().enumerate() {
                if index > 0 {
                    context.write_str(", ")?;
                }
                write_expr(context, arg, build_table_name)?;
            }
            context.write_char(')')
        }
        Expr::Cast { expr, data_type } => {
            context.write_str("CAST(")?;
            write_expr(context, expr, build_table_name)?;
            context.write_str(" AS ")?;
            dialect.write_data_type(context, data_type, false)?;
            context.write_char(')')
        }
        Expr::Group(inner) => {
            context.write_char('(')?;
            write_expr(context, inner, build_table_name)?;
            context.write_char(')')
        }
    }
}

/// Write `expr` as the operand of something binding with `precedence`.
///
/// Condition lists are always grouped. A binary operation is grouped when it
/// binds looser than `precedence`, or exactly as tight when `strict` is set.
fn write_operand<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    expr: &Expr,
    build_table_name: bool,
    precedence: u8,
    strict: bool,
) -> Result<()> {
    let grouped = match expr {
        Expr::Conditions(_, items) => items.len() > 1,
        Expr::Binary(binary) => {
            let inner = binary.operator.precedence();
            inner < precedence || (strict && inner == precedence)
        }
        _ => false,
    };
    if grouped {
        context.write_char('(')?;
        write_expr(context, expr, build_table_name)?;
        return context.write_char(')');
    }
    write_expr(context, expr, build_table_name)
}

pub fn write_column<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    column: &ColumnRef,
    build_table_name: bool,
) -> Result<()> {
    if let (true, Some(table)) = (build_table_name, &column.table) {
        context.write_name(table.as_str(), ConvertType::NameToQueryTableAlias)?;
        context.write_char('.')?;
    }
    context.write_name(column.name.as_str(), ConvertType::NameToQueryField)
}

/// `database.owner.name`, each part converted for its role.
pub fn write_table_name<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    table: &Table,
) -> Result<()> {
    if let Some(ref database) = table.database {
        context.write_name(database.as_str(), ConvertType::NameToDatabase)?;
        context.write_char('.')?;
    }
    if let Some(ref owner) = table.owner {
        context.write_name(owner.as_str(), ConvertType::NameToOwner)?;
        context.write_char('.')?;
    }
    context.write_name(table.name.as_str(), ConvertType::NameToQueryTable)
}

/// Table name followed by its alias, joins excluded.
pub fn write_table_source<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    source: &TableSource,
) -> Result<()> {
    write_table_name(context, &source.table)?;
    if let Some(ref alias) = source.alias {
        context.write_char(' ')?;
        context.write_name(alias.as_str(), ConvertType::NameToQueryTableAlias)?;
    }
    Ok(())
}

/// ANSI string literal: single quotes, embedded quotes doubled.
pub fn write_string<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    value: &str,
) -> Result<()> {
    context.write_char('\'')?;
    let mut last = 0;
    for (index, char) in value.char_indices() {
        if char == '\'' {
            context.write_str(&value[last..index])?;
            context.write_str("''")?;
            last = index + char.len_utf8();
        }
    }
    context.write_str(&value[last..])?;
    context.write_char('\'')
}

pub fn write_char<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    value: char,
) -> Result<()> {
    context.write_char('\'')?;
    if value == '\'' {
        context.write_str("''")?;
    } else {
        context.write_char(value)?;
    }
    context.write_char('\'')
}
