use smol_str::SmolStr;

use crate::{
    data_type::SqlDataType,
    dialect::Dialect,
    error::Result,
    ident::{Ident, IntoIdent},
    operator::{Conjunction, Operator},
    value::{IntoValue, Value},
    writer::{FormatContext, FormatWriter},
};

pub mod order;

/// A column, optionally qualified by the alias (or name) of its table source.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub table: Option<Ident>,
    pub name: Ident,
}

impl ColumnRef {
    /// `"u.id"` is read as column `id` of source `u`.
    pub fn parse(value: &str) -> Self {
        match value.rsplit_once('.') {
            Some((table, name)) if !table.is_empty() => Self {
                table: Some(Ident::new(table)),
                name: Ident::new(name),
            },
            _ => Self {
                table: None,
                name: Ident::new(value),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub lhs: Expr,
    pub operator: Operator,
    pub rhs: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column(ColumnRef),
    Parameter(Ident),
    Value(Value),
    /// Inlined verbatim.
    Raw(SmolStr),
    Binary(Box<Binary>),
    Conditions(Conjunction, Vec<Expr>),
    Not(Box<Expr>),
    IsNull { expr: Box<Expr>, negated: bool },
    Function { name: SmolStr, args: Vec<Expr> },
    Cast { expr: Box<Expr>, data_type: SqlDataType },
    Group(Box<Expr>),
}

impl Expr {
    pub fn binary<L, R>(lhs: L, operator: Operator, rhs: R) -> Self
    where
        L: IntoExpr,
        R: IntoExpr,
    {
        Expr::Binary(Box::new(Binary {
            lhs: lhs.into_expr(),
            operator,
            rhs: rhs.into_expr(),
        }))
    }

    pub fn eq<R: IntoExpr>(self, rhs: R) -> Self {
        Self::binary(self, Operator::Eq, rhs)
    }

    pub fn not_eq<R: IntoExpr>(self, rhs: R) -> Self {
        Self::binary(self, Operator::NotEq, rhs)
    }

    pub fn gt<R: IntoExpr>(self, rhs: R) -> Self {
        Self::binary(self, Operator::Gt, rhs)
    }

    pub fn lt<R: IntoExpr>(self, rhs: R) -> Self {
        Self::binary(self, Operator::Lt, rhs)
    }

    pub fn like<R: IntoExpr>(self, rhs: R) -> Self {
        Self::binary(self, Operator::Like, rhs)
    }

    pub fn add<R: IntoExpr>(self, rhs: R) -> Self {
        Self::binary(self, Operator::Add, rhs)
    }

    pub fn sub<R: IntoExpr>(self, rhs: R) -> Self {
        Self::binary(self, Operator::Sub, rhs)
    }

    pub fn mul<R: IntoExpr>(self, rhs: R) -> Self {
        Self::binary(self, Operator::Mul, rhs)
    }

    /// Flattens when `self` is already an AND list.
    pub fn and<R: IntoExpr>(self, rhs: R) -> Self {
        self.join(Conjunction::And, rhs.into_expr())
    }

    /// Flattens when `self` is already an OR list.
    pub fn or<R: IntoExpr>(self, rhs: R) -> Self {
        self.join(Conjunction::Or, rhs.into_expr())
    }

    fn join(self, conjunction: Conjunction, rhs: Expr) -> Self {
        match self {
            Expr::Conditions(current, mut items) if current == conjunction => {
                items.push(rhs);
                Expr::Conditions(conjunction, items)
            }
            lhs => Expr::Conditions(conjunction, vec![lhs, rhs]),
        }
    }

    pub fn is_null(self) -> Self {
        Expr::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    pub fn is_not_null(self) -> Self {
        Expr::IsNull {
            expr: Box::new(self),
            negated: true,
        }
    }

    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }

    pub fn cast<T: Into<SqlDataType>>(self, data_type: T) -> Self {
        Expr::Cast {
            expr: Box::new(self),
            data_type: data_type.into(),
        }
    }

    pub fn group(self) -> Self {
        Expr::Group(Box::new(self))
    }

    /// True for a literal integer zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Value(Value::I64(0) | Value::U64(0)))
    }
}

pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for ColumnRef {
    fn into_expr(self) -> Expr {
        Expr::Column(self)
    }
}

impl<T> IntoExpr for T
where
    T: IntoValue,
{
    fn into_expr(self) -> Expr {
        Expr::Value(self.into_value())
    }
}

pub fn col(value: &str) -> Expr {
    Expr::Column(ColumnRef::parse(value))
}

pub fn param<T: IntoIdent>(name: T) -> Expr {
    Expr::Parameter(name.into_ident())
}

pub fn lit<T: IntoValue>(value: T) -> Expr {
    Expr::Value(value.into_value())
}

pub fn raw<T: Into<SmolStr>>(sql: T) -> Expr {
    Expr::Raw(sql.into())
}

pub fn func<I>(name: &str, args: I) -> Expr
where
    I: IntoIterator<Item = Expr>,
{
    Expr::Function {
        name: SmolStr::new(name),
        args: args.into_iter().collect(),
    }
}

impl FormatWriter for Expr {
    fn format_writer<W: std::fmt::Write, D: Dialect>(
        &self,
        context: &mut FormatContext<'_, W, D>,
    ) -> Result<()> {
        crate::builder::expr::write_expr(context, self, true)
    }
}
