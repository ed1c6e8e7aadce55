use crate::{
    dialect::Dialect,
    error::Result,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    NotEq,
    Lt,
    Lte,
    Gt,
    Gte,
    Like,
    NotLike,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
        }
    }

    /// Binding strength, higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Mul | Operator::Div | Operator::Mod => 5,
            Operator::Add | Operator::Sub => 4,
            Operator::Eq
            | Operator::NotEq
            | Operator::Lt
            | Operator::Lte
            | Operator::Gt
            | Operator::Gte
            | Operator::Like
            | Operator::NotLike => 3,
        }
    }

    /// `a op (b op c)` equals `a op b op c`.
    pub fn is_associative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }
}

impl FormatWriter for Operator {
    fn format_writer<W: std::fmt::Write, D: Dialect>(
        &self,
        context: &mut FormatContext<'_, W, D>,
    ) -> Result<()> {
        context.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    And,
    Or,
}

impl FormatWriter for Conjunction {
    fn format_writer<W: std::fmt::Write, D: Dialect>(
        &self,
        context: &mut FormatContext<'_, W, D>,
    ) -> Result<()> {
        match self {
            Conjunction::And => context.write_str("AND"),
            Conjunction::Or => context.write_str("OR"),
        }
    }
}
