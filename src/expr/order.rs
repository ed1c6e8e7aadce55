use crate::{
    dialect::Dialect,
    error::Result,
    writer::{FormatContext, FormatWriter},
};

use super::{Expr, IntoExpr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ordering {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub expr: Expr,
    pub ordering: Ordering,
}

impl OrderItem {
    pub fn asc<T: IntoExpr>(expr: T) -> Self {
        Self {
            expr: expr.into_expr(),
            ordering: Ordering::Asc,
        }
    }

    pub fn desc<T: IntoExpr>(expr: T) -> Self {
        Self {
            expr: expr.into_expr(),
            ordering: Ordering::Desc,
        }
    }
}

impl FormatWriter for OrderItem {
    fn format_writer<W: std::fmt::Write, D: Dialect>(
        &self,
        context: &mut FormatContext<'_, W, D>,
    ) -> Result<()> {
        self.expr.format_writer(context)?;
        // ascending is the default and is left implicit
        if self.ordering == Ordering::Desc {
            context.write_str(" DESC")?;
        }
        Ok(())
    }
}
