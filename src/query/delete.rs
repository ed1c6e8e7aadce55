use crate::expr::{Expr, IntoExpr};

use super::from::{IntoTable, IntoTableSource, Table, TableSource, find_table_source};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeleteQuery {
    /// Table rows are removed from, when it differs from the first source.
    pub table: Option<Table>,
    pub from: Vec<TableSource>,
    pub where_clause: Option<Expr>,
}

impl DeleteQuery {
    pub fn from<T: IntoTableSource>(source: T) -> Self {
        Self {
            from: vec![source.into_table_source()],
            ..Default::default()
        }
    }

    pub fn join_from<T: IntoTableSource>(&mut self, source: T) -> &mut Self {
        self.from.push(source.into_table_source());
        self
    }

    pub fn delete<T: IntoTable>(&mut self, table: T) -> &mut Self {
        self.table = Some(table.into_table());
        self
    }

    pub fn where_expr<T: IntoExpr>(&mut self, condition: T) -> &mut Self {
        let condition = condition.into_expr();
        self.where_clause = Some(match self.where_clause.take() {
            Some(current) => current.and(condition),
            None => condition,
        });
        self
    }

    pub fn build(&mut self) -> Self {
        std::mem::take(self)
    }

    /// The source rows are deleted from.
    ///
    /// The declared table resolves to its entry in the FROM list, or to a bare
    /// source of itself when it is not listed; with no declared table the
    /// first FROM entry is used.
    pub fn target(&self) -> Option<TableSource> {
        match self.table {
            Some(ref table) => Some(
                find_table_source(&self.from, table)
                    .cloned()
                    .unwrap_or_else(|| TableSource::new(table.clone())),
            ),
            None => self.from.first().cloned(),
        }
    }
}
