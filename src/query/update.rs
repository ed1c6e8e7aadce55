use crate::{
    expr::{Expr, IntoExpr},
    ident::IntoIdent,
};

use super::{
    from::{IntoTable, IntoTableSource, Table, TableSource},
    set::SetItems,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateQuery {
    /// Target table. Falls back to the first FROM source when unset.
    pub table: Option<Table>,
    pub from: Vec<TableSource>,
    pub items: SetItems,
    pub where_clause: Option<Expr>,
}

impl UpdateQuery {
    pub fn table<T: IntoTable>(table: T) -> Self {
        Self {
            table: Some(table.into_table()),
            ..Default::default()
        }
    }

    pub fn from<T: IntoTableSource>(&mut self, source: T) -> &mut Self {
        self.from.push(source.into_table_source());
        self
    }

    pub fn set<K, V>(&mut self, column: K, value: V) -> &mut Self
    where
        K: IntoIdent,
        V: IntoExpr,
    {
        self.items.set(column, value);
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

    /// The sources the statement reads and writes: the FROM list, led by the
    /// bare target table when the list does not already hold it.
    pub fn sources(&self) -> Vec<TableSource> {
        let mut sources = Vec::with_capacity(self.from.len() + 1);
        if let Some(ref table) = self.table {
            if super::find_table_source(&self.from, table).is_none() {
                sources.push(TableSource::new(table.clone()));
            }
        }
        sources.extend(self.from.iter().cloned());
        sources
    }

    /// The source whose columns the SET list assigns.
    pub fn target(&self) -> Option<TableSource> {
        match self.table {
            Some(ref table) => Some(
                super::find_table_source(&self.from, table)
                    .cloned()
                    .unwrap_or_else(|| TableSource::new(table.clone())),
            ),
            None => self.from.first().cloned(),
        }
    }
}
