use crate::{
    expr::IntoExpr,
    ident::IntoIdent,
};

use super::{
    from::{IntoTable, Table},
    set::SetItems,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct InsertQuery {
    pub into: Table,
    pub items: SetItems,
    /// Ask for the generated identity value once the row is in.
    pub with_identity: bool,
}

impl InsertQuery {
    pub fn into_table<T: IntoTable>(table: T) -> Self {
        Self {
            into: table.into_table(),
            ..Default::default()
        }
    }

    pub fn value<K, V>(&mut self, column: K, value: V) -> &mut Self
    where
        K: IntoIdent,
        V: IntoExpr,
    {
        self.items.set(column, value);
        self
    }

    pub fn with_identity(&mut self) -> &mut Self {
        self.with_identity = true;
        self
    }

    pub fn build(&mut self) -> Self {
        std::mem::take(self)
    }
}

/// Insert a row, or update the existing one when it collides with a key.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InsertOrUpdateQuery {
    pub into: Table,
    pub insert: SetItems,
    pub update: SetItems,
}

impl InsertOrUpdateQuery {
    pub fn into_table<T: IntoTable>(table: T) -> Self {
        Self {
            into: table.into_table(),
            ..Default::default()
        }
    }

    pub fn value<K, V>(&mut self, column: K, value: V) -> &mut Self
    where
        K: IntoIdent,
        V: IntoExpr,
    {
        self.insert.set(column, value);
        self
    }

    pub fn update<K, V>(&mut self, column: K, value: V) -> &mut Self
    where
        K: IntoIdent,
        V: IntoExpr,
    {
        self.update.set(column, value);
        self
    }

    pub fn build(&mut self) -> Self {
        std::mem::take(self)
    }
}
