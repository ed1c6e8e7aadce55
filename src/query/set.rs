use indexmap::IndexMap;

use crate::{
    expr::{Expr, IntoExpr},
    ident::{Ident, IntoIdent},
};

/// Column assignments in the order they were given.
///
/// Setting a column twice keeps its first position and the last value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SetItems(IndexMap<Ident, Expr>);

impl SetItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<K, V>(&mut self, column: K, value: V) -> &mut Self
    where
        K: IntoIdent,
        V: IntoExpr,
    {
        self.0.insert(column.into_ident(), value.into_expr());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ident, &Expr)> {
        self.0.iter()
    }

    pub fn columns(&self) -> impl Iterator<Item = &Ident> {
        self.0.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Expr> {
        self.0.values()
    }
}

impl<K, V> FromIterator<(K, V)> for SetItems
where
    K: IntoIdent,
    V: IntoExpr,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut items = Self::new();
        for (column, value) in iter {
            items.set(column, value);
        }
        items
    }
}
