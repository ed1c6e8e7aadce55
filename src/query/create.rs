use crate::{
    data_type::SqlDataType,
    ident::{Ident, IntoIdent},
};

use super::from::{IntoTable, Table};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: Ident,
    pub data_type: SqlDataType,
    pub nullable: bool,
    /// Value generated by the database on insert.
    pub identity: bool,
    /// Position inside the primary key, if the field is part of it.
    pub primary_key_order: Option<u32>,
}

impl FieldDef {
    pub fn new<N, T>(name: N, data_type: T) -> Self
    where
        N: IntoIdent,
        T: Into<SqlDataType>,
    {
        Self {
            name: name.into_ident(),
            data_type: data_type.into(),
            nullable: true,
            identity: false,
            primary_key_order: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn identity(mut self) -> Self {
        self.identity = true;
        self
    }

    pub fn primary_key(mut self, order: u32) -> Self {
        self.primary_key_order = Some(order);
        self.nullable = false;
        self
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CreateTable {
    pub table: Table,
    pub fields: Vec<FieldDef>,
}

impl CreateTable {
    pub fn new<T: IntoTable>(table: T) -> Self {
        Self {
            table: table.into_table(),
            fields: Vec::new(),
        }
    }

    pub fn field(&mut self, field: FieldDef) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn build(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Primary key fields ordered by their key position.
    pub fn primary_key(&self) -> Vec<&FieldDef> {
        let mut keys: Vec<&FieldDef> = self
            .fields
            .iter()
            .filter(|field| field.primary_key_order.is_some())
            .collect();
        keys.sort_by_key(|field| field.primary_key_order);
        keys
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DropTable {
    pub table: Table,
}

impl DropTable {
    pub fn new<T: IntoTable>(table: T) -> Self {
        Self {
            table: table.into_table(),
        }
    }
}
