use crate::{
    expr::{Expr, IntoExpr, order::OrderItem},
    ident::{Ident, IntoIdent},
};

mod create;
mod delete;
mod from;
mod insert;
mod set;
mod update;

pub use create::{CreateTable, DropTable, FieldDef};
pub use delete::DeleteQuery;
pub use from::{IntoTable, IntoTableSource, Join, JoinType, Table, TableSource, find_table_source};
pub use insert::{InsertOrUpdateQuery, InsertQuery};
pub use set::SetItems;
pub use update::UpdateQuery;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    #[default]
    Select,
    Insert,
    Update,
    Delete,
    InsertOrUpdate,
    CreateTable,
    DropTable,
}

/// Root of a statement tree: exactly one logical operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectQuery),
    Insert(InsertQuery),
    Update(UpdateQuery),
    Delete(DeleteQuery),
    InsertOrUpdate(InsertOrUpdateQuery),
    CreateTable(CreateTable),
    DropTable(DropTable),
}

impl Statement {
    pub fn query_type(&self) -> QueryType {
        match self {
            Statement::Select(_) => QueryType::Select,
            Statement::Insert(_) => QueryType::Insert,
            Statement::Update(_) => QueryType::Update,
            Statement::Delete(_) => QueryType::Delete,
            Statement::InsertOrUpdate(_) => QueryType::InsertOrUpdate,
            Statement::CreateTable(_) => QueryType::CreateTable,
            Statement::DropTable(_) => QueryType::DropTable,
        }
    }
}

macro_rules! into_statement {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Statement {
                fn from(value: $ty) -> Self {
                    Statement::$variant(value)
                }
            }
        )+
    };
}

into_statement!(
    Select(SelectQuery),
    Insert(InsertQuery),
    Update(UpdateQuery),
    Delete(DeleteQuery),
    InsertOrUpdate(InsertOrUpdateQuery),
    CreateTable(CreateTable),
    DropTable(DropTable),
);

#[derive(Debug, Clone, PartialEq)]
pub struct SelectColumn {
    pub expr: Expr,
    pub alias: Option<Ident>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SelectQuery {
    pub distinct: bool,
    pub columns: Vec<SelectColumn>,
    pub from: Vec<TableSource>,
    pub where_clause: Option<Expr>,
    pub order_by: Vec<OrderItem>,
    pub skip: Option<Expr>,
    pub take: Option<Expr>,
}

impl SelectQuery {
    pub fn table<T: IntoTableSource>(source: T) -> Self {
        Self {
            from: vec![source.into_table_source()],
            ..Default::default()
        }
    }

    pub fn from<T: IntoTableSource>(&mut self, source: T) -> &mut Self {
        self.from.push(source.into_table_source());
        self
    }

    pub fn select<T: IntoExpr>(&mut self, expr: T) -> &mut Self {
        self.columns.push(SelectColumn {
            expr: expr.into_expr(),
            alias: None,
        });
        self
    }

    pub fn select_as<T: IntoExpr, A: IntoIdent>(&mut self, expr: T, alias: A) -> &mut Self {
        self.columns.push(SelectColumn {
            expr: expr.into_expr(),
            alias: Some(alias.into_ident()),
        });
        self
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    /// Successive calls are combined with AND.
    pub fn where_expr<T: IntoExpr>(&mut self, condition: T) -> &mut Self {
        let condition = condition.into_expr();
        self.where_clause = Some(match self.where_clause.take() {
            Some(current) => current.and(condition),
            None => condition,
        });
        self
    }

    pub fn order_by(&mut self, item: OrderItem) -> &mut Self {
        self.order_by.push(item);
        self
    }

    pub fn skip<T: IntoExpr>(&mut self, skip: T) -> &mut Self {
        self.skip = Some(skip.into_expr());
        self
    }

    pub fn take<T: IntoExpr>(&mut self, take: T) -> &mut Self {
        self.take = Some(take.into_expr());
        self
    }

    pub fn build(&mut self) -> Self {
        std::mem::take(self)
    }

    /// The offset to render. A literal zero offset skips nothing and counts as
    /// no offset at all.
    pub fn effective_skip(&self) -> Option<&Expr> {
        self.skip.as_ref().filter(|skip| !skip.is_zero())
    }
}
