use crate::{
    dialect::Dialect,
    error::Result,
    expr::{Expr, IntoExpr},
    ident::{Ident, IntoIdent, split_alias},
    writer::{FormatContext, FormatWriter},
};

/// A physical table, optionally qualified by database and owner.
///
/// `name` may itself be a dotted path, which the dialect quotes per segment.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    pub database: Option<Ident>,
    pub owner: Option<Ident>,
    pub name: Ident,
}

impl Table {
    pub fn new<T: IntoIdent>(name: T) -> Self {
        Self {
            database: None,
            owner: None,
            name: name.into_ident(),
        }
    }

    pub fn with_database<T: IntoIdent>(mut self, database: T) -> Self {
        self.database = Some(database.into_ident());
        self
    }

    pub fn with_owner<T: IntoIdent>(mut self, owner: T) -> Self {
        self.owner = Some(owner.into_ident());
        self
    }
}

pub trait IntoTable {
    fn into_table(self) -> Table;
}

impl IntoTable for Table {
    fn into_table(self) -> Table {
        self
    }
}

impl IntoTable for &str {
    fn into_table(self) -> Table {
        Table::new(self)
    }
}

impl IntoTable for String {
    fn into_table(self) -> Table {
        Table::new(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl FormatWriter for JoinType {
    fn format_writer<W: std::fmt::Write, D: Dialect>(
        &self,
        context: &mut FormatContext<'_, W, D>,
    ) -> Result<()> {
        match self {
            JoinType::Inner => context.write_str("INNER JOIN"),
            JoinType::Left => context.write_str("LEFT JOIN"),
            JoinType::Right => context.write_str("RIGHT JOIN"),
            JoinType::Full => context.write_str("FULL JOIN"),
            JoinType::Cross => context.write_str("CROSS JOIN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinType,
    pub source: TableSource,
    /// Absent for cross joins.
    pub condition: Option<Expr>,
}

/// One entry of a FROM list: a table, its alias and the joins hanging off it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSource {
    pub table: Table,
    pub alias: Option<Ident>,
    pub joins: Vec<Join>,
}

impl TableSource {
    pub fn new<T: IntoTable>(table: T) -> Self {
        Self {
            table: table.into_table(),
            alias: None,
            joins: Vec::new(),
        }
    }

    pub fn alias<T: IntoIdent>(mut self, alias: T) -> Self {
        self.alias = Some(alias.into_ident());
        self
    }

    pub fn join<S, C>(mut self, kind: JoinType, source: S, condition: C) -> Self
    where
        S: IntoTableSource,
        C: IntoExpr,
    {
        self.joins.push(Join {
            kind,
            source: source.into_table_source(),
            condition: Some(condition.into_expr()),
        });
        self
    }

    pub fn inner_join<S, C>(self, source: S, condition: C) -> Self
    where
        S: IntoTableSource,
        C: IntoExpr,
    {
        self.join(JoinType::Inner, source, condition)
    }

    pub fn left_join<S, C>(self, source: S, condition: C) -> Self
    where
        S: IntoTableSource,
        C: IntoExpr,
    {
        self.join(JoinType::Left, source, condition)
    }

    pub fn cross_join<S: IntoTableSource>(mut self, source: S) -> Self {
        self.joins.push(Join {
            kind: JoinType::Cross,
            source: source.into_table_source(),
            condition: None,
        });
        self
    }

    /// The name the rest of the statement refers to this source by: the alias
    /// when there is one, the table name otherwise.
    pub fn reference_name(&self) -> &Ident {
        self.alias.as_ref().unwrap_or(&self.table.name)
    }
}

pub trait IntoTableSource {
    fn into_table_source(self) -> TableSource;
}

impl IntoTableSource for TableSource {
    fn into_table_source(self) -> TableSource {
        self
    }
}

impl IntoTableSource for Table {
    fn into_table_source(self) -> TableSource {
        TableSource::new(self)
    }
}

/// `"users as u"` gives table `users` aliased `u`.
impl IntoTableSource for &str {
    fn into_table_source(self) -> TableSource {
        let (table, alias) = split_alias(self);
        let source = TableSource::new(table);
        match alias {
            Some(alias) => source.alias(alias),
            None => source,
        }
    }
}

/// Find the source of `table` in a FROM list, joins included.
pub fn find_table_source<'a>(sources: &'a [TableSource], table: &Table) -> Option<&'a TableSource> {
    for source in sources {
        if source.table == *table {
            return Some(source);
        }
        for join in &source.joins {
            if let Some(found) = find_table_source(std::slice::from_ref(&join.source), table) {
                return Some(found);
            }
        }
    }
    None
}
