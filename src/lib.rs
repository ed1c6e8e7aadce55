pub mod builder;
mod config;
mod data_type;
mod dialect;
mod error;
pub mod expr;
mod ident;
mod operator;
pub mod query;
mod value;
mod writer;

pub use builder::SqlBuilder;
pub use config::DialectConfig;
pub use data_type::DataType;
pub use data_type::SqlDataType;
pub use dialect::ConvertType;
pub use dialect::Dialect;
pub use dialect::GenericDialect;
pub use dialect::MySqlDialect;
pub use error::Error;
pub use error::Result;
pub use expr::Expr;
pub use expr::IntoExpr;
pub use expr::{col, func, lit, param, raw};
pub use ident::Ident;
pub use ident::IntoIdent;
pub use operator::{Conjunction, Operator};
pub use query::Statement;
pub use value::IntoValue;
pub use value::Value;
pub use writer::FormatContext;
pub use writer::FormatWriter;
