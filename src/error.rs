use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A stored procedure parameter name was built from an empty name.
    #[error("argument 'value' must represent parameter name")]
    InvalidParameterName,

    /// The statement shape has no portable rendering for this dialect.
    #[error("{0} is not supported by this dialect")]
    Unsupported(&'static str),

    #[error("failed to write sql: {0}")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
