use std::fmt::Write;

use crate::{
    dialect::Dialect,
    error::Result,
    writer::{FormatContext, FormatWriter},
};

/// Semantic type tag, independent of any database spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Undefined,
    Char,
    VarChar,
    Text,
    NChar,
    NVarChar,
    NText,
    Binary,
    VarBinary,
    Blob,
    Boolean,
    Guid,
    SByte,
    Int16,
    Int32,
    Int64,
    Byte,
    UInt16,
    UInt32,
    UInt64,
    Single,
    Double,
    Decimal,
    Money,
    SmallMoney,
    Date,
    Time,
    DateTime,
    DateTime2,
    SmallDateTime,
    DateTimeOffset,
    Timestamp,
    Xml,
    Json,
}

impl DataType {
    pub fn name(self) -> &'static str {
        match self {
            DataType::Undefined => "Undefined",
            DataType::Char => "Char",
            DataType::VarChar => "VarChar",
            DataType::Text => "Text",
            DataType::NChar => "NChar",
            DataType::NVarChar => "NVarChar",
            DataType::NText => "NText",
            DataType::Binary => "Binary",
            DataType::VarBinary => "VarBinary",
            DataType::Blob => "Blob",
            DataType::Boolean => "Boolean",
            DataType::Guid => "Guid",
            DataType::SByte => "SByte",
            DataType::Int16 => "Int16",
            DataType::Int32 => "Int32",
            DataType::Int64 => "Int64",
            DataType::Byte => "Byte",
            DataType::UInt16 => "UInt16",
            DataType::UInt32 => "UInt32",
            DataType::UInt64 => "UInt64",
            DataType::Single => "Single",
            DataType::Double => "Double",
            DataType::Decimal => "Decimal",
            DataType::Money => "Money",
            DataType::SmallMoney => "SmallMoney",
            DataType::Date => "Date",
            DataType::Time => "Time",
            DataType::DateTime => "DateTime",
            DataType::DateTime2 => "DateTime2",
            DataType::SmallDateTime => "SmallDateTime",
            DataType::DateTimeOffset => "DateTimeOffset",
            DataType::Timestamp => "Timestamp",
            DataType::Xml => "Xml",
            DataType::Json => "Json",
        }
    }
}

/// A type tag with its optional size. `length` only means something for
/// sized types, `precision`/`scale` for exact numerics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SqlDataType {
    pub data_type: DataType,
    pub length: Option<u32>,
    pub precision: Option<u8>,
    pub scale: Option<u8>,
}

impl From<DataType> for SqlDataType {
    fn from(data_type: DataType) -> Self {
        Self::new(data_type)
    }
}

impl SqlDataType {
    /// Decimal(29,10), used wherever a dialect needs "a decimal".
    pub const DECIMAL: SqlDataType = SqlDataType {
        data_type: DataType::Decimal,
        length: None,
        precision: Some(29),
        scale: Some(10),
    };

    pub const fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            length: None,
            precision: None,
            scale: None,
        }
    }

    pub const fn with_length(data_type: DataType, length: u32) -> Self {
        Self {
            data_type,
            length: Some(length),
            precision: None,
            scale: None,
        }
    }

    pub const fn with_precision(data_type: DataType, precision: u8, scale: u8) -> Self {
        Self {
            data_type,
            length: None,
            precision: Some(precision),
            scale: Some(scale),
        }
    }

    /// Declared length when strictly positive.
    pub fn positive_length(&self) -> Option<u32> {
        self.length.filter(|len| *len > 0)
    }
}

/// Inline type spelling, as used inside `CAST(... AS ...)`.
impl FormatWriter for SqlDataType {
    fn format_writer<W: Write, D: Dialect>(
        &self,
        context: &mut FormatContext<'_, W, D>,
    ) -> Result<()> {
        let dialect = context.dialect();
        dialect.write_data_type(context, self, false)
    }
}

/// Dialect independent spelling of `ty`.
pub fn write_data_type<W: Write, D: Dialect>(
    context: &mut FormatContext<'_, W, D>,
    ty: &SqlDataType,
) -> Result<()> {
    let fixed = match ty.data_type {
        DataType::Double => Some("Float"),
        DataType::Single => Some("Real"),
        DataType::SByte | DataType::Byte => Some("TinyInt"),
        DataType::Int16 => Some("SmallInt"),
        DataType::Int32 | DataType::UInt16 => Some("Int"),
        DataType::Int64 | DataType::UInt32 => Some("BigInt"),
        DataType::UInt64 => Some("Decimal"),
        DataType::Boolean => Some("Bit"),
        _ => None,
    };
    if let Some(name) = fixed {
        return context.write_str(name);
    }

    context.write_str(ty.data_type.name())?;
    if let Some(length) = ty.positive_length() {
        write!(context, "({length})")?;
    } else if let Some(precision) = ty.precision.filter(|p| *p > 0) {
        write!(context, "({},{})", precision, ty.scale.unwrap_or(0))?;
    }
    Ok(())
}
