use smol_str::SmolStr;

use crate::{
    dialect::Dialect,
    error::Result,
    writer::{FormatContext, FormatWriter},
};

/// A literal value inlined into the statement text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    /// Exact numeric kept as text so no precision is lost. Inlined as is,
    /// like [`raw`](crate::raw); build it with [`Value::decimal`] to have the
    /// text checked.
    Decimal(SmolStr),
    String(SmolStr),
    Char(char),
    Bytes(Vec<u8>),
    #[cfg(feature = "chrono")]
    DateTime(chrono::NaiveDateTime),
    #[cfg(feature = "chrono")]
    Date(chrono::NaiveDate),
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),
}

impl Value {
    /// A decimal literal from `text`, or `None` unless it reads as an
    /// optionally signed number with an optional fractional part.
    pub fn decimal<T: Into<SmolStr>>(text: T) -> Option<Self> {
        let text = text.into();
        let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text.as_str());
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !digits(whole) || !digits(fraction) || unsigned.ends_with('.') {
            return None;
        }
        Some(Value::Decimal(text))
    }
}

pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl<T> IntoValue for Option<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        if let Some(value) = self {
            value.into_value()
        } else {
            Value::Null
        }
    }
}

macro_rules! into_value {
    ($variant:ident as $target:ty => $($ty:ty),+) => {
        $(
            impl IntoValue for $ty {
                #[inline]
                fn into_value(self) -> Value {
                    Value::$variant(<$target>::from(self))
                }
            }
        )+
    };
}

into_value!(I64 as i64 => i8, i16, i32, i64);
into_value!(U64 as u64 => u8, u16, u32, u64);
into_value!(F64 as f64 => f32, f64);
into_value!(String as SmolStr => &str, String, SmolStr);

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::Char(self)
    }
}

impl IntoValue for Vec<u8> {
    fn into_value(self) -> Value {
        Value::Bytes(self)
    }
}

#[cfg(feature = "chrono")]
impl IntoValue for chrono::NaiveDateTime {
    fn into_value(self) -> Value {
        Value::DateTime(self)
    }
}

#[cfg(feature = "chrono")]
impl IntoValue for chrono::NaiveDate {
    fn into_value(self) -> Value {
        Value::Date(self)
    }
}

#[cfg(feature = "uuid")]
impl IntoValue for uuid::Uuid {
    fn into_value(self) -> Value {
        Value::Uuid(self)
    }
}

impl FormatWriter for Value {
    fn format_writer<W: std::fmt::Write, D: Dialect>(
        &self,
        context: &mut FormatContext<'_, W, D>,
    ) -> Result<()> {
        let dialect = context.dialect();
        match self {
            Value::Null => context.write_str("NULL"),
            Value::Bool(value) => context.write_char(if *value { '1' } else { '0' }),
            Value::I64(value) => write!(context, "{value}"),
            Value::U64(value) => write!(context, "{value}"),
            Value::F64(value) => write!(context, "{value}"),
            Value::Decimal(value) => context.write_str(value),
            Value::String(value) => dialect.write_string(context, value),
            Value::Char(value) => dialect.write_char(context, *value),
            Value::Bytes(bytes) => {
                context.write_str("0x")?;
                for byte in bytes {
                    write!(context.writer, "{byte:02X}")?;
                }
                Ok(())
            }
            #[cfg(feature = "chrono")]
            Value::DateTime(value) => {
                let text = value.format("%Y-%m-%d %H:%M:%S%.3f").to_string();
                dialect.write_string(context, &text)
            }
            #[cfg(feature = "chrono")]
            Value::Date(value) => {
                let text = value.format("%Y-%m-%d").to_string();
                dialect.write_string(context, &text)
            }
            #[cfg(feature = "uuid")]
            Value::Uuid(value) => {
                let text = value.hyphenated().to_string();
                dialect.write_string(context, &text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{GenericDialect, tests::format_writer};

    use super::*;

    #[test]
    fn test_format_scalars() {
        let dialect = GenericDialect::new();
        assert_eq!("NULL", format_writer(&Value::Null, &dialect));
        assert_eq!("NULL", format_writer(&None::<i32>.into_value(), &dialect));
        assert_eq!("1", format_writer(&true.into_value(), &dialect));
        assert_eq!("0", format_writer(&false.into_value(), &dialect));
        assert_eq!("-42", format_writer(&(-42_i16).into_value(), &dialect));
        assert_eq!("18446744073709551615", format_writer(&u64::MAX.into_value(), &dialect));
        assert_eq!("1.5", format_writer(&1.5_f64.into_value(), &dialect));
        assert_eq!(
            "12.3400",
            format_writer(&Value::Decimal(SmolStr::new_static("12.3400")), &dialect)
        );
    }

    #[test]
    fn test_format_text() {
        let dialect = GenericDialect::new();
        assert_eq!("'it''s'", format_writer(&"it's".into_value(), &dialect));
        assert_eq!("'x'", format_writer(&'x'.into_value(), &dialect));
        assert_eq!("''''", format_writer(&'\''.into_value(), &dialect));
    }

    #[test]
    fn test_decimal_checked() {
        let dialect = GenericDialect::new();
        for text in ["12.3400", "-1", "+0.5", ".25", "7"] {
            let value = Value::decimal(text).unwrap();
            assert_eq!(text, format_writer(&value, &dialect));
        }
        for text in ["", "-", ".", "1.", "1.2.3", "1e5", "1; DROP TABLE t", "0x10"] {
            assert!(Value::decimal(text).is_none(), "{text}");
        }
    }

    #[test]
    fn test_format_bytes() {
        let dialect = GenericDialect::new();
        let bytes = vec![0x00, 0xAB, 0x10].into_value();
        assert_eq!("0x00AB10", format_writer(&bytes, &dialect));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_format_datetime() {
        let dialect = GenericDialect::new();
        let value = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_milli_opt(3, 4, 5, 60))
            .unwrap()
            .into_value();
        assert_eq!("'2024-01-02 03:04:05.060'", format_writer(&value, &dialect));
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_format_uuid() {
        let dialect = GenericDialect::new();
        let value = uuid::Uuid::nil().into_value();
        assert_eq!(
            "'00000000-0000-0000-0000-000000000000'",
            format_writer(&value, &dialect)
        );
    }
}
