use std::{fmt::Write, ops::Deref};

use crate::{
    dialect::{ConvertType, Dialect},
    error::Result,
    query::QueryType,
};

pub trait FormatWriter {
    fn format_writer<W: Write, D: Dialect>(
        &self,
        context: &mut FormatContext<'_, W, D>,
    ) -> Result<()>;
}

/// State of one render pass: the output, the dialect driving it, the current
/// indentation depth and the command being rendered.
///
/// A context is built per command and must not be shared between renders.
pub struct FormatContext<'a, W: Write, D: Dialect> {
    pub(crate) writer: &'a mut W,
    pub(crate) dialect: &'a D,
    pub(crate) indent: usize,
    pub(crate) command: usize,
    pub(crate) query_type: QueryType,
}

impl<'a, W: Write, D: Dialect> FormatContext<'a, W, D> {
    pub fn new(writer: &'a mut W, dialect: &'a D, query_type: QueryType) -> Self {
        Self {
            writer,
            dialect,
            indent: 0,
            command: 0,
            query_type,
        }
    }

    pub(crate) fn with_command(mut self, command: usize) -> Self {
        self.command = command;
        self
    }

    /// The dialect, detached from the borrow of the context so hooks can be
    /// handed `self` mutably.
    #[inline]
    pub fn dialect(&self) -> &'a D {
        self.dialect
    }

    #[inline]
    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    #[inline]
    pub fn command(&self) -> usize {
        self.command
    }

    #[inline]
    pub fn indent(&self) -> usize {
        self.indent
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.writer.write_str(s)?;
        Ok(())
    }

    #[inline]
    pub fn write_char(&mut self, c: char) -> Result<()> {
        self.writer.write_char(c)?;
        Ok(())
    }

    pub fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) -> Result<()> {
        self.writer.write_fmt(args)?;
        Ok(())
    }

    pub fn write_indent(&mut self) -> Result<()> {
        for _ in 0..self.indent {
            self.writer.write_char('\t')?;
        }
        Ok(())
    }

    pub fn new_line(&mut self) -> Result<()> {
        self.writer.write_char('\n')?;
        Ok(())
    }

    /// Write `line` at the current depth followed by a line break.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_indent()?;
        self.writer.write_str(line)?;
        self.new_line()
    }

    /// Run `f` one level deeper. The depth is restored even when `f` fails.
    pub fn indented<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.indent += 1;
        let res = f(self);
        self.indent -= 1;
        res
    }

    /// Write `value` after passing it through the dialect's name conversion.
    pub fn write_name(&mut self, value: &str, convert: ConvertType) -> Result<()> {
        let dialect = self.dialect;
        let name = dialect.convert(value, convert)?;
        self.writer.write_str(&name)?;
        Ok(())
    }
}

impl<T> FormatWriter for T
where
    T: Deref,
    T::Target: FormatWriter,
{
    fn format_writer<W: Write, D: Dialect>(
        &self,
        context: &mut FormatContext<'_, W, D>,
    ) -> Result<()> {
        self.deref().format_writer(context)
    }
}
