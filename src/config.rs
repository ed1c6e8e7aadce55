use smol_str::SmolStr;

/// Naming configuration for parameters rendered by a dialect.
///
/// The value is handed to the dialect when it is constructed and read on every
/// conversion afterwards, so two dialects with different configurations can
/// render side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DialectConfig {
    /// Marker placed in front of every parameter name.
    pub parameter_symbol: char,
    /// Accept any of `convert_parameter_symbols` as a marker when reading a
    /// stored procedure parameter name back.
    pub try_convert_parameter_symbol: bool,
    pub convert_parameter_symbols: Vec<char>,
    /// Inserted between the marker and the name of command parameters.
    pub command_parameter_prefix: SmolStr,
    /// Inserted between the marker and the name of stored procedure parameters.
    pub sproc_parameter_prefix: SmolStr,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            parameter_symbol: '@',
            try_convert_parameter_symbol: false,
            convert_parameter_symbols: Vec::new(),
            command_parameter_prefix: SmolStr::default(),
            sproc_parameter_prefix: SmolStr::default(),
        }
    }
}

impl DialectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter_symbol(mut self, symbol: char) -> Self {
        self.parameter_symbol = symbol;
        self
    }

    pub fn with_try_convert_parameter_symbol(mut self, enabled: bool) -> Self {
        self.try_convert_parameter_symbol = enabled;
        self
    }

    pub fn with_convert_parameter_symbols<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.convert_parameter_symbols = symbols.into_iter().collect();
        self
    }

    /// `None` and `""` both clear the prefix.
    pub fn with_command_parameter_prefix<T>(mut self, prefix: Option<T>) -> Self
    where
        T: Into<SmolStr>,
    {
        self.command_parameter_prefix = prefix.map(Into::into).unwrap_or_default();
        self
    }

    /// `None` and `""` both clear the prefix.
    pub fn with_sproc_parameter_prefix<T>(mut self, prefix: Option<T>) -> Self
    where
        T: Into<SmolStr>,
    {
        self.sproc_parameter_prefix = prefix.map(Into::into).unwrap_or_default();
        self
    }

    pub(crate) fn is_convertible_symbol(&self, symbol: char) -> bool {
        symbol == self.parameter_symbol
            || (self.try_convert_parameter_symbol && self.convert_parameter_symbols.contains(&symbol))
    }
}
