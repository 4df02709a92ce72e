//! Table style descriptor for worksheet tables.

use crate::common::xml::{escape_xml, lower_camel};
use crate::error::Result;
use crate::validation::FlagValue;

/// Default style applied when no name is supplied.
const DEFAULT_STYLE_NAME: &str = "TableStyleMedium9";

/// Options applied when constructing a [`TableStyleInfo`].
///
/// Closed record: every recognized option is a field, absent fields keep
/// their defaults. Flags accept a `bool` or the integers 0/1.
#[derive(Debug, Clone, Default)]
pub struct TableStyleOptions {
    /// Style name; defaults to `"TableStyleMedium9"`
    pub name: Option<String>,
    /// Show the first column with special formatting
    pub show_first_column: Option<FlagValue>,
    /// Show the last column with special formatting
    pub show_last_column: Option<FlagValue>,
    /// Show alternating row stripes
    pub show_row_stripes: Option<FlagValue>,
    /// Show alternating column stripes
    pub show_column_stripes: Option<FlagValue>,
}

impl TableStyleOptions {
    /// Create empty options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style name.
    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the first-column flag.
    #[inline]
    pub fn with_show_first_column(mut self, v: impl Into<FlagValue>) -> Self {
        self.show_first_column = Some(v.into());
        self
    }

    /// Set the last-column flag.
    #[inline]
    pub fn with_show_last_column(mut self, v: impl Into<FlagValue>) -> Self {
        self.show_last_column = Some(v.into());
        self
    }

    /// Set the row-stripes flag.
    #[inline]
    pub fn with_show_row_stripes(mut self, v: impl Into<FlagValue>) -> Self {
        self.show_row_stripes = Some(v.into());
        self
    }

    /// Set the column-stripes flag.
    #[inline]
    pub fn with_show_column_stripes(mut self, v: impl Into<FlagValue>) -> Self {
        self.show_column_stripes = Some(v.into());
        self
    }
}

/// Table style information for visual formatting.
///
/// All four flags are always explicitly stored. The consuming renderer
/// treats some absent attributes as "true", so every flag is emitted, never
/// omitted. Fields are declared in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyleInfo {
    show_first_column: bool,
    show_last_column: bool,
    show_row_stripes: bool,
    show_column_stripes: bool,
    name: String,
}

impl Default for TableStyleInfo {
    fn default() -> Self {
        Self {
            show_first_column: false,
            show_last_column: false,
            show_row_stripes: false,
            show_column_stripes: false,
            name: DEFAULT_STYLE_NAME.to_string(),
        }
    }
}

impl TableStyleInfo {
    /// Create a style descriptor: defaults first, then each present option
    /// applied through the same coercion as the setters.
    pub fn new(options: TableStyleOptions) -> Result<Self> {
        let mut info = Self::default();
        if let Some(name) = options.name {
            info.name = name;
        }
        if let Some(v) = options.show_first_column {
            info.show_first_column = v.into_bool("TableStyleInfo.show_first_column")?;
        }
        if let Some(v) = options.show_last_column {
            info.show_last_column = v.into_bool("TableStyleInfo.show_last_column")?;
        }
        if let Some(v) = options.show_row_stripes {
            info.show_row_stripes = v.into_bool("TableStyleInfo.show_row_stripes")?;
        }
        if let Some(v) = options.show_column_stripes {
            info.show_column_stripes = v.into_bool("TableStyleInfo.show_column_stripes")?;
        }
        Ok(info)
    }

    /// The style name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the style name. Only predefined SpreadsheetML style names render
    /// meaningfully in consumers.
    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// First-column flag.
    #[inline]
    pub fn show_first_column(&self) -> bool {
        self.show_first_column
    }

    /// Set the first-column flag from a boolean-coercible value.
    pub fn set_show_first_column(&mut self, v: impl Into<FlagValue>) -> Result<()> {
        self.show_first_column = v.into().into_bool("TableStyleInfo.show_first_column")?;
        Ok(())
    }

    /// Last-column flag.
    #[inline]
    pub fn show_last_column(&self) -> bool {
        self.show_last_column
    }

    /// Set the last-column flag from a boolean-coercible value.
    pub fn set_show_last_column(&mut self, v: impl Into<FlagValue>) -> Result<()> {
        self.show_last_column = v.into().into_bool("TableStyleInfo.show_last_column")?;
        Ok(())
    }

    /// Row-stripes flag.
    #[inline]
    pub fn show_row_stripes(&self) -> bool {
        self.show_row_stripes
    }

    /// Set the row-stripes flag from a boolean-coercible value.
    pub fn set_show_row_stripes(&mut self, v: impl Into<FlagValue>) -> Result<()> {
        self.show_row_stripes = v.into().into_bool("TableStyleInfo.show_row_stripes")?;
        Ok(())
    }

    /// Column-stripes flag.
    #[inline]
    pub fn show_column_stripes(&self) -> bool {
        self.show_column_stripes
    }

    /// Set the column-stripes flag from a boolean-coercible value.
    pub fn set_show_column_stripes(&mut self, v: impl Into<FlagValue>) -> Result<()> {
        self.show_column_stripes = v.into().into_bool("TableStyleInfo.show_column_stripes")?;
        Ok(())
    }

    // Field keys and rendered values, in declaration order. Attribute names
    // derive from these keys via lower_camel.
    fn fields(&self) -> [(&'static str, String); 5] {
        fn flag(v: bool) -> String {
            (if v { "1" } else { "0" }).to_string()
        }
        [
            ("show_first_column", flag(self.show_first_column)),
            ("show_last_column", flag(self.show_last_column)),
            ("show_row_stripes", flag(self.show_row_stripes)),
            ("show_column_stripes", flag(self.show_column_stripes)),
            ("name", escape_xml(&self.name)),
        ]
    }

    /// Serialize the descriptor, appending to `xml`.
    ///
    /// Emits one self-closing element; attribute order follows field
    /// declaration order and is stable across calls.
    pub fn to_xml_string(&self, xml: &mut String) {
        xml.push_str("<tableStyleInfo ");
        for (key, value) in self.fields() {
            xml.push_str(&lower_camel(key));
            xml.push_str("='");
            xml.push_str(&value);
            xml.push_str("' ");
        }
        xml.push_str("/>");
    }
}
