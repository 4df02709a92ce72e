//! Shared data models for chart series.
//!
//! This module contains the small value types a series stores: cell range
//! references, the structured series title, and per-axis error bar bounds.

use crate::common::xml::escape_xml;

/// A reference to a data source (cell range formula).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceRef {
    /// Formula reference (e.g., "Sheet1!$A$1:$A$10")
    pub formula: String,
}

impl DataSourceRef {
    /// Create a new data source reference.
    #[inline]
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
        }
    }
}

/// Title of a series: literal text or a cell reference.
///
/// Raw strings are wrapped into the structured form at the API boundary via
/// the `From` impls; a series never stores a bare string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesTitle {
    /// Literal text
    Literal(String),
    /// Reference to a cell
    Reference(DataSourceRef),
}

impl SeriesTitle {
    /// Serialize the title block, appending to `xml`.
    pub fn to_xml_string(&self, xml: &mut String) {
        xml.push_str("<c:tx>");
        match self {
            SeriesTitle::Literal(text) => {
                xml.push_str("<c:v>");
                xml.push_str(&escape_xml(text));
                xml.push_str("</c:v>");
            },
            SeriesTitle::Reference(source_ref) => {
                xml.push_str("<c:strRef><c:f>");
                xml.push_str(&escape_xml(&source_ref.formula));
                xml.push_str("</c:f></c:strRef>");
            },
        }
        xml.push_str("</c:tx>");
    }
}

impl From<&str> for SeriesTitle {
    #[inline]
    fn from(text: &str) -> Self {
        SeriesTitle::Literal(text.to_string())
    }
}

impl From<String> for SeriesTitle {
    #[inline]
    fn from(text: String) -> Self {
        SeriesTitle::Literal(text)
    }
}

impl From<DataSourceRef> for SeriesTitle {
    #[inline]
    fn from(cell: DataSourceRef) -> Self {
        SeriesTitle::Reference(cell)
    }
}

/// Custom error bar bounds for one axis.
///
/// Both bounds are range/reference expressions; the series renders them into
/// the `c:plus` / `c:minus` branches of a `c:errBars` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBarSpec {
    /// Lower bound expression
    pub lower: String,
    /// Higher bound expression
    pub higher: String,
}

impl ErrorBarSpec {
    /// Create a new error bar spec from lower/higher expressions.
    #[inline]
    pub fn new(lower: impl Into<String>, higher: impl Into<String>) -> Self {
        Self {
            lower: lower.into(),
            higher: higher.into(),
        }
    }
}
