//! Longan - chart series and table style XML fragment writers for OOXML
//! spreadsheets
//!
//! This library models two leaf-level pieces of a spreadsheet document and
//! serializes each to the exact XML fragment the OOXML schema requires:
//!
//! - **Chart series** (`<c:ser>`, DrawingML chart namespace): index/order
//!   resolution against the owning chart's series collection, optional title
//!   and per-axis error bars, and an extension point for concrete series
//!   kinds to inject their plot data.
//! - **Table style descriptor** (`<tableStyleInfo/>`, SpreadsheetML):
//!   explicit boolean-flag defaulting and snake_case-to-camelCase attribute
//!   name mapping.
//!
//! All serializers append to a caller-owned `String` so fragments compose
//! into a full document part without copies. Nothing here parses XML or
//! touches I/O.
//!
//! # Example - Chart series
//!
//! ```
//! use longan::charts::{Chart, SeriesOptions};
//!
//! let mut chart = Chart::new();
//! chart.add_series(SeriesOptions::new().with_title("Revenue"))?;
//!
//! let mut xml = String::new();
//! chart.series()[0].to_xml_string(&mut xml);
//! assert_eq!(
//!     xml,
//!     r#"<c:ser><c:idx val="0"/><c:order val="0"/><c:tx><c:v>Revenue</c:v></c:tx></c:ser>"#
//! );
//! # Ok::<(), longan::ModelError>(())
//! ```
//!
//! # Example - Table style
//!
//! ```
//! use longan::worksheet::{TableStyleInfo, TableStyleOptions};
//!
//! let style = TableStyleInfo::new(
//!     TableStyleOptions::new().with_show_row_stripes(true),
//! )?;
//!
//! let mut xml = String::new();
//! style.to_xml_string(&mut xml);
//! assert!(xml.contains("showRowStripes='1'"));
//! # Ok::<(), longan::ModelError>(())
//! ```

pub mod charts;
pub mod common;
pub mod error;
pub mod validation;
pub mod worksheet;

pub use charts::{Chart, DataSourceRef, ErrorBarSpec, Series, SeriesOptions, SeriesTitle};
pub use error::{ModelError, Result};
pub use validation::FlagValue;
pub use worksheet::{TableStyleInfo, TableStyleOptions};
