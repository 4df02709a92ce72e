//! Chart series support.
//!
//! This module provides the series model shared by every concrete chart
//! kind and the minimal owning collection that assigns series indices:
//!
//! - [`Chart`] — ordered series collection, sole factory for series
//! - [`Series`] — per-series attributes and `<c:ser>` serialization
//! - [`SeriesTitle`], [`DataSourceRef`], [`ErrorBarSpec`] — series value types
//!
//! # Example
//!
//! ```
//! use longan::charts::{Chart, ErrorBarSpec, SeriesOptions};
//!
//! let mut chart = Chart::new();
//! chart.add_series(
//!     SeriesOptions::new()
//!         .with_title("Q1 Sales")
//!         .with_error_y(ErrorBarSpec::new("Sheet1!$C$2:$C$5", "Sheet1!$D$2:$D$5")),
//! )?;
//!
//! let mut xml = String::new();
//! chart.series()[0].to_xml_string(&mut xml);
//! assert!(xml.starts_with(r#"<c:ser><c:idx val="0"/>"#));
//! # Ok::<(), longan::ModelError>(())
//! ```

pub mod chart;
pub mod models;
pub mod series;

pub use chart::Chart;
pub use models::{DataSourceRef, ErrorBarSpec, SeriesTitle};
pub use series::{Series, SeriesOptions};
