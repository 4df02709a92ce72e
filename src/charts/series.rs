//! Chart series model and its XML serialization.
//!
//! A series holds the attributes common to every concrete series kind: an
//! index assigned by the owning chart, an optional plotting-order override,
//! an optional title, and optional per-axis error bars. Concrete kinds
//! inject their plot data through the children callback of
//! [`Series::to_xml_string_with`].

use crate::charts::models::{ErrorBarSpec, SeriesTitle};
use crate::common::xml::escape_xml;
use crate::error::Result;
use crate::validation::validate_unsigned_int;

/// Options applied when a series is attached to a chart.
///
/// Closed record: every recognized option is a field, absent fields keep
/// their defaults.
#[derive(Debug, Clone, Default)]
pub struct SeriesOptions {
    /// Explicit plotting order; validated like [`Series::set_order`]
    pub order: Option<i64>,
    /// Series title
    pub title: Option<SeriesTitle>,
    /// X-axis error bars
    pub error_x: Option<ErrorBarSpec>,
    /// Y-axis error bars
    pub error_y: Option<ErrorBarSpec>,
}

impl SeriesOptions {
    /// Create empty options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit plotting order.
    #[inline]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the series title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<SeriesTitle>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set X-axis error bars.
    #[inline]
    pub fn with_error_x(mut self, spec: ErrorBarSpec) -> Self {
        self.error_x = Some(spec);
        self
    }

    /// Set Y-axis error bars.
    #[inline]
    pub fn with_error_y(mut self, spec: ErrorBarSpec) -> Self {
        self.error_y = Some(spec);
        self
    }
}

/// A data series in a chart.
///
/// Created only through [`Chart::add_series`](crate::charts::Chart::add_series),
/// which assigns the index; a series does not move between charts.
#[derive(Debug, Clone)]
pub struct Series {
    index: u32,
    order: Option<u32>,
    title: Option<SeriesTitle>,
    error_x: Option<ErrorBarSpec>,
    error_y: Option<ErrorBarSpec>,
}

impl Series {
    pub(crate) fn new(index: u32, options: SeriesOptions) -> Result<Self> {
        let mut series = Self {
            index,
            order: None,
            title: options.title,
            error_x: options.error_x,
            error_y: options.error_y,
        };
        if let Some(order) = options.order {
            series.set_order(order)?;
        }
        Ok(series)
    }

    /// Zero-based position of this series in the owning chart's collection,
    /// assigned at attach time.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Plotting order: the explicit override if set, else the index.
    #[inline]
    pub fn order(&self) -> u32 {
        self.order.unwrap_or(self.index)
    }

    /// Override the plotting order. Fails with `InvalidArgument` unless the
    /// value is a non-negative integer in the schema's unsigned range.
    pub fn set_order(&mut self, order: i64) -> Result<()> {
        self.order = Some(validate_unsigned_int("Series.order", order)?);
        Ok(())
    }

    /// The series title, if one was set.
    #[inline]
    pub fn title(&self) -> Option<&SeriesTitle> {
        self.title.as_ref()
    }

    /// Set the series title from a structured title, a plain string, or a
    /// cell reference.
    #[inline]
    pub fn set_title(&mut self, title: impl Into<SeriesTitle>) {
        self.title = Some(title.into());
    }

    /// Set X-axis error bars. Repeated calls replace the spec.
    #[inline]
    pub fn set_error_x(&mut self, spec: ErrorBarSpec) {
        self.error_x = Some(spec);
    }

    /// Set Y-axis error bars. Repeated calls replace the spec.
    #[inline]
    pub fn set_error_y(&mut self, spec: ErrorBarSpec) {
        self.error_y = Some(spec);
    }

    /// Whether X-axis error bars have been set.
    #[inline]
    pub fn has_error_x(&self) -> bool {
        self.error_x.is_some()
    }

    /// Whether Y-axis error bars have been set.
    #[inline]
    pub fn has_error_y(&self) -> bool {
        self.error_y.is_some()
    }

    /// Serialize the series, appending to `xml`.
    pub fn to_xml_string(&self, xml: &mut String) {
        self.to_xml_string_with(xml, |_| {});
    }

    /// Serialize the series, letting `children` append additional child
    /// elements before the closing tag. Concrete series kinds use this to
    /// inject their plot data.
    pub fn to_xml_string_with<F>(&self, xml: &mut String, children: F)
    where
        F: FnOnce(&mut String),
    {
        let mut buf = itoa::Buffer::new();
        xml.push_str("<c:ser>");
        xml.push_str("<c:idx val=\"");
        xml.push_str(buf.format(self.index));
        xml.push_str("\"/>");
        xml.push_str("<c:order val=\"");
        // Fall back to the index even here, should the override ever be unset
        xml.push_str(buf.format(self.order.unwrap_or(self.index)));
        xml.push_str("\"/>");
        if let Some(spec) = &self.error_x {
            write_error_bars(xml, "x", spec);
        }
        if let Some(spec) = &self.error_y {
            write_error_bars(xml, "y", spec);
        }
        if let Some(title) = &self.title {
            title.to_xml_string(xml);
        }
        children(xml);
        xml.push_str("</c:ser>");
    }
}

// The plus branch carries the lower bound and the minus branch the higher
// bound. Existing consumers expect this wiring; do not swap it without
// verifying against the consuming renderer.
fn write_error_bars(xml: &mut String, direction: &str, spec: &ErrorBarSpec) {
    xml.push_str("<c:errBars>");
    xml.push_str("<c:errDir val=\"");
    xml.push_str(direction);
    xml.push_str("\"/>");
    xml.push_str("<c:errBarType val=\"both\"/>");
    xml.push_str("<c:errValType val=\"cust\"/>");
    xml.push_str("<c:noEndCap val=\"0\"/>");
    xml.push_str("<c:plus><c:numRef><c:f>");
    xml.push_str(&escape_xml(&spec.lower));
    xml.push_str("</c:f></c:numRef></c:plus>");
    xml.push_str("<c:minus><c:numRef><c:f>");
    xml.push_str(&escape_xml(&spec.higher));
    xml.push_str("</c:f></c:numRef></c:minus>");
    xml.push_str("</c:errBars>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::Chart;
    use crate::charts::models::DataSourceRef;
    use crate::error::ModelError;

    fn single_series(options: SeriesOptions) -> Series {
        let mut chart = Chart::new();
        chart.add_series(options).unwrap().clone()
    }

    #[test]
    fn test_order_defaults_to_index() {
        let mut chart = Chart::new();
        chart.add_series(SeriesOptions::new()).unwrap();
        chart.add_series(SeriesOptions::new()).unwrap();
        let series = &chart.series()[1];
        assert_eq!(series.index(), 1);
        assert_eq!(series.order(), 1);
    }

    #[test]
    fn test_order_override() {
        let mut series = single_series(SeriesOptions::new());
        series.set_order(5).unwrap();
        assert_eq!(series.order(), 5);
    }

    #[test]
    fn test_negative_order_rejected() {
        let mut series = single_series(SeriesOptions::new());
        assert!(matches!(
            series.set_order(-3),
            Err(ModelError::InvalidArgument { value: -3, .. })
        ));
        // The stored state is untouched by the failed call
        assert_eq!(series.order(), 0);
    }

    #[test]
    fn test_minimal_render() {
        let series = single_series(SeriesOptions::new());
        let mut xml = String::new();
        series.to_xml_string(&mut xml);
        assert_eq!(xml, r#"<c:ser><c:idx val="0"/><c:order val="0"/></c:ser>"#);
    }

    #[test]
    fn test_render_with_order_override() {
        let series = single_series(SeriesOptions::new().with_order(7));
        let mut xml = String::new();
        series.to_xml_string(&mut xml);
        assert_eq!(xml, r#"<c:ser><c:idx val="0"/><c:order val="7"/></c:ser>"#);
    }

    #[test]
    fn test_title_from_string_matches_structured() {
        let mut a = single_series(SeriesOptions::new());
        a.set_title("Revenue");
        let b = single_series(SeriesOptions::new().with_title(SeriesTitle::Literal(
            "Revenue".to_string(),
        )));

        let (mut xml_a, mut xml_b) = (String::new(), String::new());
        a.to_xml_string(&mut xml_a);
        b.to_xml_string(&mut xml_b);
        assert_eq!(xml_a, xml_b);
        assert!(xml_a.contains("<c:tx><c:v>Revenue</c:v></c:tx>"));
    }

    #[test]
    fn test_title_from_cell_reference() {
        let series =
            single_series(SeriesOptions::new().with_title(DataSourceRef::new("Sheet1!$B$1")));
        let mut xml = String::new();
        series.to_xml_string(&mut xml);
        assert!(xml.contains("<c:strRef><c:f>Sheet1!$B$1</c:f></c:strRef>"));
    }

    #[test]
    fn test_has_error_flags() {
        let mut series = single_series(SeriesOptions::new());
        assert!(!series.has_error_x());
        assert!(!series.has_error_y());
        series.set_error_x(ErrorBarSpec::new("", ""));
        assert!(series.has_error_x());
        assert!(!series.has_error_y());
        series.set_error_y(ErrorBarSpec::new("B1", "B2"));
        assert!(series.has_error_y());
    }

    #[test]
    fn test_error_bar_plus_minus_wiring() {
        let series = single_series(
            SeriesOptions::new().with_error_x(ErrorBarSpec::new("Sheet1!$L$1", "Sheet1!$H$1")),
        );
        let mut xml = String::new();
        series.to_xml_string(&mut xml);
        // Lower bound lands in the plus branch, higher in the minus branch
        assert_eq!(
            xml,
            concat!(
                r#"<c:ser><c:idx val="0"/><c:order val="0"/>"#,
                r#"<c:errBars><c:errDir val="x"/><c:errBarType val="both"/>"#,
                r#"<c:errValType val="cust"/><c:noEndCap val="0"/>"#,
                r#"<c:plus><c:numRef><c:f>Sheet1!$L$1</c:f></c:numRef></c:plus>"#,
                r#"<c:minus><c:numRef><c:f>Sheet1!$H$1</c:f></c:numRef></c:minus>"#,
                r#"</c:errBars></c:ser>"#
            )
        );
    }

    #[test]
    fn test_error_bars_render_in_axis_order() {
        let series = single_series(
            SeriesOptions::new()
                .with_error_x(ErrorBarSpec::new("X1", "X2"))
                .with_error_y(ErrorBarSpec::new("Y1", "Y2")),
        );
        let mut xml = String::new();
        series.to_xml_string(&mut xml);
        let x_at = xml.find(r#"<c:errDir val="x"/>"#).unwrap();
        let y_at = xml.find(r#"<c:errDir val="y"/>"#).unwrap();
        assert!(x_at < y_at);
    }

    #[test]
    fn test_children_callback_appends_before_close() {
        let series = single_series(SeriesOptions::new().with_title("Q1"));
        let mut xml = String::new();
        series.to_xml_string_with(&mut xml, |out| {
            out.push_str(r#"<c:val><c:numRef><c:f>Sheet1!$B$2:$B$5</c:f></c:numRef></c:val>"#);
        });
        assert!(xml.ends_with(
            r#"<c:val><c:numRef><c:f>Sheet1!$B$2:$B$5</c:f></c:numRef></c:val></c:ser>"#
        ));
        // Title precedes the injected children
        assert!(xml.find("<c:tx>").unwrap() < xml.find("<c:val>").unwrap());
    }

    #[test]
    fn test_render_appends_to_existing_buffer() {
        let series = single_series(SeriesOptions::new());
        let mut xml = String::from("<c:barChart>");
        series.to_xml_string(&mut xml);
        assert!(xml.starts_with("<c:barChart><c:ser>"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_order_round_trips(n in 0..=i64::from(u32::MAX)) {
                let mut series = single_series(SeriesOptions::new());
                series.set_order(n).unwrap();
                prop_assert_eq!(i64::from(series.order()), n);
            }

            #[test]
            fn prop_negative_order_always_rejected(n in i64::MIN..0) {
                let mut series = single_series(SeriesOptions::new());
                prop_assert!(series.set_order(n).is_err());
            }
        }
    }
}
