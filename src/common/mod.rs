//! Utilities shared across the chart and worksheet modules.

pub mod xml;
