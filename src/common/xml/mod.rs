//! XML text utilities shared by the fragment writers.

mod casing;
mod escape;

pub use casing::lower_camel;
pub use escape::escape_xml;
