//! Shared, stateless validation helpers.
//!
//! Setters funnel loosely-typed caller input through these functions so that
//! every stored field is already valid by the time a fragment is rendered.

use crate::error::{ModelError, Result};

/// Validate that `value` is a non-negative integer within the schema's
/// unsigned range.
///
/// `context` names the field being assigned and appears in the error.
pub fn validate_unsigned_int(context: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ModelError::InvalidArgument { context, value })
}

/// Coerce a boolean-like flag value to `bool`. Accepts `0` and `1` only.
pub fn validate_flag(context: &'static str, value: i64) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(ModelError::TypeMismatch {
            context,
            expected: "boolean or 0/1",
            got: value.to_string(),
        }),
    }
}

/// A boolean-coercible option value: an explicit boolean, or the integers
/// 0/1 as legacy spreadsheet APIs spell them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue {
    /// Explicit boolean
    Bool(bool),
    /// Integer form; only 0 and 1 are coercible
    Int(i64),
}

impl FlagValue {
    pub(crate) fn into_bool(self, context: &'static str) -> Result<bool> {
        match self {
            FlagValue::Bool(b) => Ok(b),
            FlagValue::Int(v) => validate_flag(context, v),
        }
    }
}

impl From<bool> for FlagValue {
    #[inline]
    fn from(v: bool) -> Self {
        FlagValue::Bool(v)
    }
}

impl From<i64> for FlagValue {
    #[inline]
    fn from(v: i64) -> Self {
        FlagValue::Int(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_unsigned_int() {
        assert_eq!(validate_unsigned_int("t", 0), Ok(0));
        assert_eq!(validate_unsigned_int("t", 42), Ok(42));
        assert!(matches!(
            validate_unsigned_int("t", -1),
            Err(ModelError::InvalidArgument { value: -1, .. })
        ));
        // Values past u32::MAX are equally out of the schema's range
        assert!(validate_unsigned_int("t", i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_validate_flag() {
        assert_eq!(validate_flag("t", 0), Ok(false));
        assert_eq!(validate_flag("t", 1), Ok(true));
        assert!(matches!(
            validate_flag("t", 2),
            Err(ModelError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_flag_value_coercion() {
        assert_eq!(FlagValue::from(true).into_bool("t"), Ok(true));
        assert_eq!(FlagValue::from(0i64).into_bool("t"), Ok(false));
        assert!(FlagValue::from(-1i64).into_bool("t").is_err());
    }
}
