//! Canonical duration type and unit conversion
//!
//! The harness reports durations as a bare magnitude plus a unit tag. All
//! conversion into the canonical nanosecond duration goes through the single
//! function [`Nanos::from_reported`].

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// The single measurement unit the converter understands.
///
/// `go test -bench` reports per-operation timings as `ns/op`. Any other tag
/// is rejected as unsupported rather than coerced.
pub const SUPPORTED_UNIT: &str = "ns/op";

/// A duration as a count of nanoseconds.
///
/// Backed by `f64`: the harness reports fractional nanosecond timings
/// (e.g. `523.7 ns/op`) and they must survive conversion exactly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Nanos(f64);

impl Nanos {
    /// Create a duration from a nanosecond count.
    pub fn from_nanos(nanos: f64) -> Self {
        Self(nanos)
    }

    /// Convert a reported measurement into the canonical duration.
    ///
    /// For [`SUPPORTED_UNIT`] the conversion is the identity. Every other
    /// unit fails with [`Error::UnsupportedUnit`].
    pub fn from_reported(value: f64, unit: &str) -> Result<Self> {
        if unit == SUPPORTED_UNIT {
            Ok(Self(value))
        } else {
            Err(Error::UnsupportedUnit {
                unit: unit.to_string(),
            })
        }
    }

    /// The duration as a (possibly fractional) count of nanoseconds.
    pub fn as_nanos(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Nanos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanos_identity_conversion() {
        // ns/op is the canonical unit, so conversion must be exact.
        for value in [0.0, 1.0, 523.7, 1612.0, 2.5e9] {
            let nanos = Nanos::from_reported(value, "ns/op").unwrap();
            assert_eq!(nanos.as_nanos(), value);
        }
    }

    #[test]
    fn test_unsupported_unit() {
        for unit in ["us/op", "ms", "ns", "B/op", ""] {
            let err = Nanos::from_reported(100.0, unit).unwrap_err();
            match err {
                Error::UnsupportedUnit { unit: reported } => assert_eq!(reported, unit),
                other => panic!("expected UnsupportedUnit, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Nanos::from_nanos(523.7).to_string(), "523.7ns");
        assert_eq!(Nanos::from_nanos(1612.0).to_string(), "1612ns");
    }
}
