//! Time units.
//!
//! The canonical scaling unit is the SI second ([`SECOND`]` == `[`Scale::ONE`]).
//! Calendar-flavored scales (minute, hour, day) are exact integer multiples of
//! the second, so integer payloads convert without loss between them.
//!
//! ```rust
//! use dimvec_core::units::time::{hours, MINUTE};
//!
//! let h = hours(2.0);
//! assert_eq!(h.to(MINUTE).unwrap().value(), 120.0);
//! ```

use once_cell::sync::Lazy;

use crate::dimension::BaseUnitId;
use crate::quantity::{Numeric, Quantity};
use crate::registry;
use crate::scale::Scale;

static AXIS: Lazy<BaseUnitId> = Lazy::new(|| registry::register_base("Time", "s"));

/// Identity of the time axis.
pub fn time() -> BaseUnitId {
    *AXIS
}

// ─────────────────────────────────────────────────────────────────────────────
// Scales
// ─────────────────────────────────────────────────────────────────────────────

/// Second, the canonical scaling unit.
pub const SECOND: Scale = Scale::ONE;
/// Millisecond (`1/1000 s`).
pub const MILLISECOND: Scale = Scale::MILLI;
/// Microsecond (`1e-6 s`).
pub const MICROSECOND: Scale = Scale::MICRO;
/// Minute (`60 s`).
pub const MINUTE: Scale = Scale::from_int(60);
/// Hour (`3600 s`).
pub const HOUR: Scale = Scale::from_int(3600);
/// Day (`86400 s`).
pub const DAY: Scale = Scale::from_int(86_400);

// ─────────────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────────────

/// A duration in seconds.
pub fn seconds<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(time(), SECOND, value)
}

/// A duration in milliseconds.
pub fn milliseconds<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(time(), MILLISECOND, value)
}

/// A duration in minutes.
pub fn minutes<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(time(), MINUTE, value)
}

/// A duration in hours.
pub fn hours<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(time(), HOUR, value)
}

/// A duration in days.
pub fn days<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(time(), DAY, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hours_to_minutes() {
        let h = hours(2.0);
        assert_abs_diff_eq!(h.to(MINUTE).unwrap().value(), 120.0, epsilon = 1e-12);
    }

    #[test]
    fn hours_to_minutes_integer_exact() {
        let h = hours(2i64);
        assert_eq!(h.to(MINUTE).unwrap().value(), 120);
    }

    #[test]
    fn day_to_seconds() {
        let d = days(1.0);
        assert_abs_diff_eq!(d.to(SECOND).unwrap().value(), 86_400.0, epsilon = 1e-9);
    }

    #[test]
    fn roundtrip_ms_s() {
        let original = milliseconds(1234.5);
        let back = original.to(SECOND).unwrap().to(MILLISECOND).unwrap();
        assert_abs_diff_eq!(back.value(), original.value(), epsilon = 1e-9);
    }

    #[test]
    fn mixed_scale_addition_needs_conversion() {
        use crate::Error;

        let h = hours(1.0);
        let m = minutes(30.0);
        assert_eq!(h.try_add(&m), Err(Error::ScaleMismatch));
        let sum = h.to(MINUTE).unwrap().try_add(&m).unwrap();
        assert_abs_diff_eq!(sum.value(), 90.0, epsilon = 1e-12);
    }
}
