//! Length units.
//!
//! The canonical scaling unit for this dimension is the metre
//! ([`METER`]` == `[`Scale::ONE`]); every other length scale is an exact
//! ratio to metres. The base unit registers itself the first time anything in
//! this module is touched.
//!
//! ```rust
//! use dimvec_core::units::length::{kilometers, METER};
//!
//! let km = kilometers(1.5);
//! assert_eq!(km.to(METER).unwrap().value(), 1500.0);
//! ```

use once_cell::sync::Lazy;

use crate::dimension::BaseUnitId;
use crate::quantity::{Numeric, Quantity};
use crate::registry;
use crate::scale::Scale;

static AXIS: Lazy<BaseUnitId> = Lazy::new(|| registry::register_base("Length", "m"));

/// Identity of the length axis.
pub fn length() -> BaseUnitId {
    *AXIS
}

// ─────────────────────────────────────────────────────────────────────────────
// Scales
// ─────────────────────────────────────────────────────────────────────────────

/// Metre, the canonical scaling unit.
pub const METER: Scale = Scale::ONE;
/// Kilometre (`1000 m`).
pub const KILOMETER: Scale = Scale::KILO;
/// Centimetre (`1/100 m`).
pub const CENTIMETER: Scale = Scale::CENTI;
/// Millimetre (`1/1000 m`).
pub const MILLIMETER: Scale = Scale::MILLI;
/// Micrometre (`1e-6 m`).
pub const MICROMETER: Scale = Scale::MICRO;
/// Nanometre (`1e-9 m`).
pub const NANOMETER: Scale = Scale::NANO;

// ─────────────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────────────

/// A length in metres.
pub fn meters<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(length(), METER, value)
}

/// A length in kilometres.
pub fn kilometers<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(length(), KILOMETER, value)
}

/// A length in centimetres.
pub fn centimeters<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(length(), CENTIMETER, value)
}

/// A length in millimetres.
pub fn millimeters<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(length(), MILLIMETER, value)
}
