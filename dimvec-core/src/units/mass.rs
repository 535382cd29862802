//! Mass units.
//!
//! The canonical scaling unit is the gram ([`GRAM`]` == `[`Scale::ONE`]), so
//! the whole metric prefix ladder applies directly; the kilogram is just the
//! [`Scale::KILO`] point on it.

use once_cell::sync::Lazy;

use crate::dimension::BaseUnitId;
use crate::quantity::{Numeric, Quantity};
use crate::registry;
use crate::scale::Scale;

static AXIS: Lazy<BaseUnitId> = Lazy::new(|| registry::register_base("Mass", "g"));

/// Identity of the mass axis.
pub fn mass() -> BaseUnitId {
    *AXIS
}

// ─────────────────────────────────────────────────────────────────────────────
// Scales
// ─────────────────────────────────────────────────────────────────────────────

/// Gram, the canonical scaling unit.
pub const GRAM: Scale = Scale::ONE;
/// Milligram (`1/1000 g`).
pub const MILLIGRAM: Scale = Scale::MILLI;
/// Kilogram (`1000 g`).
pub const KILOGRAM: Scale = Scale::KILO;
/// Tonne (`1e6 g`).
pub const TONNE: Scale = Scale::MEGA;

// ─────────────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────────────

/// A mass in grams.
pub fn grams<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(mass(), GRAM, value)
}

/// A mass in milligrams.
pub fn milligrams<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(mass(), MILLIGRAM, value)
}

/// A mass in kilograms.
pub fn kilograms<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(mass(), KILOGRAM, value)
}

/// A mass in tonnes.
pub fn tonnes<T: Numeric>(value: T) -> Quantity<T> {
    Quantity::base(mass(), TONNE, value)
}
