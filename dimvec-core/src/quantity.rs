//! Dimensioned, scaled quantities.
//!
//! A [`Quantity`] combines a canonical [`DimVec`], a [`Scale`], and a numeric
//! payload. Multiplication and division derive the result's dimension and
//! scale from the operands; addition, subtraction, and comparison demand
//! identical dimension *and* scale — the engine never converts implicitly, a
//! lossy rescale must be asked for via [`Quantity::to`].
//!
//! ```rust
//! use dimvec_core::{registry, Quantity, Scale};
//!
//! let time = registry::register_base("Time", "s");
//! let hours = Quantity::base(time, Scale::from_int(3600), 2.0);
//! let minutes = hours.to(Scale::from_int(60)).unwrap();
//! assert_eq!(minutes.value(), 120.0);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dimension::{BaseUnitId, Dimension};
use crate::error::{Error, Result};
use crate::registry::{self, UnitRepr};
use crate::scale::Scale;
use crate::vector::DimVec;

/// Numeric payload types a [`Quantity`] can carry.
///
/// The only requirement beyond ordinary arithmetic is constructing a value
/// from one `u64` half of a rational conversion factor, so that
/// [`Quantity::to`] can compute `value * num / den` in the payload's own
/// arithmetic — exact multiply-then-divide for integers, IEEE-754 for floats.
pub trait Numeric:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Converts one component of a scale factor into this payload type.
    ///
    /// May be lossy for narrow types (`as`-cast semantics).
    fn from_scale_part(part: u64) -> Self;
}

impl Numeric for f64 {
    fn from_scale_part(part: u64) -> f64 {
        part as f64
    }
}

impl Numeric for f32 {
    fn from_scale_part(part: u64) -> f32 {
        part as f32
    }
}

impl Numeric for i64 {
    fn from_scale_part(part: u64) -> i64 {
        part as i64
    }
}

impl Numeric for i128 {
    fn from_scale_part(part: u64) -> i128 {
        part as i128
    }
}

impl Numeric for u64 {
    fn from_scale_part(part: u64) -> u64 {
        part
    }
}

/// A numeric value of a given dimension, expressed at a given scale.
///
/// A plain value type: no shared state, freely `Clone`. Structural equality
/// (`PartialEq`) requires identical dimension, scale, and payload; use
/// [`Quantity::try_cmp`] for ordering with dimension checking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity<T: Numeric> {
    dims: DimVec,
    scale: Scale,
    value: T,
}

impl<T: Numeric> Quantity<T> {
    /// Creates a quantity from its parts.
    pub fn new(dims: DimVec, scale: Scale, value: T) -> Quantity<T> {
        Quantity { dims, scale, value }
    }

    /// A quantity of a single base unit at rank 1.
    pub fn base(unit: BaseUnitId, scale: Scale, value: T) -> Quantity<T> {
        Quantity {
            dims: DimVec::single(Dimension::new(unit, 1)),
            scale,
            value,
        }
    }

    /// A dimensionless scalar at the identity scale.
    ///
    /// Multiplying or dividing by it never changes the other operand's
    /// dimension or scale.
    pub fn scalar(value: T) -> Quantity<T> {
        Quantity {
            dims: DimVec::empty(),
            scale: Scale::ONE,
            value,
        }
    }

    /// The canonical dimension vector.
    pub fn dims(&self) -> &DimVec {
        &self.dims
    }

    /// The scale this value is expressed at.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// The raw payload.
    pub fn value(&self) -> T {
        self.value
    }

    /// The canonical representation of this quantity's dimension (memoized).
    pub fn resolve(&self) -> UnitRepr {
        registry::resolve(&self.dims)
    }

    /// Re-expresses the value at another scale of the same dimension.
    ///
    /// The payload becomes `value * factor.num / factor.den` where
    /// `factor = scale / target`, evaluated in the payload type's own
    /// arithmetic: exact for integer payloads when the caller picks scales
    /// that keep it exact, truncating otherwise.
    pub fn to(&self, target: Scale) -> Result<Quantity<T>> {
        let factor = self.scale.div(target)?;
        let value =
            self.value * T::from_scale_part(factor.num()) / T::from_scale_part(factor.den());
        Ok(Quantity {
            dims: self.dims.clone(),
            scale: target,
            value,
        })
    }

    /// Multiplies two quantities: dimensions merge-multiply, scales multiply,
    /// payloads multiply.
    ///
    /// The result stays at the product of the two input scales; no automatic
    /// normalization back to a base scale. Fails only on
    /// [`Error::ScaleOverflow`].
    pub fn checked_mul(&self, other: &Quantity<T>) -> Result<Quantity<T>> {
        Ok(Quantity {
            dims: self.dims.multiply(&other.dims),
            scale: self.scale.mul(other.scale)?,
            value: self.value * other.value,
        })
    }

    /// Divides two quantities: dimensions merge-divide, scales divide,
    /// payloads divide.
    ///
    /// Payload division follows the payload type (integer division by a zero
    /// payload panics, floats produce infinities/NaN).
    pub fn checked_div(&self, other: &Quantity<T>) -> Result<Quantity<T>> {
        Ok(Quantity {
            dims: self.dims.divide(&other.dims),
            scale: self.scale.div(other.scale)?,
            value: self.value / other.value,
        })
    }

    /// Adds two quantities of identical dimension and scale.
    ///
    /// Fails with [`Error::DimensionMismatch`] across dimensions and
    /// [`Error::ScaleMismatch`] across scales of the same dimension — convert
    /// one operand with [`Quantity::to`] first.
    pub fn try_add(&self, other: &Quantity<T>) -> Result<Quantity<T>> {
        self.check_compatible(other)?;
        Ok(Quantity {
            dims: self.dims.clone(),
            scale: self.scale,
            value: self.value + other.value,
        })
    }

    /// Subtracts two quantities of identical dimension and scale.
    pub fn try_sub(&self, other: &Quantity<T>) -> Result<Quantity<T>> {
        self.check_compatible(other)?;
        Ok(Quantity {
            dims: self.dims.clone(),
            scale: self.scale,
            value: self.value - other.value,
        })
    }

    /// Compares two quantities of identical dimension and scale.
    ///
    /// `Ok(None)` only for incomparable payloads (NaN).
    pub fn try_cmp(&self, other: &Quantity<T>) -> Result<Option<Ordering>> {
        self.check_compatible(other)?;
        Ok(self.value.partial_cmp(&other.value))
    }

    fn check_compatible(&self, other: &Quantity<T>) -> Result<()> {
        if self.dims != other.dims {
            return Err(Error::DimensionMismatch);
        }
        if self.scale != other.scale {
            return Err(Error::ScaleMismatch);
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator sugar
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Numeric> Mul for Quantity<T> {
    type Output = Quantity<T>;

    /// Operator form of [`Quantity::checked_mul`].
    ///
    /// # Panics
    ///
    /// On [`Error::ScaleOverflow`]; these are caller logic bugs, use the
    /// checked method to get a typed error instead.
    fn mul(self, rhs: Quantity<T>) -> Quantity<T> {
        match self.checked_mul(&rhs) {
            Ok(q) => q,
            Err(e) => panic!("quantity multiplication failed: {e}"),
        }
    }
}

impl<T: Numeric> Div for Quantity<T> {
    type Output = Quantity<T>;

    /// Operator form of [`Quantity::checked_div`].
    ///
    /// # Panics
    ///
    /// On [`Error::ScaleOverflow`] or [`Error::DivideByZeroScale`].
    fn div(self, rhs: Quantity<T>) -> Quantity<T> {
        match self.checked_div(&rhs) {
            Ok(q) => q,
            Err(e) => panic!("quantity division failed: {e}"),
        }
    }
}

impl<T: Numeric> Add for Quantity<T> {
    type Output = Quantity<T>;

    /// Operator form of [`Quantity::try_add`].
    ///
    /// # Panics
    ///
    /// On dimension or scale mismatch.
    fn add(self, rhs: Quantity<T>) -> Quantity<T> {
        match self.try_add(&rhs) {
            Ok(q) => q,
            Err(e) => panic!("quantity addition failed: {e}"),
        }
    }
}

impl<T: Numeric> Sub for Quantity<T> {
    type Output = Quantity<T>;

    /// Operator form of [`Quantity::try_sub`].
    ///
    /// # Panics
    ///
    /// On dimension or scale mismatch.
    fn sub(self, rhs: Quantity<T>) -> Quantity<T> {
        match self.try_sub(&rhs) {
            Ok(q) => q,
            Err(e) => panic!("quantity subtraction failed: {e}"),
        }
    }
}

impl<T: Numeric> Mul<T> for Quantity<T> {
    type Output = Quantity<T>;

    /// Scales the payload by a bare number; dimension and scale unchanged.
    fn mul(self, rhs: T) -> Quantity<T> {
        Quantity {
            value: self.value * rhs,
            ..self
        }
    }
}

impl<T: Numeric> Div<T> for Quantity<T> {
    type Output = Quantity<T>;

    /// Divides the payload by a bare number; dimension and scale unchanged.
    fn div(self, rhs: T) -> Quantity<T> {
        Quantity {
            value: self.value / rhs,
            ..self
        }
    }
}

impl<T: Numeric + Neg<Output = T>> Neg for Quantity<T> {
    type Output = Quantity<T>;

    fn neg(self) -> Quantity<T> {
        Quantity {
            value: -self.value,
            ..self
        }
    }
}

impl<T: Numeric + fmt::Display> fmt::Display for Quantity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = registry::symbol_of(self.resolve());
        if symbol.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, symbol)
        }
    }
}
