//! Base-unit identities and single dimensions.
//!
//! A [`BaseUnitId`] names one independent axis of measurement (length, time,
//! mass, …). Ids are handed out by the registry in registration order, which
//! gives the total, process-stable ordering the canonical vector merge relies
//! on; the ordering carries no physical meaning.
//!
//! A [`Dimension`] is a base unit raised to an integer exponent (its *rank*):
//! `time^-2`, `length^1`. Dimensions combine by exponent arithmetic.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Opaque, totally ordered identity of one base unit.
///
/// Two ids compare equal iff they denote the same axis. Obtain one through
/// [`crate::registry::register_base`]; ids are stable for the lifetime of the
/// process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BaseUnitId(pub(crate) u32);

impl BaseUnitId {
    /// Zero-based registration index of this base unit.
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// A base unit raised to an integer exponent.
///
/// `rank == 0` never appears inside a canonical [`crate::DimVec`];
/// constructing a zero-rank dimension directly is a caller-contract violation
/// (cancellation to rank zero is only legitimate *inside* the vector merge,
/// where the term is dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawDimension")
)]
pub struct Dimension {
    unit: BaseUnitId,
    rank: i16,
}

// Deserialization enforces the `rank != 0` contract that `Dimension::new`
// debug-asserts; external data gets the hard check.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawDimension {
    unit: BaseUnitId,
    rank: i16,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDimension> for Dimension {
    type Error = &'static str;

    fn try_from(raw: RawDimension) -> core::result::Result<Dimension, &'static str> {
        if raw.rank == 0 {
            return Err("zero-rank dimensions are not constructible");
        }
        Ok(Dimension {
            unit: raw.unit,
            rank: raw.rank,
        })
    }
}

impl Dimension {
    /// Creates a dimension `unit^rank`.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `rank != 0`.
    pub fn new(unit: BaseUnitId, rank: i16) -> Dimension {
        debug_assert!(rank != 0, "zero-rank dimensions are not constructible");
        Dimension { unit, rank }
    }

    /// The base unit this dimension refers to.
    pub const fn unit(self) -> BaseUnitId {
        self.unit
    }

    /// The integer exponent.
    pub const fn rank(self) -> i16 {
        self.rank
    }

    /// `unit^a * unit^b = unit^(a+b)`.
    ///
    /// Both operands must refer to the same base unit (debug-asserted); the
    /// vector merge is the only caller and upholds this by construction.
    pub(crate) fn multiply(self, other: Dimension) -> Dimension {
        debug_assert_eq!(self.unit, other.unit, "cannot combine different base units");
        Dimension {
            unit: self.unit,
            rank: self.rank + other.rank,
        }
    }

    /// `unit^a / unit^b = unit^(a-b)`. Same unit required, as for `multiply`.
    pub(crate) fn divide(self, other: Dimension) -> Dimension {
        self.multiply(other.negate())
    }

    /// `(unit^a)^-1 = unit^-a`.
    pub fn negate(self) -> Dimension {
        Dimension {
            unit: self.unit,
            rank: -self.rank,
        }
    }

    /// `n`-th root: `unit^a -> unit^(a/n)`.
    ///
    /// Fails with [`Error::InvalidRoot`] unless `n != 0` and `n` evenly
    /// divides the rank; a fractional exponent has no representation here.
    pub fn root(self, n: i16) -> Result<Dimension> {
        if n == 0 || self.rank % n != 0 {
            return Err(Error::InvalidRoot);
        }
        Ok(Dimension {
            unit: self.unit,
            rank: self.rank / n,
        })
    }

    /// Integer power: `unit^a -> unit^(a*n)`.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `n != 0`: a zero power cancels the dimension, which
    /// has no standalone representation ([`crate::DimVec::power`] maps it to
    /// the empty vector instead).
    pub fn power(self, n: i16) -> Dimension {
        debug_assert!(n != 0, "zero powers cancel to a rank-0 dimension");
        Dimension {
            unit: self.unit,
            rank: self.rank * n,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank == 1 {
            write!(f, "#{}", self.unit.0)
        } else {
            write!(f, "#{}^{}", self.unit.0, self.rank)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(n: u32) -> BaseUnitId {
        BaseUnitId(n)
    }

    #[test]
    fn multiply_adds_ranks() {
        let a = Dimension::new(unit(0), 6);
        let b = Dimension::new(unit(0), 3);
        assert_eq!(a.multiply(b).rank(), 9);
    }

    #[test]
    fn divide_subtracts_ranks() {
        let a = Dimension::new(unit(0), 6);
        let b = Dimension::new(unit(0), 3);
        assert_eq!(a.divide(b).rank(), 3);
        assert_eq!(b.divide(a).rank(), -3);
    }

    #[test]
    fn negate_flips_sign() {
        let d = Dimension::new(unit(1), 2);
        assert_eq!(d.negate().rank(), -2);
        assert_eq!(d.negate().negate(), d);
    }

    #[test]
    fn root_divides_rank_exactly() {
        let d = Dimension::new(unit(0), 6);
        assert_eq!(d.root(2).unwrap().rank(), 3);
        assert_eq!(d.root(3).unwrap().rank(), 2);
        assert_eq!(d.root(-2).unwrap().rank(), -3);
    }

    #[test]
    fn inexact_root_rejected() {
        let d = Dimension::new(unit(0), 5);
        assert_eq!(d.root(2), Err(Error::InvalidRoot));
        assert_eq!(d.root(0), Err(Error::InvalidRoot));
    }

    #[test]
    fn power_multiplies_rank() {
        let d = Dimension::new(unit(0), 2);
        assert_eq!(d.power(3).rank(), 6);
        assert_eq!(d.power(-1).rank(), -2);
    }

    #[test]
    #[should_panic(expected = "zero powers cancel")]
    fn zero_power_rejected() {
        let _ = Dimension::new(unit(0), 2).power(0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_rejects_zero_rank() {
        assert!(serde_json::from_str::<Dimension>(r#"{"unit":0,"rank":0}"#).is_err());
        let d: Dimension = serde_json::from_str(r#"{"unit":3,"rank":-2}"#).unwrap();
        assert_eq!(d, Dimension::new(unit(3), -2));
    }

    #[test]
    fn ids_order_by_registration_index() {
        assert!(unit(0) < unit(1));
        assert!(unit(7) > unit(3));
        assert_eq!(unit(4), unit(4));
    }
}
