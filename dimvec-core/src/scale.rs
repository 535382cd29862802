//! Exact rational unit scales.
//!
//! A [`Scale`] is the conversion factor between a unit's representation and
//! the base representation of its dimension: `1 unit = num/den base units`.
//! Kilometres over metres are `1000/1`, milliseconds over seconds `1/1000`.
//!
//! Scales are always stored in lowest terms. Composition goes through `u128`
//! intermediates so that realistic prefix magnitudes (atto through exa,
//! `10^±18`) compose without silent wraparound; an irreducible result that
//! does not fit back into `u64` is rejected with [`Error::ScaleOverflow`].
//!
//! # Examples
//!
//! ```rust
//! use dimvec_core::Scale;
//!
//! let kilo = Scale::new(1000, 1).unwrap();
//! assert_eq!(kilo, Scale::KILO);
//!
//! // Automatic reduction to lowest terms.
//! assert_eq!(Scale::new(6, 3).unwrap(), Scale::new(2, 1).unwrap());
//!
//! // Conversion factor from hours to minutes: (3600/1) / (60/1) = 60/1.
//! let hour = Scale::from_int(3600);
//! let minute = Scale::from_int(60);
//! assert_eq!(hour.div(minute).unwrap(), Scale::from_int(60));
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Exact conversion factor `num/den`, kept in lowest terms.
///
/// # Invariants
///
/// - `den != 0`
/// - `gcd(num, den) == 1` (reduction happens at construction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawScale")
)]
pub struct Scale {
    num: u64,
    den: u64,
}

// Deserialization routes through `Scale::new`, so external data cannot smuggle
// in an unreduced fraction or a zero denominator.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawScale {
    num: u64,
    den: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawScale> for Scale {
    type Error = Error;

    fn try_from(raw: RawScale) -> Result<Scale> {
        Scale::new(raw.num, raw.den)
    }
}

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(0, n) == n`, which maps a zero numerator to the canonical `0/1`.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

const fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Integer square root (largest `r` with `r * r <= n`), by binary search.
fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut left: u64 = 1;
    let mut right: u64 = n;
    let mut result: u64 = 0;
    while left <= right {
        let mid = left + (right - left) / 2;
        // mid <= n / mid avoids computing mid * mid near the type's range
        if mid <= n / mid {
            result = mid;
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }
    result
}

impl Scale {
    /// The identity scale `1/1` (the base representation itself).
    pub const ONE: Scale = Scale { num: 1, den: 1 };

    /// Creates a scale from a numerator and denominator, reduced to lowest
    /// terms. Fails with [`Error::DivideByZeroScale`] when `den == 0`.
    ///
    /// ```rust
    /// use dimvec_core::Scale;
    ///
    /// let s = Scale::new(1_000_000, 2_000).unwrap();
    /// assert_eq!(s, Scale::new(500, 1).unwrap());
    /// assert!(Scale::new(1, 0).is_err());
    /// ```
    pub fn new(num: u64, den: u64) -> Result<Scale> {
        if den == 0 {
            return Err(Error::DivideByZeroScale);
        }
        let g = gcd(num, den);
        Ok(Scale {
            num: num / g,
            den: den / g,
        })
    }

    /// Creates the integer scale `n/1`.
    pub const fn from_int(n: u64) -> Scale {
        Scale { num: n, den: 1 }
    }

    /// Numerator in lowest terms.
    pub const fn num(self) -> u64 {
        self.num
    }

    /// Denominator in lowest terms; never zero.
    pub const fn den(self) -> u64 {
        self.den
    }

    /// Whether this is the identity scale `1/1`.
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Reduces a `u128` fraction and narrows it back to `u64` components.
    fn reduce_wide(num: u128, den: u128) -> Result<Scale> {
        if den == 0 {
            return Err(Error::DivideByZeroScale);
        }
        let g = gcd_u128(num, den);
        let (num, den) = (num / g, den / g);
        if num > u64::MAX as u128 || den > u64::MAX as u128 {
            return Err(Error::ScaleOverflow);
        }
        Ok(Scale {
            num: num as u64,
            den: den as u64,
        })
    }

    /// Multiplies two scales: `(a/b) * (c/d) = ac/bd`, reduced.
    ///
    /// Intermediate products are computed in `u128`; only irreducible results
    /// wider than `u64` fail.
    pub fn mul(self, other: Scale) -> Result<Scale> {
        Self::reduce_wide(
            self.num as u128 * other.num as u128,
            self.den as u128 * other.den as u128,
        )
    }

    /// Divides two scales: `(a/b) / (c/d) = ad/bc`, reduced.
    ///
    /// The result is the factor converting a value expressed at `self` into
    /// one expressed at `other`. Dividing by a zero-valued scale fails with
    /// [`Error::DivideByZeroScale`].
    pub fn div(self, other: Scale) -> Result<Scale> {
        Self::reduce_wide(
            self.num as u128 * other.den as u128,
            self.den as u128 * other.num as u128,
        )
    }

    /// Multiplicative inverse `den/num`.
    pub fn inverse(self) -> Result<Scale> {
        if self.num == 0 {
            return Err(Error::DivideByZeroScale);
        }
        Ok(Scale {
            num: self.den,
            den: self.num,
        })
    }

    /// Raises the scale to a non-negative integer power.
    ///
    /// `pow(0)` is [`Scale::ONE`]. A reduced fraction stays reduced under
    /// powers, so only the `u64` range check can fail.
    pub fn pow(self, exp: u32) -> Result<Scale> {
        let num = (self.num as u128)
            .checked_pow(exp)
            .ok_or(Error::ScaleOverflow)?;
        let den = (self.den as u128)
            .checked_pow(exp)
            .ok_or(Error::ScaleOverflow)?;
        Self::reduce_wide(num, den)
    }

    /// Exact square root of the scale.
    ///
    /// Both components must be perfect squares; anything else fails with
    /// [`Error::InvalidRoot`] rather than silently truncating the factor.
    ///
    /// ```rust
    /// use dimvec_core::Scale;
    ///
    /// assert_eq!(Scale::MEGA.sqrt().unwrap(), Scale::KILO);
    /// assert!(Scale::from_int(2).sqrt().is_err());
    /// ```
    pub fn sqrt(self) -> Result<Scale> {
        self.nth_root(2)
    }

    /// Exact `n`-th root of the scale.
    ///
    /// Fails with [`Error::InvalidRoot`] when `n == 0` or either component is
    /// not an exact `n`-th power.
    pub fn nth_root(self, n: u32) -> Result<Scale> {
        if n == 0 {
            return Err(Error::InvalidRoot);
        }
        if n == 1 {
            return Ok(self);
        }
        Ok(Scale {
            num: exact_nth_root(self.num, n)?,
            den: exact_nth_root(self.den, n)?,
        })
    }

    /// Lossy conversion of the ratio to `f64`.
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

/// `n`-th root of `v` when it is exact, else [`Error::InvalidRoot`].
fn exact_nth_root(v: u64, n: u32) -> Result<u64> {
    if v < 2 {
        return Ok(v);
    }
    if n == 2 {
        let r = isqrt(v);
        return if r * r == v { Ok(r) } else { Err(Error::InvalidRoot) };
    }
    let mut left: u64 = 1;
    let mut right: u64 = v;
    while left <= right {
        let mid = left + (right - left) / 2;
        match (mid as u128).checked_pow(n) {
            Some(p) if p == v as u128 => return Ok(mid),
            Some(p) if p < v as u128 => left = mid + 1,
            _ => right = mid - 1,
        }
    }
    Err(Error::InvalidRoot)
}

// ─────────────────────────────────────────────────────────────────────────────
// SI prefix ladder
// ─────────────────────────────────────────────────────────────────────────────

impl Scale {
    /// `10^-18`
    pub const ATTO: Scale = Scale { num: 1, den: 1_000_000_000_000_000_000 };
    /// `10^-15`
    pub const FEMTO: Scale = Scale { num: 1, den: 1_000_000_000_000_000 };
    /// `10^-12`
    pub const PICO: Scale = Scale { num: 1, den: 1_000_000_000_000 };
    /// `10^-9`
    pub const NANO: Scale = Scale { num: 1, den: 1_000_000_000 };
    /// `10^-6`
    pub const MICRO: Scale = Scale { num: 1, den: 1_000_000 };
    /// `10^-3`
    pub const MILLI: Scale = Scale { num: 1, den: 1_000 };
    /// `10^-2`
    pub const CENTI: Scale = Scale { num: 1, den: 100 };
    /// `10^-1`
    pub const DECI: Scale = Scale { num: 1, den: 10 };
    /// `10^1`
    pub const DECA: Scale = Scale { num: 10, den: 1 };
    /// `10^2`
    pub const HECTO: Scale = Scale { num: 100, den: 1 };
    /// `10^3`
    pub const KILO: Scale = Scale { num: 1_000, den: 1 };
    /// `10^6`
    pub const MEGA: Scale = Scale { num: 1_000_000, den: 1 };
    /// `10^9`
    pub const GIGA: Scale = Scale { num: 1_000_000_000, den: 1 };
    /// `10^12`
    pub const TERA: Scale = Scale { num: 1_000_000_000_000, den: 1 };
    /// `10^15`
    pub const PETA: Scale = Scale { num: 1_000_000_000_000_000, den: 1 };
    /// `10^18`
    pub const EXA: Scale = Scale { num: 1_000_000_000_000_000_000, den: 1 };
}

impl Default for Scale {
    fn default() -> Self {
        Scale::ONE
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_to_lowest_terms() {
        assert_eq!(Scale::new(6, 3).unwrap(), Scale::from_int(2));
        assert_eq!(Scale::new(2, 4).unwrap(), Scale::new(1, 2).unwrap());
        assert_eq!(Scale::new(1000, 1).unwrap(), Scale::KILO);
        let s = Scale::new(84, 126).unwrap();
        assert_eq!(gcd(s.num(), s.den()), 1);
    }

    #[test]
    fn zero_numerator_normalizes() {
        let z = Scale::new(0, 17).unwrap();
        assert_eq!(z.num(), 0);
        assert_eq!(z.den(), 1);
    }

    #[test]
    fn zero_denominator_rejected() {
        assert_eq!(Scale::new(1, 0), Err(Error::DivideByZeroScale));
        assert_eq!(Scale::new(0, 0), Err(Error::DivideByZeroScale));
    }

    #[test]
    fn multiply_reduces() {
        // (2/3) * (3/2) = 1
        let a = Scale::new(2, 3).unwrap();
        let b = Scale::new(3, 2).unwrap();
        assert_eq!(a.mul(b).unwrap(), Scale::ONE);

        assert_eq!(Scale::KILO.mul(Scale::MILLI).unwrap(), Scale::ONE);
        assert_eq!(Scale::KILO.mul(Scale::KILO).unwrap(), Scale::MEGA);
    }

    #[test]
    fn divide_cross_multiplies() {
        let hour = Scale::from_int(3600);
        let minute = Scale::from_int(60);
        assert_eq!(hour.div(minute).unwrap(), Scale::from_int(60));
        assert_eq!(minute.div(hour).unwrap(), Scale::new(1, 60).unwrap());
    }

    #[test]
    fn divide_by_zero_scale_rejected() {
        let zero = Scale::new(0, 1).unwrap();
        assert_eq!(Scale::ONE.div(zero), Err(Error::DivideByZeroScale));
        assert_eq!(zero.inverse(), Err(Error::DivideByZeroScale));
    }

    #[test]
    fn exa_times_exa_overflows() {
        // 10^36 is irreducible over 1 and does not fit u64.
        assert_eq!(Scale::EXA.mul(Scale::EXA), Err(Error::ScaleOverflow));
        assert_eq!(Scale::ATTO.div(Scale::EXA), Err(Error::ScaleOverflow));
    }

    #[test]
    fn wide_intermediates_reduce_before_failing() {
        // EXA / EXA passes through 10^36 / 10^36 but reduces to 1/1.
        assert_eq!(Scale::EXA.div(Scale::EXA).unwrap(), Scale::ONE);
        assert_eq!(Scale::EXA.mul(Scale::ATTO).unwrap(), Scale::ONE);
    }

    #[test]
    fn inverse_swaps_components() {
        assert_eq!(Scale::KILO.inverse().unwrap(), Scale::MILLI);
        assert_eq!(Scale::new(3, 4).unwrap().inverse().unwrap(), Scale::new(4, 3).unwrap());
    }

    #[test]
    fn pow_and_roots() {
        assert_eq!(Scale::KILO.pow(2).unwrap(), Scale::MEGA);
        assert_eq!(Scale::KILO.pow(0).unwrap(), Scale::ONE);
        assert_eq!(Scale::MEGA.sqrt().unwrap(), Scale::KILO);
        assert_eq!(Scale::GIGA.nth_root(3).unwrap(), Scale::KILO);
        assert_eq!(Scale::MICRO.sqrt().unwrap(), Scale::MILLI);
    }

    #[test]
    fn inexact_roots_rejected() {
        assert_eq!(Scale::from_int(2).sqrt(), Err(Error::InvalidRoot));
        assert_eq!(Scale::KILO.nth_root(0), Err(Error::InvalidRoot));
        assert_eq!(Scale::MEGA.nth_root(5), Err(Error::InvalidRoot));
    }

    #[test]
    fn pow_overflow_rejected() {
        assert_eq!(Scale::EXA.pow(2), Err(Error::ScaleOverflow));
    }

    #[test]
    fn pow_handles_extreme_exponents() {
        // Must return promptly, not iterate once per exponent unit.
        assert_eq!(Scale::ONE.pow(u32::MAX).unwrap(), Scale::ONE);
        assert_eq!(Scale::KILO.pow(u32::MAX), Err(Error::ScaleOverflow));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Scale::KILO.to_string(), "1000");
        assert_eq!(Scale::new(1, 60).unwrap().to_string(), "1/60");
    }

    #[test]
    fn isqrt_boundaries() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let s = Scale::new(1, 60).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: Scale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_reduces_to_lowest_terms() {
        let s: Scale = serde_json::from_str(r#"{"num":6,"den":3}"#).unwrap();
        assert_eq!(s, Scale::from_int(2));
        assert_eq!(gcd(s.num(), s.den()), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_rejects_zero_denominator() {
        assert!(serde_json::from_str::<Scale>(r#"{"num":1,"den":0}"#).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reduce_always_yields_coprime_parts(num in 0u64..1_000_000, den in 1u64..1_000_000) {
                let s = Scale::new(num, den).unwrap();
                prop_assert_eq!(gcd(s.num(), s.den()), 1);
            }

            #[test]
            fn mul_then_div_roundtrips(
                a in 1u64..1_000_000, b in 1u64..1_000_000,
                c in 1u64..1_000_000, d in 1u64..1_000_000,
            ) {
                let x = Scale::new(a, b).unwrap();
                let y = Scale::new(c, d).unwrap();
                let back = x.mul(y).unwrap().div(y).unwrap();
                prop_assert_eq!(back, x);
            }

            #[test]
            fn div_by_self_is_one(a in 1u64..1_000_000, b in 1u64..1_000_000) {
                let s = Scale::new(a, b).unwrap();
                prop_assert_eq!(s.div(s).unwrap(), Scale::ONE);
            }
        }
    }
}
