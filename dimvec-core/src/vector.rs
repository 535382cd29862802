//! Canonical dimension vectors.
//!
//! A [`DimVec`] represents a product of base units raised to integer powers:
//! `length^1 · time^-2`. It is the canonical form every derived dimension
//! normalizes to, and the key under which the registry memoizes composite
//! representations.
//!
//! # Invariants
//!
//! - elements sorted by strictly increasing [`BaseUnitId`];
//! - at most one element per base unit;
//! - no zero-rank elements (cancelled terms are dropped);
//! - the empty vector is the unique dimensionless identity.
//!
//! Every operation preserves these invariants, so two vectors denote the same
//! physical dimension iff they are structurally equal. The workhorse is a
//! two-list sorted merge: equal heads combine their ranks (cancelling to
//! nothing when the sum is zero), otherwise the earlier-ordered head is
//! emitted. Multiplication merges directly; division merges against the
//! negated right-hand side.
//!
//! ```rust
//! use dimvec_core::{registry, Dimension, DimVec};
//!
//! let length = registry::register_base("Length", "m");
//! let time = registry::register_base("Time", "s");
//!
//! let speed = DimVec::single(Dimension::new(length, 1))
//!     .divide(&DimVec::single(Dimension::new(time, 1)));
//! let accel = speed.divide(&DimVec::single(Dimension::new(time, 1)));
//!
//! assert_eq!(
//!     accel,
//!     DimVec::new([Dimension::new(length, 1), Dimension::new(time, -2)])
//! );
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::Result;

/// Ordered, deduplicated, cancellation-free product of dimensions.
///
/// Compared structurally; usable as a hash-map key.
// Deserialization accepts any element order and re-canonicalizes through
// `DimVec::new`; zero-rank elements are already rejected when the `Dimension`
// elements themselves deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Dimension>")
)]
pub struct DimVec(Vec<Dimension>);

impl DimVec {
    /// The dimensionless identity (empty product).
    pub const fn empty() -> DimVec {
        DimVec(Vec::new())
    }

    /// A vector holding a single dimension.
    pub fn single(dim: Dimension) -> DimVec {
        debug_assert!(dim.rank() != 0, "zero-rank dimension fed into a vector");
        DimVec(vec![dim])
    }

    /// Builds a canonical vector by merging dimensions in one at a time.
    ///
    /// Input order does not matter; duplicate units combine their ranks and
    /// cancel out when the ranks sum to zero.
    pub fn new(dims: impl IntoIterator<Item = Dimension>) -> DimVec {
        dims.into_iter()
            .fold(DimVec::empty(), |acc, d| acc.multiply(&DimVec::single(d)))
    }

    /// Number of distinct base units in the product.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the dimensionless identity.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this vector corresponds directly to a single base unit:
    /// exactly one element, at rank 1.
    pub fn is_pure(&self) -> bool {
        self.0.len() == 1 && self.0[0].rank() == 1
    }

    /// First (lowest-ordered) element, if any.
    pub fn first(&self) -> Option<Dimension> {
        self.0.first().copied()
    }

    /// Iterates the elements in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.0.iter().copied()
    }

    /// The elements as a slice, in canonical order.
    pub fn as_slice(&self) -> &[Dimension] {
        &self.0
    }

    /// Merge-multiplies two canonical vectors: ranks of shared units add,
    /// terms whose ranks cancel to zero disappear.
    pub fn multiply(&self, other: &DimVec) -> DimVec {
        let mut out = Vec::with_capacity(self.0.len() + other.0.len());
        let mut a = self.0.iter().copied().peekable();
        let mut b = other.0.iter().copied().peekable();

        while let (Some(&x), Some(&y)) = (a.peek(), b.peek()) {
            debug_assert!(x.rank() != 0, "zero-rank dimension fed into a merge");
            debug_assert!(y.rank() != 0, "zero-rank dimension fed into a merge");

            if x.unit() == y.unit() {
                let combined = x.multiply(y);
                if combined.rank() != 0 {
                    out.push(combined);
                }
                a.next();
                b.next();
            } else if x.unit() < y.unit() {
                out.push(x);
                a.next();
            } else {
                out.push(y);
                b.next();
            }
        }
        // Remaining tails are unique and sorted by the input invariants.
        out.extend(a);
        out.extend(b);
        DimVec(out)
    }

    /// Merge-divides: equivalent to multiplying by `other.negate()`.
    pub fn divide(&self, other: &DimVec) -> DimVec {
        self.multiply(&other.negate())
    }

    /// Flips the sign of every exponent.
    pub fn negate(&self) -> DimVec {
        DimVec(self.0.iter().map(|d| d.negate()).collect())
    }

    /// `n`-th root of every element.
    ///
    /// Propagates [`crate::Error::InvalidRoot`] if any exponent is not evenly
    /// divisible by `n`.
    pub fn root(&self, n: i16) -> Result<DimVec> {
        let dims = self
            .0
            .iter()
            .map(|d| d.root(n))
            .collect::<Result<Vec<_>>>()?;
        Ok(DimVec(dims))
    }

    /// Raises every element to the power `n`.
    ///
    /// `power(0)` sends every exponent to zero, so the result is the
    /// dimensionless identity.
    pub fn power(&self, n: i16) -> DimVec {
        if n == 0 {
            return DimVec::empty();
        }
        DimVec(self.0.iter().map(|d| d.power(n)).collect())
    }
}

impl From<Dimension> for DimVec {
    fn from(dim: Dimension) -> DimVec {
        DimVec::single(dim)
    }
}

impl From<Vec<Dimension>> for DimVec {
    fn from(dims: Vec<Dimension>) -> DimVec {
        DimVec::new(dims)
    }
}

impl FromIterator<Dimension> for DimVec {
    fn from_iter<I: IntoIterator<Item = Dimension>>(iter: I) -> DimVec {
        DimVec::new(iter)
    }
}
