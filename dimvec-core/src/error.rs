//! Error type shared by the whole engine.
//!
//! Every failure this crate can report is detectable from the shapes of the
//! operands alone; there is no I/O and no external state. The policy is to
//! fail fast and never coerce dimensions or truncate scale factors.

use thiserror::Error;

/// Errors produced by dimension, scale, and quantity operations.
///
/// All of these represent logic bugs in the caller rather than recoverable
/// runtime conditions: mixing incompatible dimensions, requesting a root that
/// does not divide an exponent, or composing scales past `u64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Addition, subtraction, or comparison across different dimension vectors.
    #[error("dimension mismatch between operands")]
    DimensionMismatch,

    /// Operands share a dimension but sit at different scales; the caller must
    /// convert one side explicitly before combining them.
    #[error("scale mismatch between operands; convert explicitly first")]
    ScaleMismatch,

    /// A root was requested that does not evenly divide a dimension exponent,
    /// or a scale component is not an exact n-th power.
    #[error("root does not evenly divide the operand")]
    InvalidRoot,

    /// Rational scale arithmetic produced an irreducible result wider than `u64`.
    #[error("rational scale arithmetic overflowed u64")]
    ScaleOverflow,

    /// A scale with a zero denominator was constructed, or a division by a
    /// zero-valued scale was attempted.
    #[error("zero denominator in rational scale")]
    DivideByZeroScale,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
