//! Runtime dimensional analysis for scaled quantities.
//!
//! `dimvec` is the user-facing crate in this workspace. It re-exports the full
//! API from `dimvec-core` plus the predefined unit modules (length, time,
//! mass).
//!
//! The core idea is: a value is a [`Quantity`] carrying its dimension as data
//! (a canonical [`DimVec`]) and its representation as an exact rational
//! [`Scale`]. Dimensions compose and cancel through ordinary arithmetic, new
//! axes can be registered at runtime, and conversion between scales is always
//! explicit.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (adding metres to seconds is a
//!   typed error, not a silent bug).
//! - Makes unit conversion explicit and exact (`to(Scale)` with reduced
//!   rational factors).
//! - Handles unit sets decided at runtime, where compile-time phantom types
//!   cannot reach.
//!
//! # What this crate does not try to solve
//!
//! - Compile-time dimension checking.
//! - Affine units (temperature offsets).
//! - Parsing of unit expressions from text.
//!
//! # Quick start
//!
//! ```rust
//! use dimvec::length::{kilometers, METER};
//! use dimvec::time::{hours, MINUTE};
//!
//! // Explicit conversion.
//! let m = kilometers(1.25).to(METER).unwrap();
//! assert_eq!(m.value(), 1250.0);
//!
//! // Derived dimensions fall out of the arithmetic and cancel back.
//! let speed = kilometers(100.0) / hours(2.0);
//! let distance = speed * hours(2.0);
//! assert_eq!(distance.resolve(), kilometers(1.0).resolve());
//!
//! // Same dimension and scale required for addition.
//! let total = hours(1.5).to(MINUTE).unwrap() + dimvec::time::minutes(10.0);
//! assert_eq!(total.value(), 100.0);
//! ```
//!
//! # Incorrect usage (runtime error)
//!
//! ```rust
//! use dimvec::length::meters;
//! use dimvec::time::seconds;
//! use dimvec::Error;
//!
//! let d = meters(1.0);
//! let t = seconds(1.0);
//! assert_eq!(d.try_add(&t), Err(Error::DimensionMismatch));
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the
//! crate root for convenience):
//!
//! - `dimvec::length` (metres, kilometres, …)
//! - `dimvec::time` (seconds, minutes, hours, days, …)
//! - `dimvec::mass` (grams, kilograms, tonnes)
//!
//! New axes are one call away: `registry::register_base("Pressure", "Pa")`.
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for the core value types.
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with a typed [`Error`]; the
//! arithmetic operator impls on [`Quantity`] panic where the checked methods
//! would return an error.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![forbid(unsafe_code)]

pub use dimvec_core::*;

pub use dimvec_core::units::length;
pub use dimvec_core::units::mass;
pub use dimvec_core::units::time;
