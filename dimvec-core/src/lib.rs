//! Runtime dimensional algebra for scaled quantities.
//!
//! `dimvec-core` tracks the dimension of a value as data instead of as a type:
//!
//! - A base unit is registered at runtime and identified by a [`BaseUnitId`].
//! - A dimension is a product of base units with integer exponents, kept in
//!   canonical form by [`DimVec`].
//! - A scale is an exact reduced rational [`Scale`] relating a representation
//!   to its dimension's canonical unit (kilometres are `1000/1` metres).
//! - A [`Quantity`] carries a dimension vector, a scale, and a numeric
//!   payload; multiplication and division derive the result's dimension and
//!   scale, while addition and comparison demand exact agreement.
//!
//! Most users should depend on `dimvec` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Dimension tracking for unit sets that are not known at compile time
//!   (user-defined axes, plugin-registered units, data-driven pipelines).
//! - Exact scale arithmetic: conversion factors are reduced rationals, never
//!   accumulated floating-point products.
//! - A canonical identity for every derived dimension: `Distance * Time /
//!   Time` resolves back to exactly `Distance`, and two independently derived
//!   `Distance/Time^2` vectors share one memoized composite handle.
//!
//! # What this crate does not try to solve
//!
//! - Compile-time dimension checking (phantom-typed libraries do that).
//! - Affine units (temperature offsets); scales are purely multiplicative.
//! - Fractional exponents; roots that would need one fail with
//!   [`Error::InvalidRoot`].
//!
//! # Quick start
//!
//! ```rust
//! use dimvec_core::units::length::{kilometers, METER};
//! use dimvec_core::units::time::{hours, seconds, MINUTE};
//!
//! // Explicit conversion between scales of one dimension.
//! let m = kilometers(1.25).to(METER).unwrap();
//! assert_eq!(m.value(), 1250.0);
//!
//! // Derived dimensions come out of the algebra.
//! let speed = kilometers(180.0) / hours(2.0);
//! let accel = speed.checked_div(&seconds(1.0)).unwrap();
//! assert_eq!(accel.dims().len(), 2);
//!
//! // Same dimension and scale is required for addition.
//! let total = hours(1.0).to(MINUTE).unwrap() + dimvec_core::units::time::minutes(30.0);
//! assert_eq!(total.value(), 90.0);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`Scale`], [`Dimension`],
//!   [`DimVec`], and [`Quantity`].
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with a typed [`Error`]: dimension or
//! scale mismatch in additive operations, inexact roots, rational overflow,
//! and zero denominators. The arithmetic operator impls on [`Quantity`] are
//! sugar over the checked methods and panic where those would return an
//! error.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod quantity;
mod scale;
mod vector;

pub mod registry;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{BaseUnitId, Dimension};
pub use error::{Error, Result};
pub use quantity::{Numeric, Quantity};
pub use registry::{CompositeId, UnitRepr};
pub use scale::Scale;
pub use vector::DimVec;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;
