//! Predefined unit modules grouped by dimension.
//!
//! Each module registers one base unit on first use and exposes constructor
//! helpers for its common scales, so conversions and formatting work out of
//! the box without downstream crates registering anything themselves.
//!
//! ## Modules
//!
//! - [`length`]: length (SI metre is the canonical scaling unit).
//! - [`time`]: time (SI second is the canonical scaling unit).
//! - [`mass`]: mass (gram is the canonical scaling unit).
//!
//! The helpers are convenience only; anything they build can be spelled out
//! with [`crate::registry::register_base`] and [`crate::Quantity::base`].

pub mod length;
pub mod mass;
pub mod time;
