//! Titration models.
//!
//! Each model simulates one titration method and derives sample composition
//! from the endpoints a user reads off its curve.

pub mod conductometric;
