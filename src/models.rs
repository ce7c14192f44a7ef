//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation lives. The [`twine_core::Model`] implementation is a
//! thin adapter that validates its input and delegates to `core`.

pub mod titration;
